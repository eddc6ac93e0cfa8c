// src/region/region.rs
use super::NormalizedPoint;
use crate::error::RegionError;
use serde::{Deserialize, Serialize};

/// Corner count of a committed line region.
pub const LINE_REGION_POINTS: usize = 4;

/// What kind of detection region is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    /// Free-form polygon, persisted as drawn.
    #[default]
    #[serde(rename = "roi")]
    Polygon,
    /// Directed line-crossing rectangle.
    Line,
}

impl RegionKind {
    pub fn name(&self) -> &'static str {
        match self {
            RegionKind::Polygon => "Region",
            RegionKind::Line => "Line",
        }
    }
}

/// Extra data carried by line regions for the trigger evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerSettings {
    /// Handle endpoint on the side the crossing is counted towards.
    pub direction: NormalizedPoint,
    pub is_roi: bool,
}

/// A region as written for the trigger evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub points: Vec<NormalizedPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_settings: Option<TriggerSettings>,
}

impl Region {
    pub fn polygon(name: impl Into<String>, points: Vec<NormalizedPoint>) -> Self {
        Self {
            name: name.into(),
            points,
            trigger_settings: None,
        }
    }

    pub fn line(
        name: impl Into<String>,
        points: Vec<NormalizedPoint>,
        direction: NormalizedPoint,
    ) -> Self {
        Self {
            name: name.into(),
            points,
            trigger_settings: Some(TriggerSettings {
                direction,
                is_roi: false,
            }),
        }
    }

    /// Regions carrying trigger settings are line regions.
    pub fn kind(&self) -> RegionKind {
        if self.trigger_settings.is_some() {
            RegionKind::Line
        } else {
            RegionKind::Polygon
        }
    }

    /// Checks the persisted invariants: every coordinate in `[0, 1]` and a line
    /// region made of exactly four corners.
    pub fn validate(&self) -> Result<(), RegionError> {
        if let Some(index) = self.points.iter().position(|p| !p.is_in_range()) {
            return Err(RegionError::OutOfRange {
                region: self.name.clone(),
                index,
            });
        }
        if let Some(settings) = &self.trigger_settings {
            if self.points.len() != LINE_REGION_POINTS {
                return Err(RegionError::IncompleteLine {
                    region: self.name.clone(),
                    found: self.points.len(),
                });
            }
            if !settings.direction.is_in_range() {
                return Err(RegionError::OutOfRange {
                    region: self.name.clone(),
                    index: self.points.len(),
                });
            }
        }
        Ok(())
    }

    /// Parses and validates a region from JSON.
    pub fn from_json(json: &str) -> Result<Self, RegionError> {
        let region: Region = serde_json::from_str(json)?;
        region.validate()?;
        Ok(region)
    }

    pub fn to_json(&self) -> Result<String, RegionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_json_has_no_trigger_settings() {
        let region = Region::polygon("gate", vec![NormalizedPoint::new(0.1, 0.1)]);
        let value: serde_json::Value = serde_json::to_value(&region).unwrap();
        assert_eq!(value["name"], "gate");
        assert!(value.get("trigger_settings").is_none());
    }

    #[test]
    fn test_line_json_shape() {
        let corners = vec![NormalizedPoint::new(0.5, 0.5); 4];
        let region = Region::line("door", corners, NormalizedPoint::new(0.2, 0.3));
        let value: serde_json::Value = serde_json::to_value(&region).unwrap();
        assert_eq!(value["trigger_settings"]["is_roi"], false);
        assert_eq!(value["trigger_settings"]["direction"]["x"], 0.2);
        assert_eq!(region.kind(), RegionKind::Line);
    }

    #[test]
    fn test_from_json_infers_kind() {
        let region = Region::from_json(r#"{"name":"a","points":[{"x":0.1,"y":0.2}]}"#).unwrap();
        assert_eq!(region.kind(), RegionKind::Polygon);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let err = Region::from_json(r#"{"name":"a","points":[{"x":0.1,"y":1.2}]}"#).unwrap_err();
        assert!(matches!(err, RegionError::OutOfRange { index: 0, .. }));
    }

    #[test]
    fn test_validate_rejects_incomplete_line() {
        let json = r#"{
            "name": "door",
            "points": [{"x":0.1,"y":0.2},{"x":0.3,"y":0.2}],
            "trigger_settings": {"direction": {"x":0.2,"y":0.1}, "is_roi": false}
        }"#;
        let err = Region::from_json(json).unwrap_err();
        assert!(matches!(err, RegionError::IncompleteLine { found: 2, .. }));
    }

    #[test]
    fn test_kind_serializes_like_form_values() {
        assert_eq!(serde_json::to_string(&RegionKind::Polygon).unwrap(), r#""roi""#);
        assert_eq!(serde_json::to_string(&RegionKind::Line).unwrap(), r#""line""#);
    }
}

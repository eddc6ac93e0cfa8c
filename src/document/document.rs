// src/document/document.rs

use crate::error::RegionError;
use crate::region::{NormalizedPoint, Region, RegionKind, LINE_REGION_POINTS};
use parking_lot::RwLock;
use std::sync::Arc;

/// Document handle shared between the host form and the editor.
pub type SharedDocument = Arc<RwLock<Document>>;

/// The canonical state of the region being edited.
///
/// Editors never keep normalized points of their own; they read the canonical
/// arrays from here and write them back through the setters. Last write wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    name: String,
    kind: RegionKind,
    points: Vec<NormalizedPoint>,
    direction: Option<NormalizedPoint>,
    /// Bumped on every write so editors can tell external changes apart.
    revision: u64,
}

impl Document {
    /// Create a new, empty region document.
    pub fn new(kind: RegionKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Load an existing region; the kind follows the presence of trigger settings.
    pub fn from_region(region: &Region) -> Self {
        Self {
            name: region.name.clone(),
            kind: region.kind(),
            points: region.points.clone(),
            direction: region.trigger_settings.map(|settings| settings.direction),
            revision: 0,
        }
    }

    pub fn shared(self) -> SharedDocument {
        Arc::new(RwLock::new(self))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    /// Switching kind discards the geometry drawn for the previous kind.
    pub fn set_kind(&mut self, kind: RegionKind) {
        self.points.clear();
        self.direction = None;
        self.kind = kind;
        self.revision += 1;
    }

    pub fn points(&self) -> &[NormalizedPoint] {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<NormalizedPoint>) {
        self.points = points;
        self.revision += 1;
    }

    pub fn direction(&self) -> Option<NormalizedPoint> {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Option<NormalizedPoint>) {
        self.direction = direction;
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Build the persisted shape for the trigger evaluator.
    pub fn to_region(&self) -> Result<Region, RegionError> {
        let region = match self.kind {
            RegionKind::Polygon => Region::polygon(self.name.clone(), self.points.clone()),
            RegionKind::Line => {
                if self.points.len() != LINE_REGION_POINTS {
                    return Err(RegionError::IncompleteLine {
                        region: self.name.clone(),
                        found: self.points.len(),
                    });
                }
                let direction = self.direction.ok_or_else(|| RegionError::MissingDirection {
                    region: self.name.clone(),
                })?;
                Region::line(self.name.clone(), self.points.clone(), direction)
            }
        };
        region.validate()?;
        Ok(region)
    }
}

// src/session.rs

//! Headless replay of a recorded editing session.
//!
//! A session names the container size, optionally the region being re-edited,
//! and the pointer events in arrival order. Markers are referred to by their
//! index in the marker list at the time of the event, since marker ids are
//! assigned by the editor.

use crate::document::Document;
use crate::editor::{ContainerRect, Editor, PointerButton, PointerEvent};
use crate::error::RegionError;
use crate::region::{PointId, Region, RegionKind};
use crate::settings::EditorSettings;
use crate::utils::geometry::Vector2D;
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    Click { x: f64, y: f64 },
    PressPoint { index: usize },
    PressHandle { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Release,
    Delete { index: usize },
    Cancel,
    Resize { width: f64, height: f64 },
    SetKind { kind: RegionKind },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub container: ContainerSize,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: RegionKind,
    /// Region to re-edit; overrides `name` and `kind`.
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub events: Vec<SessionEvent>,
}

impl Session {
    pub fn from_json(json: &str) -> Result<Self, RegionError> {
        let session: Session = serde_json::from_str(json)?;
        if let Some(region) = &session.region {
            region.validate()?;
        }
        Ok(session)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegionError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    fn document(&self) -> Document {
        match &self.region {
            Some(region) => Document::from_region(region),
            None => {
                let mut doc = Document::new(self.kind);
                doc.set_name(self.name.clone());
                doc
            }
        }
    }

    /// Replays every event and returns the region as it would be submitted.
    pub fn replay(&self, settings: EditorSettings) -> Result<Region, RegionError> {
        let mut editor = Editor::new(self.document().shared(), settings);
        editor.set_container(Some(ContainerRect::new(
            self.container.width,
            self.container.height,
        )));
        info!(
            "replaying {} events on a {}x{} container",
            self.events.len(),
            self.container.width,
            self.container.height
        );

        for (step, event) in self.events.iter().enumerate() {
            debug!("step {}: {:?}", step, event);
            match event {
                SessionEvent::Resize { width, height } => {
                    editor.set_container(Some(ContainerRect::new(*width, *height)));
                }
                SessionEvent::SetKind { kind } => editor.set_kind(*kind),
                other => {
                    let event = pointer_event(&editor, other)?;
                    editor.handle_event(event);
                }
            }
        }
        editor.submit()
    }
}

fn marker(editor: &Editor, index: usize) -> Result<PointId, RegionError> {
    editor
        .points()
        .get(index)
        .map(|point| point.id)
        .ok_or(RegionError::UnknownPoint { index })
}

fn pointer_event(editor: &Editor, event: &SessionEvent) -> Result<PointerEvent, RegionError> {
    let event = match *event {
        SessionEvent::Click { x, y } => PointerEvent::Click {
            pos: Vector2D::new(x, y),
        },
        SessionEvent::PressPoint { index } => PointerEvent::PressPoint {
            button: PointerButton::Primary,
            id: marker(editor, index)?,
        },
        SessionEvent::PressHandle { x, y } => PointerEvent::PressHandle {
            button: PointerButton::Primary,
            pos: Vector2D::new(x, y),
        },
        SessionEvent::Move { x, y } => PointerEvent::Move {
            pos: Vector2D::new(x, y),
        },
        SessionEvent::Release => PointerEvent::Release,
        SessionEvent::Delete { index } => PointerEvent::Delete {
            id: marker(editor, index)?,
        },
        SessionEvent::Cancel | SessionEvent::Resize { .. } | SessionEvent::SetKind { .. } => {
            PointerEvent::Cancel
        }
    };
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_polygon_replay() {
        let session = Session::from_json(
            r#"{
                "container": {"width": 900, "height": 400},
                "name": "parking",
                "events": [
                    {"type": "click", "x": 90, "y": 40},
                    {"type": "click", "x": 450, "y": 200},
                    {"type": "click", "x": 90, "y": 200},
                    {"type": "delete", "index": 2}
                ]
            }"#,
        )
        .unwrap();
        let region = session.replay(EditorSettings::default()).unwrap();
        assert_eq!(region.name, "parking");
        assert_eq!(region.points.len(), 2);
        assert_approx_eq!(region.points[1].x, 0.5);
    }

    #[test]
    fn test_line_replay_with_resize() {
        let session = Session::from_json(
            r#"{
                "container": {"width": 900, "height": 400},
                "name": "door",
                "kind": "line",
                "events": [
                    {"type": "click", "x": 100, "y": 200},
                    {"type": "click", "x": 300, "y": 200},
                    {"type": "resize", "width": 450, "height": 200},
                    {"type": "press_handle", "x": 100, "y": 137.5},
                    {"type": "move", "x": 100, "y": 147.5},
                    {"type": "release"}
                ]
            }"#,
        )
        .unwrap();
        let region = session.replay(EditorSettings::default()).unwrap();
        assert_eq!(region.points.len(), 4);
        // half-width 37.5 at half scale, grown by 10
        assert_approx_eq!(region.points[0].y, (100.0 + 47.5) / 200.0);
        let direction = region.trigger_settings.unwrap().direction;
        assert_approx_eq!(direction.y, (100.0 + 47.5) / 200.0);
    }

    #[test]
    fn test_reedit_existing_region() {
        let session = Session::from_json(
            r#"{
                "container": {"width": 900, "height": 400},
                "region": {
                    "name": "zone",
                    "points": [{"x": 0.1, "y": 0.1}, {"x": 0.5, "y": 0.5}]
                },
                "events": [{"type": "click", "x": 900, "y": 400}]
            }"#,
        )
        .unwrap();
        let region = session.replay(EditorSettings::default()).unwrap();
        assert_eq!(region.name, "zone");
        assert_eq!(region.points.len(), 3);
        assert_approx_eq!(region.points[2].x, 1.0);
    }

    #[test]
    fn test_unknown_marker_index() {
        let session = Session::from_json(
            r#"{
                "container": {"width": 900, "height": 400},
                "events": [{"type": "press_point", "index": 3}]
            }"#,
        )
        .unwrap();
        assert!(matches!(
            session.replay(EditorSettings::default()),
            Err(RegionError::UnknownPoint { index: 3 })
        ));
    }

    #[test]
    fn test_invalid_region_rejected_on_load() {
        let result = Session::from_json(
            r#"{
                "container": {"width": 900, "height": 400},
                "region": {"name": "bad", "points": [{"x": 2.0, "y": 0.1}]}
            }"#,
        );
        assert!(matches!(result, Err(RegionError::OutOfRange { .. })));
    }
}

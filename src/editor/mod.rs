// src/editor/mod.rs

pub mod coords;
pub mod gesture;
pub mod identity;
pub mod perpendicular;
pub mod tools;

pub use coords::ContainerRect;
pub use gesture::{Gesture, GestureSlot, PointerButton};
pub use perpendicular::{BoundaryQuad, PerpendicularOffset};
pub use tools::{LineRegionEditor, LineState, PolygonEditor, RegionTool};

use crate::document::{Document, SharedDocument};
use crate::error::RegionError;
use crate::region::{PixelPoint, PointId, Region, RegionKind};
use crate::settings::EditorSettings;
use crate::utils::geometry::Vector2D;
use log::{debug, info};

/// Input forwarded by the host, already translated into container pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Click on the frame background.
    Click { pos: Vector2D },
    /// Button press on a point marker.
    PressPoint { button: PointerButton, id: PointId },
    /// Button press on the width handle of a line region.
    PressHandle { button: PointerButton, pos: Vector2D },
    Move { pos: Vector2D },
    Release,
    /// Delete request from a marker's context menu.
    Delete { id: PointId },
    /// Abort the live drag, keeping what was already applied.
    Cancel,
}

/// The tool matching the document's region kind.
#[derive(Debug, Clone)]
pub enum ActiveTool {
    Polygon(PolygonEditor),
    Line(LineRegionEditor),
}

impl ActiveTool {
    fn for_kind(kind: RegionKind, settings: &EditorSettings) -> Self {
        match kind {
            RegionKind::Polygon => ActiveTool::Polygon(PolygonEditor::new()),
            RegionKind::Line => ActiveTool::Line(LineRegionEditor::new(settings.clone())),
        }
    }

    pub fn as_tool(&self) -> &dyn RegionTool {
        match self {
            ActiveTool::Polygon(editor) => editor,
            ActiveTool::Line(editor) => editor,
        }
    }

    pub fn as_tool_mut(&mut self) -> &mut dyn RegionTool {
        match self {
            ActiveTool::Polygon(editor) => editor,
            ActiveTool::Line(editor) => editor,
        }
    }
}

/// Binds one region editor to the host: the shared document, the measured
/// container and the pointer events.
pub struct Editor {
    document: SharedDocument,
    settings: EditorSettings,
    container: Option<ContainerRect>,
    tool: ActiveTool,
    /// Document revision after our last write; anything newer came from outside.
    seen_revision: u64,
}

impl Editor {
    pub fn new(document: SharedDocument, settings: EditorSettings) -> Self {
        let (kind, revision) = {
            let doc = document.read();
            (doc.kind(), doc.revision())
        };
        Self {
            tool: ActiveTool::for_kind(kind, &settings),
            document,
            settings,
            container: None,
            seen_revision: revision,
        }
    }

    pub fn document(&self) -> SharedDocument {
        self.document.clone()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn tool(&self) -> &ActiveTool {
        &self.tool
    }

    pub fn container(&self) -> Option<ContainerRect> {
        self.container
    }

    /// Current markers, for the host to draw.
    pub fn points(&self) -> &[PixelPoint] {
        self.tool.as_tool().points()
    }

    /// Marker under `pos`, within the configured marker radius.
    pub fn point_at(&self, pos: Vector2D) -> Option<PointId> {
        self.tool.as_tool().point_at(pos, self.settings.marker_radius)
    }

    /// Called with the container size every time the host lays out. Markers
    /// are rebuilt when the size or the canonical state changed.
    pub fn set_container(&mut self, container: Option<ContainerRect>) {
        if container != self.container {
            self.container = container;
            self.rebuild();
        } else {
            self.sync_document();
        }
    }

    /// Switches between polygon and line editing, clearing the drawn geometry.
    pub fn set_kind(&mut self, kind: RegionKind) {
        self.document.write().set_kind(kind);
        self.rebuild();
        info!("editing a {} region", kind.name());
    }

    pub fn handle_event(&mut self, event: PointerEvent) {
        self.sync_document();

        let document = self.document.clone();
        let mut doc = document.write();
        let tool = self.tool.as_tool_mut();
        match event {
            PointerEvent::Click { pos } => tool.click(&mut doc, pos),
            PointerEvent::PressPoint { button, id } => {
                tool.press_point(button, id);
            }
            PointerEvent::PressHandle { button, pos } => {
                tool.press_handle(button, pos);
            }
            PointerEvent::Move { pos } => tool.pointer_move(&mut doc, pos),
            PointerEvent::Release => tool.release(),
            PointerEvent::Delete { id } => tool.delete_point(&mut doc, id),
            PointerEvent::Cancel => tool.cleanup(),
        }
        self.seen_revision = doc.revision();
    }

    pub fn cancel(&mut self) {
        self.tool.as_tool_mut().cleanup();
    }

    /// Builds the persisted region from the canonical state.
    pub fn submit(&self) -> Result<Region, RegionError> {
        self.document.read().to_region()
    }

    fn sync_document(&mut self) {
        let (kind, revision) = {
            let doc = self.document.read();
            (doc.kind(), doc.revision())
        };
        if revision != self.seen_revision || kind != self.tool.as_tool().kind() {
            debug!("canonical state changed outside the editor, rebuilding");
            self.rebuild();
        }
    }

    fn rebuild(&mut self) {
        let document = self.document.clone();
        let doc = document.read();
        if doc.kind() != self.tool.as_tool().kind() {
            self.tool = ActiveTool::for_kind(doc.kind(), &self.settings);
        }
        self.tool.as_tool_mut().rebuild(&doc, self.container);
        self.seen_revision = doc.revision();
    }
}

impl Drop for Editor {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Document::new(RegionKind::Polygon).shared(), EditorSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::NormalizedPoint;
    use assert_approx_eq::assert_approx_eq;

    fn editor(kind: RegionKind) -> Editor {
        let mut editor = Editor::new(Document::new(kind).shared(), EditorSettings::default());
        editor.set_container(Some(ContainerRect::new(900.0, 400.0)));
        editor
    }

    fn click(editor: &mut Editor, x: f64, y: f64) {
        editor.handle_event(PointerEvent::Click {
            pos: Vector2D::new(x, y),
        });
    }

    #[test]
    fn test_polygon_session() {
        let mut editor = editor(RegionKind::Polygon);
        click(&mut editor, 90.0, 40.0);
        click(&mut editor, 450.0, 200.0);
        let id = editor.points()[0].id;
        editor.handle_event(PointerEvent::PressPoint {
            button: PointerButton::Primary,
            id,
        });
        editor.handle_event(PointerEvent::Move {
            pos: Vector2D::new(180.0, 80.0),
        });
        editor.handle_event(PointerEvent::Release);

        let region = editor.submit().unwrap();
        assert_eq!(region.points.len(), 2);
        assert_approx_eq!(region.points[0].x, 0.2);
        assert_approx_eq!(region.points[0].y, 0.2);
        assert!(region.trigger_settings.is_none());
    }

    #[test]
    fn test_line_session_submits_rectangle() {
        let mut editor = editor(RegionKind::Line);
        click(&mut editor, 100.0, 200.0);
        click(&mut editor, 300.0, 200.0);
        editor.handle_event(PointerEvent::PressHandle {
            button: PointerButton::Primary,
            pos: Vector2D::new(200.0, 275.0),
        });
        editor.handle_event(PointerEvent::Move {
            pos: Vector2D::new(200.0, 285.0),
        });
        editor.handle_event(PointerEvent::Release);

        let region = editor.submit().unwrap();
        assert_eq!(region.points.len(), 4);
        let settings = region.trigger_settings.unwrap();
        assert!(!settings.is_roi);
        assert_approx_eq!(settings.direction.y, 285.0 / 400.0);
    }

    #[test]
    fn test_incomplete_line_cannot_submit() {
        let mut editor = editor(RegionKind::Line);
        click(&mut editor, 100.0, 200.0);
        assert!(matches!(
            editor.submit(),
            Err(RegionError::IncompleteLine { found: 1, .. })
        ));
    }

    #[test]
    fn test_switching_kind_clears_points() {
        let mut editor = editor(RegionKind::Polygon);
        click(&mut editor, 90.0, 40.0);
        editor.set_kind(RegionKind::Line);
        assert!(editor.points().is_empty());
        assert!(editor.document().read().points().is_empty());
        assert!(matches!(editor.tool(), ActiveTool::Line(_)));
    }

    #[test]
    fn test_external_change_rebuilds_markers() {
        let mut editor = editor(RegionKind::Polygon);
        click(&mut editor, 90.0, 40.0);
        editor
            .document()
            .write()
            .set_points(vec![NormalizedPoint::new(0.5, 0.5), NormalizedPoint::new(1.0, 1.0)]);
        editor.set_container(Some(ContainerRect::new(900.0, 400.0)));
        assert_eq!(editor.points().len(), 2);
        assert_approx_eq!(editor.points()[1].x, 900.0);
    }

    #[test]
    fn test_unmeasured_container_ignores_input() {
        let mut editor = Editor::new(
            Document::new(RegionKind::Polygon).shared(),
            EditorSettings::default(),
        );
        click(&mut editor, 90.0, 40.0);
        assert!(editor.document().read().points().is_empty());
    }

    #[test]
    fn test_point_at_uses_marker_radius() {
        let mut editor = editor(RegionKind::Polygon);
        click(&mut editor, 90.0, 40.0);
        let id = editor.points()[0].id;
        assert_eq!(editor.point_at(Vector2D::new(97.0, 46.0)), Some(id));
        assert_eq!(editor.point_at(Vector2D::new(120.0, 40.0)), None);
    }

    #[test]
    fn test_cancel_ends_drag() {
        let mut editor = editor(RegionKind::Polygon);
        click(&mut editor, 90.0, 40.0);
        let id = editor.points()[0].id;
        editor.handle_event(PointerEvent::PressPoint {
            button: PointerButton::Primary,
            id,
        });
        assert!(editor.tool().as_tool().is_dragging());
        editor.handle_event(PointerEvent::Cancel);
        assert!(!editor.tool().as_tool().is_dragging());
    }
}

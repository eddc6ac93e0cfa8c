// src/editor/tools/mod.rs
mod line;
mod polygon;

pub use line::{LineRegionEditor, LineState};
pub use polygon::PolygonEditor;

use crate::document::Document;
use crate::editor::coords::ContainerRect;
use crate::editor::gesture::PointerButton;
use crate::region::{PixelPoint, PointId, RegionKind};
use crate::utils::geometry::Vector2D;

/// Handlers the host binds to its click, drag and delete affordances.
pub trait RegionTool {
    fn name(&self) -> &'static str;

    fn kind(&self) -> RegionKind;

    /// Discards every marker and rebuilds from the canonical points for
    /// `container`. `None` means the container is not measured yet.
    fn rebuild(&mut self, doc: &Document, container: Option<ContainerRect>);

    fn container(&self) -> Option<ContainerRect>;

    /// A click on the frame itself.
    fn click(&mut self, doc: &mut Document, pos: Vector2D);

    /// A press on a marker. Returns whether a drag started.
    fn press_point(&mut self, button: PointerButton, id: PointId) -> bool;

    /// A press on the width handle. Returns whether a drag started.
    fn press_handle(&mut self, _button: PointerButton, _pos: Vector2D) -> bool {
        false
    }

    /// Pointer movement while a drag is live; ignored otherwise.
    fn pointer_move(&mut self, doc: &mut Document, pos: Vector2D);

    fn release(&mut self);

    fn delete_point(&mut self, doc: &mut Document, id: PointId);

    fn points(&self) -> &[PixelPoint];

    fn is_dragging(&self) -> bool;

    /// Drops any live drag.
    fn cleanup(&mut self);

    /// The marker within `radius` pixels of `pos`, nearest first.
    fn point_at(&self, pos: Vector2D, radius: f64) -> Option<PointId> {
        self.points()
            .iter()
            .map(|point| (point.id, point.position().distance_to(&pos)))
            .filter(|(_, distance)| *distance <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}

/// Measured container, or `None` while the host has not laid it out yet.
fn measured(container: Option<ContainerRect>) -> Option<ContainerRect> {
    container.filter(ContainerRect::is_measured)
}

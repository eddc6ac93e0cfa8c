// src/editor/tools/polygon.rs

use super::{measured, RegionTool};
use crate::document::Document;
use crate::editor::coords::ContainerRect;
use crate::editor::gesture::{Gesture, GestureSlot, PointerButton};
use crate::editor::identity::PointIds;
use crate::region::{PixelPoint, PointId, RegionKind};
use crate::utils::geometry::{Segment2D, Vector2D};
use log::{debug, trace, warn};

/// Free-form polygon editing: every marker is a vertex, persisted as drawn.
#[derive(Debug, Clone, Default)]
pub struct PolygonEditor {
    container: Option<ContainerRect>,
    points: Vec<PixelPoint>,
    ids: PointIds,
    gesture: GestureSlot,
}

impl PolygonEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(doc: &Document, container: Option<ContainerRect>) -> Self {
        let mut editor = Self::new();
        editor.rebuild(doc, container);
        editor
    }

    /// Appends a vertex at `click` and its normalized twin to the canonical points.
    pub fn add_point(&mut self, doc: &mut Document, click: Vector2D) {
        let Some(rect) = measured(self.container) else {
            warn!("ignoring click at {:?}: container not measured", click);
            return;
        };
        if !rect.contains(click) {
            trace!("ignoring click at {:?} outside the container", click);
            return;
        }

        let point = PixelPoint::at(self.ids.next_id(), click);
        self.points.push(point);

        let mut canonical = doc.points().to_vec();
        canonical.push(rect.to_normalized(click));
        doc.set_points(canonical);
        debug!("polygon point {} added, {} total", point.id, self.points.len());
    }

    /// Moves vertex `id` to `pos`, clamped onto the container. Unknown ids are ignored.
    pub fn move_point(&mut self, doc: &mut Document, id: PointId, pos: Vector2D) {
        let Some(rect) = measured(self.container) else {
            return;
        };
        let Some(point) = self.points.iter_mut().find(|point| point.id == id) else {
            return;
        };

        let clamped = rect.clamp(pos);
        *point = PixelPoint::at(id, clamped);
        trace!("polygon point {} moved to {:?}", id, clamped);
        self.commit(doc, rect);
    }

    /// Removes vertex `id`. Unknown ids are ignored.
    pub fn delete_point(&mut self, doc: &mut Document, id: PointId) {
        let Some(index) = self.points.iter().position(|point| point.id == id) else {
            return;
        };
        self.points.remove(index);
        if self.gesture.active() == Some(Gesture::Point(id)) {
            self.gesture.release();
        }
        debug!("polygon point {} deleted, {} left", id, self.points.len());

        if let Some(rect) = measured(self.container) {
            self.commit(doc, rect);
        }
    }

    /// Consecutive vertex pairs, first to last. The polygon is not closed here.
    pub fn edges(&self) -> impl Iterator<Item = Segment2D> + Clone + '_ {
        self.points
            .windows(2)
            .map(|pair| Segment2D::new(pair[0].position(), pair[1].position()))
    }

    /// Segment from the last vertex back to the first, once there are two.
    pub fn closing_edge(&self) -> Option<Segment2D> {
        match self.points.as_slice() {
            [first, .., last] => Some(Segment2D::new(last.position(), first.position())),
            _ => None,
        }
    }

    /// Overwrites the canonical points with the whole local array.
    fn commit(&self, doc: &mut Document, rect: ContainerRect) {
        doc.set_points(rect.normalize_all(self.points.iter().map(PixelPoint::position)));
    }
}

impl RegionTool for PolygonEditor {
    fn name(&self) -> &'static str {
        "Polygon"
    }

    fn kind(&self) -> RegionKind {
        RegionKind::Polygon
    }

    fn rebuild(&mut self, doc: &Document, container: Option<ContainerRect>) {
        self.container = container;
        self.gesture.release();
        self.points.clear();

        let Some(rect) = measured(container) else {
            return;
        };
        let ids = &mut self.ids;
        self.points = doc
            .points()
            .iter()
            .map(|point| rect.to_pixel(*point, ids.next_id()))
            .collect();
        debug!(
            "polygon rebuilt with {} points for {}x{}",
            self.points.len(),
            rect.width,
            rect.height
        );
    }

    fn container(&self) -> Option<ContainerRect> {
        self.container
    }

    fn click(&mut self, doc: &mut Document, pos: Vector2D) {
        self.add_point(doc, pos);
    }

    fn press_point(&mut self, button: PointerButton, id: PointId) -> bool {
        if measured(self.container).is_none() || !self.points.iter().any(|p| p.id == id) {
            return false;
        }
        self.gesture.begin(button, Gesture::Point(id))
    }

    fn pointer_move(&mut self, doc: &mut Document, pos: Vector2D) {
        if let Some(Gesture::Point(id)) = self.gesture.active() {
            self.move_point(doc, id, pos);
        }
    }

    fn release(&mut self) {
        self.gesture.release();
    }

    fn delete_point(&mut self, doc: &mut Document, id: PointId) {
        PolygonEditor::delete_point(self, doc, id);
    }

    fn points(&self) -> &[PixelPoint] {
        &self.points
    }

    fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    fn cleanup(&mut self) {
        self.gesture.release();
    }
}

// src/editor/tools/line.rs

use super::{measured, RegionTool};
use crate::document::Document;
use crate::editor::coords::ContainerRect;
use crate::editor::gesture::{Gesture, GestureSlot, PointerButton};
use crate::editor::identity::PointIds;
use crate::editor::perpendicular::{BoundaryQuad, PerpendicularOffset};
use crate::region::{PixelPoint, PointId, RegionKind, LINE_REGION_POINTS};
use crate::settings::EditorSettings;
use crate::utils::geometry::{Segment2D, Vector2D};
use log::{debug, trace, warn};

/// Progress of the baseline of a line region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    Empty,
    BaselinePartial,
    BaselineComplete,
}

/// Line-crossing region editing.
///
/// The operator clicks two baseline points; the baseline is then pushed out
/// along its normal to both sides, and the resulting rectangle (not the
/// baseline) becomes the canonical point list. The width is changed by
/// dragging the handle that crosses the baseline's midpoint, and the handle's
/// start is stored as the crossing direction.
#[derive(Debug, Clone)]
pub struct LineRegionEditor {
    settings: EditorSettings,
    container: Option<ContainerRect>,
    baseline: Vec<PixelPoint>,
    /// Half-width of the capture rectangle, `None` until first known.
    offset: Option<f64>,
    quad: Option<BoundaryQuad>,
    ids: PointIds,
    gesture: GestureSlot,
}

impl LineRegionEditor {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            settings,
            container: None,
            baseline: Vec::with_capacity(2),
            offset: None,
            quad: None,
            ids: PointIds::new(),
            gesture: GestureSlot::new(),
        }
    }

    pub fn load(settings: EditorSettings, doc: &Document, container: Option<ContainerRect>) -> Self {
        let mut editor = Self::new(settings);
        editor.rebuild(doc, container);
        editor
    }

    pub fn state(&self) -> LineState {
        match self.baseline.len() {
            0 => LineState::Empty,
            1 => LineState::BaselinePartial,
            _ => LineState::BaselineComplete,
        }
    }

    pub fn baseline(&self) -> &[PixelPoint] {
        &self.baseline
    }

    /// Current half-width, 0 until a baseline has been completed.
    pub fn offset_length(&self) -> f64 {
        self.offset.unwrap_or(0.0)
    }

    pub fn perpendicular(&self) -> PerpendicularOffset {
        let positions: Vec<Vector2D> = self.baseline.iter().map(PixelPoint::position).collect();
        PerpendicularOffset::from_points(&positions)
    }

    /// The width-adjustment handle; its start is the direction point.
    pub fn handle(&self) -> Option<Segment2D> {
        self.quad.map(|quad| quad.handle())
    }

    pub fn quadrilateral(&self) -> Option<BoundaryQuad> {
        self.quad
    }

    /// Adds a baseline point; ignored once the baseline has two.
    pub fn place_baseline_point(&mut self, doc: &mut Document, click: Vector2D) {
        let Some(rect) = measured(self.container) else {
            warn!("ignoring click at {:?}: container not measured", click);
            return;
        };
        if self.baseline.len() >= 2 {
            trace!("baseline already complete, ignoring click at {:?}", click);
            return;
        }
        if !rect.contains(click) {
            return;
        }

        let point = PixelPoint::at(self.ids.next_id(), click);
        self.baseline.push(point);
        self.write_baseline(doc, rect);
        debug!("baseline point {} placed at {:?}", point.id, click);

        if self.baseline.len() == 2 {
            self.complete_baseline(doc);
        }
    }

    /// Seeds the half-width on first completion and commits the rectangle.
    fn complete_baseline(&mut self, doc: &mut Document) {
        let offset = *self.offset.get_or_insert(self.settings.default_offset);
        debug!("baseline complete, half-width {}", offset);
        self.commit_quadrilateral(doc);
    }

    /// Rebuilds the rectangle from the baseline and half-width, then overwrites
    /// the canonical points with its corners and the direction with the
    /// handle's start.
    ///
    /// The half-width is capped so that every corner stays inside the
    /// container; the stored corners are then an exact extrusion of the
    /// baseline and can be reconstructed.
    pub fn commit_quadrilateral(&mut self, doc: &mut Document) {
        let Some(rect) = measured(self.container) else {
            return;
        };
        let perpendicular = self.perpendicular();
        let offset = self.capped_offset(&perpendicular, rect);
        let Some(quad) = perpendicular.quadrilateral(offset) else {
            return;
        };

        self.offset = Some(offset);
        self.quad = Some(quad);
        doc.set_points(rect.normalize_all(quad.corners));
        doc.set_direction(Some(rect.to_normalized(quad.handle().start)));
        trace!("quadrilateral committed: {:?}", quad.corners);
    }

    fn capped_offset(&self, perpendicular: &PerpendicularOffset, rect: ContainerRect) -> f64 {
        let wanted = self.offset.unwrap_or(self.settings.default_offset);
        let limit = perpendicular.max_length_within(rect.width, rect.height);
        if wanted > limit {
            debug!("half-width {:.2} capped at {:.2} to stay inside the frame", wanted, limit);
            return limit;
        }
        wanted
    }

    /// Changes the half-width by how far the pointer travelled along the
    /// normal from `anchor`. Returns false when the update was rejected.
    pub fn adjust_offset(&mut self, doc: &mut Document, anchor: Vector2D, current: Vector2D) -> bool {
        let Some(rect) = measured(self.container) else {
            return false;
        };
        if self.state() != LineState::BaselineComplete {
            return false;
        }

        let current = rect.clamp_inset(current, self.settings.drag_inset);
        let scalar = self.perpendicular().project(anchor, current);
        let proposed = self.offset_length() + scalar;
        if proposed <= self.settings.min_offset {
            trace!("rejecting half-width {}", proposed);
            return false;
        }

        self.offset = Some(proposed);
        self.commit_quadrilateral(doc);
        true
    }

    /// Drags baseline point `id`, clamped onto the container.
    pub fn move_baseline_point(&mut self, doc: &mut Document, id: PointId, pos: Vector2D) {
        let Some(rect) = measured(self.container) else {
            return;
        };
        let Some(point) = self.baseline.iter_mut().find(|point| point.id == id) else {
            return;
        };
        *point = PixelPoint::at(id, rect.clamp(pos));

        if self.state() == LineState::BaselineComplete {
            self.commit_quadrilateral(doc);
        } else {
            self.write_baseline(doc, rect);
        }
    }

    /// Removes baseline point `id`. An existing rectangle is dropped and the
    /// canonical state falls back to the remaining baseline; the half-width is
    /// kept for the next completion.
    pub fn delete_point(&mut self, doc: &mut Document, id: PointId) {
        let Some(index) = self.baseline.iter().position(|point| point.id == id) else {
            return;
        };
        self.baseline.remove(index);
        if self.gesture.active() == Some(Gesture::Point(id)) {
            self.gesture.release();
        }

        if self.quad.take().is_some() {
            debug!("baseline point {} deleted, rectangle cleared", id);
            doc.set_direction(None);
        }
        if let Some(rect) = measured(self.container) {
            self.write_baseline(doc, rect);
        }
    }

    fn write_baseline(&self, doc: &mut Document, rect: ContainerRect) {
        doc.set_points(rect.normalize_all(self.baseline.iter().map(PixelPoint::position)));
    }

    /// Recovers baseline and half-width from a stored rectangle.
    ///
    /// Only rectangles produced by this editor have their cross edges (corners
    /// 0-3 and 1-2) equal as vectors; that still holds after the container's
    /// aspect ratio changed. Anything else is left alone.
    ///
    /// The stored corners are shown as they are, a parallelogram when the
    /// aspect ratio changed, until the next edit commits a fresh rectangle.
    fn reconstruct(&mut self, doc: &Document, rect: ContainerRect) {
        let stored: Vec<Vector2D> = doc
            .points()
            .iter()
            .map(|point| rect.to_pixel_position(*point))
            .collect();
        let Ok(corners) = <[Vector2D; LINE_REGION_POINTS]>::try_from(stored) else {
            return;
        };
        let stored = BoundaryQuad { corners };

        let skew = ((corners[0] - corners[3]) - (corners[1] - corners[2])).length();
        if skew > self.settings.reconstruction_tolerance {
            warn!(
                "stored quadrilateral is not an extruded baseline (skew {:.2}px), not reconstructing",
                skew
            );
            return;
        }

        let midline = stored.midline();
        self.baseline = vec![
            PixelPoint::at(self.ids.next_id(), midline.start),
            PixelPoint::at(self.ids.next_id(), midline.end),
        ];
        self.offset = Some(stored.half_width());
        self.quad = Some(stored);
        debug!(
            "reconstructed baseline {:?} with half-width {}",
            midline,
            self.offset_length()
        );
    }
}

impl Default for LineRegionEditor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl RegionTool for LineRegionEditor {
    fn name(&self) -> &'static str {
        "Line"
    }

    fn kind(&self) -> RegionKind {
        RegionKind::Line
    }

    fn rebuild(&mut self, doc: &Document, container: Option<ContainerRect>) {
        self.container = container;
        self.gesture.release();
        self.baseline.clear();
        self.quad = None;

        let Some(rect) = measured(container) else {
            return;
        };
        match doc.points().len() {
            LINE_REGION_POINTS => self.reconstruct(doc, rect),
            0..=2 => {
                let ids = &mut self.ids;
                self.baseline = doc
                    .points()
                    .iter()
                    .map(|point| rect.to_pixel(*point, ids.next_id()))
                    .collect();
                if self.state() == LineState::BaselineComplete {
                    let perpendicular = self.perpendicular();
                    let offset = self.capped_offset(&perpendicular, rect);
                    self.offset = Some(offset);
                    self.quad = perpendicular.quadrilateral(offset);
                }
            }
            count => warn!("line region with {} points cannot be edited", count),
        }
    }

    fn container(&self) -> Option<ContainerRect> {
        self.container
    }

    fn click(&mut self, doc: &mut Document, pos: Vector2D) {
        self.place_baseline_point(doc, pos);
    }

    fn press_point(&mut self, button: PointerButton, id: PointId) -> bool {
        if measured(self.container).is_none() || !self.baseline.iter().any(|p| p.id == id) {
            return false;
        }
        self.gesture.begin(button, Gesture::Point(id))
    }

    fn press_handle(&mut self, button: PointerButton, pos: Vector2D) -> bool {
        if measured(self.container).is_none() || self.state() != LineState::BaselineComplete {
            return false;
        }
        self.gesture.begin(button, Gesture::Offset { anchor: pos })
    }

    fn pointer_move(&mut self, doc: &mut Document, pos: Vector2D) {
        match self.gesture.active() {
            Some(Gesture::Point(id)) => self.move_baseline_point(doc, id, pos),
            Some(Gesture::Offset { anchor }) => {
                if self.adjust_offset(doc, anchor, pos) {
                    if let Some(rect) = measured(self.container) {
                        self.gesture
                            .advance_anchor(rect.clamp_inset(pos, self.settings.drag_inset));
                    }
                }
            }
            None => {}
        }
    }

    fn release(&mut self) {
        self.gesture.release();
    }

    fn delete_point(&mut self, doc: &mut Document, id: PointId) {
        LineRegionEditor::delete_point(self, doc, id);
    }

    fn points(&self) -> &[PixelPoint] {
        &self.baseline
    }

    fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    fn cleanup(&mut self) {
        self.gesture.release();
    }
}

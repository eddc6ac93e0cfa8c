// src/editor/gesture.rs
use crate::region::PointId;
use crate::utils::geometry::Vector2D;
use log::trace;

/// Pointer buttons the host forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// What the current drag is moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// A marker, tracked by id.
    Point(PointId),
    /// The width handle of a line region. `anchor` is the last accepted pointer
    /// position.
    Offset { anchor: Vector2D },
}

/// The single active drag of an editor.
///
/// Beginning a gesture replaces any previous one, so at most one move handler
/// is ever live. Dropping the slot with its owner ends the gesture.
#[derive(Debug, Clone, Default)]
pub struct GestureSlot {
    active: Option<Gesture>,
}

impl GestureSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking on a primary-button press. Other buttons are ignored.
    pub fn begin(&mut self, button: PointerButton, gesture: Gesture) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        if let Some(previous) = self.active.replace(gesture) {
            trace!("gesture {:?} replaced by {:?}", previous, gesture);
        }
        true
    }

    pub fn active(&self) -> Option<Gesture> {
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Moves the anchor of an offset drag after an accepted update.
    pub fn advance_anchor(&mut self, anchor: Vector2D) {
        if let Some(Gesture::Offset { anchor: current }) = &mut self.active {
            *current = anchor;
        }
    }

    /// Ends tracking; the last applied move stands.
    pub fn release(&mut self) -> Option<Gesture> {
        self.active.take()
    }
}

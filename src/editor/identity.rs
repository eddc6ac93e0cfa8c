// src/editor/identity.rs
use crate::region::PointId;

/// Hands out marker ids. Ids are never reused within one editor, so a marker
/// keeps its id through moves and no two markers share one.
#[derive(Debug, Clone, Default)]
pub struct PointIds {
    next: u64,
}

impl PointIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> PointId {
        let id = PointId(self.next);
        self.next += 1;
        id
    }
}

// src/lib.rs

pub mod document;
pub mod editor;
pub mod error;
pub mod region;
pub mod session;
pub mod settings;
pub mod utils;

pub use document::{Document, SharedDocument};
pub use editor::{ContainerRect, Editor, PointerButton, PointerEvent};
pub use error::RegionError;
pub use region::{NormalizedPoint, PixelPoint, PointId, Region, RegionKind, TriggerSettings};
pub use settings::EditorSettings;

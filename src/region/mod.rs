// src/region/mod.rs
pub mod point;
#[allow(clippy::module_inception)]
pub mod region;

pub use point::{NormalizedPoint, PixelPoint, PointId};
pub use region::{Region, RegionKind, TriggerSettings, LINE_REGION_POINTS};

// src/document/mod.rs
#[allow(clippy::module_inception)]
mod document;

pub use self::document::{Document, SharedDocument};

//! Document model types for converted content.
//!
//! This is the only persisted format: every converter produces a
//! [`DocumentContent`] and the renderer serializes it as JSON.

mod document;

pub use document::{DocumentContent, DocumentSection, Metadata};

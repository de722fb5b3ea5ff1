//! UI Components
//!
//! Reusable Leptos components.

mod document_tags;

pub use document_tags::DocumentTags;

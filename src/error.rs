//! Widget Error Taxonomy
//!
//! Every failed operation of the tag box lands here. All of them are
//! handled the same way at the widget boundary: logged and swallowed.
//! Nothing is retried and nothing panics the widget.

use leptos_tags_input::Tag;
use thiserror::Error;

/// Request-level failures from the metadata service
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("transport: {0}")]
    Transport(String),

    /// The service answered outside the 2xx range
    #[error("server answered with status {0}")]
    Status(u16),

    /// A success response carried a body the widget cannot decode
    #[error("malformed response body: {0}")]
    MalformedResponse(String),
}

/// Operation-level failures of the tag box
#[derive(Debug, Error)]
pub enum TagBoxError {
    #[error("failed to get tags: {source}")]
    FetchTags { source: ApiError },

    #[error("failed to retrieve confirmation status: {source}")]
    FetchConfirmationStatus { source: ApiError },

    #[error("failed to add tag {tag}: {source}")]
    AddTag { tag: Tag, source: ApiError },

    #[error("failed to remove tag {tag}: {source}")]
    RemoveTag { tag: Tag, source: ApiError },

    #[error("confirm action failed: {source}")]
    Confirm { source: ApiError },

    #[error("reopen action failed: {source}")]
    Reopen { source: ApiError },

    /// Rejected locally, before any request goes out
    #[error("asked to set confirmation to the current state (confirmed: {confirmed})")]
    RedundantConfirmation { confirmed: bool },
}

//! Metadata Service Client
//!
//! REST access to the tag endpoint of one document/kind pair. Every call
//! builds a fresh request against a shared client; no request state is
//! reused between calls and nothing is retried.

use async_trait::async_trait;
use leptos_tags_input::Tag;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;

use crate::config::TagBoxConfig;
use crate::error::ApiError;

/// Confirmation actions understood by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Confirm,
    Reopen,
}

impl ConfirmAction {
    /// Wire name of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmAction::Confirm => "confirm",
            ConfirmAction::Reopen => "reopen",
        }
    }
}

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct ActionArgs<'a> {
    action: &'a str,
}

#[derive(Serialize)]
struct InformArgs<'a> {
    action: &'a str,
    piece: &'a str,
}

/// Backend seam of the tag box
///
/// The REST client below implements it for production; tests script it.
/// `?Send` because browser futures are not `Send`.
#[async_trait(?Send)]
pub trait TagStore {
    /// Current tag list of the document
    async fn fetch_tags(&self) -> Result<Vec<Tag>, ApiError>;

    /// Persist one added tag
    async fn add_tag(&self, tag: &Tag) -> Result<(), ApiError>;

    /// Persist one removed tag
    async fn remove_tag(&self, tag: &Tag) -> Result<(), ApiError>;

    /// Whether the document's tag set is currently confirmed
    async fn confirmation_status(&self) -> Result<bool, ApiError>;

    /// Mark the tag set confirmed or reopened
    async fn set_confirmation(&self, action: ConfirmAction) -> Result<(), ApiError>;
}

/// REST implementation against `{base}/metadata/{document}/{kind}/`
pub struct RestTagStore {
    client: Client,
    endpoint: String,
}

impl RestTagStore {
    pub fn new(config: &TagBoxConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint(),
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl TagStore for RestTagStore {
    async fn fetch_tags(&self) -> Result<Vec<Tag>, ApiError> {
        let response = self.execute(self.client.get(&self.endpoint)).await?;
        response
            .json::<Vec<Tag>>()
            .await
            .map_err(|err| ApiError::MalformedResponse(err.to_string()))
    }

    async fn add_tag(&self, tag: &Tag) -> Result<(), ApiError> {
        self.execute(self.client.put(&self.endpoint).json(tag))
            .await?;
        Ok(())
    }

    async fn remove_tag(&self, tag: &Tag) -> Result<(), ApiError> {
        self.execute(self.client.delete(&self.endpoint).json(tag))
            .await?;
        Ok(())
    }

    async fn confirmation_status(&self) -> Result<bool, ApiError> {
        let args = InformArgs {
            action: "inform",
            piece: "confirmationStatus",
        };
        let response = self
            .execute(self.client.post(&self.endpoint).json(&args))
            .await?;
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        decode_confirmation(&body)
    }

    async fn set_confirmation(&self, action: ConfirmAction) -> Result<(), ApiError> {
        let args = ActionArgs {
            action: action.as_str(),
        };
        self.execute(self.client.post(&self.endpoint).json(&args))
            .await?;
        Ok(())
    }
}

/// Decode the confirmation-status payload.
///
/// The backend answers with a JSON boolean, historically sometimes in its
/// string-encoded form (`"true"`). Anything else is malformed.
pub fn decode_confirmation(body: &str) -> Result<bool, ApiError> {
    match serde_json::from_str::<Value>(body.trim()) {
        Ok(Value::Bool(value)) => Ok(value),
        Ok(Value::String(text)) => match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ApiError::MalformedResponse(body.trim().to_string())),
        },
        _ => Err(ApiError::MalformedResponse(body.trim().to_string())),
    }
}

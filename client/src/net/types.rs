//! Wire types for the JSON action endpoints and the client error type.
//!
//! DESIGN
//! ======
//! Every action endpoint answers with the same envelope: a `success` flag plus
//! optional `error`, `count` and upload `results`. One struct covers them all;
//! unknown fields are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Fallback text when a rejection carries no `error` field.
pub const UNKNOWN_ERROR: &str = "Nepoznata greška";
/// Generic text for transport and decoding failures.
pub const REQUEST_FAILED_MESSAGE: &str = "❌ Greška pri slanju zahtjeva";

/// JSON envelope returned by action endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub results: Vec<UploadedDocument>,
    /// Generated document (invoice or payment slip) to download.
    #[serde(default)]
    pub file_url: Option<String>,
}

/// Per-file outcome of a document upload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedDocument {
    pub filename: String,
    #[serde(default)]
    pub doc_id: Option<u64>,
}

/// Failure of an action request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body was not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The server answered with `success: false`.
    #[error("rejected: {}", .0.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Rejected(Option<String>),
}

impl ApiError {
    /// Message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(error) => format!("❌ Greška: {}", error.as_deref().unwrap_or(UNKNOWN_ERROR)),
            Self::Transport(_) | Self::Decode(_) => REQUEST_FAILED_MESSAGE.to_owned(),
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl ActionResponse {
    /// Turn the envelope into `Ok(self)` or [`ApiError::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false.
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::Rejected(self.error))
        }
    }
}

/// Parse an action response body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] for malformed JSON and
/// [`ApiError::Rejected`] when the server reports failure.
pub fn parse_action_response(body: &str) -> Result<ActionResponse, ApiError> {
    serde_json::from_str::<ActionResponse>(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .into_result()
}

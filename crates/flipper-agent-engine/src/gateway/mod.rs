//! Boundary contract for the hosted generative model.
//!
//! The engine never talks to the network itself. Callers construct something
//! implementing [`ModelGateway`] and inject it into the session layer; there
//! is deliberately no process-wide client instance.

pub mod prompts;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use prompts::ScanKind;

/// An uploaded image ready for a vision call: base64 payload plus the MIME
/// type passed through from ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Standard-alphabet base64 of the raw image bytes.
    pub data: String,
    pub mime_type: String,
}

/// Options for a text generation call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions<'a> {
    pub system_instruction: Option<&'a str>,
    /// Ask the model service to ground the answer in web search results.
    pub enable_search_grounding: bool,
}

/// A web source the model grounded its answer in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub url: String,
    pub title: String,
}

/// Text returned by a generation call, with any grounding citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundedText {
    pub text: String,
    pub citations: Vec<Citation>,
}

impl GroundedText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            citations: vec![],
        }
    }
}

/// Failures from the external model service.
///
/// These are caught at the action-handler boundary and converted into a
/// user-visible message; they are never retried automatically.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("network failure reaching the model service: {0}")]
    Network(String),
    #[error("model service rejected the credentials: {0}")]
    Auth(String),
    #[error("model service quota exhausted: {0}")]
    Quota(String),
    #[error("model service returned an empty response")]
    EmptyResponse,
}

/// The two capability calls the system makes against the hosted model.
pub trait ModelGateway {
    /// Sends an image plus an instruction to the vision model and returns
    /// the free-text response.
    fn generate_vision_text(
        &self,
        image: &ImagePayload,
        instruction: &str,
    ) -> Result<String, GatewayError>;

    /// Sends a text prompt to the model and returns the response, with
    /// citations when search grounding was requested and used.
    fn generate_text(
        &self,
        prompt: &str,
        options: TextOptions<'_>,
    ) -> Result<GroundedText, GatewayError>;
}

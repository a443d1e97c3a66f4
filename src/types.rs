//! Provider-agnostic request and response values shared by every backend.
//!
//! These types normalize what goes into and comes out of a single generation call
//! so the rest of the crate can stay agnostic of individual API shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Single-shot generation request.
///
/// Optional fields override the client-level defaults from
/// [`crate::config::LLMConfig`] for one call. Fields left as `None` fall back to
/// the configured defaults, then to whatever the selected backend does on its own.
///
/// # Examples
///
/// ```
/// use tsunagi_llm::types::GenerateRequest;
///
/// let request = GenerateRequest::new("Why is the sky blue?")
///     .with_temperature(0.2)
///     .with_max_output_tokens(256);
/// assert_eq!(request.temperature, Some(0.2));
/// assert_eq!(request.max_output_tokens, Some(256));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Prompt text forwarded to the backend as a single user turn.
    pub prompt: String,
    /// Per-request sampling temperature override.
    pub temperature: Option<f32>,
    /// Per-request cap on generated tokens.
    pub max_output_tokens: Option<u32>,
}

impl GenerateRequest {
    /// Creates a request carrying only a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// Overrides the sampling temperature for this request only.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Caps the number of generated tokens for this request only.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}

/// Normalized result of one generation call.
///
/// `text` holds the first completion the backend produced, or an empty string when
/// the reply was well-formed but carried no usable candidate. `metadata` keeps the
/// complete decoded response body so callers can reach vendor-specific fields such
/// as token usage or safety annotations without another round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Extracted completion text.
    pub text: String,
    /// Full decoded response object, verbatim.
    pub metadata: Map<String, Value>,
}

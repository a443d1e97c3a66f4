use thiserror::Error;

/// Aggregates every failure mode exposed by the unified LLM client.
///
/// Callers can match on the specific variant to decide whether to retry, fall back
/// to another provider, or surface an actionable message to the user interface.
#[derive(Debug, Error)]
pub enum LLMError {
    /// Raised when assembling a client from incomplete or contradictory settings.
    #[error("configuration error: {message}")]
    Config { message: String },
    /// Signals that a request payload could not be encoded as JSON.
    #[error("failed to serialize request payload: {message}")]
    Serialization { message: String },
    /// Represents transport-layer or networking failures, including timeouts.
    #[error("transport error: {message}")]
    Transport { message: String },
    /// Reports a non-success status answered by the backend.
    ///
    /// The upstream body is kept verbatim so the rendered message always carries
    /// both the status code and whatever diagnostics the vendor returned.
    #[error("{provider} API error: status {status}: {body}")]
    Api {
        /// Name of the backend, such as `anthropic`.
        provider: &'static str,
        /// HTTP status code answered by the backend.
        status: u16,
        /// Raw response body, unmodified.
        body: String,
    },
    /// Signals a reply whose shape does not match what the backend documents.
    ///
    /// Absent or empty completion lists are not parse failures; those produce an
    /// empty-text response instead.
    #[error("failed to parse {provider} response: {message}")]
    Parse {
        /// Name of the backend the malformed reply came from.
        provider: &'static str,
        /// Description of the structural mismatch.
        message: String,
    },
}

impl LLMError {
    /// Creates an [`LLMError::Config`] from a textual description.
    pub fn config<T: Into<String>>(message: T) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an [`LLMError::Transport`] from a textual description.
    ///
    /// The helper keeps call sites concise and guarantees consistent formatting of
    /// transport failures across the crate.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsunagi_llm::error::LLMError;
    ///
    /// let err = LLMError::transport("dns lookup failed");
    /// assert!(matches!(err, LLMError::Transport { .. }));
    /// ```
    pub fn transport<T: Into<String>>(message: T) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates an [`LLMError::Api`] carrying the backend name, status and raw body.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsunagi_llm::error::LLMError;
    ///
    /// let err = LLMError::api("openai", 401, r#"{"error":"bad key"}"#);
    /// assert!(matches!(err, LLMError::Api { status: 401, .. }));
    /// ```
    pub fn api<T: Into<String>>(provider: &'static str, status: u16, body: T) -> Self {
        Self::Api {
            provider,
            status,
            body: body.into(),
        }
    }

    /// Creates an [`LLMError::Parse`] with the given backend name and message.
    pub fn parse<T: Into<String>>(provider: &'static str, message: T) -> Self {
        Self::Parse {
            provider,
            message: message.into(),
        }
    }
}

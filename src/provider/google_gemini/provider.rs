use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::config::LLMConfig;
use crate::error::LLMError;
use crate::http::{DynHttpTransport, post_json_with_headers};
use crate::provider::{LLMProvider, ensure_success};
use crate::types::{GenerateRequest, GenerateResponse};

use super::request::build_gemini_body;
use super::response::map_response;

const BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Google Gemini generateContent provider.
///
/// Authentication rides on the URL: the configured credential is appended as the
/// `key` query parameter on every call, so no auth header is stamped.
pub struct GoogleGeminiProvider {
    transport: DynHttpTransport,
}

impl GoogleGeminiProvider {
    /// Creates a provider that targets the Google Generative Language endpoint.
    pub fn new(transport: DynHttpTransport) -> Self {
        Self { transport }
    }

    fn endpoint(&self, config: &LLMConfig) -> String {
        let model = config.model.as_deref().unwrap_or(DEFAULT_MODEL);
        let key = config.credential.as_deref().unwrap_or_default();
        format!("{BASE_URL}/v1beta/models/{model}:generateContent?key={key}")
    }

    fn build_headers(&self) -> HashMap<String, String> {
        HashMap::from([("Content-Type".to_string(), "application/json".to_string())])
    }
}

#[async_trait]
impl LLMProvider for GoogleGeminiProvider {
    async fn generate(
        &self,
        request: &GenerateRequest,
        config: &LLMConfig,
    ) -> Result<GenerateResponse, LLMError> {
        let url = self.endpoint(config);
        let body = build_gemini_body(request, config);
        debug!(
            model = config.model.as_deref().unwrap_or(DEFAULT_MODEL),
            "calling Gemini generateContent API"
        );
        let response = post_json_with_headers(
            self.transport.as_ref(),
            url,
            self.build_headers(),
            config.timeout,
            &body,
        )
        .await?;
        let text = ensure_success(self.name(), response)?;
        map_response(self.name(), &text)
    }

    fn name(&self) -> &'static str {
        "google_gemini"
    }
}

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::config::LLMConfig;
use crate::error::LLMError;
use crate::http::{DynHttpTransport, post_json_with_headers};
use crate::provider::{LLMProvider, ensure_success};
use crate::types::{GenerateRequest, GenerateResponse};

use super::request::build_openai_body;
use super::response::map_response;

const ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI Chat Completions provider.
pub struct OpenAiProvider {
    transport: DynHttpTransport,
}

impl OpenAiProvider {
    /// Creates a provider bound to the public OpenAI endpoint.
    pub fn new(transport: DynHttpTransport) -> Self {
        Self { transport }
    }

    fn build_headers(&self, config: &LLMConfig) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.credential.as_deref().unwrap_or_default()),
        );
        headers
    }

    fn resolve_model<'a>(&self, config: &'a LLMConfig) -> &'a str {
        config.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

#[async_trait]
impl LLMProvider for OpenAiProvider {
    async fn generate(
        &self,
        request: &GenerateRequest,
        config: &LLMConfig,
    ) -> Result<GenerateResponse, LLMError> {
        let model = self.resolve_model(config);
        let body = build_openai_body(request, config, model);
        debug!(model, "calling OpenAI Chat Completions API");
        let response = post_json_with_headers(
            self.transport.as_ref(),
            ENDPOINT,
            self.build_headers(config),
            config.timeout,
            &body,
        )
        .await?;
        let text = ensure_success(self.name(), response)?;
        map_response(self.name(), &text)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

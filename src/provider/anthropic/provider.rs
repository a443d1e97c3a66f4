use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::config::LLMConfig;
use crate::error::LLMError;
use crate::http::{DynHttpTransport, post_json_with_headers};
use crate::provider::{LLMProvider, ensure_success};
use crate::types::{GenerateRequest, GenerateResponse};

use super::request::build_anthropic_body;
use super::response::map_response;

const ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";
const API_VERSION: &str = "2023-06-01";

/// Anthropic Messages Provider（Claude 系列）
///
/// 凭证与模型不在构造时固定 每次调用从传入的 LLMConfig 读取
pub struct AnthropicProvider {
    transport: DynHttpTransport,
}

impl AnthropicProvider {
    /// 创建 Provider
    pub fn new(transport: DynHttpTransport) -> Self {
        Self { transport }
    }

    fn build_headers(&self, config: &LLMConfig) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert(
            "x-api-key".to_string(),
            config.credential.clone().unwrap_or_default(),
        );
        headers.insert("anthropic-version".to_string(), API_VERSION.to_string());
        headers
    }

    fn resolve_model<'a>(&self, config: &'a LLMConfig) -> &'a str {
        config.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

#[async_trait]
impl LLMProvider for AnthropicProvider {
    async fn generate(
        &self,
        request: &GenerateRequest,
        config: &LLMConfig,
    ) -> Result<GenerateResponse, LLMError> {
        let model = self.resolve_model(config);
        let body = build_anthropic_body(request, config, model);
        debug!(model, "calling Anthropic Messages API");
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
        "anthropic"
    }
}

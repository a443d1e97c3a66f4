use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::config::LLMConfig;
use crate::error::LLMError;
use crate::http::{DynHttpTransport, post_json_with_headers};
use crate::provider::{LLMProvider, ensure_success};
use crate::types::{GenerateRequest, GenerateResponse};

use super::request::build_ollama_body;
use super::response::map_response;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama2";

/// Ollama Provider（本地推理 无需鉴权）
///
/// 配置里的凭证字段被复用为端点覆盖 以 `http` 开头时整体作为 base URL
/// 其余情况一律使用本机默认端点
pub struct OllamaProvider {
    transport: DynHttpTransport,
}

impl OllamaProvider {
    /// 创建 Provider
    pub fn new(transport: DynHttpTransport) -> Self {
        Self { transport }
    }

    fn endpoint(&self, config: &LLMConfig) -> String {
        let base = match &config.credential {
            Some(credential) if credential.starts_with("http") => credential.as_str(),
            _ => DEFAULT_BASE_URL,
        };
        format!("{}/api/generate", base.trim_end_matches('/'))
    }

    fn build_headers(&self) -> HashMap<String, String> {
        HashMap::from([("Content-Type".to_string(), "application/json".to_string())])
    }

    fn resolve_model<'a>(&self, config: &'a LLMConfig) -> &'a str {
        config.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

#[async_trait]
impl LLMProvider for OllamaProvider {
    async fn generate(
        &self,
        request: &GenerateRequest,
        config: &LLMConfig,
    ) -> Result<GenerateResponse, LLMError> {
        let url = self.endpoint(config);
        let model = self.resolve_model(config);
        let body = build_ollama_body(request, config, model);
        debug!(url = %url, "calling Ollama generate API");
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
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::http::{HttpRequest, HttpResponse, HttpTransport};

    use super::*;

    struct UnusedTransport;

    #[async_trait]
    impl HttpTransport for UnusedTransport {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, LLMError> {
            panic!("send should not be called");
        }
    }

    fn provider() -> OllamaProvider {
        OllamaProvider::new(Arc::new(UnusedTransport))
    }

    /// 凭证缺省时走本机默认端点
    #[test]
    fn endpoint_defaults_to_localhost() {
        let config = LLMConfig::default();
        assert_eq!(
            provider().endpoint(&config),
            "http://localhost:11434/api/generate"
        );
    }

    /// 以 http 开头的凭证整体作为 base URL
    #[test]
    fn http_credential_overrides_base_url() {
        let config = LLMConfig {
            credential: Some("http://gpu-box:8080/".to_string()),
            ..LLMConfig::default()
        };
        assert_eq!(provider().endpoint(&config), "http://gpu-box:8080/api/generate");
    }

    /// 模型缺省时回落到 llama2
    #[test]
    fn model_falls_back_to_default() {
        assert_eq!(provider().resolve_model(&LLMConfig::default()), "llama2");

        let config = LLMConfig {
            model: Some("mistral".to_string()),
            ..LLMConfig::default()
        };
        assert_eq!(provider().resolve_model(&config), "mistral");
    }

    /// 不像 URL 的凭证被忽略
    #[test]
    fn non_url_credential_is_ignored() {
        let config = LLMConfig {
            credential: Some("sk-not-a-url".to_string()),
            ..LLMConfig::default()
        };
        assert_eq!(
            provider().endpoint(&config),
            "http://localhost:11434/api/generate"
        );
    }
}

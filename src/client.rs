use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::LLMConfig;
use crate::error::LLMError;
use crate::http::DynHttpTransport;
use crate::http::reqwest::default_dyn_transport;
use crate::provider::DynProvider;
use crate::provider::anthropic::AnthropicProvider;
use crate::provider::google_gemini::GoogleGeminiProvider;
use crate::provider::ollama::OllamaProvider;
use crate::provider::openai::OpenAiProvider;
use crate::types::{GenerateRequest, GenerateResponse};

/// 供应商类型 Custom 表示由调用方自带 Provider 实现
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Anthropic,
    GoogleGemini,
    Ollama,
    OpenAi,
    Custom,
}

/// LLM 调用入口 持有选定的 Provider 与一份客户端级配置
pub struct LLMClient {
    provider: DynProvider,
    config: LLMConfig,
}

impl fmt::Debug for LLMClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LLMClient")
            .field("provider", &self.provider.name())
            .field("config", &self.config)
            .finish()
    }
}

impl LLMClient {
    /// 创建 Builder 选择后端并组装配置
    pub fn builder() -> LLMClientBuilder {
        LLMClientBuilder::default()
    }

    /// 以纯文本提示词发起一次生成 返回提取出的文本
    pub async fn generate_text(&self, prompt: impl Into<String>) -> Result<String, LLMError> {
        let request = GenerateRequest::new(prompt);
        let response = self.provider.generate(&request, &self.config).await?;
        Ok(response.text)
    }

    /// 以完整请求对象发起一次生成 支持请求级覆盖 返回归一化的完整响应
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, LLMError> {
        self.provider.generate(request, &self.config).await
    }

    /// 当前生效的客户端级配置
    pub fn config(&self) -> &LLMConfig {
        &self.config
    }

    /// 当前选定的 Provider 名称
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}

/// 负责选择 Provider 并组装配置的 Builder
#[derive(Default)]
pub struct LLMClientBuilder {
    kind: Option<ProviderKind>,
    custom_provider: Option<DynProvider>,
    transport: Option<DynHttpTransport>,
    config: Option<LLMConfig>,
    credential: Option<String>,
    model: Option<String>,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
    timeout: Option<Duration>,
}

impl LLMClientBuilder {
    /// 选择内置后端
    pub fn provider(mut self, kind: ProviderKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// 注册调用方自带的 Provider 同时将类型切换为 Custom
    pub fn custom_provider(mut self, provider: DynProvider) -> Self {
        self.kind = Some(ProviderKind::Custom);
        self.custom_provider = Some(provider);
        self
    }

    /// API 凭证 对 Ollama 可传入以 http 开头的 base URL
    pub fn credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// 模型名称
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// 默认采样温度
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// 默认输出 token 上限
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    /// 单次调用超时
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// 直接提供完整配置 设置后单字段设置将被忽略
    pub fn config(mut self, config: LLMConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// 注入自定义 HttpTransport 主要用于测试或代理场景
    pub fn transport(mut self, transport: DynHttpTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// 构建 LLMClient 未选择 Provider 或 Custom 缺实现时报配置错误
    pub fn build(self) -> Result<LLMClient, LLMError> {
        let LLMClientBuilder {
            kind,
            custom_provider,
            transport,
            config,
            credential,
            model,
            temperature,
            max_output_tokens,
            timeout,
        } = self;

        let config = config.unwrap_or_else(|| {
            let mut assembled = LLMConfig::default();
            if credential.is_some() {
                assembled.credential = credential;
            }
            if model.is_some() {
                assembled.model = model;
            }
            if temperature.is_some() {
                assembled.temperature = temperature;
            }
            if max_output_tokens.is_some() {
                assembled.max_output_tokens = max_output_tokens;
            }
            if let Some(timeout) = timeout {
                assembled.timeout = timeout;
            }
            assembled
        });

        let Some(kind) = kind else {
            return Err(LLMError::config("provider kind must be set"));
        };

        let provider: DynProvider = match kind {
            ProviderKind::Anthropic => {
                Arc::new(AnthropicProvider::new(resolve_transport(transport)?))
            }
            ProviderKind::GoogleGemini => {
                Arc::new(GoogleGeminiProvider::new(resolve_transport(transport)?))
            }
            ProviderKind::Ollama => Arc::new(OllamaProvider::new(resolve_transport(transport)?)),
            ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(resolve_transport(transport)?)),
            ProviderKind::Custom => custom_provider.ok_or_else(|| {
                LLMError::config("custom provider implementation must be supplied for Custom kind")
            })?,
        };

        Ok(LLMClient { provider, config })
    }
}

fn resolve_transport(transport: Option<DynHttpTransport>) -> Result<DynHttpTransport, LLMError> {
    match transport {
        Some(transport) => Ok(transport),
        None => default_dyn_transport(),
    }
}

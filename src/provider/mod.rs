use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::LLMConfig;
use crate::error::LLMError;
use crate::http::HttpResponse;
use crate::types::{GenerateRequest, GenerateResponse};

pub mod anthropic;
pub mod google_gemini;
pub mod ollama;
pub mod openai;

/// 统一的 Provider Trait 所有后端实现该接口即可接入
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// 发送一次生成请求并等待完整响应 请求级字段优先于配置级默认值
    async fn generate(
        &self,
        request: &GenerateRequest,
        config: &LLMConfig,
    ) -> Result<GenerateResponse, LLMError>;

    /// 供应商名称
    fn name(&self) -> &'static str;
}

/// 线程安全 Provider
pub type DynProvider = Arc<dyn LLMProvider>;

/// 请求级温度覆盖优先 其次配置级默认值
pub(crate) fn effective_temperature(request: &GenerateRequest, config: &LLMConfig) -> Option<f32> {
    request.temperature.or(config.temperature)
}

/// 请求级 token 上限覆盖优先 其次配置级默认值
pub(crate) fn effective_max_output_tokens(
    request: &GenerateRequest,
    config: &LLMConfig,
) -> Option<u32> {
    request.max_output_tokens.or(config.max_output_tokens)
}

/// 状态码大于等于 400 时报 Api 错误 响应体原样保留
pub(crate) fn ensure_success(
    provider: &'static str,
    response: HttpResponse,
) -> Result<String, LLMError> {
    let status = response.status;
    let text = response.into_string()?;
    if status >= 400 {
        Err(LLMError::api(provider, status, text))
    } else {
        Ok(text)
    }
}

/// 将响应体整体解析为 JSON 对象 解析结果同时作为 metadata 返回给调用方
pub(crate) fn decode_object(
    provider: &'static str,
    body: &str,
) -> Result<Map<String, Value>, LLMError> {
    serde_json::from_str(body).map_err(|err| {
        LLMError::parse(provider, format!("response body is not a JSON object: {err}"))
    })
}

/// 从原始对象解码出已知结构 字段缺失按 Option 兜底 类型不符报 Parse 错误
pub(crate) fn decode_as<T: DeserializeOwned>(
    provider: &'static str,
    raw: &Map<String, Value>,
) -> Result<T, LLMError> {
    serde_json::from_value(Value::Object(raw.clone()))
        .map_err(|err| LLMError::parse(provider, err.to_string()))
}

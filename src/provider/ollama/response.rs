use serde::Deserialize;

use crate::error::LLMError;
use crate::provider::{decode_as, decode_object};
use crate::types::GenerateResponse;

/// 响应结构 { "response": "...", "done": true, ... } 文本直接位于顶层
#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

/// response 字段缺失时软成功 返回空文本
pub(crate) fn map_response(
    provider: &'static str,
    body: &str,
) -> Result<GenerateResponse, LLMError> {
    let raw = decode_object(provider, body)?;
    let parsed: OllamaGenerateResponse = decode_as(provider, &raw)?;

    Ok(GenerateResponse {
        text: parsed.response.unwrap_or_default(),
        metadata: raw,
    })
}

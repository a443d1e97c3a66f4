use serde::Deserialize;

use crate::error::LLMError;
use crate::provider::{decode_as, decode_object};
use crate::types::GenerateResponse;

/// 响应结构 { "content": [ { "type": "text", "text": "..." } ], ... }
#[derive(Debug, Deserialize)]
struct AnthropicMessageResponse {
    #[serde(default)]
    content: Option<Vec<AnthropicContentBlock>>,
}

#[derive(Debug, Deserialize)]
struct AnthropicContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// content 缺失或为空视为软成功 返回空文本与完整 metadata
pub(crate) fn map_response(
    provider: &'static str,
    body: &str,
) -> Result<GenerateResponse, LLMError> {
    let raw = decode_object(provider, body)?;
    let parsed: AnthropicMessageResponse = decode_as(provider, &raw)?;

    let text = parsed
        .content
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|block| block.text)
        .unwrap_or_default();

    Ok(GenerateResponse {
        text,
        metadata: raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_text_block() {
        let body = r#"{
            "id": "msg_01",
            "model": "claude-3-sonnet-20240229",
            "content": [
                { "type": "text", "text": "Lines of code align" },
                { "type": "text", "text": "second block is ignored" }
            ],
            "usage": { "input_tokens": 10, "output_tokens": 17 }
        }"#;

        let response = map_response("anthropic", body).expect("response");
        assert_eq!(response.text, "Lines of code align");
        assert_eq!(
            response.metadata["usage"]["output_tokens"],
            serde_json::json!(17)
        );
    }

    /// content 为空列表时软成功
    #[test]
    fn empty_content_yields_empty_text() {
        let body = r#"{ "id": "msg_02", "content": [] }"#;
        let response = map_response("anthropic", body).expect("response");
        assert_eq!(response.text, "");
        assert_eq!(response.metadata["id"], serde_json::json!("msg_02"));
    }

    /// content 字段整体缺失时同样软成功
    #[test]
    fn missing_content_yields_empty_text() {
        let body = r#"{ "id": "msg_03", "stop_reason": "end_turn" }"#;
        let response = map_response("anthropic", body).expect("response");
        assert_eq!(response.text, "");
    }

    #[test]
    fn first_block_without_text_yields_empty_text() {
        let body = r#"{ "content": [ { "type": "tool_use", "name": "calculator" } ] }"#;
        let response = map_response("anthropic", body).expect("response");
        assert_eq!(response.text, "");
    }

    /// content 类型不符时报 Parse 错误而不是软成功
    #[test]
    fn non_array_content_is_a_parse_error() {
        let body = r#"{ "content": "not-a-list" }"#;
        match map_response("anthropic", body) {
            Err(LLMError::Parse { provider, .. }) => assert_eq!(provider, "anthropic"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

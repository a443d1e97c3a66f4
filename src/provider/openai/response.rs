use serde::Deserialize;

use crate::error::LLMError;
use crate::provider::{decode_as, decode_object};
use crate::types::GenerateResponse;

/// Response shape `{ "choices": [ { "message": { "content": ... } } ] }`.
#[derive(Debug, Deserialize)]
struct OpenAiChatResponse {
    #[serde(default)]
    choices: Option<Vec<OpenAiChoice>>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    #[serde(default)]
    message: Option<OpenAiMessage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Walks `choices[0].message.content`, treating an absent or empty level as a
/// well-formed reply without a usable completion.
pub(crate) fn map_response(
    provider: &'static str,
    body: &str,
) -> Result<GenerateResponse, LLMError> {
    let raw = decode_object(provider, body)?;
    let parsed: OpenAiChatResponse = decode_as(provider, &raw)?;

    let text = parsed
        .choices
        .and_then(|choices| choices.into_iter().next())
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
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
    fn extracts_content_of_first_choice() {
        let body = r#"{
            "id": "chatcmpl-1",
            "model": "gpt-3.5-turbo",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Why do Java developers wear glasses? They can't C#." }, "finish_reason": "stop" }
            ],
            "usage": { "prompt_tokens": 9, "completion_tokens": 15, "total_tokens": 24 }
        }"#;

        let response = map_response("openai", body).expect("response");
        assert_eq!(
            response.text,
            "Why do Java developers wear glasses? They can't C#."
        );
        assert_eq!(
            response.metadata["usage"]["total_tokens"],
            serde_json::json!(24)
        );
    }

    /// choices 为空时软成功
    #[test]
    fn empty_choices_yield_empty_text() {
        let body = r#"{ "id": "chatcmpl-2", "choices": [] }"#;
        let response = map_response("openai", body).expect("response");
        assert_eq!(response.text, "");
        assert_eq!(response.metadata["id"], serde_json::json!("chatcmpl-2"));
    }

    #[test]
    fn missing_message_content_yields_empty_text() {
        let body = r#"{ "choices": [ { "message": { "role": "assistant" } } ] }"#;
        let response = map_response("openai", body).expect("response");
        assert_eq!(response.text, "");
    }

    /// content 类型不符时报 Parse 错误
    #[test]
    fn non_string_content_is_a_parse_error() {
        let body = r#"{ "choices": [ { "message": { "content": [ "chunked" ] } } ] }"#;
        match map_response("openai", body) {
            Err(LLMError::Parse { provider, .. }) => assert_eq!(provider, "openai"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

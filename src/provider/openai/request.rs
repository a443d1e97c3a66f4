use serde_json::{Map, Value, json};

use crate::config::LLMConfig;
use crate::provider::{effective_max_output_tokens, effective_temperature};
use crate::types::GenerateRequest;

/// Builds the Chat Completions payload: a single user message plus whatever
/// sampling fields resolve through the request-then-config fallback.
pub(crate) fn build_openai_body(
    request: &GenerateRequest,
    config: &LLMConfig,
    model: &str,
) -> Value {
    let mut body = Map::new();
    body.insert("model".to_string(), Value::String(model.to_string()));
    body.insert(
        "messages".to_string(),
        json!([{ "role": "user", "content": request.prompt }]),
    );

    if let Some(temperature) = effective_temperature(request, config) {
        body.insert("temperature".to_string(), Value::from(temperature));
    }
    if let Some(max_tokens) = effective_max_output_tokens(request, config) {
        body.insert("max_tokens".to_string(), Value::from(max_tokens));
    }

    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 最简请求体 单条 user 消息
    #[test]
    fn build_body_with_single_user_message() {
        let request = GenerateRequest::new("Tell me a joke.");
        let config = LLMConfig {
            temperature: None,
            ..LLMConfig::default()
        };

        let body = build_openai_body(&request, &config, "gpt-3.5-turbo");

        assert_eq!(body["model"], json!("gpt-3.5-turbo"));
        let messages = body["messages"].as_array().expect("messages array");
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0],
            json!({ "role": "user", "content": "Tell me a joke." })
        );
        assert!(body.get("temperature").is_none());
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn sampling_fields_resolve_request_first() {
        let request = GenerateRequest::new("hi").with_temperature(0.15);
        let config = LLMConfig {
            temperature: Some(0.9),
            max_output_tokens: Some(256),
            ..LLMConfig::default()
        };

        let body = build_openai_body(&request, &config, "gpt-3.5-turbo");
        assert_eq!(body["temperature"], json!(0.15f32));
        assert_eq!(body["max_tokens"], json!(256));
    }

    #[test]
    fn default_temperature_flows_from_config() {
        let request = GenerateRequest::new("hi");
        let config = LLMConfig::default();

        let body = build_openai_body(&request, &config, "gpt-3.5-turbo");
        assert_eq!(body["temperature"], json!(0.7f32));
    }
}

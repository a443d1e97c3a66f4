use serde_json::{Map, Value, json};

use crate::config::LLMConfig;
use crate::provider::{effective_max_output_tokens, effective_temperature};
use crate::types::GenerateRequest;

/// Builds the `generateContent` payload.
///
/// `generationConfig` is resolved field by field, the request override first and the
/// configured default second. The object is omitted entirely when neither level
/// provides a value, leaving sampling to the backend.
pub(crate) fn build_gemini_body(request: &GenerateRequest, config: &LLMConfig) -> Value {
    let mut body = Map::new();
    body.insert(
        "contents".to_string(),
        json!([{ "parts": [{ "text": request.prompt }] }]),
    );

    let mut generation_config = Map::new();
    if let Some(temperature) = effective_temperature(request, config) {
        generation_config.insert("temperature".to_string(), Value::from(temperature));
    }
    if let Some(max_tokens) = effective_max_output_tokens(request, config) {
        generation_config.insert("maxOutputTokens".to_string(), Value::from(max_tokens));
    }
    if !generation_config.is_empty() {
        body.insert(
            "generationConfig".to_string(),
            Value::Object(generation_config),
        );
    }

    Value::Object(body)
}

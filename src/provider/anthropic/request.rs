use serde_json::{Map, Value, json};

use crate::config::LLMConfig;
use crate::provider::{effective_max_output_tokens, effective_temperature};
use crate::types::GenerateRequest;

/// Anthropic 要求 max_tokens 必填 请求与配置均未给出时使用该值
const FALLBACK_MAX_TOKENS: u32 = 1024;

pub(crate) fn build_anthropic_body(
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

    let max_tokens = effective_max_output_tokens(request, config).unwrap_or(FALLBACK_MAX_TOKENS);
    body.insert("max_tokens".to_string(), Value::from(max_tokens));

    if let Some(temperature) = effective_temperature(request, config) {
        body.insert("temperature".to_string(), Value::from(temperature));
    }

    Value::Object(body)
}

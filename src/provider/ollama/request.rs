use serde_json::{Map, Value};

use crate::config::LLMConfig;
use crate::provider::{effective_max_output_tokens, effective_temperature};
use crate::types::GenerateRequest;

/// 构建 /api/generate 请求体 stream 恒为 false 保证单次完整响应
pub(crate) fn build_ollama_body(
    request: &GenerateRequest,
    config: &LLMConfig,
    model: &str,
) -> Value {
    let mut body = Map::new();
    body.insert("model".to_string(), Value::String(model.to_string()));
    body.insert("prompt".to_string(), Value::String(request.prompt.clone()));
    body.insert("stream".to_string(), Value::Bool(false));

    let mut options = Map::new();
    if let Some(temperature) = effective_temperature(request, config) {
        options.insert("temperature".to_string(), Value::from(temperature));
    }
    if let Some(max_tokens) = effective_max_output_tokens(request, config) {
        options.insert("num_predict".to_string(), Value::from(max_tokens));
    }
    if !options.is_empty() {
        body.insert("options".to_string(), Value::Object(options));
    }

    Value::Object(body)
}

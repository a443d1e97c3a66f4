use serde::Deserialize;

use crate::error::LLMError;
use crate::provider::{decode_as, decode_object};
use crate::types::GenerateResponse;

/// Response shape `{ "candidates": [ { "content": { "parts": [ { "text": ... } ] } } ] }`.
#[derive(Debug, Deserialize)]
struct GeminiGenerateContentResponse {
    #[serde(default)]
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}

/// Walks `candidates[0].content.parts[0].text`, treating an absent or empty level
/// as a well-formed reply without a usable candidate.
pub(crate) fn map_response(
    provider: &'static str,
    body: &str,
) -> Result<GenerateResponse, LLMError> {
    let raw = decode_object(provider, body)?;
    let parsed: GeminiGenerateContentResponse = decode_as(provider, &raw)?;

    let text = parsed
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .and_then(|parts| parts.into_iter().next())
        .and_then(|part| part.text)
        .unwrap_or_default();

    Ok(GenerateResponse {
        text,
        metadata: raw,
    })
}

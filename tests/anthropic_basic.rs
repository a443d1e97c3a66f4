use std::env;

use dotenvy::dotenv;
use tsunagi_llm::types::GenerateRequest;
use tsunagi_llm::{LLMClient, ProviderKind};

/// Connectivity test for basic Anthropic text generation.
#[tokio::test]
#[ignore = "requires a valid Anthropic API key"]
async fn anthropic_basic_text_generation_live() {
    dotenv().ok();
    let Some(client) = build_client_from_env() else {
        return;
    };

    let request =
        GenerateRequest::new("Please introduce yourself briefly.").with_max_output_tokens(256);
    let response = client
        .generate(&request)
        .await
        .expect("Anthropic text generation should succeed");
    assert!(
        !response.text.trim().is_empty(),
        "assistant should return text content"
    );
    assert!(
        response.metadata.contains_key("usage"),
        "response metadata should carry token usage"
    );
}

/// Connectivity test that sampling parameters are accepted by the live endpoint.
#[tokio::test]
#[ignore = "requires a valid Anthropic API key"]
async fn anthropic_sampling_parameters_live() {
    dotenv().ok();
    let Some(client) = build_client_from_env() else {
        return;
    };

    let request = GenerateRequest::new("Reply with the single word: pong")
        .with_temperature(0.0)
        .with_max_output_tokens(16);
    let response = client
        .generate(&request)
        .await
        .expect("request with explicit sampling parameters should succeed");
    assert!(
        response.text.to_lowercase().contains("pong"),
        "deterministic prompt should echo 'pong'; actual: {}",
        response.text
    );
}

fn build_client_from_env() -> Option<LLMClient> {
    let Some(api_key) = load_env_var("ANTHROPIC_API_KEY") else {
        eprintln!("skip anthropic tests: ANTHROPIC_API_KEY missing");
        return None;
    };

    let mut builder = LLMClient::builder()
        .provider(ProviderKind::Anthropic)
        .credential(api_key);
    if let Some(model) = load_env_var("ANTHROPIC_MODEL") {
        builder = builder.model(model);
    }
    Some(builder.build().expect("Anthropic client should build"))
}

fn load_env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

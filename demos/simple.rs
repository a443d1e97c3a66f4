use std::env;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;
use tsunagi_llm::{LLMClient, LLMClientBuilder, ProviderKind};

/// Walks through all built-in backends with one prompt each. Backends whose
/// credentials are missing from the environment are skipped, and a backend
/// that fails (for example no local Ollama daemon) only prints the error.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Ollama runs locally and needs no credential.
    let ollama = LLMClient::builder()
        .provider(ProviderKind::Ollama)
        .model("llama2")
        .build()?;
    run(&ollama, "Why is the sky blue?").await;

    run_keyed(
        ProviderKind::GoogleGemini,
        "GEMINI_API_KEY",
        "Explain quantum computing in 1 sentence.",
        |builder| builder,
    )
    .await?;

    run_keyed(
        ProviderKind::OpenAi,
        "OPENAI_API_KEY",
        "Tell me a Rust joke.",
        |builder| builder.model("gpt-4o-mini"),
    )
    .await?;

    run_keyed(
        ProviderKind::Anthropic,
        "ANTHROPIC_API_KEY",
        "Haiku about coding.",
        |builder| builder.max_output_tokens(200),
    )
    .await?;

    Ok(())
}

async fn run_keyed(
    kind: ProviderKind,
    env_key: &str,
    prompt: &str,
    tune: impl FnOnce(LLMClientBuilder) -> LLMClientBuilder,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(credential) = env::var(env_key).ok().filter(|value| !value.is_empty()) else {
        println!("{env_key} not set, skipping {kind:?}\n");
        return Ok(());
    };
    let builder = LLMClient::builder().provider(kind).credential(credential);
    let client = tune(builder).build()?;
    run(&client, prompt).await;
    Ok(())
}

async fn run(client: &LLMClient, prompt: &str) {
    println!("[{}] {prompt}", client.provider_name());
    match client.generate_text(prompt).await {
        Ok(text) => println!("{text}\n"),
        Err(err) => println!("{} request failed: {err}\n", client.provider_name()),
    }
}

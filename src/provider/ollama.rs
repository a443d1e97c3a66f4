//! Ollama 本地推理后端适配

mod provider;
mod request;
mod response;

pub use provider::OllamaProvider;

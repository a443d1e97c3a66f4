//! LLM 多后端统一调用库 一次调用 一段文本进 一段文本出

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod provider;
pub mod types;

pub use client::{LLMClient, LLMClientBuilder, ProviderKind};
pub use config::LLMConfig;
pub use error::LLMError;
pub use provider::{DynProvider, LLMProvider};
pub use types::*;

//! Anthropic Messages 后端适配

mod provider;
mod request;
mod response;

pub use provider::AnthropicProvider;

//! OpenAI Chat Completions backend adapter.

mod provider;
mod request;
mod response;

pub use provider::OpenAiProvider;

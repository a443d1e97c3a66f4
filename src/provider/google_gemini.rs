//! Google Gemini generateContent backend adapter.

mod provider;
mod request;
mod response;

pub use provider::GoogleGeminiProvider;

//! OpenRouter chat-completions provider.

mod client;
mod types;

pub use client::{OpenRouterProvider, DEFAULT_MODEL};

//! Groq chat-completions provider.

mod client;
mod types;

pub use client::{GroqProvider, DEFAULT_MODEL};

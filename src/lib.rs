//! AI trend article generator for a Hugo static site.
//!
//! Picks a topic, acquires a short Markdown article from a prioritized chain
//! of LLM providers (Groq, then OpenRouter) with a deterministic local
//! fallback, pairs it with a generated or placeholder image, and writes the
//! result as a Hugo post with front matter.

pub mod acquirer;
pub mod chain;
pub mod cli;
pub mod error;
pub mod fallback;
pub mod image;
pub mod post;
pub mod provider;
pub mod providers;
pub mod topic;

// Re-export core types for easy usage
pub use acquirer::{ContentAcquirer, Generation, FALLBACK_PROVIDER, MIN_ARTICLE_CHARS};
pub use error::Error;
pub use image::{ImageAcquirer, ImageSource};
pub use provider::TextGenerator;
pub use providers::{GroqProvider, OpenRouterProvider, TelegramImageBot};

//! Provider chain assembly from environment credentials.
//!
//! The acquirers know nothing about credentials; this module reads whichever
//! API keys are present and builds the ordered chains from them. A missing
//! credential just shortens the chain.

use crate::image::ImageSource;
use crate::provider::TextGenerator;
use crate::providers::{groq, openrouter, GroqProvider, OpenRouterProvider, TelegramImageBot};
use std::env;
use tracing::{info, warn};

/// True when the value looks like a real credential rather than a template
/// placeholder left in a `.env` file.
fn usable(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && !(trimmed.starts_with("your_") && trimmed.ends_with("_here"))
}

fn credential(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .filter(|value| usable(value))
        .map(|value| value.trim().to_string())
}

fn model(var: &str, default: &str) -> String {
    env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Assemble the text provider chain in priority order: Groq, then
/// OpenRouter. An empty chain is valid and means every article comes from
/// the local template.
pub fn text_chain_from_env() -> Vec<Box<dyn TextGenerator>> {
    let mut chain: Vec<Box<dyn TextGenerator>> = Vec::new();

    match credential("GROQ_API_KEY") {
        Some(key) => match GroqProvider::new(key, model("GROQ_MODEL", groq::DEFAULT_MODEL)) {
            Ok(provider) => {
                info!("GROQ_API_KEY set, groq added to the chain");
                chain.push(Box::new(provider));
            }
            Err(err) => warn!(error = %err, "failed to build groq client"),
        },
        None => info!("GROQ_API_KEY not set, skipping groq"),
    }

    match credential("OPENROUTER_API_KEY") {
        Some(key) => {
            match OpenRouterProvider::new(key, model("OPENROUTER_MODEL", openrouter::DEFAULT_MODEL))
            {
                Ok(provider) => {
                    info!("OPENROUTER_API_KEY set, openrouter added to the chain");
                    chain.push(Box::new(provider));
                }
                Err(err) => warn!(error = %err, "failed to build openrouter client"),
            }
        }
        None => info!("OPENROUTER_API_KEY not set, skipping openrouter"),
    }

    chain
}

/// Assemble the image source chain. Both Telegram variables are required
/// for the bot; otherwise only the local placeholder is available.
pub fn image_chain_from_env() -> Vec<Box<dyn ImageSource>> {
    let mut chain: Vec<Box<dyn ImageSource>> = Vec::new();

    match (
        credential("TELEGRAM_BOT_TOKEN"),
        credential("TELEGRAM_CHAT_ID"),
    ) {
        (Some(token), Some(chat_id)) => match TelegramImageBot::new(token, chat_id) {
            Ok(bot) => {
                info!("telegram credentials set, bot added to the image chain");
                chain.push(Box::new(bot));
            }
            Err(err) => warn!(error = %err, "failed to build telegram client"),
        },
        _ => info!("telegram credentials not set, placeholder images only"),
    }

    chain
}

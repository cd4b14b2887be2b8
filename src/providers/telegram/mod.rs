//! Telegram bot image-generation provider.

mod client;
mod types;

pub use client::TelegramImageBot;

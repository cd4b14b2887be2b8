use serde::{Deserialize, Serialize};

/// Telegram `sendMessage` request body.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: String,
}

/// Minimal Telegram API response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}

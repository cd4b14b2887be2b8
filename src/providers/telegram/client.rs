use super::types::{ApiResponse, SendMessage};
use crate::image::ImageSource;
use crate::Error;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

const TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

/// How long the bot is given to publish the generated image.
const DEFAULT_PUBLISH_WAIT: Duration = Duration::from_secs(40);

/// Image provider that asks a Telegram bot to generate a picture.
///
/// The bot watches the chat for `/generate` commands and commits the result
/// to the site repository under the expected path, so this client only sends
/// the request and waits out the publish delay.
pub struct TelegramImageBot {
    client: Client,
    bot_token: String,
    chat_id: String,
    base_url: String,
    publish_wait: Duration,
}

impl TelegramImageBot {
    /// Create a new Telegram image bot client.
    pub fn new(bot_token: String, chat_id: String) -> Result<Self, Error> {
        Self::new_with_base_url(bot_token, chat_id, TELEGRAM_BASE_URL.to_string())
    }

    /// Create a new Telegram image bot client with a custom base URL.
    pub fn new_with_base_url(
        bot_token: String,
        chat_id: String,
        base_url: String,
    ) -> Result<Self, Error> {
        let client = Client::builder().timeout(Duration::from_secs(15)).build()?;

        Ok(Self {
            client,
            bot_token,
            chat_id,
            base_url,
            publish_wait: DEFAULT_PUBLISH_WAIT,
        })
    }

    /// Override the publish delay. Tests use a zero wait.
    pub fn with_publish_wait(mut self, wait: Duration) -> Self {
        self.publish_wait = wait;
        self
    }

    fn image_prompt(topic: &str) -> String {
        format!("{topic}, digital art, futuristic, professional, 4k, high quality, trending")
    }
}

#[async_trait::async_trait]
impl ImageSource for TelegramImageBot {
    fn name(&self) -> &str {
        "telegram-bot"
    }

    async fn request_image(&self, topic: &str, slug: &str) -> Result<String, Error> {
        let prompt = Self::image_prompt(topic);
        let message = SendMessage {
            chat_id: self.chat_id.clone(),
            text: format!("/generate {prompt}"),
            parse_mode: "Markdown".to_string(),
        };

        let response = self
            .client
            .post(format!(
                "{}/bot{}/sendMessage",
                self.base_url, self.bot_token
            ))
            .json(&message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            return Err(Error::provider(
                "telegram-bot",
                format!("HTTP {status}: {error_text}"),
            ));
        }

        let body = response.text().await?;
        let parsed: ApiResponse = serde_json::from_str(&body)?;
        if !parsed.ok {
            return Err(Error::provider(
                "telegram-bot",
                parsed
                    .description
                    .unwrap_or_else(|| "request rejected".to_string()),
            ));
        }

        info!(slug, "generation request sent, waiting for the bot to publish");
        tokio::time::sleep(self.publish_wait).await;

        Ok(format!("/images/posts/{slug}.jpg"))
    }
}

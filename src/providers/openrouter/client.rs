use super::types::{ChatMessage, ChatRequest, ChatResponse};
use crate::provider::TextGenerator;
use crate::Error;
use reqwest::Client;
use std::time::Duration;

const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "anthropic/claude-3-sonnet";

/// Referer reported to OpenRouter for request attribution.
const SITE_REFERER: &str = "https://lybra-bee.github.io";

/// OpenRouter provider implementation.
pub struct OpenRouterProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenRouterProvider {
    /// Create a new OpenRouter provider.
    pub fn new(api_key: String, model: String) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, model, OPENROUTER_BASE_URL.to_string())
    }

    /// Create a new OpenRouter provider with a custom base URL.
    pub fn new_with_base_url(
        api_key: String,
        model: String,
        base_url: String,
    ) -> Result<Self, Error> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url,
        })
    }

    fn article_prompt(topic: &str) -> String {
        format!(
            "Напиши развернутую статью на тему: '{topic}' на русском языке.\n\
             \n\
             Требования:\n\
             - Формат Markdown\n\
             - 500-800 слов\n\
             - Структурированный контент с заголовками разных уровней\n\
             - Практические примеры и case studies\n\
             - Профессиональный тон написания\n\
             - Актуальные данные и статистика 2025 года\n\
             - Выводы и рекомендации для читателей\n\
             - Технические детали и особенности реализации\n"
        )
    }

    fn build_request(&self, topic: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(Self::article_prompt(topic))],
            max_tokens: 2500,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for OpenRouterProvider {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn generate_article(&self, topic: &str) -> Result<String, Error> {
        let request = self.build_request(topic);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", SITE_REFERER)
            .header("X-Title", "AI Content Generator")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            return Err(Error::provider(
                "openrouter",
                format!("HTTP {status}: {error_text}"),
            ));
        }

        let body = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&body)?;

        if let Some(error) = parsed.error {
            return Err(Error::provider("openrouter", error.message));
        }

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::provider("openrouter", "no choices in response"))?;

        if content.trim().is_empty() {
            return Err(Error::empty_content("openrouter"));
        }

        Ok(content)
    }
}

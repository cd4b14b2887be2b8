use super::types::{ChatMessage, ChatRequest, ChatResponse};
use crate::provider::TextGenerator;
use crate::Error;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";

/// Groq provider implementation.
pub struct GroqProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GroqProvider {
    /// Create a new Groq provider.
    pub fn new(api_key: String, model: String) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, model, GROQ_BASE_URL.to_string())
    }

    /// Create a new Groq provider with a custom base URL.
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
             - 400-600 слов\n\
             - Структура: введение, основные разделы, заключение\n\
             - Профессиональный стиль написания\n\
             - Конкретные примеры и кейсы использования\n\
             - Актуальная информация на 2025 год\n\
             - Используй подзаголовки ## и ###\n\
             - Практические рекомендации и выводы\n"
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
impl TextGenerator for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn generate_article(&self, topic: &str) -> Result<String, Error> {
        let request = self.build_request(topic);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            return Err(Error::provider(
                "groq",
                format!("HTTP {status}: {error_text}"),
            ));
        }

        let body = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage {
            debug!(total_tokens = usage.total_tokens, "groq usage");
        }

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::provider("groq", "no choices in response"))?;

        if content.trim().is_empty() {
            return Err(Error::empty_content("groq"));
        }

        Ok(content)
    }
}

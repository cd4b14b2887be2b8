//! HTTP-level tests for the provider clients against mock servers.

use serde_json::json;
use std::time::Duration;
use trendpress::image::ImageSource;
use trendpress::{Error, GroqProvider, OpenRouterProvider, TelegramImageBot, TextGenerator};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Chat-completions response body with a single choice.
fn chat_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ],
        "usage": { "total_tokens": 512 }
    })
}

#[tokio::test]
async fn groq_returns_the_article_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(
            json!({ "model": "llama-3.1-70b-versatile" }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("# Статья\n\nТекст.")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GroqProvider::new_with_base_url(
        "test-key".to_string(),
        "llama-3.1-70b-versatile".to_string(),
        server.uri(),
    )
    .unwrap();

    let text = provider.generate_article("Edge AI").await.unwrap();
    assert!(text.contains("Статья"));
}

#[tokio::test]
async fn groq_request_carries_the_topic_in_the_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GroqProvider::new_with_base_url(
        "test-key".to_string(),
        "llama-3.1-70b-versatile".to_string(),
        server.uri(),
    )
    .unwrap();

    provider
        .generate_article("Квантовые вычисления")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["messages"][0]["content"].as_str().unwrap();
    assert!(prompt.contains("Квантовые вычисления"));
    assert_eq!(body["max_tokens"], 2500);
}

#[tokio::test]
async fn groq_http_error_is_a_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let provider = GroqProvider::new_with_base_url(
        "test-key".to_string(),
        "llama-3.1-70b-versatile".to_string(),
        server.uri(),
    )
    .unwrap();

    let err = provider.generate_article("Edge AI").await.unwrap_err();
    match err {
        Error::Provider { provider, message } => {
            assert_eq!(provider, "groq");
            assert!(message.contains("500"));
            assert!(message.contains("upstream down"));
        }
        other => panic!("expected a provider error, got {other}"),
    }
}

#[tokio::test]
async fn groq_malformed_body_is_a_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let provider = GroqProvider::new_with_base_url(
        "test-key".to_string(),
        "llama-3.1-70b-versatile".to_string(),
        server.uri(),
    )
    .unwrap();

    let err = provider.generate_article("Edge AI").await.unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[tokio::test]
async fn groq_empty_content_is_reported_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("   ")))
        .mount(&server)
        .await;

    let provider = GroqProvider::new_with_base_url(
        "test-key".to_string(),
        "llama-3.1-70b-versatile".to_string(),
        server.uri(),
    )
    .unwrap();

    let err = provider.generate_article("Edge AI").await.unwrap_err();
    assert!(matches!(err, Error::EmptyContent { .. }));
}

#[tokio::test]
async fn openrouter_sends_attribution_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer or-key"))
        .and(header("X-Title", "AI Content Generator"))
        .and(header("HTTP-Referer", "https://lybra-bee.github.io"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("# Обзор\n\nТекст.")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenRouterProvider::new_with_base_url(
        "or-key".to_string(),
        "anthropic/claude-3-sonnet".to_string(),
        server.uri(),
    )
    .unwrap();

    let text = provider.generate_article("Generative AI").await.unwrap();
    assert!(text.contains("Обзор"));
}

#[tokio::test]
async fn openrouter_in_body_error_is_a_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "error": { "message": "quota exceeded", "code": 402 } })),
        )
        .mount(&server)
        .await;

    let provider = OpenRouterProvider::new_with_base_url(
        "or-key".to_string(),
        "anthropic/claude-3-sonnet".to_string(),
        server.uri(),
    )
    .unwrap();

    let err = provider.generate_article("Generative AI").await.unwrap_err();
    match err {
        Error::Provider { provider, message } => {
            assert_eq!(provider, "openrouter");
            assert!(message.contains("quota exceeded"));
        }
        other => panic!("expected a provider error, got {other}"),
    }
}

#[tokio::test]
async fn telegram_bot_reports_the_expected_site_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_partial_json(json!({ "chat_id": "42" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let bot = TelegramImageBot::new_with_base_url(
        "123:abc".to_string(),
        "42".to_string(),
        server.uri(),
    )
    .unwrap()
    .with_publish_wait(Duration::ZERO);

    let path = bot.request_image("Edge AI", "edge-ai").await.unwrap();
    assert_eq!(path, "/images/posts/edge-ai.jpg");

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let text = body["text"].as_str().unwrap();
    assert!(text.starts_with("/generate Edge AI"));
}

#[tokio::test]
async fn telegram_rejection_is_a_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ok": false, "description": "chat not found" })),
        )
        .mount(&server)
        .await;

    let bot = TelegramImageBot::new_with_base_url(
        "123:abc".to_string(),
        "42".to_string(),
        server.uri(),
    )
    .unwrap()
    .with_publish_wait(Duration::ZERO);

    let err = bot.request_image("Edge AI", "edge-ai").await.unwrap_err();
    match err {
        Error::Provider { provider, message } => {
            assert_eq!(provider, "telegram-bot");
            assert!(message.contains("chat not found"));
        }
        other => panic!("expected a provider error, got {other}"),
    }
}

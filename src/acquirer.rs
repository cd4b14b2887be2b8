use crate::fallback;
use crate::provider::TextGenerator;
use tracing::{info, warn};

/// Provider name attached to locally generated content.
pub const FALLBACK_PROVIDER: &str = "fallback-generator";

/// Minimum trimmed length for a provider response to count as an article.
pub const MIN_ARTICLE_CHARS: usize = 200;

/// One acquired article, attributed to the source that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub content: String,
    pub provider: String,
}

/// Tries a prioritized chain of text providers until one returns an
/// acceptable article, then stops. Exhaustion lands on the built-in
/// template, so acquisition itself never fails.
pub struct ContentAcquirer {
    providers: Vec<Box<dyn TextGenerator>>,
    min_chars: usize,
}

impl ContentAcquirer {
    /// Create an acquirer over the given provider chain, first entry tried
    /// first, with the default acceptance threshold.
    pub fn new(providers: Vec<Box<dyn TextGenerator>>) -> Self {
        Self {
            providers,
            min_chars: MIN_ARTICLE_CHARS,
        }
    }

    /// Override the acceptance threshold (character count after trimming).
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Number of providers in the chain.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Acquire an article for the topic.
    ///
    /// Providers are invoked strictly in chain order. The first response
    /// whose trimmed length reaches the threshold wins and later providers
    /// are not contacted. Every provider failure is recoverable: it is
    /// logged and the next provider is tried. When the chain is exhausted
    /// (or empty), the deterministic local template is returned under the
    /// [`FALLBACK_PROVIDER`] name.
    pub async fn acquire(&self, topic: &str) -> Generation {
        for provider in &self.providers {
            let name = provider.name();
            match provider.generate_article(topic).await {
                Ok(text) => {
                    let trimmed = text.trim();
                    // Threshold counts characters, not bytes: Cyrillic
                    // articles are two bytes per letter.
                    let chars = trimmed.chars().count();
                    if chars >= self.min_chars {
                        info!(provider = name, chars, "article accepted");
                        return Generation {
                            content: trimmed.to_string(),
                            provider: name.to_string(),
                        };
                    }
                    warn!(
                        provider = name,
                        chars,
                        min = self.min_chars,
                        "response too short, trying next provider"
                    );
                }
                Err(err) => {
                    warn!(provider = name, error = %err, "provider failed, trying next");
                }
            }
        }

        info!("all providers exhausted, using local template");
        Generation {
            content: fallback::fallback_article(topic),
            provider: FALLBACK_PROVIDER.to_string(),
        }
    }
}

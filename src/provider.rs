use crate::Error;

/// A trait for remote text-generation providers.
///
/// Each implementation owns its credentials, its request timeout, and its
/// wire format; the caller only supplies the topic.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync + 'static {
    /// Name used for attribution and logging.
    fn name(&self) -> &str;

    /// Generate a Markdown article for the given topic.
    async fn generate_article(&self, topic: &str) -> Result<String, Error>;
}

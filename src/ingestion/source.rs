use super::types::IngestError;
use async_trait::async_trait;

/// Anything that can produce the full text of a document from a URL.
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, IngestError>;
}

/// Plain HTTP GET through a shared `reqwest::Client`.
///
/// Error statuses are reported as transport failures. No timeout is set beyond the
/// client's default.
#[derive(Debug, Clone, Default)]
pub struct HttpTextSource {
    client: reqwest::Client,
}

impl HttpTextSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TextSource for HttpTextSource {
    async fn fetch_text(&self, url: &str) -> Result<String, IngestError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        tracing::debug!("GET {} -> {}", url, response.status());
        Ok(response.text().await?)
    }
}

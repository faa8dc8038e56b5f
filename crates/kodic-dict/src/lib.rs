use std::time::Duration;

mod response;

pub use response::SearchResponse;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("dictionary request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to decode dictionary response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of definition fragments for a word. Implemented over HTTP by
/// [`DictClient`]; tests substitute fakes.
#[async_trait::async_trait]
pub trait MeansSource: Send + Sync {
    /// Definition fragments for `word`, or `None` when the lookup produced
    /// nothing this cycle (transport failure, undecodable body, no entry).
    async fn means_of(&self, word: &str) -> Option<Vec<String>>;
}

pub struct DictClient {
    client: reqwest::Client,
    base_url: String,
}

impl DictClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, DictError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Raw response bytes for a word search. One GET, no retry. The quotes
    /// around the query parameters are what the upstream endpoint expects.
    pub async fn search(&self, word: &str) -> Result<Vec<u8>, DictError> {
        let url = format!("{}/search?m=\"pc\"&query=\"{}\"", self.base_url, word);
        let response = self.client.get(&url).send().await?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

#[async_trait::async_trait]
impl MeansSource for DictClient {
    async fn means_of(&self, word: &str) -> Option<Vec<String>> {
        let body = match self.search(word).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("lookup of {word:?} failed: {e}");
                return None;
            }
        };

        let response = match SearchResponse::parse(&body) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("{e}");
                return None;
            }
        };

        let means = response.first_means();
        if means.is_none() {
            tracing::info!("no dictionary entry for {word:?}");
        }
        means
    }
}

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{ImageResult, ImageSearch, ImageSearchError};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    images_results: Vec<ImageResult>,
    #[serde(default)]
    error: Option<String>,
}

/// Google image search through SerpApi (`engine=google`, `tbm=isch`).
#[derive(Debug, Clone)]
pub struct SerpApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SerpApiClient {
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ImageSearch for SerpApiClient {
    async fn search_images(&self, query: &str) -> Result<Vec<ImageResult>, ImageSearchError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("tbm", "isch"),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ImageSearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        // SerpApi reports "no results" as an error string on a 200
        if parsed.images_results.is_empty() {
            if let Some(error) = parsed.error {
                tracing::debug!(%error, query, "image search returned no results");
            }
        }

        Ok(parsed.images_results)
    }
}

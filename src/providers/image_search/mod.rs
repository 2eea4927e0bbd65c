pub mod serpapi;

pub use serpapi::SerpApiClient;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// One hit from an image search, reduced to what the pipeline shows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageResult {
    pub thumbnail: String,
}

/// Provider-neutral image search contract. Implementations return hits in
/// provider rank order; an empty vector means nothing was found.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn search_images(&self, query: &str) -> Result<Vec<ImageResult>, ImageSearchError>;
}

#[derive(Debug, Error)]
pub enum ImageSearchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ImageSearchError {
    fn from(err: reqwest::Error) -> Self {
        ImageSearchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ImageSearchError {
    fn from(err: serde_json::Error) -> Self {
        ImageSearchError::Parse(err.to_string())
    }
}

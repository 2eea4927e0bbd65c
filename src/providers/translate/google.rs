use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use super::{TranslateError, Translator};

const SOURCE_LANG: &str = "ko";
const TARGET_LANG: &str = "en";

/// Keyless client for the public `translate_a/single` endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    url: String,
}

impl GoogleTranslator {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("client", "gtx"),
                ("sl", SOURCE_LANG),
                ("tl", TARGET_LANG),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            debug!(status = %response.status(), "translation refused, keeping source text");
            return Ok(text.to_string());
        }

        let body: Value = response.json().await?;

        // Body is nested arrays: [[["translated", "source", ...], ...], ...]
        body.get(0)
            .and_then(|segments| segments.get(0))
            .and_then(|segment| segment.get(0))
            .and_then(|translated| translated.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| TranslateError::MalformedResponse(body.to_string()))
    }
}

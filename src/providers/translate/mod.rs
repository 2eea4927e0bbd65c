pub mod google;

pub use google::GoogleTranslator;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate a single food-item name into English.
    ///
    /// Providers may answer with the input unchanged when the upstream refuses
    /// the request; hard transport failures come back as errors and the caller
    /// decides on the fallback.
    async fn translate(&self, text: &str) -> Result<String, TranslateError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed translation response: {0}")]
    MalformedResponse(String),
}

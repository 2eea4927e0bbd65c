use anyhow::Result;
use async_trait::async_trait;

use crate::config::EndpointConfig;

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn new(api_key: String, endpoints: &EndpointConfig) -> Result<Self>
    where
        Self: Sized;

    async fn complete(&self, prompt: &str) -> Result<String>;
}

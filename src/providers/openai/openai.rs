use async_trait::async_trait;
use anyhow::{Result, anyhow};
use crate::config::EndpointConfig;
use crate::providers::traits::CompletionProvider;
use async_openai::{
    types::{
        CreateChatCompletionRequestArgs,
        ChatCompletionRequestMessage,
        ChatCompletionRequestUserMessage,
        ChatCompletionRequestUserMessageContent,
        Role,
    },
    Client,
    config::OpenAIConfig,
};
use tracing::debug;

#[derive(Clone)]
pub struct OpenAIProvider {
    client: Client<OpenAIConfig>,
    chat_model: String,
    temperature: f32,
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    async fn new(api_key: String, endpoints: &EndpointConfig) -> Result<Self> {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(endpoints.api_base.clone());
        let client = Client::with_config(config);

        Ok(Self {
            client,
            chat_model: endpoints.chat_model.clone(),
            temperature: endpoints.temperature,
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        // The plan prompt is self-contained, so no system message is sent
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.chat_model)
            .temperature(self.temperature)
            .messages(vec![
                ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage {
                        role: Role::User,
                        content: ChatCompletionRequestUserMessageContent::Text(prompt.to_string()),
                        name: None,
                    }
                ),
            ])
            .build()?;

        debug!(model = %self.chat_model, "sending chat completion request");
        let response = self.client.chat().create(request).await?;

        response.choices.first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| anyhow!("No response content"))
    }
}

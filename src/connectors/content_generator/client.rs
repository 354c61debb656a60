use super::prompt::{self, ChatMessage};
use super::ContentGenerator;
use crate::configuration::GeneratorSettings;
use crate::connectors::errors::ConnectorError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Generator backed by an OpenAI compatible `/chat/completions` endpoint
pub struct ChatCompletionsClient {
    http_client: reqwest::Client,
    completions_url: String,
    model: String,
    api_key: String,
}

impl ChatCompletionsClient {
    pub fn new(settings: &GeneratorSettings, api_key: String) -> Result<Self, ConnectorError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs.max(1)))
            .user_agent(format!("copywriter/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| ConnectorError::Internal(format!("HTTP client error: {}", err)))?;

        Ok(Self {
            http_client,
            completions_url: settings.completions_url(),
            model: settings.model.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl ContentGenerator for ChatCompletionsClient {
    #[tracing::instrument(name = "Generate marketing copy.", skip(self, product_description))]
    async fn generate(
        &self,
        product_name: &str,
        product_description: &str,
    ) -> Result<String, ConnectorError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: prompt::build_messages(product_name, product_description),
            stream: false,
        };

        let response = self
            .http_client
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Completion request failed: {}", err);
                ConnectorError::from(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Provider returned error {}: {}", status, body);
            return Err(ConnectorError::from_status(status, &body));
        }

        let completion = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|err| {
                tracing::error!("Failed to decode completion: {}", err);
                ConnectorError::InvalidResponse(format!("Failed to decode completion: {}", err))
            })?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ConnectorError::InvalidResponse("No choices in completion".to_string()))?
            .message
            .content
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ConnectorError::InvalidResponse("Completion has no content".to_string()))?;

        tracing::debug!("Received {} chars of copy", text.chars().count());
        Ok(text)
    }

    fn provider(&self) -> &str {
        "chat-completions"
    }
}

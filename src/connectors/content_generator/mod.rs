//! Content generation connector
//!
//! Routes depend on the `ContentGenerator` trait only. `ChatCompletionsClient`
//! talks to an OpenAI compatible chat completions API (Groq by default),
//! `MockContentGenerator` returns scripted results for tests and for running
//! without provider credentials.

use super::errors::ConnectorError;
use crate::configuration::GeneratorSettings;
use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;

pub mod client;
pub mod mock;
pub mod prompt;

pub use client::ChatCompletionsClient;
pub use mock::MockContentGenerator;

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Write marketing copy for a product. All or nothing: either the text
    /// of the first completion or an error, never partial output.
    async fn generate(
        &self,
        product_name: &str,
        product_description: &str,
    ) -> Result<String, ConnectorError>;

    /// Short label reported by the health check
    fn provider(&self) -> &str;
}

/// Build the generator injected into the app.
///
/// Falls back to the mock, which rejects every request, when the provider is
/// disabled or no API key is configured. The service still starts so history
/// can be browsed and cleared.
pub fn init(settings: &GeneratorSettings) -> web::Data<Arc<dyn ContentGenerator>> {
    let generator: Arc<dyn ContentGenerator> = match settings.api_key() {
        Some(api_key) if settings.enabled => {
            match ChatCompletionsClient::new(settings, api_key.to_string()) {
                Ok(client) => {
                    tracing::info!(
                        base_url = %settings.base_url,
                        model = %settings.model,
                        "Content generator initialized"
                    );
                    Arc::new(client)
                }
                Err(err) => {
                    tracing::error!(
                        error = %err,
                        "Failed to initialize content generator, falling back to mock"
                    );
                    Arc::new(MockContentGenerator::unconfigured())
                }
            }
        }
        Some(_) => {
            tracing::warn!("Content generator disabled - every generation request will fail");
            Arc::new(MockContentGenerator::unconfigured())
        }
        None => {
            tracing::warn!(
                "{} is not set - every generation request will fail",
                crate::configuration::API_KEY_ENV
            );
            Arc::new(MockContentGenerator::unconfigured())
        }
    };

    web::Data::new(generator)
}

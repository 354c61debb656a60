use super::ContentGenerator;
use crate::connectors::errors::ConnectorError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
enum Script {
    Respond(String),
    Fail(String),
    Unconfigured,
}

/// Scripted generator. Counts calls so tests can assert the provider was
/// (or was not) reached.
#[derive(Debug)]
pub struct MockContentGenerator {
    script: Script,
    calls: AtomicUsize,
}

impl MockContentGenerator {
    /// Always returns `text`
    pub fn responding(text: impl Into<String>) -> Self {
        Self::with_script(Script::Respond(text.into()))
    }

    /// Always fails with a provider outage carrying `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_script(Script::Fail(message.into()))
    }

    /// Stand-in used when no provider credentials are configured
    pub fn unconfigured() -> Self {
        Self::with_script(Script::Unconfigured)
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentGenerator for MockContentGenerator {
    async fn generate(
        &self,
        _product_name: &str,
        _product_description: &str,
    ) -> Result<String, ConnectorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.script {
            Script::Respond(text) => Ok(text.clone()),
            Script::Fail(message) => Err(ConnectorError::ServiceUnavailable(message.clone())),
            Script::Unconfigured => Err(ConnectorError::Unauthorized(format!(
                "content generator is not configured, set {}",
                crate::configuration::API_KEY_ENV
            ))),
        }
    }

    fn provider(&self) -> &str {
        "mock"
    }
}

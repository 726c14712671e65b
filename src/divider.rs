// src/divider.rs
// Service façade: (text, strategy id) -> divided text.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::client::{CompletionBackend, OpenAiClient};
use crate::config;
use crate::prompt::build_prompt;
use crate::strategy::Strategy;

#[derive(Debug, Error)]
pub enum DivideError {
    #[error("no API key configured: set OPENAI_API_KEY (or OPENAI_API_KEY_FILE)")]
    NotConfigured,

    #[error("completion failed: {0}")]
    Completion(String),
}

impl DivideError {
    /// Stable machine-readable kind for the HTTP layer.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::Completion(_) => "completion_error",
        }
    }
}

/// Orchestrates strategy resolution, prompt construction and the remote
/// completion call. Constructed once at startup; its state (Unconfigured
/// or Ready) is fixed for the process lifetime.
pub struct ParagraphDivider {
    backend: Option<Box<dyn CompletionBackend>>,
}

impl ParagraphDivider {
    /// Resolves the credential (secrets file, then environment) and picks
    /// the Ready/Unconfigured state accordingly.
    pub fn from_env() -> Self {
        match config::resolve_api_key() {
            Some(key) => {
                info!("Completion backend configured");
                Self {
                    backend: Some(Box::new(OpenAiClient::new(key))),
                }
            }
            None => {
                warn!("No OPENAI_API_KEY resolved; divide requests will be rejected");
                Self { backend: None }
            }
        }
    }

    /// Injection point for tests and alternative providers.
    pub fn with_backend(backend: Box<dyn CompletionBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn unconfigured() -> Self {
        Self { backend: None }
    }

    pub fn is_ready(&self) -> bool {
        self.backend.is_some()
    }

    /// Divides `text` into paragraphs using the given strategy. Unknown
    /// strategy ids fall back to "semantic". Blank text is forwarded as-is;
    /// presence validation is the caller's responsibility. No retries.
    pub async fn divide(&self, text: &str, strategy_id: &str) -> Result<String, DivideError> {
        let backend = self.backend.as_ref().ok_or(DivideError::NotConfigured)?;

        let strategy = Strategy::resolve(strategy_id);
        debug!(
            strategy = strategy.id,
            input_len = text.len(),
            "Building division prompt"
        );

        let prompt = build_prompt(text, strategy);
        backend
            .complete(&prompt)
            .await
            .map_err(|e| DivideError::Completion(e.to_string()))
    }
}

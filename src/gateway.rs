use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    config::{ConfigError, ProviderSettings},
    core::{CompletionProvider, LlmError},
};

/// Forwards prompts to the downstream completion capability.
///
/// Stateless apart from the shared provider handle; cloning is cheap and every
/// clone talks to the same client.
#[derive(Clone)]
pub struct CompletionGateway {
    provider: Arc<dyn CompletionProvider>,
}

impl CompletionGateway {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, ConfigError> {
        info!(
            provider = %settings.provider,
            model = %settings.model,
            base_url = %settings.base_url,
            "Configuring completion provider"
        );
        Ok(Self::new(settings.build_client()?))
    }

    /// Obtain a completion for `prompt`.
    ///
    /// The prompt is passed on exactly as received, including when it is
    /// absent or empty, and the provider's text or error comes back unchanged.
    #[tracing::instrument(
        name = "ask",
        skip(self, prompt),
        fields(prompt_present = prompt.is_some(), prompt_len = prompt.as_deref().map_or(0, str::len)),
        err
    )]
    pub async fn ask(&self, prompt: Option<String>) -> Result<String, LlmError> {
        let completion = self.provider.complete(prompt).await?;
        debug!(completion_len = completion.len(), "Received completion");
        Ok(completion)
    }
}

use async_trait::async_trait;

use super::error::LlmError;

/// The downstream text-completion capability.
///
/// Implementations are shared across concurrent requests, so `complete` takes
/// `&self` and must not rely on per-call mutation.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Produce a completion for `prompt`.
    ///
    /// `None` means the caller supplied no prompt at all. It is handed through
    /// as-is; what the provider makes of it is up to the provider.
    async fn complete(&self, prompt: Option<String>) -> Result<String, LlmError>;
}

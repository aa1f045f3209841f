//! Client for OpenAI-compatible `chat/completions` endpoints.

use async_trait::async_trait;

use crate::{
    Provider,
    core::{CompletionProvider, HttpClient, HttpClientConfig, LlmError},
};

use super::{
    request::create_chat_request,
    response::{ChatCompletionResponse, extract_completion_text},
};

/// Provider-specific settings for a chat completions endpoint.
pub trait CompletionProviderConfig: Send + Sync {
    /// Get the provider type
    fn provider(&self) -> Provider;

    /// Get the base URL for the API
    fn base_url(&self) -> &str;

    /// Path appended to the base URL
    fn endpoint(&self) -> &str;

    /// Model id sent with every request
    fn model(&self) -> &str;

    /// Get the authentication header as (name, value) tuple
    fn auth_header(&self) -> (String, String);

    /// Get additional headers to include with each request
    fn extra_headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Get the HTTP client configuration
    fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::default()
    }
}

/// A [`CompletionProvider`] backed by a chat completions API.
pub struct ChatCompletionsClient<P: CompletionProviderConfig> {
    pub config: P,
    http: HttpClient,
}

impl<P: CompletionProviderConfig> ChatCompletionsClient<P> {
    pub fn new(config: P) -> Result<Self, LlmError> {
        let http = HttpClient::new(&config.http_config())?;
        Ok(Self { config, http })
    }

    fn url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url().trim_end_matches('/'),
            self.config.endpoint()
        )
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![self.config.auth_header()];
        headers.extend(self.config.extra_headers());
        headers
    }
}

#[async_trait]
impl<P: CompletionProviderConfig> CompletionProvider for ChatCompletionsClient<P> {
    #[tracing::instrument(
        name = "chat_completion",
        skip(self, prompt),
        fields(provider = %self.config.provider(), model = %self.config.model()),
        err
    )]
    async fn complete(&self, prompt: Option<String>) -> Result<String, LlmError> {
        let request = create_chat_request(self.config.model(), prompt);
        let response: ChatCompletionResponse = self
            .http
            .post_json(&self.url(), &self.headers(), &request)
            .await?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Completion usage"
            );
        }

        extract_completion_text(response)
    }
}

//! OpenRouter provider implementation.
//!
//! OpenRouter speaks the OpenAI chat completions dialect, so only the
//! defaults and the optional attribution headers differ.

use crate::completions::{ChatCompletionsClient, CompletionProviderConfig};
use crate::core::HttpClientConfig;
use crate::provider::constants::openrouter;

/// OpenRouter-specific configuration for the chat completions client
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub http_referer: Option<String>,
    pub x_title: Option<String>,
    pub http_config: HttpClientConfig,
}

impl OpenRouterConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: openrouter::API_BASE.to_string(),
            model: openrouter::DEFAULT_MODEL.to_string(),
            http_referer: None,
            x_title: None,
            http_config: HttpClientConfig::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    pub fn with_http_referer(mut self, http_referer: String) -> Self {
        self.http_referer = Some(http_referer);
        self
    }

    pub fn with_x_title(mut self, x_title: String) -> Self {
        self.x_title = Some(x_title);
        self
    }
}

impl CompletionProviderConfig for OpenRouterConfig {
    fn provider(&self) -> super::Provider {
        super::Provider::OpenRouter
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> &str {
        openrouter::CHAT_COMPLETIONS_ENDPOINT
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn auth_header(&self) -> (String, String) {
        (
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        )
    }

    fn extra_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::new();

        if let Some(referer) = &self.http_referer {
            headers.push(("HTTP-Referer".to_string(), referer.clone()));
        }

        if let Some(title) = &self.x_title {
            headers.push(("X-Title".to_string(), title.clone()));
        }

        headers
    }

    fn http_config(&self) -> HttpClientConfig {
        self.http_config.clone()
    }
}

pub type OpenRouterClient = ChatCompletionsClient<OpenRouterConfig>;

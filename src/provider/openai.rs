use crate::completions::{ChatCompletionsClient, CompletionProviderConfig};
use crate::core::HttpClientConfig;
use crate::provider::constants::openai;

/// OpenAI-specific configuration for the chat completions client
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub http_config: HttpClientConfig,
}

impl OpenAiConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: openai::API_BASE.to_string(),
            model: openai::DEFAULT_MODEL.to_string(),
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
}

impl CompletionProviderConfig for OpenAiConfig {
    fn provider(&self) -> super::Provider {
        super::Provider::OpenAI
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> &str {
        openai::CHAT_COMPLETIONS_ENDPOINT
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

    fn http_config(&self) -> HttpClientConfig {
        self.http_config.clone()
    }
}

pub type OpenAiClient = ChatCompletionsClient<OpenAiConfig>;

//! Startup configuration, read from the process environment.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use thiserror::Error;

use crate::{
    Provider,
    core::{CompletionProvider, HttpClientConfig, LlmError},
    provider::{OpenAiClient, OpenAiConfig, OpenRouterClient, OpenRouterConfig},
};

pub const BIND_ADDR_VAR: &str = "GATEWAY_BIND_ADDR";
pub const PROVIDER_VAR: &str = "GATEWAY_PROVIDER";
pub const MODEL_VAR: &str = "GATEWAY_MODEL";
pub const API_KEY_ENV_VAR: &str = "GATEWAY_API_KEY_ENV";
pub const BASE_URL_VAR: &str = "GATEWAY_BASE_URL";
pub const TIMEOUT_SECS_VAR: &str = "GATEWAY_TIMEOUT_SECS";
pub const OPENROUTER_REFERER_VAR: &str = "OPENROUTER_HTTP_REFERER";
pub const OPENROUTER_TITLE_VAR: &str = "OPENROUTER_X_TITLE";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API key not found: environment variable `{0}` is not set")]
    MissingApiKey(String),

    #[error("Invalid value for `{var}`: {message}")]
    InvalidValue { var: &'static str, message: String },

    #[error(transparent)]
    Provider(#[from] LlmError),
}

/// Where the provider API key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKey {
    /// The provider's conventional variable, e.g. `OPENAI_API_KEY`
    Default,
    /// A custom environment variable
    Env(String),
    /// The key itself
    Direct(String),
}

impl ApiKey {
    fn resolve(
        &self,
        provider: Provider,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<String, ConfigError> {
        let var = match self {
            ApiKey::Direct(key) => return Ok(key.clone()),
            ApiKey::Env(var) => var.as_str(),
            ApiKey::Default => provider.default_api_key_env_var(),
        };

        lookup(var)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey(var.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub provider: Provider,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub http_referer: Option<String>,
    pub x_title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    pub provider: ProviderSettings,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let bind_addr = get(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                var: BIND_ADDR_VAR,
                message: e.to_string(),
            })?;

        let provider = match get(PROVIDER_VAR) {
            Some(value) => value
                .parse::<Provider>()
                .map_err(|message| ConfigError::InvalidValue {
                    var: PROVIDER_VAR,
                    message,
                })?,
            None => Provider::OpenAI,
        };

        let api_key = get(API_KEY_ENV_VAR)
            .map(ApiKey::Env)
            .unwrap_or(ApiKey::Default)
            .resolve(provider, &lookup)?;

        let timeout_secs = match get(TIMEOUT_SECS_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: TIMEOUT_SECS_VAR,
                    message: e.to_string(),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            provider: ProviderSettings {
                provider,
                api_key,
                model: get(MODEL_VAR).unwrap_or_else(|| provider.default_model().to_string()),
                base_url: get(BASE_URL_VAR)
                    .unwrap_or_else(|| provider.default_base_url().to_string()),
                timeout: Duration::from_secs(timeout_secs),
                http_referer: get(OPENROUTER_REFERER_VAR),
                x_title: get(OPENROUTER_TITLE_VAR),
            },
        })
    }
}

impl ProviderSettings {
    /// Construct the downstream client these settings describe.
    pub fn build_client(&self) -> Result<Arc<dyn CompletionProvider>, LlmError> {
        let http_config = HttpClientConfig::default().with_timeout(self.timeout);

        let client: Arc<dyn CompletionProvider> = match self.provider {
            Provider::OpenAI => {
                let config = OpenAiConfig::new(self.api_key.clone())
                    .with_base_url(self.base_url.clone())
                    .with_model(self.model.clone())
                    .with_http_config(http_config);
                Arc::new(OpenAiClient::new(config)?)
            }
            Provider::OpenRouter => {
                let mut config = OpenRouterConfig::new(self.api_key.clone())
                    .with_base_url(self.base_url.clone())
                    .with_model(self.model.clone())
                    .with_http_config(http_config);
                if let Some(referer) = &self.http_referer {
                    config = config.with_http_referer(referer.clone());
                }
                if let Some(title) = &self.x_title {
                    config = config.with_x_title(title.clone());
                }
                Arc::new(OpenRouterClient::new(config)?)
            }
        };

        Ok(client)
    }
}

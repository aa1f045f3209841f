//! # completion-gateway
//!
//! A single HTTP endpoint, `POST /api/ai/ask`, that forwards a prompt to a
//! hosted chat completions API and returns the completion text.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use completion_gateway::{CompletionGateway, GatewayConfig, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GatewayConfig::from_env()?;
//!     let gateway = CompletionGateway::from_settings(&config.provider)?;
//!     server::serve(config.bind_addr, gateway).await?;
//!     Ok(())
//! }
//! ```
//!
//! Anything implementing [`CompletionProvider`] can stand in for the hosted
//! API, which is how the tests drive the gateway.

pub mod completions;
pub mod config;
pub mod core;
pub mod gateway;
pub mod logging;
pub mod provider;
pub mod server;

pub use config::{ApiKey, ConfigError, GatewayConfig, ProviderSettings};
pub use crate::core::{CompletionProvider, HttpClientConfig, LlmError};
pub use gateway::CompletionGateway;
pub use provider::{OpenAiClient, OpenAiConfig, OpenRouterClient, OpenRouterConfig, Provider};

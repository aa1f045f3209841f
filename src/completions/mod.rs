//! OpenAI-compatible chat completions support shared by all providers.

pub mod client;
pub mod request;
pub mod response;

pub use client::{ChatCompletionsClient, CompletionProviderConfig};
pub use request::{ChatCompletionRequest, ChatMessage, ChatRole};
pub use response::ChatCompletionResponse;

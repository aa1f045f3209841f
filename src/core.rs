pub mod error;
pub mod http;
pub mod traits;

pub use error::{BoxError, LlmError};
pub use http::{HttpClient, HttpClientConfig};
pub use traits::CompletionProvider;

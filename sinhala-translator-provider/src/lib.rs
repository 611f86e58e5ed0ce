//! # sinhala-translator-provider
//!
//! Translation backend abstraction used by the Sinhala translator client.
//!
//! A backend is an opaque capability: given a text string and a target
//! (base URL, endpoint, reply field), it returns the backend's reply or fails.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sinhala_translator_provider::{
//!     create_backend, BackendOptions, BackendTarget, TranslationBackend,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = create_backend(&BackendOptions::default())?;
//!     let target = BackendTarget::new("https://web-production-ae6fc.up.railway.app", "/translate")
//!         .with_response_field("english");
//!
//!     let reply = backend.translate(&target, "ආයුබෝවන්").await?;
//!     println!("{}", reply.translation.as_deref().unwrap_or("No response"));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All backend operations return [`Result<T, BackendError>`](BackendError).
//! Only failures to reach or read the backend are errors:
//!
//! - [`BackendError::NetworkError`]: connection refused, DNS failure, reset
//! - [`BackendError::Timeout`]: the configured request timeout elapsed
//! - [`BackendError::ParseError`]: the body is not JSON, or is `null`
//! - [`BackendError::InvalidUrl`]: base URL and endpoint do not form an http(s) URL
//!
//! A JSON reply without a translation field is `Ok` with
//! [`TranslationReply::translation`] set to `None`. Requests are never retried.

mod backends;
mod error;
mod factory;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{BackendError, Result};

// Re-export factory functions
pub use factory::create_backend;

// Re-export core trait
pub use traits::TranslationBackend;

// Re-export types
pub use types::{
    BackendOptions, BackendTarget, DEFAULT_TRANSLATION_FIELDS, TranslationReply,
    TranslationRequest,
};

// Re-export concrete backends
pub use backends::HttpTranslationBackend;

pub use utils::log_sanitizer;

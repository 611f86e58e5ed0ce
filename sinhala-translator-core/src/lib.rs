//! Sinhala Translator Core Library
//!
//! Platform-independent logic behind the translator client:
//! - Section state machine (`TranslationSection`, `SectionStatus`)
//! - Section registry, the single owner of all section state
//! - Submission dispatch onto a tokio runtime, with results delivered back as `Completion`s
//! - JSON application configuration
//!
//! Front ends only render sections and forward user intents; every state change
//! goes through [`SectionRegistry`].
//!
//! # Example
//!
//! ```rust,no_run
//! use sinhala_translator_core::{AppConfig, SectionRegistry, SubmissionDispatcher, SubmitOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let runtime = tokio::runtime::Runtime::new()?;
//! let config = AppConfig::default();
//!
//! let mut registry = SectionRegistry::from_config(&config)?;
//! let (dispatcher, mut completions) =
//!     SubmissionDispatcher::from_config(&config, runtime.handle().clone())?;
//!
//! registry.set_input_text(0, "ආයුබෝවන්")?;
//! if let SubmitOutcome::Dispatched(id) = registry.submit(0, &dispatcher)? {
//!     println!("submitted {id}");
//! }
//!
//! if let Some(completion) = runtime.block_on(completions.recv()) {
//!     registry.complete(completion);
//! }
//! println!("{}", registry.get(0).map(|s| s.result_text()).unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{
    Completion, CompletionReceiver, Dispatch, SectionRegistry, SubmissionDispatcher,
    SubmitOutcome, SubmitRequest,
};
pub use types::{
    AppConfig, SectionConfig, SectionStatus, SubmissionId, SubmissionOutcome, TranslationSection,
};

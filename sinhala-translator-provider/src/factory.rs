//! Backend factory functions.

use std::sync::Arc;

use crate::backends::HttpTranslationBackend;
use crate::error::Result;
use crate::traits::TranslationBackend;
use crate::types::BackendOptions;

/// Creates the default [`TranslationBackend`] (HTTP/JSON).
///
/// The returned backend is wrapped in `Arc<dyn TranslationBackend>` so it can be
/// shared across the tasks that carry individual submissions.
///
/// # Examples
///
/// ```rust,no_run
/// use sinhala_translator_provider::{create_backend, BackendOptions, TranslationBackend};
///
/// let backend = create_backend(&BackendOptions::default()).unwrap();
/// assert_eq!(backend.id(), "http");
/// ```
pub fn create_backend(options: &BackendOptions) -> Result<Arc<dyn TranslationBackend>> {
    Ok(Arc::new(HttpTranslationBackend::new(options)?))
}

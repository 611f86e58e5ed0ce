//! Concrete translation backends

mod http;

pub use http::HttpTranslationBackend;

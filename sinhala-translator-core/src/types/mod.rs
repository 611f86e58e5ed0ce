//! 类型定义模块

mod config;
mod section;

pub use config::{AppConfig, SectionConfig, DEFAULT_APP_TITLE, DEFAULT_BASE_URL};
pub use section::{
    SectionStatus, SubmissionId, SubmissionOutcome, TranslationSection, BACKEND_ERROR_MESSAGE,
    NO_RESPONSE_PLACEHOLDER,
};

// Re-export provider 库的公共类型
pub use sinhala_translator_provider::{BackendOptions, BackendTarget, TranslationReply};

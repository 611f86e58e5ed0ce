//! 应用配置
//!
//! 配置在启动时加载一次，运行期间不可修改。

use std::path::Path;

use serde::{Deserialize, Serialize};
use sinhala_translator_provider::{BackendOptions, BackendTarget};

use crate::error::{CoreError, CoreResult};

/// Origin of the hosted Sinhala → English model server.
pub const DEFAULT_BASE_URL: &str = "https://web-production-ae6fc.up.railway.app";

/// Header shown above all sections.
pub const DEFAULT_APP_TITLE: &str = "Sinhala to English Translator";

/// One configured slot: where its text goes and how it is labelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    /// Display title, also used to build the input placeholder
    pub title: String,
    /// Backend path, e.g. `/translate`
    pub endpoint: String,
    /// Backend origin
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Reply field carrying the translation (`None` tries the well-known names)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_field: Option<String>,
    /// Label rendered above the result readout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_label: Option<String>,
}

impl SectionConfig {
    pub fn new(title: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            endpoint: endpoint.into(),
            base_url: default_base_url(),
            response_field: None,
            result_label: None,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_response_field(mut self, field: impl Into<String>) -> Self {
        self.response_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_result_label(mut self, label: impl Into<String>) -> Self {
        self.result_label = Some(label.into());
        self
    }

    /// Backend target this section submits to
    pub fn target(&self) -> BackendTarget {
        BackendTarget {
            base_url: self.base_url.clone(),
            endpoint: self.endpoint.clone(),
            response_field: self.response_field.clone(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Header text
    #[serde(default = "default_title")]
    pub title: String,
    /// Ordered section list; fixed for the lifetime of the process
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionConfig>,
    /// Whole-request timeout. `None` waits for the backend indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            sections: default_sections(),
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json_str(content: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`; a missing file yields the default configuration
    pub fn load_from_path(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            log::info!(
                "Config file {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::ConfigIo(format!("{}: {e}", path.display())))?;

        let config = Self::from_json_str(&content)?;
        log::info!(
            "Loaded {} section(s) from {}",
            config.sections.len(),
            path.display()
        );
        Ok(config)
    }

    /// Check that every section can actually be submitted
    pub fn validate(&self) -> CoreResult<()> {
        if self.sections.is_empty() {
            return Err(CoreError::InvalidConfig(
                "at least one section is required".to_string(),
            ));
        }

        for (index, section) in self.sections.iter().enumerate() {
            if section.title.trim().is_empty() {
                return Err(CoreError::InvalidConfig(format!(
                    "section {index} has an empty title"
                )));
            }
            if section.endpoint.trim().is_empty() {
                return Err(CoreError::InvalidConfig(format!(
                    "section '{}' has an empty endpoint",
                    section.title
                )));
            }
            section.target().url().map_err(|e| {
                CoreError::InvalidConfig(format!("section '{}': {e}", section.title))
            })?;
        }

        if self.request_timeout_secs == Some(0) {
            return Err(CoreError::InvalidConfig(
                "requestTimeoutSecs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Backend options derived from this configuration
    pub fn backend_options(&self) -> BackendOptions {
        BackendOptions::from_timeout_secs(self.request_timeout_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_title() -> String {
    DEFAULT_APP_TITLE.to_string()
}

fn default_sections() -> Vec<SectionConfig> {
    vec![SectionConfig::new("Enter Sinhala Sentence", "/translate")
        .with_response_field("english")
        .with_result_label("English Translation")]
}

//! Translation section model

use std::fmt;

use sinhala_translator_provider::{BackendError, BackendTarget, TranslationReply};

use super::config::SectionConfig;

/// Shown in place of a translation when a reachable backend sends none.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response";

/// Shown when the backend could not be reached or its reply could not be read.
pub const BACKEND_ERROR_MESSAGE: &str = "Error contacting backend";

/// Identifies one submission; strictly increasing within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(u64);

impl SubmissionId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Section status
///
/// Result and error text live inside the variant that owns them, so a pending
/// section cannot carry a stale result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SectionStatus {
    #[default]
    Idle,
    Pending {
        submission: SubmissionId,
    },
    Succeeded {
        result: String,
    },
    Failed {
        message: String,
    },
}

impl SectionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// `Succeeded` or `Failed`
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Pending { .. } => "Pending",
            Self::Succeeded { .. } => "Succeeded",
            Self::Failed { .. } => "Failed",
        }
    }
}

/// How a submission ended, as far as the section is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Backend answered with a translation
    Translated(String),
    /// Backend answered without a usable translation
    Empty,
    /// Backend could not be reached or understood
    Unreachable,
}

impl SubmissionOutcome {
    /// Collapse a backend result; transport detail is dropped here.
    pub fn from_backend(result: &Result<TranslationReply, BackendError>) -> Self {
        match result {
            Ok(TranslationReply {
                translation: Some(text),
                ..
            }) => Self::Translated(text.clone()),
            Ok(_) => Self::Empty,
            Err(_) => Self::Unreachable,
        }
    }

    /// Terminal status this outcome produces
    pub fn into_status(self) -> SectionStatus {
        match self {
            Self::Translated(result) => SectionStatus::Succeeded { result },
            Self::Empty => SectionStatus::Succeeded {
                result: NO_RESPONSE_PLACEHOLDER.to_string(),
            },
            Self::Unreachable => SectionStatus::Failed {
                message: BACKEND_ERROR_MESSAGE.to_string(),
            },
        }
    }
}

/// One independent input / translate / output unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSection {
    title: String,
    target: BackendTarget,
    result_label: Option<String>,
    input_text: String,
    status: SectionStatus,
}

impl TranslationSection {
    pub fn from_config(config: &SectionConfig) -> Self {
        Self {
            title: config.title.clone(),
            target: config.target(),
            result_label: config.result_label.clone(),
            input_text: String::new(),
            status: SectionStatus::Idle,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn endpoint(&self) -> &str {
        &self.target.endpoint
    }

    pub fn target(&self) -> &BackendTarget {
        &self.target
    }

    pub fn result_label(&self) -> Option<&str> {
        self.result_label.as_deref()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn status(&self) -> &SectionStatus {
        &self.status
    }

    /// Last successful translation, or `""`
    pub fn result_text(&self) -> &str {
        match &self.status {
            SectionStatus::Succeeded { result } => result,
            _ => "",
        }
    }

    /// Failure message, or `""`
    pub fn error_message(&self) -> &str {
        match &self.status {
            SectionStatus::Failed { message } => message,
            _ => "",
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Whether a submit would be dispatched right now
    pub fn can_submit(&self) -> bool {
        !self.is_pending() && !self.input_text.trim().is_empty()
    }

    /// Input hint, e.g. `Enter text for enter sinhala sentence...`
    pub fn placeholder(&self) -> String {
        format!("Enter text for {}...", self.title.to_lowercase())
    }

    pub(crate) fn set_input_text(&mut self, text: String) -> bool {
        if self.is_pending() {
            return false;
        }
        self.input_text = text;
        true
    }

    pub(crate) fn begin(&mut self, submission: SubmissionId) {
        self.status = SectionStatus::Pending { submission };
    }

    /// Apply `outcome` if `submission` is the one in flight; returns whether it applied.
    pub(crate) fn finish(&mut self, submission: SubmissionId, outcome: SubmissionOutcome) -> bool {
        match self.status {
            SectionStatus::Pending { submission: current } if current == submission => {
                self.status = outcome.into_status();
                true
            }
            _ => false,
        }
    }
}

//! Section registry
//!
//! Owns the fixed, ordered list of sections and is the only place their state
//! changes. Every operation touches exactly one section.

use crate::error::{CoreError, CoreResult};
use crate::types::{AppConfig, SubmissionId, TranslationSection};

use super::dispatcher::{Completion, Dispatch, SubmitRequest};

/// Result of asking a section to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Section went `Pending` and its request was handed to the dispatcher
    Dispatched(SubmissionId),
    /// Input was empty or whitespace only; nothing changed
    SkippedEmpty,
    /// A request is already in flight for this section; nothing changed
    SkippedPending,
}

impl SubmitOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched(_))
    }
}

/// 分区注册表
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<TranslationSection>,
    last_submission: u64,
}

impl SectionRegistry {
    /// 根据配置创建全部分区（启动时调用一次）
    pub fn from_config(config: &AppConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            sections: config
                .sections
                .iter()
                .map(TranslationSection::from_config)
                .collect(),
            last_submission: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TranslationSection> {
        self.sections.get(index)
    }

    pub fn sections(&self) -> &[TranslationSection] {
        &self.sections
    }

    /// Number of sections with a request in flight
    pub fn pending_count(&self) -> usize {
        self.sections.iter().filter(|s| s.is_pending()).count()
    }

    /// Replace the input of one section.
    ///
    /// Returns `Ok(false)` without changing anything while that section is pending.
    pub fn set_input_text(&mut self, index: usize, text: impl Into<String>) -> CoreResult<bool> {
        let section = self.section_mut(index)?;
        let applied = section.set_input_text(text.into());
        if !applied {
            log::debug!("Section {index} is pending, input edit ignored");
        }
        Ok(applied)
    }

    /// Submit one section's current input.
    ///
    /// The section goes `Pending` before the request is handed to `dispatcher`,
    /// so a second call in the same turn is already rejected.
    pub fn submit(&mut self, index: usize, dispatcher: &dyn Dispatch) -> CoreResult<SubmitOutcome> {
        let next_submission = SubmissionId::new(self.last_submission + 1);
        let section = self.section_mut(index)?;

        if section.is_pending() {
            log::debug!("Section {index} already has a request in flight");
            return Ok(SubmitOutcome::SkippedPending);
        }
        if section.input_text().trim().is_empty() {
            return Ok(SubmitOutcome::SkippedEmpty);
        }

        section.begin(next_submission);
        let request = SubmitRequest {
            index,
            submission: next_submission,
            target: section.target().clone(),
            text: section.input_text().to_string(),
        };
        self.last_submission = next_submission.value();

        log::info!(
            "Section {index} ('{}') submitted {next_submission}",
            self.sections[index].title()
        );
        dispatcher.dispatch(request);

        Ok(SubmitOutcome::Dispatched(next_submission))
    }

    /// Apply a finished submission to its section.
    ///
    /// Returns `false` (and changes nothing) when the completion does not match
    /// the submission currently in flight for that section.
    pub fn complete(&mut self, completion: Completion) -> bool {
        let Completion {
            index,
            submission,
            outcome,
        } = completion;

        let Some(section) = self.sections.get_mut(index) else {
            log::warn!("Completion {submission} for unknown section {index} dropped");
            return false;
        };

        let applied = section.finish(submission, outcome);
        if applied {
            log::info!(
                "Section {index} {submission} finished: {}",
                section.status().name()
            );
        } else {
            log::warn!("Stale completion {submission} for section {index} ignored");
        }
        applied
    }

    fn section_mut(&mut self, index: usize) -> CoreResult<&mut TranslationSection> {
        self.sections
            .get_mut(index)
            .ok_or(CoreError::SectionNotFound(index))
    }
}

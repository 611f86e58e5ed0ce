//! 提交调度
//!
//! 将 [`SubmitRequest`] 交给后端异步执行，结果以 [`Completion`] 的形式
//! 通过通道送回调用方线程，由调用方逐条应用到 [`SectionRegistry`](super::SectionRegistry)。

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use sinhala_translator_provider::{
    create_backend, log_sanitizer::truncate_for_log, BackendError, TranslationBackend,
};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::error::CoreResult;
use crate::types::{AppConfig, BackendTarget, SubmissionId, SubmissionOutcome};

/// A section that has just gone `Pending` and needs its request sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub index: usize,
    pub submission: SubmissionId,
    pub target: BackendTarget,
    pub text: String,
}

/// Result of one submission, addressed back to its section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub index: usize,
    pub submission: SubmissionId,
    pub outcome: SubmissionOutcome,
}

/// Receiving half of the completion channel
pub type CompletionReceiver = mpsc::UnboundedReceiver<Completion>;

/// Something that can carry a submission to the backend.
///
/// Implementations must eventually produce exactly one [`Completion`] per request.
pub trait Dispatch {
    fn dispatch(&self, request: SubmitRequest);
}

/// 运行在 tokio 运行时上的调度器
///
/// 每个请求一个任务；任务结束时恰好发送一条 `Completion`。
pub struct SubmissionDispatcher {
    backend: Arc<dyn TranslationBackend>,
    runtime: Handle,
    completions: mpsc::UnboundedSender<Completion>,
}

impl SubmissionDispatcher {
    pub fn new(
        backend: Arc<dyn TranslationBackend>,
        runtime: Handle,
    ) -> (Self, CompletionReceiver) {
        let (completions, receiver) = mpsc::unbounded_channel();
        (
            Self {
                backend,
                runtime,
                completions,
            },
            receiver,
        )
    }

    /// 根据配置创建默认 HTTP 后端及调度器
    pub fn from_config(
        config: &AppConfig,
        runtime: Handle,
    ) -> CoreResult<(Self, CompletionReceiver)> {
        let backend = create_backend(&config.backend_options())?;
        Ok(Self::new(backend, runtime))
    }

    /// 执行一次提交并生成 `Completion`
    ///
    /// 后端 panic 也会被转换为 `Unreachable`，保证每个提交都有终态。
    pub async fn execute(backend: &dyn TranslationBackend, request: SubmitRequest) -> Completion {
        let SubmitRequest {
            index,
            submission,
            target,
            text,
        } = request;

        log::debug!(
            "Submitting {submission} for section {index} to {}{}: {}",
            target.base_url,
            target.endpoint,
            truncate_for_log(&text)
        );

        let call = AssertUnwindSafe(backend.translate(&target, &text)).catch_unwind();
        let outcome = match call.await {
            Ok(result) => {
                match &result {
                    Ok(reply) if reply.translation.is_none() => {
                        log::warn!("Section {index} {submission}: backend sent no translation");
                    }
                    Ok(_) => log::debug!("Section {index} {submission}: translated"),
                    Err(e) => log_failure(index, submission, backend.id(), e),
                }
                SubmissionOutcome::from_backend(&result)
            }
            Err(_) => {
                log::error!("Section {index} {submission}: backend panicked");
                SubmissionOutcome::Unreachable
            }
        };

        Completion {
            index,
            submission,
            outcome,
        }
    }
}

/// 按故障类型分级记录；细节只进日志，不进分区
fn log_failure(index: usize, submission: SubmissionId, backend_id: &str, e: &BackendError) {
    let source = e.backend().unwrap_or(backend_id);
    if e.is_expected() {
        log::warn!("Section {index} {submission}: backend '{source}' unreachable: {e}");
    } else if e.is_transport() {
        log::error!("Section {index} {submission}: unreadable reply from '{source}': {e}");
    } else {
        log::error!("Section {index} {submission}: request not sent: {e}");
    }
}

impl Dispatch for SubmissionDispatcher {
    fn dispatch(&self, request: SubmitRequest) {
        let backend = Arc::clone(&self.backend);
        let completions = self.completions.clone();

        self.runtime.spawn(async move {
            let completion = Self::execute(backend.as_ref(), request).await;
            if completions.send(completion).is_err() {
                log::debug!("Completion receiver dropped, discarding result");
            }
        });
    }
}

//! 测试辅助模块
//!
//! 提供 mock 后端、记录型调度器和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sinhala_translator_provider::{
    BackendError, BackendTarget, Result as BackendResult, TranslationBackend, TranslationReply,
};
use tokio::sync::oneshot;

use crate::services::{Dispatch, SubmitRequest};
use crate::types::{AppConfig, SectionConfig, SubmissionId};

// ===== MockBackend =====

/// 按 endpoint 预设回复的后端
///
/// 未设置回复的 endpoint 返回空回复。
#[derive(Default)]
pub struct MockBackend {
    replies: Mutex<HashMap<String, BackendResult<TranslationReply>>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    panics: Mutex<Vec<String>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, endpoint: &str, result: BackendResult<TranslationReply>) {
        self.replies
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), result);
    }

    /// 该 endpoint 的请求会等待，直到返回的 sender 被触发或丢弃
    pub fn gate(&self, endpoint: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(endpoint.to_string(), rx);
        tx
    }

    pub fn panic_on(&self, endpoint: &str) {
        self.panics.lock().unwrap().push(endpoint.to_string());
    }

    /// 已收到的 `(endpoint, text)`
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn translate(
        &self,
        target: &BackendTarget,
        text: &str,
    ) -> BackendResult<TranslationReply> {
        self.calls
            .lock()
            .unwrap()
            .push((target.endpoint.clone(), text.to_string()));

        let gate = self.gates.lock().unwrap().remove(&target.endpoint);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if self.panics.lock().unwrap().contains(&target.endpoint) {
            panic!("mock backend panicked on {}", target.endpoint);
        }

        let scripted = self.replies.lock().unwrap().remove(&target.endpoint);
        scripted.unwrap_or_else(|| Ok(TranslationReply::empty()))
    }
}

// ===== RecordingDispatcher =====

/// 只记录请求、不执行的调度器
#[derive(Default)]
pub struct RecordingDispatcher {
    requests: Mutex<Vec<SubmitRequest>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<SubmitRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Dispatch for RecordingDispatcher {
    fn dispatch(&self, request: SubmitRequest) {
        self.requests.lock().unwrap().push(request);
    }
}

// ===== 工厂方法 =====

pub fn request_for(index: usize, submission: u64, endpoint: &str, text: &str) -> SubmitRequest {
    SubmitRequest {
        index,
        submission: SubmissionId::new(submission),
        target: SectionConfig::new("Test", endpoint)
            .with_base_url("http://localhost:8080")
            .target(),
        text: text.to_string(),
    }
}

pub fn two_section_config() -> AppConfig {
    AppConfig {
        sections: vec![
            SectionConfig::new("First Input", "/api/nlp/first")
                .with_base_url("http://localhost:8080"),
            SectionConfig::new("Second Input", "/api/nlp/second")
                .with_base_url("http://localhost:8080"),
        ],
        ..AppConfig::default()
    }
}

pub fn network_error() -> BackendError {
    BackendError::NetworkError {
        backend: "mock".to_string(),
        detail: "connection refused".to_string(),
    }
}

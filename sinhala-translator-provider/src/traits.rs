use async_trait::async_trait;

use crate::error::Result;
use crate::types::{BackendTarget, TranslationReply};

/// 翻译后端 Trait
///
/// 给定一段文本，返回后端的答复，或失败。
/// 后端只要给出可解析的答复，即视为成功，即使答复中没有译文。
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// 后端标识符
    fn id(&self) -> &'static str;

    /// 将 `text` 发送到 `target`，返回解析后的答复
    async fn translate(&self, target: &BackendTarget, text: &str) -> Result<TranslationReply>;
}

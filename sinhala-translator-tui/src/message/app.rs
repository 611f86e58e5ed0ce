//! 应用主消息枚举

use sinhala_translator_core::Completion;

use super::SectionMessage;

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个分区
    FocusNext,

    /// 焦点移到上一个分区
    FocusPrevious,

    /// 当前分区相关消息
    Section(SectionMessage),

    /// 后台请求完成
    Completed(Completion),

    /// 定时器（推进 spinner）
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}

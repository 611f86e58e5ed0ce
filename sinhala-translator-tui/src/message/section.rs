//! 分区消息
//!
//! 作用于当前聚焦分区的编辑与提交操作

/// 分区消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionMessage {
    // ========== 编辑 ==========
    /// 输入字符
    Input(char),
    /// 粘贴文本
    Paste(String),
    /// 插入换行
    Newline,
    /// 删除最后一个字符
    Backspace,
    /// 清空输入
    Clear,

    // ========== 提交 ==========
    /// 提交翻译
    Submit,
}

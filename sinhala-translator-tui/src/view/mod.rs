//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 分区区域 + 状态栏
//!         mod theme;              // 颜色与常用样式
//!         mod components;
//!             section.rs          // 单个分区面板
//!             statusbar.rs        // 底部状态栏
//!
//!
//!     每个分区面板自上而下：
//!         ┌ 标题 ─────────────────────────────┐
//!         │ 输入框（Pending 时变暗且只读）     │
//!         │ [ Translate ] / ⠋ Translating...   │
//!         │ 结果标签（可选）                   │
//!         │ 结果 / 错误                        │
//!         └────────────────────────────────────┘
//!

mod components;
mod layout;
mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}

//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是界面状态的 “唯一真相来源”。
//! 分区本身的状态（输入、Pending、结果、错误）全部由核心库的
//! `SectionRegistry` 持有，这里只增加纯界面状态：焦点、spinner 帧、状态栏消息。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 当前聚焦的分区
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub title: String,                  // 标题栏文本
//!             pub registry: SectionRegistry,      // 全部分区
//!             pub focus: SectionFocus,            // 当前焦点
//!             pub spinner_frame: usize,           // Pending 动画帧
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new(&config)?;
//!         - 在 update/mod.rs 中修改：app.should_quit = true;
//!         - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（SectionFocus）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     启动时焦点在第一个分区；Tab / ↓ 前进，Shift+Tab / ↑ 后退，首尾循环。
//!
//!     数据流：
//!         用户按 Tab
//!             ↓
//!         event/handler.rs 返回 AppMessage::FocusNext
//!             ↓
//!         update/mod.rs 执行 app.focus.next()
//!             ↓
//!         view 层根据 app.focus.is(index) 设置边框颜色与光标
//!

mod app;
mod focus;

pub use app::App;
pub use focus::SectionFocus;

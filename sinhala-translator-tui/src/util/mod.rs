//! 工具模块
//!
//!     terminal.rs     终端初始化与恢复（raw mode、备用屏幕、bracketed paste）
//!     logging.rs      文件日志（TUI 占用 stdout，日志不能写到终端）

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};

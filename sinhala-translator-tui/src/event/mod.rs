//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//! 负责从终端读取事件，并将其翻译为 Message：
//!     - poll_event()      在给定超时内等待一个终端事件
//!     - handle_event()    Event → AppMessage（纯函数，不读取也不修改 Model）
//!
//! 键盘事件只处理 Press；bracketed paste 作为整体文本进入当前分区。
//!

mod handler;
pub mod keymap;

pub use handler::{handle_event, poll_event};

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 键盘、粘贴、定时器以及后台完成的请求，都先被翻译成 Message，
//! Update 层再根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;                // 主消息 AppMessage
//!         mod section;            // 作用于当前聚焦分区的子消息
//!
//!
//!     SectionMessage 不携带分区下标：它总是作用于 app.focus 指向的分区，
//!     由 update 层在处理时读取焦点。
//!     AppMessage::Completed 则相反，它携带自己的分区下标与提交编号，
//!     与焦点无关。
//!

mod app;
mod section;

pub use app::AppMessage;
pub use section::SectionMessage;

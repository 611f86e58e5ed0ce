//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方；分区状态的修改再进一步委托给 `SectionRegistry`。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod section;            // 分区编辑与提交
//!
//!         pub fn update(app: &mut App, msg: AppMessage, dispatcher: &dyn Dispatch) {...}
//!
//!
//!     dispatcher 只在 Submit 时使用：registry 先把分区置为 Pending，
//!     再把请求交给 dispatcher，因此同一轮中重复的 Submit 会被直接拒绝。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod section;

use sinhala_translator_core::Dispatch;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage, dispatcher: &dyn Dispatch) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::FocusNext => {
            app.focus.next();
            app.clear_status();
        }

        AppMessage::FocusPrevious => {
            app.focus.previous();
            app.clear_status();
        }

        AppMessage::Section(section_msg) => {
            section::update(app, section_msg, dispatcher);
        }

        AppMessage::Completed(completion) => {
            app.registry.complete(completion);
        }

        AppMessage::Tick => {
            if app.registry.pending_count() > 0 {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
        }

        AppMessage::Noop => {}
    }
}

//! 分区更新逻辑
//!
//! 编辑与提交都作用于当前聚焦的分区

use sinhala_translator_core::{CoreError, Dispatch, SubmitOutcome};

use crate::message::SectionMessage;
use crate::model::App;

/// 处理分区消息
pub fn update(app: &mut App, msg: SectionMessage, dispatcher: &dyn Dispatch) {
    let index = app.focus.index();

    match msg {
        // ========== 编辑 ==========
        SectionMessage::Input(ch) => {
            edit(app, index, |text| text.push(ch));
        }
        SectionMessage::Paste(pasted) => {
            let pasted = normalize_newlines(&pasted);
            edit(app, index, |text| text.push_str(&pasted));
        }
        SectionMessage::Newline => {
            edit(app, index, |text| text.push('\n'));
        }
        SectionMessage::Backspace => {
            edit(app, index, |text| {
                text.pop();
            });
        }
        SectionMessage::Clear => {
            edit(app, index, String::clear);
        }

        // ========== 提交 ==========
        SectionMessage::Submit => {
            handle_submit(app, index, dispatcher);
        }
    }
}

/// 以修改后的文本替换分区输入；Pending 期间输入被锁定
fn edit(app: &mut App, index: usize, apply: impl FnOnce(&mut String)) {
    let Some(section) = app.registry.get(index) else {
        return;
    };
    let mut text = section.input_text().to_string();
    apply(&mut text);

    match app.registry.set_input_text(index, text) {
        Ok(true) => app.clear_status(),
        Ok(false) => app.set_status("Translating, input is locked"),
        Err(e) => log_core_error(&e),
    }
}

fn handle_submit(app: &mut App, index: usize, dispatcher: &dyn Dispatch) {
    match app.registry.submit(index, dispatcher) {
        Ok(SubmitOutcome::Dispatched(_)) => app.clear_status(),
        Ok(SubmitOutcome::SkippedEmpty) => app.set_status("Nothing to translate"),
        Ok(SubmitOutcome::SkippedPending) => app.set_status("Already translating"),
        Err(e) => log_core_error(&e),
    }
}

fn log_core_error(e: &CoreError) {
    if e.is_expected() {
        log::warn!("{e}");
    } else {
        log::error!("{e}");
    }
}

/// 终端粘贴可能带 `\r\n` 或单独的 `\r`
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

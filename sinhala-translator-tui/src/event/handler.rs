//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, SectionMessage};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event),                     // 键盘事件
        Event::Paste(text) => AppMessage::Section(SectionMessage::Paste(text)),   // 粘贴
        Event::Resize(_, _) => AppMessage::Noop,                                 // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 分区切换
    if DefaultKeymap::FOCUS_NEXT.matches(&key) || DefaultKeymap::FOCUS_DOWN.matches(&key) {
        return AppMessage::FocusNext;
    }
    // 部分终端发送 BackTab 时不带 SHIFT
    if key.code == KeyCode::BackTab || DefaultKeymap::FOCUS_UP.matches(&key) {
        return AppMessage::FocusPrevious;
    }

    handle_section_keys(key)
}

/// 处理当前分区的编辑按键
fn handle_section_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NEWLINE.matches(&key) {
        return AppMessage::Section(SectionMessage::Newline);
    }
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Section(SectionMessage::Submit);
    }
    if DefaultKeymap::CLEAR.matches(&key) {
        return AppMessage::Section(SectionMessage::Clear);
    }
    if DefaultKeymap::BACKSPACE.matches(&key) {
        return AppMessage::Section(SectionMessage::Backspace);
    }

    match key.code {
        // 字符输入（大写字母带 SHIFT）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Section(SectionMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn plain(code: KeyCode) -> Event {
        key(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(handle_event(plain(KeyCode::Esc)), AppMessage::Quit);
        assert_eq!(
            handle_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppMessage::Quit
        );
    }

    #[test]
    fn focus_keys() {
        assert_eq!(handle_event(plain(KeyCode::Tab)), AppMessage::FocusNext);
        assert_eq!(handle_event(plain(KeyCode::Down)), AppMessage::FocusNext);
        assert_eq!(handle_event(plain(KeyCode::Up)), AppMessage::FocusPrevious);
        assert_eq!(
            handle_event(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            AppMessage::FocusPrevious
        );
        assert_eq!(handle_event(plain(KeyCode::BackTab)), AppMessage::FocusPrevious);
    }

    #[test]
    fn editing_keys() {
        assert_eq!(
            handle_event(plain(KeyCode::Char('a'))),
            AppMessage::Section(SectionMessage::Input('a'))
        );
        assert_eq!(
            handle_event(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            AppMessage::Section(SectionMessage::Input('A'))
        );
        assert_eq!(
            handle_event(plain(KeyCode::Char('ක'))),
            AppMessage::Section(SectionMessage::Input('ක'))
        );
        assert_eq!(
            handle_event(plain(KeyCode::Backspace)),
            AppMessage::Section(SectionMessage::Backspace)
        );
        assert_eq!(
            handle_event(key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            AppMessage::Section(SectionMessage::Clear)
        );
    }

    #[test]
    fn enter_submits_and_alt_enter_breaks_line() {
        assert_eq!(
            handle_event(plain(KeyCode::Enter)),
            AppMessage::Section(SectionMessage::Submit)
        );
        assert_eq!(
            handle_event(key(KeyCode::Enter, KeyModifiers::ALT)),
            AppMessage::Section(SectionMessage::Newline)
        );
    }

    #[test]
    fn paste_becomes_section_message() {
        assert_eq!(
            handle_event(Event::Paste("ආයුබෝවන්".into())),
            AppMessage::Section(SectionMessage::Paste("ආයුබෝවන්".into()))
        );
    }

    #[test]
    fn ignores_release_and_unbound_keys() {
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(release)), AppMessage::Noop);

        assert_eq!(
            handle_event(key(KeyCode::Char('x'), KeyModifiers::ALT)),
            AppMessage::Noop
        );
        assert_eq!(handle_event(plain(KeyCode::F(5))), AppMessage::Noop);
        assert_eq!(handle_event(Event::Resize(80, 24)), AppMessage::Noop);
    }
}

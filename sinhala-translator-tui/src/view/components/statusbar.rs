//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::event::keymap::DefaultKeymap;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, Styles::hint_desc()));
    }

    // 进行中的请求数
    let pending = app.registry.pending_count();
    if pending > 0 {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("{pending} translating"),
            Style::default().fg(colors().warning),
        ));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(String, &'static str)> {
    let mut hints = Vec::new();

    if app.registry.len() > 1 {
        hints.push((
            format!(
                "{}/{}",
                DefaultKeymap::FOCUS_NEXT.label(),
                DefaultKeymap::FOCUS_PREVIOUS.label()
            ),
            "Switch",
        ));
    }

    // 当前分区 Pending 时不提示编辑键
    if app.focused_section().is_some_and(|s| !s.is_pending()) {
        hints.push((DefaultKeymap::SUBMIT.label(), "Translate"));
        hints.push((DefaultKeymap::NEWLINE.label(), "Newline"));
        hints.push((DefaultKeymap::CLEAR.label(), "Clear"));
    }

    hints.push((DefaultKeymap::QUIT.label(), "Quit"));

    hints
}

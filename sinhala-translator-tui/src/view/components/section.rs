//! 分区面板组件

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use sinhala_translator_core::{SectionStatus, TranslationSection};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::theme::Styles;

/// 提交按钮文本
pub const SUBMIT_LABEL: &str = "[ Translate ]";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 渲染单个分区
pub fn render(
    app: &App,
    index: usize,
    section: &TranslationSection,
    frame: &mut Frame,
    area: Rect,
) {
    let focused = app.focus.is(index);

    let block = Block::default()
        .title(format!(" {} ", section.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_height = u16::from(section.result_label().is_some());
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            // 输入框
            Constraint::Percentage(50),
            // 提交按钮
            Constraint::Length(1),
            // 结果标签
            Constraint::Length(label_height),
            // 结果
            Constraint::Min(1),
        ])
        .split(inner);

    render_input(section, focused, frame, rows[0]);
    render_indicator(app, section, frame, rows[1]);
    if let Some(label) = section.result_label() {
        frame.render_widget(Paragraph::new(label).style(Styles::result_label()), rows[2]);
    }
    render_readout(section, frame, rows[3]);
}

/// 输入框
///
/// 不自动换行；内容超出宽度或高度时滚动到末尾，保证光标可见。
fn render_input(section: &TranslationSection, focused: bool, frame: &mut Frame, area: Rect) {
    let locked = section.is_pending();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::border(focused && !locked));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = section.input_text();
    let view = InputView::fit(input, inner.width, inner.height);
    if input.is_empty() {
        frame.render_widget(
            Paragraph::new(section.placeholder()).style(Styles::placeholder()),
            inner,
        );
    } else {
        let lines: Vec<Line> = input
            .split('\n')
            .map(|line| Line::from(line.to_string()))
            .collect();
        frame.render_widget(
            Paragraph::new(lines)
                .style(Styles::input(locked))
                .scroll(view.scroll),
            inner,
        );
    }

    if focused && !locked && inner.width > 0 && inner.height > 0 {
        let (column, row) = view.cursor;
        frame.set_cursor_position((inner.x + column, inner.y + row));
    }
}

/// 提交按钮 / Pending 动画
fn render_indicator(app: &App, section: &TranslationSection, frame: &mut Frame, area: Rect) {
    let line = if section.is_pending() {
        let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        Line::from(Span::styled(format!("{spinner} Translating..."), Styles::spinner()))
    } else {
        Line::from(Span::styled(SUBMIT_LABEL, Styles::button(section.can_submit())))
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// 结果 / 错误
fn render_readout(section: &TranslationSection, frame: &mut Frame, area: Rect) {
    let paragraph = match section.status() {
        SectionStatus::Succeeded { result } => {
            Paragraph::new(result.as_str()).style(Styles::result())
        }
        SectionStatus::Failed { message } => {
            Paragraph::new(message.as_str()).style(Styles::error())
        }
        SectionStatus::Idle | SectionStatus::Pending { .. } => return,
    };
    frame.render_widget(paragraph.wrap(Wrap { trim: false }), area);
}

/// 光标相对输入框左上角的位置（按显示宽度计算）
fn cursor_offset(input: &str) -> (u16, u16) {
    let row = input.matches('\n').count();
    let last_line = input.rsplit('\n').next().unwrap_or_default();
    (to_u16(last_line.width()), to_u16(row))
}

/// 输入框的滚动偏移 `(行, 列)` 与光标在可视区域内的位置 `(列, 行)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InputView {
    scroll: (u16, u16),
    cursor: (u16, u16),
}

impl InputView {
    /// 光标始终位于文本末尾，滚动到恰好能看见它
    fn fit(input: &str, width: u16, height: u16) -> Self {
        let (column, row) = cursor_offset(input);
        let scroll_x = column.saturating_sub(width.saturating_sub(1));
        let scroll_y = row.saturating_sub(height.saturating_sub(1));
        Self {
            scroll: (scroll_y, scroll_x),
            cursor: (column - scroll_x, row - scroll_y),
        }
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::Styles;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 分区区域 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 分区区域
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_sections(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(format!(" {}", app.title)).style(Styles::header());
    frame.render_widget(title, area);
}

/// 分区纵向等分排列
fn render_sections(app: &App, frame: &mut Frame, area: Rect) {
    let sections = app.registry.sections();
    let count = u32::try_from(sections.len()).unwrap_or(u32::MAX).max(1);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(sections.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (index, (section, row)) in sections.iter().zip(rows.iter()).enumerate() {
        components::section::render(app, index, section, frame, *row);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use sinhala_translator_core::{Completion, SubmitOutcome, SubmissionOutcome};

    use super::*;
    use crate::update::tests::{two_section_app, RecordingDispatcher};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn renders_title_sections_and_placeholders() {
        let app = two_section_app();
        let text = screen(&app);

        assert!(text.contains("Sinhala to English Translator"));
        assert!(text.contains("Seq2Seq Model"));
        assert!(text.contains("Enter text for seq2seq model..."));
        assert!(text.contains("Enter text for mt5 model..."));
        assert!(text.contains(components::section::SUBMIT_LABEL));
    }

    #[test]
    fn renders_pending_and_results() {
        let mut app = two_section_app();
        let dispatcher = RecordingDispatcher::new();

        app.registry.set_input_text(0, "hello").unwrap();
        app.registry.set_input_text(1, "world").unwrap();
        let Ok(SubmitOutcome::Dispatched(first)) = app.registry.submit(0, &dispatcher) else {
            panic!("expected dispatch");
        };
        app.registry.submit(1, &dispatcher).unwrap();

        let text = screen(&app);
        assert!(text.contains("Translating..."));
        assert!(text.contains("2 translating"));

        app.registry.complete(Completion {
            index: 0,
            submission: first,
            outcome: SubmissionOutcome::Unreachable,
        });
        let text = screen(&app);
        assert!(text.contains("Error contacting backend"));
        assert!(text.contains("1 translating"));
    }

    #[test]
    fn long_input_line_shows_its_tail() {
        let mut app = two_section_app();
        let line = format!("HEAD{}TAIL", "-".repeat(150));
        app.registry.set_input_text(0, line).unwrap();

        let text = screen(&app);
        assert!(text.contains("TAIL"));
        assert!(!text.contains("HEAD"));
    }
}

//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    ThemeColors::dark()
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_fg: Color::White,
            success: Color::Rgb(78, 201, 176),
            warning: Color::Rgb(206, 145, 120),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 标题栏样式
    pub fn header() -> Style {
        let c = colors();
        Style::default()
            .bg(c.highlight)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 边框样式（焦点分区高亮）
    pub fn border(focused: bool) -> Style {
        let c = colors();
        if focused {
            Style::default().fg(c.border_focused)
        } else {
            Style::default().fg(c.border)
        }
    }

    /// 分区标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 输入文本样式（Pending 时变暗）
    pub fn input(locked: bool) -> Style {
        let c = colors();
        if locked {
            Style::default().fg(c.muted).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(c.fg)
        }
    }

    /// 占位提示样式
    pub fn placeholder() -> Style {
        Style::default()
            .fg(colors().muted)
            .add_modifier(Modifier::ITALIC)
    }

    /// 提交按钮样式
    pub fn button(enabled: bool) -> Style {
        let c = colors();
        if enabled {
            Style::default().fg(c.success).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted)
        }
    }

    /// Pending 提示样式
    pub fn spinner() -> Style {
        Style::default().fg(colors().warning)
    }

    /// 结果标签样式
    pub fn result_label() -> Style {
        Style::default()
            .fg(colors().muted)
            .add_modifier(Modifier::BOLD)
    }

    /// 翻译结果样式
    pub fn result() -> Style {
        Style::default().fg(colors().fg)
    }

    /// 错误信息样式
    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default()
            .bg(Color::Rgb(0, 122, 204))
            .fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}

//! 应用主状态结构

use sinhala_translator_core::{AppConfig, CoreResult, SectionRegistry, TranslationSection};

use super::SectionFocus;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 标题栏文本
    pub title: String,

    /// 全部分区（唯一可修改分区状态的地方）
    pub registry: SectionRegistry,

    /// 当前焦点分区
    pub focus: SectionFocus,

    /// Pending 动画帧计数
    pub spinner_frame: usize,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 根据配置创建应用实例
    pub fn new(config: &AppConfig) -> CoreResult<Self> {
        let registry = SectionRegistry::from_config(config)?;
        let focus = SectionFocus::new(registry.len());

        Ok(Self {
            should_quit: false,
            title: config.title.clone(),
            registry,
            focus,
            spinner_frame: 0,
            status_message: None,
        })
    }

    /// 当前聚焦的分区
    pub fn focused_section(&self) -> Option<&TranslationSection> {
        self.registry.get(self.focus.index())
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

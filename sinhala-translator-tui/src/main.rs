//! Sinhala Translator TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置服务 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件，避免破坏终端画面
//!     ConfigService::load()   // 读取分区配置（启动后不可修改）
//!     Runtime::new()          // 网络请求所在的 tokio 运行时
//!     model::App::new()       // 根据配置创建全部分区
//!     init_terminal()         // 进入 raw mode 与备用屏幕
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 配置与日志在终端初始化之前完成，这样加载失败时错误信息能直接打印到 stderr。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::time::Duration;

use anyhow::Result;
use sinhala_translator_core::SubmissionDispatcher;

use backend::{ConfigService, JsonConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志
    let log_path = init_logging(&backend::app_dir())?;

    // 2. 加载配置
    let config_service = JsonConfigService::from_env();
    let config = config_service.load()?;
    tracing::info!(
        "Starting with {} section(s), config {}, log {}",
        config.sections.len(),
        config_service.config_path().display(),
        log_path.display()
    );

    // 3. 网络请求运行时
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("translator-worker")
        .build()?;
    let (dispatcher, completions) =
        SubmissionDispatcher::from_config(&config, runtime.handle().clone())?;

    // 4. 创建应用实例
    let mut app = model::App::new(&config)?;

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &dispatcher, completions);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 仍在进行的请求直接放弃
    runtime.shutdown_timeout(Duration::from_millis(200));
    tracing::info!("Exited");

    result
}

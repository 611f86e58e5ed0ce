//!
//! app.rs
//! 应用主循环
//!
//!
//! 每一轮循环：
//!
//!     terminal.draw(|frame| view::render(app, frame))   // 1. 根据 Model 渲染
//!
//!     if app.should_quit { break }                       // 2. 检查退出标志
//!
//!     while let Ok(completion) = completions.try_recv()  // 3. 应用已完成的请求
//!         update(app, AppMessage::Completed(completion))
//!
//!     if let Some(event) = poll_event() {                // 4. 轮询输入，在此等待 100ms
//!         update(app, handle_event(event))
//!     } else {
//!         update(app, AppMessage::Tick)                  //    超时则推进 spinner
//!     }
//!
//!
//! 所有状态变更都在此线程上的 update 中发生；网络请求运行在 tokio 运行时上，
//! 只通过 completion 通道把结果送回来。

use std::time::Duration;

use anyhow::Result;
use sinhala_translator_core::{CompletionReceiver, Dispatch};

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔，同时也是 spinner 的帧间隔
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    dispatcher: &dyn Dispatch,
    mut completions: CompletionReceiver,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 按到达顺序逐条应用完成结果
        while let Ok(completion) = completions.try_recv() {
            update::update(app, AppMessage::Completed(completion), dispatcher);
        }

        // 4. 轮询事件（100ms 超时）
        let msg = match event::poll_event(POLL_INTERVAL)? {
            Some(event) => event::handle_event(event),
            None => AppMessage::Tick,
        };

        // 5. 更新状态
        update::update(app, msg, dispatcher);
    }

    Ok(())
}

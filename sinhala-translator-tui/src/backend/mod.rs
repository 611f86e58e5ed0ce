//!
//! src/backend/mod.rs
//! Backend 层：配置服务
//!
//! Backend 层与 UI 完全解耦。请求调度与分区状态都在 sinhala-translator-core 中，
//! 这里只负责定位并读取配置文件。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（JSON 文件）
//!
//!
//! 配置文件位置（按优先级）：
//!     1. 环境变量 SINHALA_TRANSLATOR_CONFIG 指定的路径
//!     2. <config-dir>/sinhala-translator/config.json
//!
//! 文件不存在时使用内置默认配置；存在但无效时启动失败。
//!

mod config_service;

pub use config_service::{app_dir, ConfigService, JsonConfigService};

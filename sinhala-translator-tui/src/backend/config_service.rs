//! 配置服务

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sinhala_translator_core::AppConfig;

/// 覆盖配置文件路径的环境变量
pub const CONFIG_ENV_VAR: &str = "SINHALA_TRANSLATOR_CONFIG";

const APP_DIR_NAME: &str = "sinhala-translator";
const CONFIG_FILE_NAME: &str = "config.json";

/// 应用数据目录：`<config-dir>/sinhala-translator`
///
/// 系统没有配置目录时退回当前目录。
pub fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 配置文件所在路径
    fn config_path(&self) -> &Path;

    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// JSON 文件配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 优先使用环境变量，否则使用默认位置
    pub fn from_env() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::new(app_dir().join(CONFIG_FILE_NAME)),
        }
    }
}

impl ConfigService for JsonConfigService {
    fn config_path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<AppConfig> {
        AppConfig::load_from_path(&self.path)
            .with_context(|| format!("Failed to load config {}", self.path.display()))
    }
}

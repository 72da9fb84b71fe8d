//! 设置模块
//!
//! 提供设置数据结构与 JSON 持久化

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use checkers_core::InitialLayout;

/// 覆盖设置文件路径的环境变量
pub const SETTINGS_ENV: &str = "CHECKERS_SETTINGS";

/// 日志目标：可执行文件、命令行库、规则引擎
const LOG_TARGETS: [&str; 3] = ["checkers", "checkers_cli", "checkers_core"];

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// 转换为 tracing 过滤指令中的级别名
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// 本程序各日志目标的过滤指令
    pub fn directives(&self) -> Vec<String> {
        LOG_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, self.as_str()))
            .collect()
    }
}

/// 设置加载结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// 已从文件加载
    Loaded(PathBuf),
    /// 文件不存在，使用默认设置
    Missing(PathBuf),
    /// 无法获取配置目录，使用默认设置
    NoConfigDir,
    /// 文件无效，使用默认设置
    Invalid { path: PathBuf, error: String },
}

impl LoadStatus {
    /// 输出加载结果日志
    pub fn log(&self) {
        match self {
            LoadStatus::Loaded(path) => tracing::info!("已加载设置: {:?}", path),
            LoadStatus::Missing(path) => {
                tracing::info!("设置文件 {:?} 不存在，使用默认设置", path)
            }
            LoadStatus::NoConfigDir => tracing::warn!("无法获取配置目录，使用默认设置"),
            LoadStatus::Invalid { path, error } => {
                tracing::warn!("设置文件 {:?} 无效: {}，使用默认设置", path, error)
            }
        }
    }

    /// 是否使用了默认设置
    pub fn is_default(&self) -> bool {
        !matches!(self, LoadStatus::Loaded(_))
    }
}

/// 设置错误
#[derive(Error, Debug)]
pub enum SettingsError {
    /// 无法获取配置目录
    #[error("Config directory unavailable")]
    NoConfigDir,

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 命令行设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 开局布局
    pub layout: InitialLayout,
    /// 日志级别
    pub log_level: LogLevel,
    /// 每回合提示合法走法
    pub show_hints: bool,
    /// 显示列号
    pub column_header: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: InitialLayout::Standard,
            log_level: LogLevel::default(),
            show_hints: false,
            column_header: true,
        }
    }
}

impl Settings {
    /// 获取设置文件路径（环境变量优先）
    pub fn settings_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Some(PathBuf::from(path));
        }

        dirs::config_dir().map(|mut path| {
            path.push("checkers");
            path.push("settings.json");
            path
        })
    }

    /// 从默认路径加载设置，失败时使用默认值并记录日志
    pub fn load() -> Self {
        let (settings, status) = Self::load_with_status();
        status.log();
        settings
    }

    /// 从默认路径加载设置，不记录日志
    ///
    /// 日志订阅器要用设置里的日志级别初始化，所以加载结果由调用方在初始化后再输出。
    pub fn load_with_status() -> (Self, LoadStatus) {
        let Some(path) = Self::settings_path() else {
            return (Self::default(), LoadStatus::NoConfigDir);
        };

        if !path.exists() {
            return (Self::default(), LoadStatus::Missing(path));
        }

        match Self::load_from(&path) {
            Ok(settings) => (settings, LoadStatus::Loaded(path)),
            Err(e) => (
                Self::default(),
                LoadStatus::Invalid {
                    path,
                    error: e.to_string(),
                },
            ),
        }
    }

    /// 从指定文件加载设置
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 保存设置到默认路径
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// 保存设置到指定文件（自动创建目录）
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            layout: InitialLayout::Overlapping,
            log_level: LogLevel::Debug,
            show_hints: true,
            column_header: false,
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "show_hints": true }"#).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert!(loaded.show_hints);
        assert_eq!(loaded.layout, InitialLayout::Standard);
        assert_eq!(loaded.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(SettingsError::Json(_))
        ));
        assert!(matches!(
            Settings::load_from(&dir.path().join("missing.json")),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_log_level_directives() {
        assert_eq!(LogLevel::Debug.as_str(), "debug");
        assert_eq!(
            LogLevel::Info.directives(),
            vec!["checkers=info", "checkers_cli=info", "checkers_core=info"]
        );
        // 每条指令都能被 tracing 解析
        for directive in LogLevel::default().directives() {
            assert!(directive.parse::<tracing_subscriber::filter::Directive>().is_ok());
        }
    }

    /// 修改环境变量的测试需要串行执行
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// 在 CHECKERS_SETTINGS 指向给定路径期间运行测试
    fn with_settings_env<T>(path: &Path, f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var(SETTINGS_ENV, path);
        let result = f();
        std::env::remove_var(SETTINGS_ENV);
        result
    }

    #[test]
    fn test_settings_path_env_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.json");

        let resolved = with_settings_env(&path, Settings::settings_path);
        assert_eq!(resolved, Some(path));
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            layout: InitialLayout::Overlapping,
            show_hints: true,
            ..Settings::default()
        };

        let (loaded, status) = with_settings_env(&path, || {
            settings.save().unwrap();
            Settings::load_with_status()
        });

        assert_eq!(loaded, settings);
        assert_eq!(status, LoadStatus::Loaded(path.clone()));
        assert_eq!(with_settings_env(&path, Settings::load), settings);
    }

    #[test]
    fn test_load_invalid_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ broken").unwrap();

        let (loaded, status) = with_settings_env(&path, Settings::load_with_status);

        assert_eq!(loaded, Settings::default());
        assert!(matches!(status, LoadStatus::Invalid { .. }));
        assert!(status.is_default());
        assert_eq!(with_settings_env(&path, Settings::load), Settings::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let (loaded, status) = with_settings_env(&path, Settings::load_with_status);

        assert_eq!(loaded, Settings::default());
        assert_eq!(status, LoadStatus::Missing(path));
    }
}

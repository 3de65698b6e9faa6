//! Application configuration module / 应用配置模块
//!
//! Manages application configuration loaded from config.json
//! Creates default config file on first run / 首次运行时创建默认配置文件

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::CategorySettings;

/// Application configuration / 应用配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Demo dataset configuration / 演示数据配置
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// Search configuration / 搜索配置
    #[serde(default)]
    pub search: SearchConfig,
    /// Initially enabled category tabs / 默认开启的分类
    #[serde(default)]
    pub categories: CategorySettings,
}

/// Dataset configuration / 数据配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Number of generated records / 生成记录数
    pub count: i64,
    /// Fixed seed for reproducible data (None = random) / 随机种子
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Search configuration / 搜索配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Debounce delay in milliseconds / 防抖延迟（毫秒）
    pub debounce_ms: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 500 }
    }
}

/// Get the config file path / 获取配置文件路径
fn get_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration from file, or create default if not exists / 加载配置文件，不存在则创建默认配置
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&get_config_path())
}

/// Load configuration from a specific path / 从指定路径加载配置
pub fn load_config_from(config_path: &Path) -> Result<AppConfig> {
    if config_path.exists() {
        // Load existing config / 加载现有配置
        let content = std::fs::read_to_string(config_path)?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    } else {
        // Create default config / 创建默认配置
        let config = AppConfig::default();
        save_config_to(&config, config_path)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        Ok(config)
    }
}

/// Save configuration to file / 保存配置到文件
pub fn save_config_to(config: &AppConfig, config_path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(config_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = load_config_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
        assert_eq!(config.search.debounce_ms, 500);
        assert_eq!(config.dataset.count, 100);
        assert!(config.categories.files && !config.categories.lists);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "dataset": { "count": 12, "seed": 5 } }"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.dataset.count, 12);
        assert_eq!(config.dataset.seed, Some(5));
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn test_round_trip_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = AppConfig::default();
        config.categories.lists = true;
        config.search.debounce_ms = 50;
        save_config_to(&config, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"Lists\": true"));
        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn test_io_failures_are_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing_dir = dir.path().join("missing").join("config.json");
        let err = save_config_to(&AppConfig::default(), &missing_dir).unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        // a directory exists but cannot be read as a file
        assert!(matches!(load_config_from(dir.path()), Err(Error::Io(_))));
        assert!(matches!(load_config_from(&missing_dir), Err(Error::Io(_))));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(load_config_from(&path), Err(Error::Config(_))));
    }
}

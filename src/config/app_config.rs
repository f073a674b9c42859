// ==========================================
// 工位排班基础数据 - 应用配置
// ==========================================
// 职责: 默认配置 + 环境变量覆写
// 环境变量:
// - WORKPLACE_SETUP_DB_PATH: 本地存储数据库路径
// - WORKPLACE_SETUP_SCHEDULER_URL: 排程服务地址
// - WORKPLACE_SETUP_SCHEDULER_TIMEOUT_SECS: 排程请求超时（秒）
// - WORKPLACE_SETUP_LOCALE: 界面语言 (zh-CN / en)
// - WORKPLACE_SETUP_LOG_FORMAT: 日志格式 (pretty / json)
// ==========================================

use std::path::PathBuf;
use std::str::FromStr;

pub mod env_keys {
    pub const DB_PATH: &str = "WORKPLACE_SETUP_DB_PATH";
    pub const SCHEDULER_URL: &str = "WORKPLACE_SETUP_SCHEDULER_URL";
    pub const SCHEDULER_TIMEOUT_SECS: &str = "WORKPLACE_SETUP_SCHEDULER_TIMEOUT_SECS";
    pub const LOCALE: &str = "WORKPLACE_SETUP_LOCALE";
    pub const LOG_FORMAT: &str = "WORKPLACE_SETUP_LOG_FORMAT";
}

/// 默认排程服务地址
pub const DEFAULT_SCHEDULER_URL: &str = "http://localhost:5000/api/schedule";

/// 默认排程请求超时（秒）
pub const DEFAULT_SCHEDULER_TIMEOUT_SECS: u64 = 60;

/// 默认语言
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// 支持的语言（与 locales/ 下的文件对应）
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

// ==========================================
// StorageKeys - 本地通道键名
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// 实体快照
    pub settings: String,
    /// 排程结果（一次性读取）
    pub schedule_result: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            settings: "workplaceSettings".to_string(),
            schedule_result: "scheduleResults".to_string(),
        }
    }
}

// ==========================================
// SchedulerConfig - 排程服务
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SCHEDULER_URL.to_string(),
            timeout_secs: DEFAULT_SCHEDULER_TIMEOUT_SECS,
        }
    }
}

// ==========================================
// LogFormat - 日志格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("未知的日志格式: {}", other)),
        }
    }
}

// ==========================================
// AppConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: String,
    pub scheduler: SchedulerConfig,
    pub storage_keys: StorageKeys,
    pub locale: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: get_default_db_path(),
            scheduler: SchedulerConfig::default(),
            storage_keys: StorageKeys::default(),
            locale: DEFAULT_LOCALE.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// 默认配置 + 进程环境变量覆写
    ///
    /// 配置在日志初始化之前读取，非法值的警告随配置一起返回，由调用方在日志就绪后输出。
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 默认配置 + 指定来源覆写（便于测试）
    ///
    /// 非法值保留默认值，并在返回的警告列表中记录一条。
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut warnings = Vec::new();
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(path) = read(env_keys::DB_PATH) {
            config.db_path = path;
        }

        if let Some(url) = read(env_keys::SCHEDULER_URL) {
            config.scheduler.endpoint = url;
        }

        if let Some(raw) = read(env_keys::SCHEDULER_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.scheduler.timeout_secs = secs,
                _ => warnings.push(format!(
                    "{} 取值无效 ({})，使用默认值 {}",
                    env_keys::SCHEDULER_TIMEOUT_SECS,
                    raw,
                    DEFAULT_SCHEDULER_TIMEOUT_SECS
                )),
            }
        }

        if let Some(locale) = read(env_keys::LOCALE) {
            if SUPPORTED_LOCALES.contains(&locale.as_str()) {
                config.locale = locale;
            } else {
                warnings.push(format!("不支持的语言 {}，使用 {}", locale, DEFAULT_LOCALE));
            }
        }

        if let Some(raw) = read(env_keys::LOG_FORMAT) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => warnings.push(e),
            }
        }

        (config, warnings)
    }
}

/// 获取默认数据库路径
///
/// 优先级: 环境变量 > 用户数据目录 > 当前目录
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var(env_keys::DB_PATH) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./workplace_setup.db");

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录，避免污染正式数据
        #[cfg(debug_assertions)]
        let dir = data_dir.join("workplace-setup-dev");

        #[cfg(not(debug_assertions))]
        let dir = data_dir.join("workplace-setup");

        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("workplace_setup.db");
        }
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let (config, warnings) = AppConfig::from_lookup(|_| None);
        assert!(warnings.is_empty());
        assert_eq!(config.scheduler.endpoint, DEFAULT_SCHEDULER_URL);
        assert_eq!(config.scheduler.timeout_secs, 60);
        assert_eq!(config.storage_keys.settings, "workplaceSettings");
        assert_eq!(config.storage_keys.schedule_result, "scheduleResults");
        assert_eq!(config.locale, "zh-CN");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let (config, warnings) = AppConfig::from_lookup(lookup(&[
            (env_keys::DB_PATH, " /tmp/ws.db "),
            (env_keys::SCHEDULER_URL, "http://scheduler:8080/api/schedule"),
            (env_keys::SCHEDULER_TIMEOUT_SECS, "15"),
            (env_keys::LOCALE, "en"),
            (env_keys::LOG_FORMAT, "JSON"),
        ]));
        assert_eq!(config.db_path, "/tmp/ws.db");
        assert_eq!(config.scheduler.endpoint, "http://scheduler:8080/api/schedule");
        assert_eq!(config.scheduler.timeout_secs, 15);
        assert_eq!(config.locale, "en");
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let (config, warnings) = AppConfig::from_lookup(lookup(&[
            (env_keys::SCHEDULER_TIMEOUT_SECS, "abc"),
            (env_keys::LOCALE, "fr"),
            (env_keys::LOG_FORMAT, "xml"),
        ]));
        assert_eq!(config.scheduler.timeout_secs, DEFAULT_SCHEDULER_TIMEOUT_SECS);
        assert_eq!(config.locale, DEFAULT_LOCALE);
        assert_eq!(config.log_format, LogFormat::Pretty);

        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains(env_keys::SCHEDULER_TIMEOUT_SECS));
        assert!(warnings[1].contains("fr"));
        assert!(warnings[2].contains("xml"));
    }

    #[test]
    fn test_get_default_db_path() {
        let path = get_default_db_path();
        assert!(!path.is_empty());
        assert!(path.ends_with(".db"));
    }
}

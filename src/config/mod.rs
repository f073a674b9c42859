// ==========================================
// 工位排班基础数据 - 配置层
// ==========================================
// 职责: 应用配置（存储路径、排程服务、语言、日志格式）
// ==========================================

pub mod app_config;

// 重导出核心配置
pub use app_config::{
    env_keys, get_default_db_path, AppConfig, LogFormat, SchedulerConfig, StorageKeys,
    DEFAULT_SCHEDULER_URL,
};

// ==========================================
// 工位排班基础数据 - 核心库
// ==========================================
// 职责: 人员/产线/工作站的维护、本地快照、设定档导入导出、
//       排程服务对接与结果分组
// 技术栈: Rust + SQLite + HTTP
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 内存实体集合与本地键值通道
pub mod repository;

// 持久化网关 - 快照、导入导出、排程结果暂存
pub mod persistence;

// 排程服务对接
pub mod scheduler;

// 引擎层 - 只读投影
pub mod engine;

// 配置层
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态组装与命令行
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    Assignment, Person, Preference, ProductionLine, ScheduleResult, Station, StationSetting,
    StationSettings, WorkplaceSnapshot,
};

// 仓储与持久化
pub use persistence::{LoadOutcome, SnapshotGateway};
pub use repository::{EntityStore, KeyValueStore};

// API
pub use api::{ApiError, ApiResult, ScheduleApi, WorkplaceApi};

// 配置
pub use config::AppConfig;

// ==========================================
// 版本信息
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "工位排班基础数据维护";

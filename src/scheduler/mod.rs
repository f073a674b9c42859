// ==========================================
// 工位排班基础数据 - 排程服务对接层
// ==========================================

pub mod client;
pub mod http_client;

pub use client::{ScheduleRequest, SchedulerClient, SchedulerError, SchedulerResult};
pub use http_client::HttpSchedulerClient;

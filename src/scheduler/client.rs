// ==========================================
// 工位排班基础数据 - 排程服务接口
// ==========================================
// 职责: 定义与外部排程服务的一次性请求/响应交换
// 说明: 排程算法由外部服务实现，本系统只负责发送问题与接收分配结果
// ==========================================

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Person, ProductionLine, ScheduleResult, Station};

/// 排程请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub personnel: Vec<Person>,
    pub production_lines: Vec<ProductionLine>,
    pub stations: Vec<Station>,
    pub timestamp: String,
}

/// 排程服务错误
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// 网络/传输失败（无法连接、超时等）
    #[error("排程服务请求失败: {0}")]
    Http(String),

    /// 非 2xx 响应
    #[error("排程计算失败: HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// 响应体无法解析为排程结果
    #[error("排程结果解析失败: {0}")]
    Decode(String),
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// 排程服务客户端
#[async_trait]
pub trait SchedulerClient: Send + Sync {
    /// 提交排程问题并等待结果
    async fn submit(&self, request: &ScheduleRequest) -> SchedulerResult<ScheduleResult>;
}

// ==========================================
// 工位排班基础数据 - 持久化层错误类型
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    /// 内容不是合法的快照（JSON 语法错误或字段类型不符）
    #[error("无效的设定档格式: {0}")]
    InvalidFormat(String),

    /// 缺少必需的集合字段
    #[error("无效的设定档格式: 缺少字段 {0}")]
    MissingCollection(String),

    /// 暂存的排程结果无法解析
    #[error("暂存的排程结果已损坏: {0}")]
    CorruptScheduleResult(String),

    #[error("序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Result 类型别名
pub type PersistenceResult<T> = Result<T, PersistenceError>;

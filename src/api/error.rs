// ==========================================
// 工位排班基础数据 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，将下层错误转换为用户可读的消息
// ==========================================

use crate::i18n::t_with_args;
use crate::persistence::PersistenceError;
use crate::repository::error::RepositoryError;
use crate::scheduler::SchedulerError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 校验与引用错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 持久化错误
    // ==========================================
    /// 设定档格式错误（导入中止，仓储不变）
    #[error("设定档导入失败: {0}")]
    ImportError(String),

    /// 本地存储读写失败
    #[error("存储错误: {0}")]
    StorageError(String),

    // ==========================================
    // 排程服务错误
    // ==========================================
    #[error("排程执行失败: {0}")]
    SchedulerError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => ApiError::NotFound(t_with_args(
                "errors.entity_not_found",
                &[("entity", &entity), ("id", &id)],
            )),
            RepositoryError::DatabaseConnectionError(msg)
            | RepositoryError::LockError(msg)
            | RepositoryError::DatabaseQueryError(msg) => ApiError::StorageError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

// ==========================================
// 从 PersistenceError 转换
// ==========================================
impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::InvalidFormat(_) | PersistenceError::MissingCollection(_) => {
                ApiError::ImportError(err.to_string())
            }
            PersistenceError::CorruptScheduleResult(_) => ApiError::InternalError(err.to_string()),
            PersistenceError::Serialization(e) => ApiError::InternalError(e.to_string()),
            PersistenceError::Storage(e) => ApiError::from(e),
        }
    }
}

impl From<SchedulerError> for ApiError {
    fn from(err: SchedulerError) -> Self {
        ApiError::SchedulerError(err.to_string())
    }
}

impl ApiError {
    /// 错误代码（返回给前端/命令行）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::ImportError(_) => "IMPORT_ERROR",
            ApiError::StorageError(_) => "STORAGE_ERROR",
            ApiError::SchedulerError(_) => "SCHEDULER_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_conversion() {
        let api_err: ApiError = RepositoryError::not_found("ProductionLine", "L001").into();
        match api_err {
            ApiError::NotFound(msg) => {
                assert!(msg.contains("ProductionLine"));
                assert!(msg.contains("L001"));
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }

        let api_err: ApiError = RepositoryError::LockError("poisoned".to_string()).into();
        assert_eq!(api_err.code(), "STORAGE_ERROR");
    }

    #[test]
    fn test_persistence_error_conversion() {
        let api_err: ApiError = PersistenceError::MissingCollection("stations".to_string()).into();
        match api_err {
            ApiError::ImportError(msg) => assert!(msg.contains("stations")),
            other => panic!("Expected ImportError, got {:?}", other),
        }

        let api_err: ApiError =
            PersistenceError::Storage(RepositoryError::DatabaseQueryError("disk".into())).into();
        assert!(matches!(api_err, ApiError::StorageError(_)));

        let api_err: ApiError =
            PersistenceError::CorruptScheduleResult("expected value".to_string()).into();
        assert_eq!(api_err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_scheduler_error_conversion() {
        let api_err: ApiError = SchedulerError::Status {
            status: 500,
            body: r#"{"error":"infeasible"}"#.to_string(),
        }
        .into();
        assert_eq!(api_err.code(), "SCHEDULER_ERROR");
        assert!(api_err.to_string().contains("500"));
    }
}

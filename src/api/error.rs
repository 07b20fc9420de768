// ==========================================
// 诊所医生排班系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换Repository错误为用户友好的错误消息
// ==========================================

use thiserror::Error;

use crate::i18n::{t, t_with_args};
use crate::repository::error::RepositoryError;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    /// 添加区间与已有记录冲突，整体拒绝
    #[error("日期冲突: {0}")]
    Conflict(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 数据访问错误
    // ==========================================
    #[error("数据库错误: {0}")]
    DatabaseError(String),

    #[error("数据库连接失败: {0}")]
    DatabaseConnectionError(String),

    #[error("数据库事务失败: {0}")]
    DatabaseTransactionError(String),

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
// 目的: 将Repository层的技术错误转换为用户友好的业务错误
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::HolidayConflict { date, name, kind } => ApiError::Conflict(
                t_with_args(
                    "holiday.conflict",
                    &[("date", &date), ("name", &name), ("kind", &kind)],
                ),
            ),
            RepositoryError::NotFound { .. } => {
                ApiError::NotFound(t("holiday.remove_not_found"))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::DatabaseTransactionError(msg) => {
                ApiError::DatabaseTransactionError(msg)
            }
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("数据库锁获取失败: {}", msg))
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                // 并发竞争下绕过冲突检查的插入由唯一约束兜底
                ApiError::Conflict(format!("唯一约束违反: {}", msg))
            }
            RepositoryError::FieldValueError { field, message } => {
                ApiError::ValidationError(format!("字段{}错误: {}", field, message))
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_转换带首个冲突日() {
        let repo_err = RepositoryError::HolidayConflict {
            date: "2025-01-01".to_string(),
            name: "元旦".to_string(),
            kind: "holiday".to_string(),
        };
        let api_err: ApiError = repo_err.into();
        match api_err {
            ApiError::Conflict(msg) => {
                assert!(msg.contains("2025-01-01"));
                assert!(msg.contains("元旦"));
            }
            _ => panic!("期望 Conflict"),
        }
    }

    #[test]
    fn test_not_found_转换() {
        let repo_err = RepositoryError::NotFound {
            entity: "Holiday".to_string(),
            date: "2025-06-01".to_string(),
        };
        let api_err: ApiError = repo_err.into();
        assert!(matches!(api_err, ApiError::NotFound(_)));
    }
}

//! 数据集错误类型定义
//!
//! 提供数据集模块的统一错误枚举，支持通过 thiserror 自动转换底层错误。
//! 所有错误最终可转换为 `MgError` 以实现跨层错误传递。

use mg_foundation::MgError;
use thiserror::Error;

/// 数据集模块结果类型别名
pub type DatasetResult<T> = Result<T, DatasetError>;

/// 数据集错误枚举
#[derive(Error, Debug)]
pub enum DatasetError {
    /// JSON 读写失败
    #[error("JSON 读写失败: {path}, 原因: {message}")]
    Json {
        /// 文件路径
        path: String,
        /// 失败原因
        message: String,
    },

    /// 转换产生非有限坐标
    #[error("OID{{{oid}}}: 转换产生非有限坐标")]
    NonFiniteCoordinate {
        /// 记录标识
        oid: i64,
    },

    /// 记录写回失败
    #[error("OID{{{oid}}}: 写回失败, 原因: {message}")]
    RecordUpdate {
        /// 记录标识
        oid: i64,
        /// 失败原因
        message: String,
    },

    /// 游标位置无效（尚未读取任何记录）
    #[error("游标位置无效: 尚未读取记录，无法写回")]
    CursorNotPositioned,

    /// 基础层错误转换
    #[error("基础层错误: {0}")]
    Foundation(#[from] MgError),
}

impl From<DatasetError> for MgError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::Json { path, message } => {
                MgError::serialization(format!("JSON 读写失败 [{path}]: {message}"))
            }
            DatasetError::NonFiniteCoordinate { oid } => {
                MgError::invalid_input(format!("OID{{{oid}}}: 转换产生非有限坐标"))
            }
            DatasetError::RecordUpdate { oid, message } => {
                MgError::internal(format!("OID{{{oid}}}: 写回失败: {message}"))
            }
            DatasetError::CursorNotPositioned => {
                MgError::internal("游标位置无效: 尚未读取记录".to_string())
            }
            DatasetError::Foundation(inner) => inner,
        }
    }
}

// ========================================================================
// 测试
// ========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_message_tags_oid() {
        let err = DatasetError::NonFiniteCoordinate { oid: 42 };
        assert_eq!(err.to_string(), "OID{42}: 转换产生非有限坐标");
    }

    #[test]
    fn test_into_mg_error() {
        let err = DatasetError::Json {
            path: "a.json".into(),
            message: "EOF".into(),
        };
        let mg: MgError = err.into();
        assert!(mg.to_string().contains("a.json"));
    }
}

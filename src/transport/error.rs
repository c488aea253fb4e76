//! 应答传输统一错误处理
//!
//! 提供一致的错误类型定义与转换机制，过期交互是唯一
//! 允许被调用方静默吞掉的错误类别

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应答传输错误类型
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum TransportError {
    /// 交互已过期，平台不再接受应答
    #[error("交互已过期: {context}")]
    Expired { context: String },

    /// 投递失败
    #[error("投递失败: {operation} - {message}")]
    Delivery { operation: String, message: String },

    /// 应答状态不合法（例如未 defer 就尝试编辑）
    #[error("应答状态错误: {operation} - {message}")]
    InvalidState { operation: String, message: String },

    /// 序列化/反序列化错误
    #[error("序列化错误: {message}")]
    Serialization { message: String },
}

impl TransportError {
    /// 创建过期错误
    pub fn expired<S: Into<String>>(context: S) -> Self {
        Self::Expired {
            context: context.into(),
        }
    }

    /// 创建投递错误
    pub fn delivery<S1: Into<String>, S2: Into<String>>(operation: S1, message: S2) -> Self {
        Self::Delivery {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// 创建状态错误
    pub fn invalid_state<S1: Into<String>, S2: Into<String>>(operation: S1, message: S2) -> Self {
        Self::InvalidState {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// 是否为过期交互错误
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }
}

/// 应答传输结果类型
pub type TransportResult<T> = Result<T, TransportError>;

/// 判断应用级错误链中是否为过期交互错误
pub fn is_expired_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<TransportError>()
        .is_some_and(TransportError::is_expired)
}

//! 搜索服务能力定义

use crate::search::types::{SearchResult, SearchSource};
use async_trait::async_trait;
use thiserror::Error;

/// 搜索错误类型
#[derive(Debug, Error, Clone)]
pub enum SearchError {
    /// 搜索节点不可用
    #[error("搜索节点不可用: {message}")]
    Unavailable { message: String },

    /// 请求在传输层失败
    #[error("搜索请求失败: {message}")]
    Transport { message: String },
}

impl SearchError {
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

/// 外部搜索能力
///
/// 延迟无上界；调用方自行负责超时控制。
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(&self, query: &str, source: SearchSource)
        -> Result<SearchResult, SearchError>;
}

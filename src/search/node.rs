//! 搜索节点
//!
//! 包装一个具体的搜索服务实现，并持有节点自身的事件总线。
//! 节点事件（连接、断开、错误）与网关主事件流是两条独立的
//! 订阅通道。

use crate::events::{EventBus, NodeEvent};
use crate::search::service::{SearchError, SearchService};
use crate::search::types::{SearchResult, SearchSource};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// 搜索节点
pub struct SearchNode {
    /// 节点标识
    name: String,

    /// 底层搜索服务
    service: Arc<dyn SearchService>,

    /// 节点自身的事件总线
    events: Arc<EventBus<NodeEvent>>,

    /// 连接状态
    connected: AtomicBool,
}

impl SearchNode {
    /// 创建新的搜索节点
    pub fn new(name: impl Into<String>, service: Arc<dyn SearchService>) -> Self {
        Self {
            name: name.into(),
            service,
            events: Arc::new(EventBus::new()),
            connected: AtomicBool::new(false),
        }
    }

    /// 节点标识
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 节点事件总线
    pub fn events(&self) -> &Arc<EventBus<NodeEvent>> {
        &self.events
    }

    /// 是否已连接
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// 建立连接并广播节点连接事件
    pub fn connect(&self) {
        self.connected.store(true, Ordering::SeqCst);
        debug!("搜索节点已连接: {}", self.name);
        self.events.emit(NodeEvent::Connected {
            node: self.name.clone(),
        });
    }

    /// 断开连接并广播节点断开事件
    pub fn disconnect(&self, reason: impl Into<String>) {
        self.connected.store(false, Ordering::SeqCst);
        self.events.emit(NodeEvent::Disconnected {
            node: self.name.clone(),
            reason: reason.into(),
        });
    }
}

#[async_trait]
impl SearchService for SearchNode {
    async fn search(
        &self,
        query: &str,
        source: SearchSource,
    ) -> Result<SearchResult, SearchError> {
        if !self.is_connected() {
            return Err(SearchError::unavailable(format!(
                "节点 {} 未连接",
                self.name
            )));
        }

        match self.service.search(query, source).await {
            Ok(result) => Ok(result),
            Err(err) => {
                self.events.emit(NodeEvent::Error {
                    node: self.name.clone(),
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }
}

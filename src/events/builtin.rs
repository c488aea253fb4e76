//! 内置事件描述符
//!
//! 网关自身依赖的事件接线：ready 单次通告、interaction_create
//! 持久订阅（交互分发的入口）、以及搜索节点状态日志。

use crate::dispatch::InteractionDispatcher;
use crate::events::loader::StaticEventSource;
use crate::events::types::{
    EventDescriptor, GatewayEvent, GatewayEventHandler, NodeEvent, NodeEventHandler,
};
use crate::utils::AppResult;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

/// ready 事件：启动完成通告（单次订阅）
struct ReadyHandler;

#[async_trait]
impl GatewayEventHandler for ReadyHandler {
    async fn handle(&self, event: Arc<GatewayEvent>) -> AppResult<()> {
        if let GatewayEvent::Ready { username } = event.as_ref() {
            info!("网关已就绪: {}", username);
        }
        Ok(())
    }
}

/// interaction_create 事件：把入站交互转交给分发器
struct InteractionCreateHandler {
    dispatcher: Arc<InteractionDispatcher>,
}

#[async_trait]
impl GatewayEventHandler for InteractionCreateHandler {
    async fn handle(&self, event: Arc<GatewayEvent>) -> AppResult<()> {
        if let GatewayEvent::InteractionCreate(incoming) = event.as_ref() {
            self.dispatcher
                .dispatch(&incoming.interaction, Arc::clone(&incoming.transport))
                .await;
        }
        Ok(())
    }
}

/// 节点状态日志
struct NodeStatusHandler;

#[async_trait]
impl NodeEventHandler for NodeStatusHandler {
    async fn handle(&self, event: Arc<NodeEvent>) -> AppResult<()> {
        match event.as_ref() {
            NodeEvent::Connected { node } => info!("搜索节点已连接: {}", node),
            NodeEvent::Disconnected { node, reason } => {
                warn!("搜索节点已断开: {} - {}", node, reason)
            }
            NodeEvent::Error { node, message } => error!("搜索节点错误: {} - {}", node, message),
        }
        Ok(())
    }
}

/// 构建内置事件描述符来源
pub fn builtin_event_source(dispatcher: Arc<InteractionDispatcher>) -> StaticEventSource {
    let status = Arc::new(NodeStatusHandler);
    StaticEventSource::new(vec![
        EventDescriptor::gateway("ready", true, Arc::new(ReadyHandler)),
        EventDescriptor::gateway(
            "interaction_create",
            false,
            Arc::new(InteractionCreateHandler { dispatcher }),
        ),
        EventDescriptor::node("connected", false, status.clone()),
        EventDescriptor::node("disconnected", false, status.clone()),
        EventDescriptor::node("error", false, status),
    ])
}

//! 事件类型与描述符定义

use crate::events::bus::EventKind;
use crate::interaction::Interaction;
use crate::transport::ReplyTransport;
use crate::utils::AppResult;
use async_trait::async_trait;
use std::sync::Arc;

/// 一条待分发的入站交互及其应答句柄
#[derive(Clone)]
pub struct IncomingInteraction {
    pub interaction: Interaction,
    pub transport: Arc<dyn ReplyTransport>,
}

/// 网关主事件
#[derive(Clone)]
pub enum GatewayEvent {
    /// 网关完成启动
    Ready { username: String },

    /// 收到入站交互
    InteractionCreate(IncomingInteraction),
}

impl EventKind for GatewayEvent {
    fn event_name(&self) -> &'static str {
        match self {
            GatewayEvent::Ready { .. } => "ready",
            GatewayEvent::InteractionCreate(_) => "interaction_create",
        }
    }
}

/// 搜索节点事件
#[derive(Debug, Clone)]
pub enum NodeEvent {
    /// 节点连接建立
    Connected { node: String },

    /// 节点连接断开
    Disconnected { node: String, reason: String },

    /// 节点侧错误
    Error { node: String, message: String },
}

impl EventKind for NodeEvent {
    fn event_name(&self) -> &'static str {
        match self {
            NodeEvent::Connected { .. } => "connected",
            NodeEvent::Disconnected { .. } => "disconnected",
            NodeEvent::Error { .. } => "error",
        }
    }
}

/// 网关事件处理能力
#[async_trait]
pub trait GatewayEventHandler: Send + Sync {
    async fn handle(&self, event: Arc<GatewayEvent>) -> AppResult<()>;
}

/// 节点事件处理能力
#[async_trait]
pub trait NodeEventHandler: Send + Sync {
    async fn handle(&self, event: Arc<NodeEvent>) -> AppResult<()>;
}

/// 事件动作
///
/// 在类型层面区分事件来源：网关主总线或搜索节点总线。
#[derive(Clone)]
pub enum EventAction {
    Gateway(Arc<dyn GatewayEventHandler>),
    Node(Arc<dyn NodeEventHandler>),
}

/// 事件描述符
///
/// `name` 为 None 的描述符会在加载时被告警并跳过。
#[derive(Clone)]
pub struct EventDescriptor {
    /// 订阅的事件名称
    pub name: Option<String>,

    /// 单次订阅（首次投递后即取消）
    pub once: bool,

    /// 事件动作及其来源
    pub action: EventAction,
}

impl EventDescriptor {
    /// 创建网关事件描述符
    pub fn gateway(
        name: impl Into<String>,
        once: bool,
        handler: Arc<dyn GatewayEventHandler>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            once,
            action: EventAction::Gateway(handler),
        }
    }

    /// 创建节点事件描述符
    pub fn node(name: impl Into<String>, once: bool, handler: Arc<dyn NodeEventHandler>) -> Self {
        Self {
            name: Some(name.into()),
            once,
            action: EventAction::Node(handler),
        }
    }
}

/// 事件描述符来源
pub trait EventSource: Send + Sync {
    fn discover(&self) -> Vec<EventDescriptor>;
}

//! 事件订阅系统
//!
//! 提供网关主事件总线与搜索节点事件总线共用的订阅模型，
//! 以及启动期的事件描述符加载器。

mod builtin;
mod bus;
mod loader;
mod types;

pub use builtin::builtin_event_source;
pub use bus::{EventBus, EventKind};
pub use loader::{load_events, EventLoadReport, StaticEventSource};
pub use types::{
    EventAction, EventDescriptor, EventSource, GatewayEvent, GatewayEventHandler,
    IncomingInteraction, NodeEvent, NodeEventHandler,
};

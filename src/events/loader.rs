//! 事件订阅加载器
//!
//! 启动期把事件描述符逐个接到对应的总线上：网关来源接主总线，
//! 节点来源接搜索节点自身的总线。缺少名称的描述符告警后跳过，
//! 加载过程不会因单个坏描述符中断。

use crate::events::bus::EventBus;
use crate::events::types::{
    EventAction, EventDescriptor, EventSource, GatewayEvent, NodeEvent,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// 事件加载结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventLoadReport {
    /// 成功接线的订阅数
    pub subscribed: usize,

    /// 被跳过的坏描述符数
    pub skipped: usize,
}

/// 静态事件描述符来源
#[derive(Default)]
pub struct StaticEventSource {
    descriptors: Vec<EventDescriptor>,
}

impl StaticEventSource {
    pub fn new(descriptors: Vec<EventDescriptor>) -> Self {
        Self { descriptors }
    }

    pub fn push(&mut self, descriptor: EventDescriptor) {
        self.descriptors.push(descriptor);
    }
}

impl EventSource for StaticEventSource {
    fn discover(&self) -> Vec<EventDescriptor> {
        self.descriptors.clone()
    }
}

/// 加载事件订阅
///
/// 订阅回调把异步处理逻辑派发到独立任务，事件参数原样转发；
/// 单次订阅通过回调返回 false 在首次投递后由总线移除。
pub fn load_events(
    source: &dyn EventSource,
    gateway_bus: &Arc<EventBus<GatewayEvent>>,
    node_bus: &Arc<EventBus<NodeEvent>>,
) -> EventLoadReport {
    let mut report = EventLoadReport::default();

    for descriptor in source.discover() {
        let Some(name) = descriptor.name else {
            warn!("事件描述符缺少 name 字段，已跳过");
            report.skipped += 1;
            continue;
        };

        let once = descriptor.once;
        match descriptor.action {
            EventAction::Gateway(handler) => {
                let event_name = name.clone();
                gateway_bus.subscribe(&name, move |event| {
                    let handler = Arc::clone(&handler);
                    let event = Arc::clone(event);
                    let event_name = event_name.clone();
                    tokio::spawn(async move {
                        if let Err(err) = handler.handle(event).await {
                            error!("事件 {} 处理失败: {}", event_name, err);
                        }
                    });
                    !once
                });
            }
            EventAction::Node(handler) => {
                let event_name = name.clone();
                node_bus.subscribe(&name, move |event| {
                    let handler = Arc::clone(&handler);
                    let event = Arc::clone(event);
                    let event_name = event_name.clone();
                    tokio::spawn(async move {
                        if let Err(err) = handler.handle(event).await {
                            error!("节点事件 {} 处理失败: {}", event_name, err);
                        }
                    });
                    !once
                });
            }
        }
        report.subscribed += 1;
    }

    info!("事件订阅完成: {} 个事件", report.subscribed);
    report
}

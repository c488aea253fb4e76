//! 事件总线
//!
//! 订阅者以回调形式注册，回调返回 false 即在本次投递后被移除，
//! 单次订阅与持久订阅共用同一条路径。回调内 panic 的订阅者
//! 同样会被清理，不影响其余订阅者。

use parking_lot::RwLock;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, error, trace};

/// 可投递到总线上的事件
pub trait EventKind: Send + Sync + 'static {
    /// 事件名称，订阅按名称匹配
    fn event_name(&self) -> &'static str;
}

/// 订阅者回调函数类型
///
/// 返回 true 保持订阅，返回 false 在本次投递后取消订阅。
pub type EventCallback<E> = Box<dyn Fn(&Arc<E>) -> bool + Send + Sync>;

struct EventSubscription<E> {
    event: String,
    callback: EventCallback<E>,
}

/// 事件总线
pub struct EventBus<E: EventKind> {
    /// 订阅ID -> 订阅记录
    subscribers: RwLock<HashMap<usize, EventSubscription<E>>>,

    /// 下一个订阅ID生成器
    next_subscriber_id: AtomicUsize,
}

impl<E: EventKind> EventBus<E> {
    /// 创建新的事件总线
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
            next_subscriber_id: AtomicUsize::new(1),
        }
    }

    /// 订阅指定名称的事件
    pub fn subscribe<F>(&self, event: &str, callback: F) -> usize
    where
        F: Fn(&Arc<E>) -> bool + Send + Sync + 'static,
    {
        let subscriber_id = self.next_subscriber_id.fetch_add(1, Ordering::SeqCst);
        self.subscribers.write().insert(
            subscriber_id,
            EventSubscription {
                event: event.to_string(),
                callback: Box::new(callback),
            },
        );
        debug!("添加订阅者: {} (事件: {})", subscriber_id, event);
        subscriber_id
    }

    /// 取消订阅
    pub fn unsubscribe(&self, subscriber_id: usize) -> bool {
        let removed = self.subscribers.write().remove(&subscriber_id).is_some();
        if removed {
            debug!("移除订阅者: {}", subscriber_id);
        }
        removed
    }

    /// 向所有匹配的订阅者投递事件
    pub fn emit(&self, event: E) {
        let event = Arc::new(event);
        let mut dead_subscribers = Vec::new();

        {
            let subscribers = self.subscribers.read();
            for (&subscriber_id, subscription) in subscribers.iter() {
                if subscription.event != event.event_name() {
                    continue;
                }

                match catch_unwind(AssertUnwindSafe(|| (subscription.callback)(&event))) {
                    Ok(true) => {
                        trace!("订阅者 {} 处理事件成功", subscriber_id);
                    }
                    Ok(false) => {
                        debug!("订阅者 {} 请求取消订阅", subscriber_id);
                        dead_subscribers.push(subscriber_id);
                    }
                    Err(_) => {
                        error!("订阅者 {} 回调panic", subscriber_id);
                        dead_subscribers.push(subscriber_id);
                    }
                }
            }
        }

        if !dead_subscribers.is_empty() {
            let mut subscribers = self.subscribers.write();
            for subscriber_id in dead_subscribers {
                subscribers.remove(&subscriber_id);
                debug!("清理订阅者: {}", subscriber_id);
            }
        }
    }

    /// 当前订阅者数量
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}

impl<E: EventKind> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

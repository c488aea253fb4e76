//! Resona 交互网关后端
//!
//! 接收外部交互来源的命令与自动补全请求，路由到注册表中的
//! 处理器；自动补全在固定截止时间内应答，背后是有界的定时
//! 过期缓存与对慢速搜索节点的竞速。主要组成：
//! - 命令注册表与启动期加载
//! - 事件订阅系统（网关总线 + 搜索节点总线）
//! - 交互分发与顶层失败边界
//! - 自动补全缓存协调器与后台清扫

// 模块声明
pub mod autocomplete; // 自动补全缓存协调模块
pub mod commands; // 内置命令模块
pub mod config; // 统一配置系统模块
pub mod dispatch; // 交互分发模块
pub mod events; // 事件订阅系统模块
pub mod health; // 存活检测端点模块
pub mod interaction; // 交互数据模型模块
pub mod registry; // 命令注册表模块
pub mod search; // 外部搜索协作方接口模块
pub mod transport; // 应答传输边界模块
pub mod utils; // 工具和错误处理模块

use crate::autocomplete::{spawn_sweeper, AutocompleteCoordinator, SuggestionCache};
use crate::config::GatewayConfig;
use crate::dispatch::InteractionDispatcher;
use crate::events::{
    builtin_event_source, load_events, EventBus, GatewayEvent, IncomingInteraction,
};
use crate::interaction::Interaction;
use crate::registry::{load_commands, CommandRegistry};
use crate::search::{SearchNode, SearchService};
use crate::transport::ReplyTransport;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// 网关组合根
///
/// 持有分发表、事件总线、搜索节点与自动补全缓存，负责把
/// 入站交互投递到主事件总线。
pub struct Gateway {
    registry: Arc<CommandRegistry>,
    events: Arc<EventBus<GatewayEvent>>,
    node: Arc<SearchNode>,
    cache: Arc<SuggestionCache>,
    sweeper: JoinHandle<()>,
    shutdown: CancellationToken,
}

impl Gateway {
    /// 按配置装配网关
    ///
    /// 装配顺序：缓存与协调器 → 搜索节点 → 内置命令注册表 →
    /// 分发器 → 内置事件接线 → 后台清扫任务。
    pub fn setup(config: &GatewayConfig, service: Arc<dyn SearchService>) -> Self {
        let engine_config = config.autocomplete.engine_config();

        let cache = Arc::new(SuggestionCache::new(
            engine_config.max_cache_entries,
            engine_config.cache_ttl,
        ));
        let coordinator = Arc::new(AutocompleteCoordinator::new(
            Arc::clone(&cache),
            engine_config.clone(),
        ));

        let node = Arc::new(SearchNode::new(config.node.name.clone(), service));

        let plugin_source =
            commands::builtin_plugin_source(Arc::clone(&node), Arc::clone(&coordinator));
        let registry = Arc::new(load_commands(&plugin_source));

        let dispatcher = Arc::new(InteractionDispatcher::new(Arc::clone(&registry)));

        let events: Arc<EventBus<GatewayEvent>> = Arc::new(EventBus::new());
        let event_source = builtin_event_source(dispatcher);
        load_events(&event_source, &events, node.events());

        let shutdown = CancellationToken::new();
        let sweeper = spawn_sweeper(
            Arc::clone(&cache),
            engine_config.sweep_interval,
            shutdown.clone(),
        );

        Self {
            registry,
            events,
            node,
            cache,
            sweeper,
            shutdown,
        }
    }

    /// 命令分发表
    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// 主事件总线
    pub fn events(&self) -> &Arc<EventBus<GatewayEvent>> {
        &self.events
    }

    /// 搜索节点
    pub fn node(&self) -> &Arc<SearchNode> {
        &self.node
    }

    /// 建议缓存
    pub fn cache(&self) -> &Arc<SuggestionCache> {
        &self.cache
    }

    /// 广播启动完成事件
    pub fn announce_ready(&self, username: impl Into<String>) {
        self.events.emit(GatewayEvent::Ready {
            username: username.into(),
        });
    }

    /// 投递一条入站交互
    pub fn handle(&self, interaction: Interaction, transport: Arc<dyn ReplyTransport>) {
        self.events
            .emit(GatewayEvent::InteractionCreate(IncomingInteraction {
                interaction,
                transport,
            }));
    }

    /// 停止后台任务并断开节点
    pub async fn shutdown(self) {
        self.shutdown.cancel();
        let _ = self.sweeper.await;
        self.node.disconnect("网关关闭");
    }
}

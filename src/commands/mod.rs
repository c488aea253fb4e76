//! 内置命令模块
//!
//! 命令的业务逻辑（队列、播放控制等）不在网关范围内，这里只
//! 提供随网关一起发布的基础命令集，并给出静态注册列表。

mod ping;
mod play;

pub use ping::PingCommand;
pub use play::PlayCommand;

use crate::autocomplete::AutocompleteCoordinator;
use crate::registry::StaticPluginSource;
use crate::search::SearchNode;
use std::sync::Arc;

/// 构建内置命令的静态注册列表
pub fn builtin_plugin_source(
    node: Arc<SearchNode>,
    coordinator: Arc<AutocompleteCoordinator>,
) -> StaticPluginSource {
    StaticPluginSource::new()
        .with("music", PlayCommand::new(node, coordinator).into_descriptor())
        .with("utility", PingCommand::new().into_descriptor())
}

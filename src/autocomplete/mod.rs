//! 自动补全缓存协调模块
//!
//! 网关的核心算法所在：有界的定时过期缓存，加上对慢速外部搜索
//! 的截止时间竞速，保证每个自动补全请求恰好收到一次应答。

mod cache;
mod coordinator;
mod sweeper;
mod types;

pub use cache::{SuggestionCache, SweepReport};
pub use coordinator::AutocompleteCoordinator;
pub use sweeper::spawn_sweeper;
pub use types::{AutocompleteConfig, Placeholder, MAX_SUGGESTIONS};

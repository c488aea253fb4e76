//! 缓存后台清扫任务

use crate::autocomplete::cache::SuggestionCache;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// 启动后台清扫任务
///
/// 独立于任何单次请求，按固定间隔执行 [`SuggestionCache::sweep`]。
/// 通过取消令牌优雅退出。
pub fn spawn_sweeper(
    cache: Arc<SuggestionCache>,
    interval: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // interval 的首个 tick 立即完成，跳过以保证首轮清扫发生在一个完整间隔之后
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    debug!("缓存清扫任务退出");
                    break;
                }
                _ = ticker.tick() => {
                    let report = cache.sweep();
                    if report.expired_removed > 0 || report.evicted > 0 {
                        debug!(
                            "缓存清扫: 过期 {} 项, 淘汰 {} 项, 剩余 {} 项",
                            report.expired_removed, report.evicted, report.remaining
                        );
                    }
                }
            }
        }
    })
}

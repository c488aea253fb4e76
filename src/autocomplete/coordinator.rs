//! 自动补全协调器
//!
//! 对每次请求执行固定顺序的决策流程：前置条件门 → 空查询门 →
//! 缓存查找 → 搜索与截止时间竞速。所有出口都经过同一个
//! "至多一次应答" 守卫，无论有多少条代码路径尝试应答，
//! 请求者恰好收到一次建议列表。

use crate::autocomplete::cache::{normalize_key, SuggestionCache};
use crate::autocomplete::types::{AutocompleteConfig, Placeholder, MAX_SUGGESTIONS};
use crate::interaction::SuggestionItem;
use crate::search::{SearchResult, SearchResultKind, SearchService, SearchSource};
use crate::transport::{is_expired_error, ReplyTransport};
use crate::utils::AppResult;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, error, warn};

/// 应答守卫
///
/// 持有 responded 标志与请求起始时刻。`respond` 在标志已置位
/// 或已超出截止时间时退化为空操作；过期交互的投递错误在此
/// 吞掉，其余投递错误向上传递。
struct RespondGuard<'a> {
    transport: &'a dyn ReplyTransport,
    deadline: Duration,
    started: Instant,
    responded: AtomicBool,
}

impl<'a> RespondGuard<'a> {
    fn new(transport: &'a dyn ReplyTransport, deadline: Duration) -> Self {
        Self {
            transport,
            deadline,
            started: Instant::now(),
            responded: AtomicBool::new(false),
        }
    }

    /// 剩余时间预算
    fn remaining(&self) -> Duration {
        self.deadline.saturating_sub(self.started.elapsed())
    }

    fn has_responded(&self) -> bool {
        self.responded.load(Ordering::SeqCst)
    }

    /// 尝试投递建议列表，同一请求至多生效一次
    async fn respond(&self, options: Vec<SuggestionItem>) -> AppResult<()> {
        if self.responded.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        if self.started.elapsed() >= self.deadline {
            warn!("自动补全已超出截止时间，跳过应答");
            return Ok(());
        }

        match self.transport.respond_suggestions(&options).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_expired() => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// 自动补全协调器
pub struct AutocompleteCoordinator {
    cache: Arc<SuggestionCache>,
    config: AutocompleteConfig,
}

impl AutocompleteCoordinator {
    /// 创建新的协调器
    pub fn new(cache: Arc<SuggestionCache>, config: AutocompleteConfig) -> Self {
        Self { cache, config }
    }

    /// 共享的建议缓存
    pub fn cache(&self) -> &Arc<SuggestionCache> {
        &self.cache
    }

    /// 处理一次自动补全请求
    ///
    /// `precondition` 为请求级前置条件（例如请求者是否在语音
    /// 会话中）；不满足时直接应答占位建议，不触达缓存与搜索。
    pub async fn suggest(
        &self,
        query: &str,
        precondition: impl FnOnce() -> bool,
        search: &dyn SearchService,
        source: SearchSource,
        transport: &dyn ReplyTransport,
    ) -> AppResult<()> {
        let guard = RespondGuard::new(transport, self.config.deadline);

        match self.run(query, precondition, search, source, &guard).await {
            Ok(()) => Ok(()),
            Err(err) => {
                // 过期的交互不算应用错误，静默结束
                if is_expired_error(&err) {
                    return Ok(());
                }
                error!("自动补全处理失败: {}", err);
                if !guard.has_responded() {
                    let _ = guard.respond(vec![Placeholder::Error.suggestion()]).await;
                }
                Ok(())
            }
        }
    }

    async fn run(
        &self,
        query: &str,
        precondition: impl FnOnce() -> bool,
        search: &dyn SearchService,
        source: SearchSource,
        guard: &RespondGuard<'_>,
    ) -> AppResult<()> {
        if !precondition() {
            return guard
                .respond(vec![Placeholder::JoinVoice.suggestion()])
                .await;
        }

        let key = normalize_key(query);
        if key.is_empty() {
            return guard
                .respond(vec![Placeholder::StartTyping.suggestion()])
                .await;
        }

        if let Some(options) = self.cache.get(query) {
            debug!("自动补全缓存命中: '{}'", key);
            return guard.respond(options).await;
        }

        // 搜索与剩余时间预算竞速；超时即丢弃搜索（future 被取消），
        // 缓存不写入
        let result = match timeout(guard.remaining(), search.search(query, source)).await {
            Err(_) => {
                warn!("自动补全搜索超时: '{}'", key);
                return guard.respond(vec![Placeholder::Timeout.suggestion()]).await;
            }
            Ok(Err(err)) => return Err(err.into()),
            Ok(Ok(result)) => result,
        };

        if result.is_empty() {
            return guard
                .respond(vec![Placeholder::NoResults.suggestion()])
                .await;
        }

        let options = build_suggestions(&result, query);
        self.cache.insert(query, options.clone());
        guard.respond(options).await
    }
}

/// 把搜索结果映射为建议列表
///
/// 歌单折叠为一条摘要建议，取值回传原始查询；条目列表至多取
/// 25 项，显示名为 "标题 - 作者"，取值为曲目规范化标识。
fn build_suggestions(result: &SearchResult, query: &str) -> Vec<SuggestionItem> {
    match result.kind {
        SearchResultKind::Playlist => {
            let title = result
                .playlist
                .as_ref()
                .map(|playlist| playlist.title.as_str())
                .unwrap_or("Unknown");
            vec![SuggestionItem::new(
                format!("📑 Playlist: {} ({} tracks)", title, result.tracks.len()),
                query,
            )]
        }
        SearchResultKind::Tracks => result
            .tracks
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|track| {
                SuggestionItem::new(format!("{} - {}", track.title, track.author), &track.uri)
            })
            .collect(),
    }
}

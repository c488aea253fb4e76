//! 本地开发用搜索服务
//!
//! 不访问任何外部节点，根据查询串合成确定性的假结果，
//! 用于本地驱动自动补全链路。

use crate::search::service::{SearchError, SearchService};
use crate::search::types::{SearchResult, SearchSource, Track};
use async_trait::async_trait;
use std::time::Duration;

/// 本地合成搜索服务
pub struct LocalSearchService {
    /// 模拟的节点延迟
    latency: Duration,
}

impl LocalSearchService {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(80),
        }
    }
}

impl Default for LocalSearchService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchService for LocalSearchService {
    async fn search(
        &self,
        query: &str,
        source: SearchSource,
    ) -> Result<SearchResult, SearchError> {
        tokio::time::sleep(self.latency).await;

        let query = query.trim();
        if query.eq_ignore_ascii_case("nothing") {
            return Ok(SearchResult::empty());
        }

        // 以 "playlist:" 开头的查询合成歌单结果，便于本地验证集合分支
        if let Some(title) = query.strip_prefix("playlist:") {
            let tracks = (1..=5)
                .map(|index| Track {
                    title: format!("{} #{}", title.trim(), index),
                    author: "Local Library".to_string(),
                    uri: format!("local://playlist/{}/{}", title.trim(), index),
                    duration_ms: 180_000,
                })
                .collect();
            return Ok(SearchResult::playlist(title.trim(), tracks));
        }

        let tracks = (1..=5)
            .map(|index| Track {
                title: format!("{} (take {})", query, index),
                author: format!("{} Artist", source.hint()),
                uri: format!("local://track/{}/{}", query, index),
                duration_ms: 200_000 + index as u64 * 1_000,
            })
            .collect();
        Ok(SearchResult::tracks(tracks))
    }
}

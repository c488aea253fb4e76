//! 自动补全协调器功能测试
//!
//! 覆盖应答恰好一次保证、截止时间竞速、各占位分支与缓存交互。

#[path = "../test_utils/mod.rs"]
mod test_utils;

use gateway_lib::autocomplete::{
    AutocompleteConfig, AutocompleteCoordinator, Placeholder, SuggestionCache,
};
use gateway_lib::search::SearchSource;
use std::sync::Arc;
use std::time::Duration;
use test_utils::{RecordingTransport, ScriptedSearchService, SearchScript};
use tokio_test::assert_ok;

fn test_config() -> AutocompleteConfig {
    AutocompleteConfig {
        cache_ttl: Duration::from_secs(30),
        max_cache_entries: 100,
        deadline: Duration::from_millis(500),
        sweep_interval: Duration::from_secs(60),
    }
}

fn coordinator_with(config: AutocompleteConfig) -> AutocompleteCoordinator {
    let cache = Arc::new(SuggestionCache::new(
        config.max_cache_entries,
        config.cache_ttl,
    ));
    AutocompleteCoordinator::new(cache, config)
}

#[tokio::test]
async fn test_precondition_failure_bypasses_cache_and_search() {
    let coordinator = coordinator_with(test_config());
    let search = ScriptedSearchService::new(SearchScript::Tracks(3));
    let transport = RecordingTransport::new();

    let result = coordinator
        .suggest("imagine", || false, &search, SearchSource::default(), &transport)
        .await;

    assert_ok!(result);
    assert_eq!(search.call_count(), 0);

    let batches = transport.suggestion_batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 1);
    assert_eq!(batches[0][0].value, Placeholder::JoinVoice.value());
}

#[tokio::test]
async fn test_empty_query_responds_placeholder() {
    let coordinator = coordinator_with(test_config());
    let search = ScriptedSearchService::new(SearchScript::Tracks(3));
    let transport = RecordingTransport::new();

    let result = coordinator
        .suggest("   ", || true, &search, SearchSource::default(), &transport)
        .await;

    assert_ok!(result);
    assert_eq!(search.call_count(), 0);

    let batches = transport.suggestion_batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0][0].value, Placeholder::StartTyping.value());
}

#[tokio::test]
async fn test_results_are_cached_and_reused_across_normalized_queries() {
    let coordinator = coordinator_with(test_config());
    let search = ScriptedSearchService::new(SearchScript::Tracks(3));

    let first = RecordingTransport::new();
    assert_ok!(
        coordinator
            .suggest("Imagine", || true, &search, SearchSource::default(), &first)
            .await
    );

    // 仅大小写与空白不同的后续查询命中缓存，不再触发搜索
    let second = RecordingTransport::new();
    assert_ok!(
        coordinator
            .suggest("  imagine  ", || true, &search, SearchSource::default(), &second)
            .await
    );

    assert_eq!(search.call_count(), 1);
    assert_eq!(
        first.suggestion_batches()[0],
        second.suggestion_batches()[0]
    );
}

#[tokio::test]
async fn test_deadline_race_timeout_responds_once_and_skips_cache() {
    let mut config = test_config();
    config.deadline = Duration::from_millis(100);
    let coordinator = coordinator_with(config);

    let search = ScriptedSearchService::with_delay(
        SearchScript::Tracks(3),
        Duration::from_millis(400),
    );
    let transport = RecordingTransport::new();

    let started = std::time::Instant::now();
    assert_ok!(
        coordinator
            .suggest("imagine", || true, &search, SearchSource::default(), &transport)
            .await
    );
    // 截止时间先到：应答在 deadline 附近返回，不等搜索完成
    assert!(started.elapsed() < Duration::from_millis(350));

    let batches = transport.suggestion_batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0][0].value, Placeholder::Timeout.value());

    // 等到搜索原本会完成的时刻之后，仍然只有一次应答，缓存无写入
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(transport.suggestion_batches().len(), 1);
    assert!(coordinator.cache().is_empty());
}

#[tokio::test]
async fn test_empty_search_result_not_cached() {
    let coordinator = coordinator_with(test_config());
    let search = ScriptedSearchService::new(SearchScript::Empty);
    let transport = RecordingTransport::new();

    assert_ok!(
        coordinator
            .suggest("unknown song", || true, &search, SearchSource::default(), &transport)
            .await
    );

    let batches = transport.suggestion_batches();
    assert_eq!(batches[0][0].value, Placeholder::NoResults.value());
    assert!(coordinator.cache().is_empty());
}

#[tokio::test]
async fn test_playlist_result_collapses_to_single_summary() {
    let coordinator = coordinator_with(test_config());
    let search = ScriptedSearchService::new(SearchScript::Playlist {
        title: "Chill Mix".to_string(),
        tracks: 12,
    });
    let transport = RecordingTransport::new();

    assert_ok!(
        coordinator
            .suggest("chill", || true, &search, SearchSource::default(), &transport)
            .await
    );

    let batches = transport.suggestion_batches();
    assert_eq!(batches[0].len(), 1);
    assert!(batches[0][0]
        .display_name
        .contains("📑 Playlist: Chill Mix (12 tracks)"));
    // 歌单摘要的取值回传原始查询
    assert_eq!(batches[0][0].value, "chill");

    // 摘要同样写入缓存
    let second = RecordingTransport::new();
    assert_ok!(
        coordinator
            .suggest("chill", || true, &search, SearchSource::default(), &second)
            .await
    );
    assert_eq!(search.call_count(), 1);
}

#[tokio::test]
async fn test_track_suggestions_bounded_to_25_and_100_chars() {
    let coordinator = coordinator_with(test_config());
    let long_query = "a".repeat(150);
    let search = ScriptedSearchService::new(SearchScript::Tracks(40));
    let transport = RecordingTransport::new();

    assert_ok!(
        coordinator
            .suggest(&long_query, || true, &search, SearchSource::default(), &transport)
            .await
    );

    let batch = &transport.suggestion_batches()[0];
    assert_eq!(batch.len(), 25);
    for item in batch {
        assert!(item.display_name.chars().count() <= 100);
    }
}

#[tokio::test]
async fn test_search_error_falls_back_to_error_placeholder() {
    let coordinator = coordinator_with(test_config());
    let search = ScriptedSearchService::new(SearchScript::Fail);
    let transport = RecordingTransport::new();

    assert_ok!(
        coordinator
            .suggest("imagine", || true, &search, SearchSource::default(), &transport)
            .await
    );

    let batches = transport.suggestion_batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0][0].value, Placeholder::Error.value());
    assert!(coordinator.cache().is_empty());
}

#[tokio::test]
async fn test_expired_transport_is_swallowed() {
    let coordinator = coordinator_with(test_config());
    let search = ScriptedSearchService::new(SearchScript::Tracks(3));
    let transport = RecordingTransport::expired();

    let result = coordinator
        .suggest("imagine", || true, &search, SearchSource::default(), &transport)
        .await;

    // 过期交互不算错误，也不会再尝试兜底应答
    assert_ok!(result);
    assert!(transport.suggestion_batches().is_empty());
}

#[tokio::test]
async fn test_ttl_expiry_triggers_fresh_search() {
    let mut config = test_config();
    config.cache_ttl = Duration::from_millis(100);
    let cache = Arc::new(SuggestionCache::new(config.max_cache_entries, config.cache_ttl));
    let coordinator = AutocompleteCoordinator::new(cache, config);
    let search = ScriptedSearchService::new(SearchScript::Tracks(3));

    // t=0: 未命中，执行搜索并缓存
    let transport = RecordingTransport::new();
    assert_ok!(
        coordinator
            .suggest("imagine", || true, &search, SearchSource::default(), &transport)
            .await
    );
    assert_eq!(search.call_count(), 1);

    // TTL 内重复查询：命中缓存
    tokio::time::sleep(Duration::from_millis(30)).await;
    let transport = RecordingTransport::new();
    assert_ok!(
        coordinator
            .suggest("imagine", || true, &search, SearchSource::default(), &transport)
            .await
    );
    assert_eq!(search.call_count(), 1);

    // TTL 过后：按未命中处理，触发新搜索
    tokio::time::sleep(Duration::from_millis(150)).await;
    let transport = RecordingTransport::new();
    assert_ok!(
        coordinator
            .suggest("imagine", || true, &search, SearchSource::default(), &transport)
            .await
    );
    assert_eq!(search.call_count(), 2);
}

//! 建议缓存模块
//!
//! 以规范化查询串为键的有界缓存。条目自创建时刻起 TTL 内有效，
//! 命中不续期；读到过期条目按未命中处理但不就地删除，删除
//! 统一由后台清扫完成。

use crate::interaction::SuggestionItem;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// 规范化缓存键：去除首尾空白并小写化
pub(crate) fn normalize_key(query: &str) -> String {
    query.trim().to_lowercase()
}

/// 缓存项
#[derive(Debug, Clone)]
struct CacheEntry {
    /// 缓存的建议列表
    options: Vec<SuggestionItem>,
    /// 创建时间
    created_at: Instant,
}

/// 一次清扫的统计结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// 因过期移除的条目数
    pub expired_removed: usize,

    /// 因超出容量淘汰的条目数
    pub evicted: usize,

    /// 清扫后剩余条目数
    pub remaining: usize,
}

/// 建议缓存
pub struct SuggestionCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    max_entries: usize,
}

impl SuggestionCache {
    /// 创建新的建议缓存
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            max_entries,
        }
    }

    /// 查找未过期的缓存条目
    ///
    /// 过期条目视作未命中，但留给后台清扫删除。
    pub fn get(&self, query: &str) -> Option<Vec<SuggestionItem>> {
        let key = normalize_key(query);
        let entries = self.entries.read();
        let entry = entries.get(&key)?;
        if entry.created_at.elapsed() < self.ttl {
            Some(entry.options.clone())
        } else {
            None
        }
    }

    /// 写入缓存条目（同键覆盖，创建时间重置为当前时刻）
    pub fn insert(&self, query: &str, options: Vec<SuggestionItem>) {
        let key = normalize_key(query);
        self.entries.write().insert(
            key,
            CacheEntry {
                options,
                created_at: Instant::now(),
            },
        );
    }

    /// 执行一轮清扫
    ///
    /// 第一遍移除全部过期条目；若仍超出容量上限，按创建时间
    /// 升序淘汰最旧的条目直到不超限。
    pub fn sweep(&self) -> SweepReport {
        let mut entries = self.entries.write();

        let before = entries.len();
        entries.retain(|_, entry| entry.created_at.elapsed() < self.ttl);
        let expired_removed = before - entries.len();

        let mut evicted = 0;
        if entries.len() > self.max_entries {
            let mut by_age: Vec<(String, Instant)> = entries
                .iter()
                .map(|(key, entry)| (key.clone(), entry.created_at))
                .collect();
            by_age.sort_by_key(|(_, created_at)| *created_at);

            let overflow = entries.len() - self.max_entries;
            for (key, _) in by_age.into_iter().take(overflow) {
                entries.remove(&key);
                evicted += 1;
            }
        }

        SweepReport {
            expired_removed,
            evicted,
            remaining: entries.len(),
        }
    }

    /// 当前条目数（含已过期但未清扫的条目）
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// 清空所有条目
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

//! 自动补全相关的类型定义

use crate::interaction::SuggestionItem;
use std::time::Duration;

/// 单次应答携带的建议上限
pub const MAX_SUGGESTIONS: usize = 25;

/// 自动补全协调器配置
///
/// 所有时间参数都是数据而非硬编码，可由配置文件覆盖。
#[derive(Debug, Clone)]
pub struct AutocompleteConfig {
    /// 缓存条目的存活时间（自创建时刻起算，命中不续期）
    pub cache_ttl: Duration,

    /// 缓存条目数上限
    pub max_cache_entries: usize,

    /// 单次请求的应答截止时间
    pub deadline: Duration,

    /// 后台清扫间隔
    pub sweep_interval: Duration,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(30),
            max_cache_entries: 100,
            deadline: Duration::from_millis(2_500),
            sweep_interval: Duration::from_secs(60),
        }
    }
}

/// 占位建议
///
/// 正常结果之外的所有应答都使用固定的占位取值，命令执行侧
/// 据此识别出用户选中的并非真实条目。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// 请求者不在语音会话中
    JoinVoice,
    /// 查询为空
    StartTyping,
    /// 搜索超过截止时间
    Timeout,
    /// 搜索无结果
    NoResults,
    /// 处理过程出错
    Error,
}

impl Placeholder {
    /// 占位取值
    pub fn value(&self) -> &'static str {
        match self {
            Placeholder::JoinVoice => "join_vc",
            Placeholder::StartTyping => "start_typing",
            Placeholder::Timeout => "timeout",
            Placeholder::NoResults => "no_results",
            Placeholder::Error => "error",
        }
    }

    /// 占位显示文案
    pub fn display_name(&self) -> &'static str {
        match self {
            Placeholder::JoinVoice => "⚠️ Join a voice channel first!",
            Placeholder::StartTyping => "Start typing to search for songs...",
            Placeholder::Timeout => "Search taking too long, try again...",
            Placeholder::NoResults => "No results found",
            Placeholder::Error => "An error occurred",
        }
    }

    /// 生成对应的建议项
    pub fn suggestion(&self) -> SuggestionItem {
        SuggestionItem::new(self.display_name(), self.value())
    }

    /// 判断取值是否为占位取值
    pub fn is_placeholder(value: &str) -> bool {
        matches!(
            value,
            "join_vc" | "start_typing" | "timeout" | "no_results" | "error"
        )
    }
}

//! 搜索相关的类型定义

use serde::{Deserialize, Serialize};

/// 搜索来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSource {
    Youtube,
    YoutubeMusic,
    Spotify,
    Soundcloud,
    Deezer,
}

impl SearchSource {
    /// 传给搜索节点的来源提示串
    pub fn hint(&self) -> &'static str {
        match self {
            SearchSource::Youtube => "ytsearch",
            SearchSource::YoutubeMusic => "ytmsearch",
            SearchSource::Spotify => "spsearch",
            SearchSource::Soundcloud => "scsearch",
            SearchSource::Deezer => "dzsearch",
        }
    }

    /// 从来源提示串解析
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint {
            "ytsearch" => Some(SearchSource::Youtube),
            "ytmsearch" => Some(SearchSource::YoutubeMusic),
            "spsearch" => Some(SearchSource::Spotify),
            "scsearch" => Some(SearchSource::Soundcloud),
            "dzsearch" => Some(SearchSource::Deezer),
            _ => None,
        }
    }
}

impl Default for SearchSource {
    fn default() -> Self {
        SearchSource::Spotify
    }
}

/// 单条曲目信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// 标题
    pub title: String,

    /// 作者/艺术家
    pub author: String,

    /// 规范化标识（选中建议时回传的取值）
    pub uri: String,

    /// 时长（毫秒）
    #[serde(default)]
    pub duration_ms: u64,
}

/// 歌单信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistInfo {
    /// 歌单标题
    pub title: String,
}

/// 搜索结果类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchResultKind {
    /// 单个集合（歌单）
    Playlist,
    /// 独立条目列表
    Tracks,
}

/// 搜索结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// 结果类别
    pub kind: SearchResultKind,

    /// 命中的曲目
    pub tracks: Vec<Track>,

    /// kind 为 Playlist 时的歌单信息
    #[serde(default)]
    pub playlist: Option<PlaylistInfo>,
}

impl SearchResult {
    /// 构造条目列表结果
    pub fn tracks(tracks: Vec<Track>) -> Self {
        Self {
            kind: SearchResultKind::Tracks,
            tracks,
            playlist: None,
        }
    }

    /// 构造歌单结果
    pub fn playlist(title: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            kind: SearchResultKind::Playlist,
            tracks,
            playlist: Some(PlaylistInfo {
                title: title.into(),
            }),
        }
    }

    /// 构造空结果
    pub fn empty() -> Self {
        Self::tracks(Vec::new())
    }

    /// 是否没有命中任何曲目
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

//! play 命令
//!
//! 自动补全走缓存协调器；执行侧校验占位取值、要求语音会话，
//! 然后延迟应答并执行搜索。真正的入队与播放由外部播放协作方
//! 完成，不属于网关。

use crate::autocomplete::{AutocompleteCoordinator, Placeholder};
use crate::interaction::{AutocompleteRequest, CommandInvocation, ReplyMessage};
use crate::registry::{
    AutocompleteCapability, CommandOptionSpec, ExecuteCapability, RawDescriptor,
};
use crate::search::{SearchNode, SearchResultKind, SearchService, SearchSource};
use crate::transport::{safe_reply, send_error, ReplyTransport};
use crate::utils::{format_duration, AppResult};
use async_trait::async_trait;
use std::sync::Arc;

/// play 命令
pub struct PlayCommand {
    node: Arc<SearchNode>,
    coordinator: Arc<AutocompleteCoordinator>,
}

impl PlayCommand {
    pub fn new(node: Arc<SearchNode>, coordinator: Arc<AutocompleteCoordinator>) -> Self {
        Self { node, coordinator }
    }

    /// 生成注册用的原始描述符
    pub fn into_descriptor(self) -> RawDescriptor {
        let command = Arc::new(self);
        RawDescriptor {
            name: Some("play".to_string()),
            description: Some("Play a song or playlist from different sources".to_string()),
            options: vec![
                CommandOptionSpec::new("query", "Song name or URL")
                    .required()
                    .autocomplete(),
                CommandOptionSpec::new("source", "The source you want to play the music from")
                    .with_choice("Youtube", "ytsearch")
                    .with_choice("Youtube Music", "ytmsearch")
                    .with_choice("Spotify", "spsearch")
                    .with_choice("Soundcloud", "scsearch")
                    .with_choice("Deezer", "dzsearch"),
            ],
            execute: Some(command.clone()),
            autocomplete: Some(command),
        }
    }
}

#[async_trait]
impl ExecuteCapability for PlayCommand {
    async fn execute(
        &self,
        invocation: &CommandInvocation,
        transport: Arc<dyn ReplyTransport>,
    ) -> AppResult<()> {
        let Some(query) = invocation.option_str("query") else {
            send_error(transport.as_ref(), "No search query provided!").await?;
            return Ok(());
        };

        // 自动补全的占位取值不是真实条目
        if Placeholder::is_placeholder(query) {
            let text = if query == Placeholder::NoResults.value() {
                "No results found! Try a different search term."
            } else {
                "Please join a voice channel and select a valid song!"
            };
            send_error(transport.as_ref(), text).await?;
            return Ok(());
        }

        if !invocation.requester.in_voice_session() {
            send_error(transport.as_ref(), "You need to join a voice channel first!").await?;
            return Ok(());
        }

        let source = invocation
            .option_str("source")
            .and_then(SearchSource::from_hint)
            .unwrap_or_default();

        // 搜索可能耗时较长，先延迟应答
        transport.defer().await?;

        let result = self.node.search(query, source).await?;

        if result.is_empty() {
            send_error(
                transport.as_ref(),
                "No results found! Try a different search term.",
            )
            .await?;
            return Ok(());
        }

        let summary = match result.kind {
            SearchResultKind::Playlist => {
                let title = result
                    .playlist
                    .as_ref()
                    .map(|playlist| playlist.title.as_str())
                    .unwrap_or("Unknown");
                format!(
                    "📑 Added playlist **{}** (`{}` tracks) to the queue",
                    title,
                    result.tracks.len()
                )
            }
            SearchResultKind::Tracks => {
                let track = &result.tracks[0];
                format!(
                    "🎵 Added **{} - {}** (`{}`) to the queue",
                    track.title,
                    track.author,
                    format_duration(track.duration_ms)
                )
            }
        };

        safe_reply(transport.as_ref(), &ReplyMessage::new(summary)).await?;
        Ok(())
    }
}

#[async_trait]
impl AutocompleteCapability for PlayCommand {
    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
        transport: Arc<dyn ReplyTransport>,
    ) -> AppResult<()> {
        let in_voice_session = request.requester.in_voice_session();
        self.coordinator
            .suggest(
                &request.focused_value,
                || in_voice_session,
                self.node.as_ref(),
                SearchSource::default(),
                transport.as_ref(),
            )
            .await
    }
}

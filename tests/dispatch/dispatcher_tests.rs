//! 交互分发器功能测试
//!
//! 覆盖顶层失败边界：未注册命令、处理器失败后的状态感知通知、
//! 过期交互的静默处理与自动补全的空列表兜底。

#[path = "../test_utils/mod.rs"]
mod test_utils;

use async_trait::async_trait;
use gateway_lib::dispatch::InteractionDispatcher;
use gateway_lib::interaction::{
    AutocompleteRequest, CommandInvocation, Interaction,
};
use gateway_lib::registry::{
    load_commands, AutocompleteCapability, ExecuteCapability, RawDescriptor, StaticPluginSource,
};
use gateway_lib::transport::{ReplyTransport, TransportError};
use gateway_lib::utils::AppResult;
use std::collections::HashMap;
use std::sync::Arc;
use test_utils::{requester_in_voice, RecordedCall, RecordingTransport};
use uuid::Uuid;

/// 立即失败的执行能力
struct FailingExecute;

#[async_trait]
impl ExecuteCapability for FailingExecute {
    async fn execute(
        &self,
        _invocation: &CommandInvocation,
        _transport: Arc<dyn ReplyTransport>,
    ) -> AppResult<()> {
        Err(anyhow::anyhow!("处理器内部错误"))
    }
}

/// 先延迟应答再失败的执行能力
struct FailAfterDeferExecute;

#[async_trait]
impl ExecuteCapability for FailAfterDeferExecute {
    async fn execute(
        &self,
        _invocation: &CommandInvocation,
        transport: Arc<dyn ReplyTransport>,
    ) -> AppResult<()> {
        transport.defer().await?;
        Err(anyhow::anyhow!("延迟后失败"))
    }
}

/// 以过期交互错误失败的执行能力
struct ExpiredExecute;

#[async_trait]
impl ExecuteCapability for ExpiredExecute {
    async fn execute(
        &self,
        _invocation: &CommandInvocation,
        _transport: Arc<dyn ReplyTransport>,
    ) -> AppResult<()> {
        Err(TransportError::expired("测试").into())
    }
}

/// 失败的自动补全能力
struct FailingAutocomplete;

#[async_trait]
impl AutocompleteCapability for FailingAutocomplete {
    async fn autocomplete(
        &self,
        _request: &AutocompleteRequest,
        _transport: Arc<dyn ReplyTransport>,
    ) -> AppResult<()> {
        Err(anyhow::anyhow!("自动补全内部错误"))
    }
}

fn descriptor(
    name: &str,
    execute: Arc<dyn ExecuteCapability>,
    autocomplete: Option<Arc<dyn AutocompleteCapability>>,
) -> RawDescriptor {
    RawDescriptor {
        name: Some(name.to_string()),
        description: Some(format!("{} test command", name)),
        options: Vec::new(),
        execute: Some(execute),
        autocomplete,
    }
}

fn dispatcher_with(source: StaticPluginSource) -> InteractionDispatcher {
    InteractionDispatcher::new(Arc::new(load_commands(&source)))
}

fn command(name: &str) -> Interaction {
    Interaction::Command(CommandInvocation {
        id: Uuid::new_v4(),
        name: name.to_string(),
        options: HashMap::new(),
        requester: requester_in_voice(),
    })
}

fn autocomplete(name: &str) -> Interaction {
    Interaction::Autocomplete(AutocompleteRequest {
        id: Uuid::new_v4(),
        name: name.to_string(),
        focused_value: "imagine".to_string(),
        requester: requester_in_voice(),
    })
}

#[tokio::test]
async fn test_unregistered_command_produces_no_reply_and_no_panic() {
    let dispatcher = dispatcher_with(StaticPluginSource::new());
    let transport = Arc::new(RecordingTransport::new());

    dispatcher.dispatch(&command("ghost"), transport.clone()).await;

    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_handler_failure_sends_single_initial_notice() {
    let source = StaticPluginSource::new().with(
        "music",
        descriptor("broken", Arc::new(FailingExecute), None),
    );
    let dispatcher = dispatcher_with(source);
    let transport = Arc::new(RecordingTransport::new());

    dispatcher.dispatch(&command("broken"), transport.clone()).await;

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        RecordedCall::Reply(message) => {
            assert!(message.ephemeral);
            assert!(message.content.contains("error"));
        }
        other => panic!("预期初次应答，实际为 {:?}", other),
    }
}

#[tokio::test]
async fn test_handler_failure_after_defer_notifies_via_edit() {
    let source = StaticPluginSource::new().with(
        "music",
        descriptor("slow", Arc::new(FailAfterDeferExecute), None),
    );
    let dispatcher = dispatcher_with(source);
    let transport = Arc::new(RecordingTransport::new());

    dispatcher.dispatch(&command("slow"), transport.clone()).await;

    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], RecordedCall::Defer);
    // 已延迟的交互通过编辑投递失败通知，不允许第二次初次应答
    assert!(matches!(calls[1], RecordedCall::EditReply(_)));
}

#[tokio::test]
async fn test_expired_handler_error_is_silently_dropped() {
    let source = StaticPluginSource::new().with(
        "music",
        descriptor("expired", Arc::new(ExpiredExecute), None),
    );
    let dispatcher = dispatcher_with(source);
    let transport = Arc::new(RecordingTransport::new());

    dispatcher.dispatch(&command("expired"), transport.clone()).await;

    // 过期交互不触发任何通知
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_notice_delivery_to_expired_transport_does_not_propagate() {
    let source = StaticPluginSource::new().with(
        "music",
        descriptor("broken", Arc::new(FailingExecute), None),
    );
    let dispatcher = dispatcher_with(source);
    let transport = Arc::new(RecordingTransport::expired());

    // 不 panic，也不产生新的投递
    dispatcher.dispatch(&command("broken"), transport.clone()).await;
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_autocomplete_without_capability_is_noop() {
    let source = StaticPluginSource::new().with(
        "music",
        descriptor("plain", Arc::new(FailingExecute), None),
    );
    let dispatcher = dispatcher_with(source);
    let transport = Arc::new(RecordingTransport::new());

    dispatcher.dispatch(&autocomplete("plain"), transport.clone()).await;
    dispatcher.dispatch(&autocomplete("ghost"), transport.clone()).await;

    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_autocomplete_failure_falls_back_to_empty_list() {
    let source = StaticPluginSource::new().with(
        "music",
        descriptor(
            "play",
            Arc::new(FailingExecute),
            Some(Arc::new(FailingAutocomplete)),
        ),
    );
    let dispatcher = dispatcher_with(source);
    let transport = Arc::new(RecordingTransport::new());

    dispatcher.dispatch(&autocomplete("play"), transport.clone()).await;

    let batches = transport.suggestion_batches();
    assert_eq!(batches.len(), 1);
    assert!(batches[0].is_empty());
}

//! 命令注册表加载器功能测试

use async_trait::async_trait;
use gateway_lib::interaction::CommandInvocation;
use gateway_lib::registry::{
    load_commands, ExecuteCapability, RawDescriptor, StaticPluginSource,
};
use gateway_lib::transport::ReplyTransport;
use gateway_lib::utils::AppResult;
use std::sync::Arc;

struct NoopExecute;

#[async_trait]
impl ExecuteCapability for NoopExecute {
    async fn execute(
        &self,
        _invocation: &CommandInvocation,
        _transport: Arc<dyn ReplyTransport>,
    ) -> AppResult<()> {
        Ok(())
    }
}

fn valid_descriptor(name: &str, description: &str) -> RawDescriptor {
    RawDescriptor {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        options: Vec::new(),
        execute: Some(Arc::new(NoopExecute)),
        autocomplete: None,
    }
}

#[test]
fn test_load_valid_descriptors_with_category_metadata() {
    let source = StaticPluginSource::new()
        .with("music", valid_descriptor("play", "Play a song"))
        .with("music", valid_descriptor("skip", "Skip the current song"))
        .with("utility", valid_descriptor("ping", "Round trip check"));

    let registry = load_commands(&source);

    assert_eq!(registry.command_count(), 3);
    assert_eq!(registry.category_count(), 2);
    assert_eq!(registry.get("play").unwrap().category, "music");
    assert_eq!(registry.get("ping").unwrap().category, "utility");
}

#[test]
fn test_invalid_descriptors_are_skipped_without_aborting() {
    let missing_name = RawDescriptor {
        name: None,
        ..valid_descriptor("ignored", "ignored")
    };
    let missing_description = RawDescriptor {
        description: None,
        ..valid_descriptor("broken", "ignored")
    };
    let missing_execute = RawDescriptor {
        execute: None,
        ..valid_descriptor("inert", "No execute capability")
    };

    let source = StaticPluginSource::new()
        .with("music", missing_name)
        .with("music", missing_description)
        .with("music", missing_execute)
        .with("music", valid_descriptor("play", "Play a song"));

    let registry = load_commands(&source);

    // 坏描述符逐个跳过，加载继续
    assert_eq!(registry.command_count(), 1);
    assert!(registry.get("play").is_some());
    assert!(registry.get("broken").is_none());
    assert!(registry.get("inert").is_none());
}

#[test]
fn test_blank_fields_count_as_missing() {
    let source = StaticPluginSource::new()
        .with("music", valid_descriptor("  ", "blank name"))
        .with("music", valid_descriptor("hollow", "   "));

    let registry = load_commands(&source);
    assert_eq!(registry.command_count(), 0);
}

#[test]
fn test_duplicate_name_later_registration_wins() {
    let source = StaticPluginSource::new()
        .with("music", valid_descriptor("play", "first registration"))
        .with("music", valid_descriptor("play", "second registration"));

    let registry = load_commands(&source);

    assert_eq!(registry.command_count(), 1);
    assert_eq!(
        registry.get("play").unwrap().description,
        "second registration"
    );
}

#[test]
fn test_unknown_command_lookup_returns_none() {
    let source = StaticPluginSource::new().with("music", valid_descriptor("play", "Play a song"));
    let registry = load_commands(&source);

    assert!(registry.get("nonexistent").is_none());
    assert_eq!(registry.names().count(), 1);
}

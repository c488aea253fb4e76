//! ping 命令

use crate::interaction::{CommandInvocation, ReplyMessage};
use crate::registry::{ExecuteCapability, RawDescriptor};
use crate::transport::{safe_reply, ReplyTransport};
use crate::utils::AppResult;
use async_trait::async_trait;
use std::sync::Arc;

/// ping 命令：往返连通性检查
pub struct PingCommand;

impl PingCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn into_descriptor(self) -> RawDescriptor {
        RawDescriptor {
            name: Some("ping".to_string()),
            description: Some("Check that the gateway is responding".to_string()),
            options: Vec::new(),
            execute: Some(Arc::new(self)),
            autocomplete: None,
        }
    }
}

impl Default for PingCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExecuteCapability for PingCommand {
    async fn execute(
        &self,
        _invocation: &CommandInvocation,
        transport: Arc<dyn ReplyTransport>,
    ) -> AppResult<()> {
        safe_reply(transport.as_ref(), &ReplyMessage::new("🏓 Pong!")).await?;
        Ok(())
    }
}

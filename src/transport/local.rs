//! 本地开发传输
//!
//! 按行读取 JSON 交互、按行写回应答的 stdin/stdout 实现，
//! 用于在没有真实聊天平台连接时本地驱动网关。

use crate::interaction::{Interaction, ReplyMessage, SuggestionItem};
use crate::transport::{ReplyTransport, TransportError, TransportResult};
use crate::utils::AppResult;
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tracing::warn;
use uuid::Uuid;

/// 从标准输入逐行读取交互的本地来源
pub struct LocalInteractionSource {
    reader: BufReader<Stdin>,
}

impl LocalInteractionSource {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }

    /// 读取下一条交互；输入流结束返回 None
    ///
    /// 无法解析的行告警后跳过，不中断读取循环。
    pub async fn next(&mut self) -> AppResult<Option<Interaction>> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self.reader.read_line(&mut line).await?;
            if read == 0 {
                return Ok(None);
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match serde_json::from_str::<Interaction>(trimmed) {
                Ok(interaction) => return Ok(Some(interaction)),
                Err(err) => {
                    warn!("无法解析的交互输入，已跳过: {}", err);
                }
            }
        }
    }
}

impl Default for LocalInteractionSource {
    fn default() -> Self {
        Self::new()
    }
}

/// 将应答以 JSON 行写到标准输出的本地传输
pub struct LocalReplyTransport {
    interaction_id: Uuid,
    replied: AtomicBool,
    deferred: AtomicBool,
}

impl LocalReplyTransport {
    pub fn new(interaction_id: Uuid) -> Self {
        Self {
            interaction_id,
            replied: AtomicBool::new(false),
            deferred: AtomicBool::new(false),
        }
    }

    fn emit(&self, kind: &str, payload: serde_json::Value) -> TransportResult<()> {
        let line = json!({
            "id": self.interaction_id,
            "kind": kind,
            "payload": payload,
        });
        println!("{}", line);
        Ok(())
    }

    fn message_payload(message: &ReplyMessage) -> TransportResult<serde_json::Value> {
        serde_json::to_value(message).map_err(|e| TransportError::Serialization {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ReplyTransport for LocalReplyTransport {
    async fn reply(&self, message: &ReplyMessage) -> TransportResult<()> {
        if self.replied.load(Ordering::SeqCst) || self.deferred.load(Ordering::SeqCst) {
            return Err(TransportError::invalid_state(
                "reply",
                "交互已应答或已延迟，不能再发送初次应答",
            ));
        }
        self.emit("reply", Self::message_payload(message)?)?;
        self.replied.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn edit_reply(&self, message: &ReplyMessage) -> TransportResult<()> {
        self.emit("edit_reply", Self::message_payload(message)?)?;
        self.replied.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn follow_up(&self, message: &ReplyMessage) -> TransportResult<()> {
        self.emit("follow_up", Self::message_payload(message)?)
    }

    async fn defer(&self) -> TransportResult<()> {
        self.emit("defer", json!({}))?;
        self.deferred.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn respond_suggestions(&self, options: &[SuggestionItem]) -> TransportResult<()> {
        let payload = serde_json::to_value(options).map_err(|e| TransportError::Serialization {
            message: e.to_string(),
        })?;
        self.emit("suggestions", payload)?;
        self.replied.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_replied(&self) -> bool {
        self.replied.load(Ordering::SeqCst)
    }

    fn is_deferred(&self) -> bool {
        self.deferred.load(Ordering::SeqCst)
    }
}

//! 状态感知的应答投递
//!
//! 同一交互只允许一次初次应答：已延迟的走编辑，已应答的走追加。

use crate::interaction::ReplyMessage;
use crate::transport::{ReplyTransport, TransportResult};

/// 按交互当前状态选择投递路径
///
/// 已延迟 → 编辑应答；已应答 → 追加应答；否则初次应答。
/// 过期交互错误在此处静默吞掉，其余投递错误原样返回给调用方记录。
pub async fn safe_reply(
    transport: &dyn ReplyTransport,
    message: &ReplyMessage,
) -> TransportResult<()> {
    let result = if transport.is_deferred() {
        transport.edit_reply(message).await
    } else if transport.is_replied() {
        transport.follow_up(message).await
    } else {
        transport.reply(message).await
    };

    match result {
        Err(err) if err.is_expired() => Ok(()),
        other => other,
    }
}

/// 发送统一格式的错误提示（默认仅请求者可见）
pub async fn send_error(transport: &dyn ReplyTransport, message: &str) -> TransportResult<()> {
    let content = if message.starts_with('❌') {
        message.to_string()
    } else {
        format!("❌ {}", message)
    };
    safe_reply(transport, &ReplyMessage::ephemeral(content)).await
}

//! 应答传输边界
//!
//! 定义网关向交互来源回送应答的统一接口。具体的平台连接
//! 由外部协作方实现，这里只约定能力与错误分类。

pub mod error;
pub mod local;
pub mod reply;

pub use error::{is_expired_error, TransportError, TransportResult};
pub use local::{LocalInteractionSource, LocalReplyTransport};
pub use reply::{safe_reply, send_error};

use crate::interaction::{ReplyMessage, SuggestionItem};
use async_trait::async_trait;

/// 应答传输能力
///
/// 每个入站交互持有一个传输句柄。`reply`/`edit_reply`/`follow_up`
/// 对应初次应答、编辑已延迟的应答与追加应答；`respond_suggestions`
/// 仅用于自动补全请求。实现方在交互过期时必须返回
/// [`TransportError::Expired`]，调用方据此决定是否静默。
#[async_trait]
pub trait ReplyTransport: Send + Sync {
    /// 发送初次应答
    async fn reply(&self, message: &ReplyMessage) -> TransportResult<()>;

    /// 编辑已延迟的应答
    async fn edit_reply(&self, message: &ReplyMessage) -> TransportResult<()>;

    /// 追加一条后续应答
    async fn follow_up(&self, message: &ReplyMessage) -> TransportResult<()>;

    /// 延迟应答（先行确认，稍后编辑）
    async fn defer(&self) -> TransportResult<()>;

    /// 回送自动补全建议列表（至多 25 项）
    async fn respond_suggestions(&self, options: &[SuggestionItem]) -> TransportResult<()>;

    /// 是否已发送过初次应答
    fn is_replied(&self) -> bool;

    /// 是否已延迟应答
    fn is_deferred(&self) -> bool;
}

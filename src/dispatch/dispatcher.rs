//! 交互分发器

use crate::interaction::{AutocompleteRequest, CommandInvocation, Interaction, ReplyMessage};
use crate::registry::CommandRegistry;
use crate::transport::{is_expired_error, safe_reply, ReplyTransport};
use std::sync::Arc;
use tracing::{debug, error};

/// 命令执行失败时的统一用户通知文案
const EXECUTION_FAILURE_NOTICE: &str = "There was an error while executing this command!";

/// 交互分发器
///
/// 处理器内部的任何错误都在这里收口，不会向上冒泡导致进程
/// 退出。唯一被静默的错误类别是已过期的交互。
pub struct InteractionDispatcher {
    registry: Arc<CommandRegistry>,
}

impl InteractionDispatcher {
    /// 创建新的分发器
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// 分发一条入站交互
    pub async fn dispatch(&self, interaction: &Interaction, transport: Arc<dyn ReplyTransport>) {
        match interaction {
            Interaction::Command(invocation) => self.handle_command(invocation, transport).await,
            Interaction::Autocomplete(request) => {
                self.handle_autocomplete(request, transport).await
            }
        }
    }

    /// 处理命令调用
    ///
    /// 未注册的命令名是配置错误：记一条日志后直接终止，不做任何
    /// 应答（请求者侧表现为无响应）。
    async fn handle_command(
        &self,
        invocation: &CommandInvocation,
        transport: Arc<dyn ReplyTransport>,
    ) {
        let Some(descriptor) = self.registry.get(&invocation.name) else {
            error!("未找到匹配的命令: {}", invocation.name);
            return;
        };

        debug!(
            "执行命令: {} (分类: {})",
            descriptor.name, descriptor.category
        );

        if let Err(err) = descriptor
            .execute
            .execute(invocation, Arc::clone(&transport))
            .await
        {
            if is_expired_error(&err) {
                return;
            }
            error!("命令 {} 执行失败: {}", invocation.name, err);

            // 已应答或已延迟的交互走编辑/追加路径，绝不重复初次应答
            let notice = ReplyMessage::ephemeral(EXECUTION_FAILURE_NOTICE);
            if let Err(delivery_err) = safe_reply(transport.as_ref(), &notice).await {
                error!("错误通知投递失败: {}", delivery_err);
            }
        }
    }

    /// 处理自动补全请求
    ///
    /// 描述符不存在或没有自动补全能力时为空操作。处理器失败且
    /// 交互未过期时，尽力回送一个空建议列表。
    async fn handle_autocomplete(
        &self,
        request: &AutocompleteRequest,
        transport: Arc<dyn ReplyTransport>,
    ) {
        let Some(descriptor) = self.registry.get(&request.name) else {
            return;
        };
        let Some(autocomplete) = descriptor.autocomplete.as_ref() else {
            return;
        };

        if let Err(err) = autocomplete
            .autocomplete(request, Arc::clone(&transport))
            .await
        {
            if is_expired_error(&err) {
                return;
            }
            error!("命令 {} 的自动补全失败: {}", request.name, err);

            match transport.respond_suggestions(&[]).await {
                Ok(()) => {}
                Err(respond_err) if respond_err.is_expired() => {}
                Err(respond_err) => error!("空建议应答投递失败: {}", respond_err),
            }
        }
    }
}

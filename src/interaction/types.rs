//! 交互相关的类型定义

use crate::utils::truncate_chars;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// 建议项显示名称的最大字符数
pub const MAX_SUGGESTION_NAME_CHARS: usize = 100;

/// 请求者上下文
///
/// 描述发起交互的用户及其所处环境，语音会话信息用于
/// 自动补全的前置条件检查。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequesterContext {
    /// 用户ID
    pub user_id: String,

    /// 用户名
    pub username: String,

    /// 所在服务器ID
    #[serde(default)]
    pub guild_id: Option<String>,

    /// 发起交互的文本频道ID
    #[serde(default)]
    pub channel_id: Option<String>,

    /// 当前语音频道ID（不在语音会话中时为 None）
    #[serde(default)]
    pub voice_channel_id: Option<String>,
}

impl RequesterContext {
    /// 请求者是否处于语音会话中
    pub fn in_voice_session(&self) -> bool {
        self.voice_channel_id.is_some()
    }
}

/// 命令选项值
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Boolean(bool),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            OptionValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

/// 命令调用请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandInvocation {
    /// 交互ID
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// 命令名称
    pub name: String,

    /// 命令选项
    #[serde(default)]
    pub options: HashMap<String, OptionValue>,

    /// 请求者上下文
    pub requester: RequesterContext,
}

impl CommandInvocation {
    /// 读取字符串类型的选项值
    pub fn option_str(&self, name: &str) -> Option<&str> {
        self.options.get(name).and_then(OptionValue::as_str)
    }
}

/// 自动补全请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteRequest {
    /// 交互ID
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// 目标命令名称
    pub name: String,

    /// 正在输入的选项内容
    pub focused_value: String,

    /// 请求者上下文
    pub requester: RequesterContext,
}

/// 入站交互
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Interaction {
    /// 命令调用
    Command(CommandInvocation),
    /// 自动补全请求
    Autocomplete(AutocompleteRequest),
}

impl Interaction {
    /// 交互ID
    pub fn id(&self) -> Uuid {
        match self {
            Interaction::Command(invocation) => invocation.id,
            Interaction::Autocomplete(request) => request.id,
        }
    }

    /// 目标命令名称
    pub fn command_name(&self) -> &str {
        match self {
            Interaction::Command(invocation) => &invocation.name,
            Interaction::Autocomplete(request) => &request.name,
        }
    }
}

/// 出站应答消息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessage {
    /// 消息内容
    pub content: String,

    /// 是否仅请求者可见
    #[serde(default)]
    pub ephemeral: bool,
}

impl ReplyMessage {
    /// 创建公开应答
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }

    /// 创建仅请求者可见的应答
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }
}

/// 自动补全建议项
///
/// 显示名称在构造时截断到 100 个字符，value 原样保留。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionItem {
    /// 显示名称（≤100 字符）
    pub display_name: String,

    /// 选中后回传的取值
    pub value: String,
}

impl SuggestionItem {
    pub fn new(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: truncate_chars(&display_name.into(), MAX_SUGGESTION_NAME_CHARS),
            value: value.into(),
        }
    }
}

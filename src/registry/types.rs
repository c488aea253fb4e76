//! 命令描述符类型定义

use crate::interaction::{AutocompleteRequest, CommandInvocation};
use crate::transport::ReplyTransport;
use crate::utils::AppResult;
use async_trait::async_trait;
use std::sync::Arc;

/// 命令执行能力
#[async_trait]
pub trait ExecuteCapability: Send + Sync {
    async fn execute(
        &self,
        invocation: &CommandInvocation,
        transport: Arc<dyn ReplyTransport>,
    ) -> AppResult<()>;
}

/// 自动补全能力
#[async_trait]
pub trait AutocompleteCapability: Send + Sync {
    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
        transport: Arc<dyn ReplyTransport>,
    ) -> AppResult<()>;
}

/// 命令选项描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOptionSpec {
    /// 选项名称
    pub name: String,

    /// 选项说明
    pub description: String,

    /// 是否必填
    pub required: bool,

    /// 是否支持自动补全
    pub autocomplete: bool,

    /// 预设可选值 (显示名, 取值)
    pub choices: Vec<(String, String)>,
}

impl CommandOptionSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: false,
            autocomplete: false,
            choices: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn autocomplete(mut self) -> Self {
        self.autocomplete = true;
        self
    }

    pub fn with_choice(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.choices.push((name.into(), value.into()));
        self
    }
}

/// 插件来源产出的原始描述符
///
/// 所有能力字段都是可选的，校验由加载器完成；缺少必需字段的
/// 描述符会被告警并跳过，而不是中断整体加载。
#[derive(Clone, Default)]
pub struct RawDescriptor {
    /// 命令名称
    pub name: Option<String>,

    /// 命令说明
    pub description: Option<String>,

    /// 选项描述
    pub options: Vec<CommandOptionSpec>,

    /// 执行能力
    pub execute: Option<Arc<dyn ExecuteCapability>>,

    /// 自动补全能力
    pub autocomplete: Option<Arc<dyn AutocompleteCapability>>,
}

/// 校验后的命令描述符
///
/// 分类只作为元数据记录，不参与分发键。
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    pub category: String,
    pub options: Vec<CommandOptionSpec>,
    pub execute: Arc<dyn ExecuteCapability>,
    pub autocomplete: Option<Arc<dyn AutocompleteCapability>>,
}

/// 命令描述符来源
pub trait PluginSource: Send + Sync {
    /// 发现全部 (分类, 原始描述符) 条目
    fn discover(&self) -> Vec<(String, RawDescriptor)>;
}

/// 静态注册列表
///
/// 以显式注册表替代运行期的插件目录扫描。
#[derive(Default)]
pub struct StaticPluginSource {
    items: Vec<(String, RawDescriptor)>,
}

impl StaticPluginSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在指定分类下注册一个描述符
    pub fn register(&mut self, category: impl Into<String>, descriptor: RawDescriptor) {
        self.items.push((category.into(), descriptor));
    }

    pub fn with(mut self, category: impl Into<String>, descriptor: RawDescriptor) -> Self {
        self.register(category, descriptor);
        self
    }
}

impl PluginSource for StaticPluginSource {
    fn discover(&self) -> Vec<(String, RawDescriptor)> {
        self.items.clone()
    }
}

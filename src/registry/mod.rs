//! 命令注册表
//!
//! 启动期从插件来源发现命令描述符，校验后构建只读分发表。
//! 分发表构建完成后不再变更，读取无需加锁。

mod loader;
mod types;

pub use loader::{load_commands, CommandRegistry};
pub use types::{
    AutocompleteCapability, CommandDescriptor, CommandOptionSpec, ExecuteCapability,
    PluginSource, RawDescriptor, StaticPluginSource,
};

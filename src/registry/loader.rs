//! 命令注册表加载器

use crate::registry::types::{CommandDescriptor, PluginSource};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::{info, warn};

/// 只读命令分发表
///
/// 由 [`load_commands`] 一次性构建，之后不可变更。
pub struct CommandRegistry {
    table: HashMap<String, Arc<CommandDescriptor>>,
    categories: BTreeSet<String>,
}

impl CommandRegistry {
    /// 按名称查找命令描述符
    pub fn get(&self, name: &str) -> Option<&Arc<CommandDescriptor>> {
        self.table.get(name)
    }

    /// 已加载的命令数量
    pub fn command_count(&self) -> usize {
        self.table.len()
    }

    /// 分类数量
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// 全部命令名称
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

/// 从插件来源加载命令并构建分发表
///
/// 校验规则：name、description、execute 三者缺一即跳过；
/// 重名注册会告警，后注册的覆盖先前的（不允许静默遮蔽）。
pub fn load_commands(source: &dyn PluginSource) -> CommandRegistry {
    let mut table: HashMap<String, Arc<CommandDescriptor>> = HashMap::new();
    let mut categories = BTreeSet::new();

    for (category, raw) in source.discover() {
        let Some(name) = raw.name.filter(|n| !n.trim().is_empty()) else {
            warn!("分类 {} 下的命令描述符缺少 name 字段，已跳过", category);
            continue;
        };
        let Some(description) = raw.description.filter(|d| !d.trim().is_empty()) else {
            warn!("命令 {} 缺少 description 字段，已跳过", name);
            continue;
        };
        let Some(execute) = raw.execute else {
            warn!("命令 {} 缺少 execute 能力，已跳过", name);
            continue;
        };

        if table.contains_key(&name) {
            warn!("命令名称重复: {}，后注册的描述符将覆盖先前的", name);
        }

        categories.insert(category.clone());
        table.insert(
            name.clone(),
            Arc::new(CommandDescriptor {
                name,
                description,
                category,
                options: raw.options,
                execute,
                autocomplete: raw.autocomplete,
            }),
        );
    }

    info!(
        "命令加载完成: {} 个命令, {} 个分类",
        table.len(),
        categories.len()
    );

    CommandRegistry { table, categories }
}

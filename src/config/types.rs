/*!
 * 配置系统数据类型定义
 *
 * 结构与 TOML 配置文件格式保持完全一致。时间类参数以毫秒为
 * 单位存储，运行期通过转换方法得到 Duration。
 */

use crate::autocomplete::AutocompleteConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 主配置结构
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GatewayConfig {
    /// 自动补全配置 (对应 TOML 中的 [autocomplete])
    pub autocomplete: AutocompleteSection,

    /// 搜索节点配置 (对应 TOML 中的 [node])
    pub node: NodeSection,

    /// 存活检测配置 (对应 TOML 中的 [health])
    pub health: HealthSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        crate::config::defaults::create_default_config()
    }
}

/// 自动补全配置 (对应 TOML 中的 [autocomplete] 节)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AutocompleteSection {
    /// 缓存条目存活时间（毫秒）
    pub cache_ttl_ms: u64,

    /// 缓存条目数上限
    pub max_cache_entries: usize,

    /// 单次请求应答截止时间（毫秒）
    pub deadline_ms: u64,

    /// 后台清扫间隔（毫秒）
    pub sweep_interval_ms: u64,
}

impl Default for AutocompleteSection {
    fn default() -> Self {
        let config = AutocompleteConfig::default();
        Self {
            cache_ttl_ms: config.cache_ttl.as_millis() as u64,
            max_cache_entries: config.max_cache_entries,
            deadline_ms: config.deadline.as_millis() as u64,
            sweep_interval_ms: config.sweep_interval.as_millis() as u64,
        }
    }
}

impl AutocompleteSection {
    /// 转换为协调器运行配置
    pub fn engine_config(&self) -> AutocompleteConfig {
        AutocompleteConfig {
            cache_ttl: Duration::from_millis(self.cache_ttl_ms),
            max_cache_entries: self.max_cache_entries,
            deadline: Duration::from_millis(self.deadline_ms),
            sweep_interval: Duration::from_millis(self.sweep_interval_ms),
        }
    }
}

/// 搜索节点配置 (对应 TOML 中的 [node] 节)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NodeSection {
    /// 节点主机名
    pub host: String,

    /// 节点端口
    pub port: u16,

    /// 节点认证口令
    pub password: String,

    /// 是否使用 TLS
    pub secure: bool,

    /// 节点标识
    pub name: String,
}

impl Default for NodeSection {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 2333,
            password: String::new(),
            secure: false,
            name: "main".to_string(),
        }
    }
}

/// 存活检测配置 (对应 TOML 中的 [health] 节)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HealthSection {
    /// 是否启用存活检测端点
    pub enabled: bool,

    /// 监听端口
    pub port: u16,
}

impl Default for HealthSection {
    fn default() -> Self {
        Self {
            enabled: true,
            port: 10000,
        }
    }
}

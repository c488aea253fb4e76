//! 默认配置

use crate::config::types::{AutocompleteSection, GatewayConfig, HealthSection, NodeSection};

/// 创建默认配置
///
/// 节点主机与口令默认为空，必须通过配置文件或环境变量提供。
pub fn create_default_config() -> GatewayConfig {
    GatewayConfig {
        autocomplete: AutocompleteSection::default(),
        node: NodeSection::default(),
        health: HealthSection::default(),
    }
}

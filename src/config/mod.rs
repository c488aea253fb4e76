/*!
 * 统一配置系统
 *
 * TOML 配置文件 + 环境变量覆盖。配置在启动时加载并校验一次，
 * 之后以只读形式注入各组件，不存在进程级的可变全局配置。
 */

pub mod defaults;
pub mod paths;
pub mod types;

pub use defaults::create_default_config;
pub use paths::default_config_path;
pub use types::{AutocompleteSection, GatewayConfig, HealthSection, NodeSection};

use crate::utils::AppResult;
use anyhow::Context;
use std::env;
use std::path::Path;
use tracing::info;

/// 环境变量覆盖项前缀
const ENV_PREFIX: &str = "RESONA_";

/// 加载配置
///
/// 路径为 None 时使用默认配置目录下的 config.toml；文件不存在
/// 则从内置默认值出发。随后应用环境变量覆盖并做必填项校验，
/// 任何缺失的必填项会被一次性汇总在错误信息里。
pub fn load_config(path: Option<&Path>) -> AppResult<GatewayConfig> {
    let default_path;
    let path = match path {
        Some(path) => path,
        None => {
            default_path = default_config_path()?;
            default_path.as_path()
        }
    };

    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?
    } else {
        info!("配置文件不存在，使用内置默认配置: {}", path.display());
        create_default_config()
    };

    apply_env_overrides(&mut config);
    validate(&config)?;
    Ok(config)
}

/// 应用环境变量覆盖（RESONA_NODE_HOST 等）
fn apply_env_overrides(config: &mut GatewayConfig) {
    if let Ok(host) = env::var(format!("{}NODE_HOST", ENV_PREFIX)) {
        config.node.host = host;
    }
    if let Ok(port) = env::var(format!("{}NODE_PORT", ENV_PREFIX)) {
        if let Ok(port) = port.parse() {
            config.node.port = port;
        }
    }
    if let Ok(password) = env::var(format!("{}NODE_PASSWORD", ENV_PREFIX)) {
        config.node.password = password;
    }
    if let Ok(secure) = env::var(format!("{}NODE_SECURE", ENV_PREFIX)) {
        config.node.secure = secure == "true";
    }
    if let Ok(name) = env::var(format!("{}NODE_NAME", ENV_PREFIX)) {
        config.node.name = name;
    }
}

/// 校验必填配置项，缺失项一次性汇总报告
fn validate(config: &GatewayConfig) -> AppResult<()> {
    let mut missing = Vec::new();

    if config.node.host.trim().is_empty() {
        missing.push("node.host (RESONA_NODE_HOST)");
    }
    if config.node.password.trim().is_empty() {
        missing.push("node.password (RESONA_NODE_PASSWORD)");
    }

    if !missing.is_empty() {
        crate::app_bail!("缺少必填配置项: {}", missing.join(", "));
    }
    Ok(())
}

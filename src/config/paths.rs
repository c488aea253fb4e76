//! 配置路径解析

use crate::utils::{app_error, AppResult};
use std::path::PathBuf;

/// 配置目录名
const CONFIG_DIR_NAME: &str = "Resona";

/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.toml";

/// 用户配置目录（例如 ~/.config/Resona）
pub fn config_dir() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| app_error("无法获取用户配置目录"))
}

/// 默认配置文件路径
pub fn default_config_path() -> AppResult<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

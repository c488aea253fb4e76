//! 交互数据模型
//!
//! 定义网关入站请求（命令调用、自动补全请求）与出站应答的数据结构

mod types;

pub use types::*;

//! Resona 网关入口
//!
//! 启动顺序：日志 → 配置加载与校验 → 存活检测端点 → 网关装配 →
//! 节点连接 → ready 通告 → 本地交互读取循环。真实的聊天平台
//! 连接器属于外部协作方，这里以标准输入上的 JSON 行驱动网关。

use gateway_lib::config;
use gateway_lib::health::HealthServer;
use gateway_lib::search::LocalSearchService;
use gateway_lib::transport::{LocalInteractionSource, LocalReplyTransport};
use gateway_lib::utils::init_logging;
use gateway_lib::Gateway;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging().map_err(anyhow::Error::msg)?;

    let config = config::load_config(None)?;

    let health = if config.health.enabled {
        Some(HealthServer::spawn(&config.health)?)
    } else {
        None
    };

    let gateway = Gateway::setup(&config, Arc::new(LocalSearchService::new()));
    info!(
        "网关装配完成: {} 个命令, 搜索节点 {} ({}:{})",
        gateway.registry().command_count(),
        config.node.name,
        config.node.host,
        config.node.port
    );

    gateway.node().connect();
    gateway.announce_ready("Resona");

    let mut source = LocalInteractionSource::new();
    loop {
        tokio::select! {
            next = source.next() => {
                match next {
                    Ok(Some(interaction)) => {
                        let transport = Arc::new(LocalReplyTransport::new(interaction.id()));
                        gateway.handle(interaction, transport);
                    }
                    Ok(None) => {
                        info!("交互输入流已结束");
                        break;
                    }
                    Err(err) => {
                        error!("读取交互输入失败: {}", err);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("收到退出信号");
                break;
            }
        }
    }

    gateway.shutdown().await;
    if let Some(health) = health {
        health.shutdown();
    }
    info!("网关已退出");
    Ok(())
}

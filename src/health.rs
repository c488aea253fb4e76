//! 存活检测端点
//!
//! 在独立线程上提供一个极简 HTTP 端点：`GET /` 返回固定文本，
//! `GET /status` 返回带启动时间与运行时长的 JSON。

use crate::config::HealthSection;
use crate::utils::{app_error, AppResult};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use std::thread;
use tiny_http::{Header, Response, Server};
use tracing::{info, warn};

/// 存活检测服务句柄
pub struct HealthServer {
    server: Arc<Server>,
    handle: Option<thread::JoinHandle<()>>,
}

impl HealthServer {
    /// 启动存活检测服务
    pub fn spawn(config: &HealthSection) -> AppResult<Self> {
        let addr = ("0.0.0.0", config.port);
        let server = Arc::new(
            Server::http(addr).map_err(|e| app_error(format!("存活检测端点启动失败: {}", e)))?,
        );
        let started_at: DateTime<Utc> = Utc::now();

        info!("存活检测端点已启动: http://0.0.0.0:{}", config.port);

        let accept = Arc::clone(&server);
        let handle = thread::spawn(move || {
            for request in accept.incoming_requests() {
                let response = match request.url() {
                    "/" => Response::from_string("Everything is up!"),
                    "/status" => {
                        let uptime_seconds = (Utc::now() - started_at).num_seconds();
                        let payload = json!({
                            "status": "ok",
                            "startedAt": started_at.to_rfc3339(),
                            "uptimeSeconds": uptime_seconds,
                        });
                        let header =
                            Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                                .expect("静态头部必然合法");
                        Response::from_string(payload.to_string()).with_header(header)
                    }
                    _ => Response::from_string("Not Found").with_status_code(404),
                };

                if let Err(err) = request.respond(response) {
                    warn!("存活检测应答失败: {}", err);
                }
            }
        });

        Ok(Self {
            server,
            handle: Some(handle),
        })
    }

    /// 停止服务并等待线程退出
    pub fn shutdown(mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

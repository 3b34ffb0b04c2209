//! Ping Handler
//!
//! 健康检查，同时探测数据库

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 进程存活即返回 200，数据库不可用时标记为 degraded
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    let (status, database) = match state.manga_repo.ping().await {
        Ok(()) => ("ok", "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "Database ping failed");
            ("degraded", "unavailable")
        }
    };

    Json(PingResponse {
        status,
        database,
        version: env!("CARGO_PKG_VERSION"),
    })
}

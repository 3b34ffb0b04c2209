//! HTTP Routes
//!
//! API Endpoints:
//! - /mangas         GET     列出所有漫画
//! - /mangas         POST    创建漫画
//! - /mangas/{id}    GET     获取漫画详情
//! - /mangas/{id}    PUT     覆盖漫画
//! - /mangas/{id}    DELETE  删除漫画
//! - /ping           GET     健康检查

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(manga_routes())
}

/// Manga 路由
fn manga_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/mangas", get(handlers::list_mangas).post(handlers::create_manga))
        .route(
            "/mangas/:id",
            get(handlers::get_manga)
                .put(handlers::update_manga)
                .delete(handlers::delete_manga),
        )
}

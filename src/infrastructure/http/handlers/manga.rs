//! Manga HTTP Handlers

use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{CreateManga, DeleteManga, GetManga, ListMangas, UpdateManga};
use crate::domain::Manga;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{JsonBody, MangaIdPath};
use crate::infrastructure::http::state::AppState;

/// 删除成功后返回的 JSON 字符串
pub const DELETED_MESSAGE: &str = "Manga has been deleted";

// ============================================================================
// DTOs
// ============================================================================

/// 创建 / 更新请求体
///
/// body 中的 `id` 等其他字段会被忽略，id 只来自存储层或路径
#[derive(Debug, Deserialize)]
pub struct MangaRequest {
    pub title: String,
    pub chapters: i64,
}

// ============================================================================
// Handlers
// ============================================================================

/// 获取漫画列表
pub async fn list_mangas(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Manga>>, ApiError> {
    let mangas = state.list_mangas_handler.handle(ListMangas).await?;
    Ok(Json(mangas))
}

/// 获取漫画详情
pub async fn get_manga(
    State(state): State<Arc<AppState>>,
    MangaIdPath(manga_id): MangaIdPath,
) -> Result<Json<Manga>, ApiError> {
    let manga = state.get_manga_handler.handle(GetManga { manga_id }).await?;
    Ok(Json(manga))
}

/// 创建漫画
pub async fn create_manga(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<MangaRequest>,
) -> Result<Json<Manga>, ApiError> {
    let command = CreateManga {
        title: req.title,
        chapters: req.chapters,
    };

    let manga = state.create_manga_handler.handle(command).await?;
    Ok(Json(manga))
}

/// 覆盖漫画
pub async fn update_manga(
    State(state): State<Arc<AppState>>,
    MangaIdPath(manga_id): MangaIdPath,
    JsonBody(req): JsonBody<MangaRequest>,
) -> Result<Json<Manga>, ApiError> {
    let command = UpdateManga {
        manga_id,
        title: req.title,
        chapters: req.chapters,
    };

    let manga = state.update_manga_handler.handle(command).await?;
    Ok(Json(manga))
}

/// 删除漫画
pub async fn delete_manga(
    State(state): State<Arc<AppState>>,
    MangaIdPath(manga_id): MangaIdPath,
) -> Result<Json<&'static str>, ApiError> {
    state
        .delete_manga_handler
        .handle(DeleteManga { manga_id })
        .await?;

    Ok(Json(DELETED_MESSAGE))
}

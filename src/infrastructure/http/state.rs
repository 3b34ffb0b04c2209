//! Application State
//!
//! 包含仓储端口及所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateMangaHandler, DeleteMangaHandler, UpdateMangaHandler,
    // Query handlers
    GetMangaHandler, ListMangasHandler,
    // Ports
    MangaRepositoryPort,
};

/// 应用状态
///
/// 仓储在启动时创建一次，通过构造参数注入各 Handler
pub struct AppState {
    // ========== Ports ==========
    pub manga_repo: Arc<dyn MangaRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_manga_handler: CreateMangaHandler,
    pub update_manga_handler: UpdateMangaHandler,
    pub delete_manga_handler: DeleteMangaHandler,

    // ========== Query Handlers ==========
    pub get_manga_handler: GetMangaHandler,
    pub list_mangas_handler: ListMangasHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(manga_repo: Arc<dyn MangaRepositoryPort>) -> Self {
        Self {
            manga_repo: manga_repo.clone(),

            create_manga_handler: CreateMangaHandler::new(manga_repo.clone()),
            update_manga_handler: UpdateMangaHandler::new(manga_repo.clone()),
            delete_manga_handler: DeleteMangaHandler::new(manga_repo.clone()),

            get_manga_handler: GetMangaHandler::new(manga_repo.clone()),
            list_mangas_handler: ListMangasHandler::new(manga_repo),
        }
    }
}

//! Manga Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateManga, DeleteManga, UpdateManga};
use crate::application::error::ApplicationError;
use crate::application::ports::MangaRepositoryPort;
use crate::domain::{Manga, NewManga};

// ============================================================================
// CreateManga
// ============================================================================

/// CreateManga Handler
pub struct CreateMangaHandler {
    manga_repo: Arc<dyn MangaRepositoryPort>,
}

impl CreateMangaHandler {
    pub fn new(manga_repo: Arc<dyn MangaRepositoryPort>) -> Self {
        Self { manga_repo }
    }

    pub async fn handle(&self, command: CreateManga) -> Result<Manga, ApplicationError> {
        let manga = self.manga_repo.insert(&NewManga::from(command)).await?;

        tracing::info!(
            manga_id = %manga.id,
            title = %manga.title,
            "Manga created"
        );

        Ok(manga)
    }
}

// ============================================================================
// UpdateManga
// ============================================================================

/// UpdateManga Handler
///
/// 路径中的 id 是唯一依据；不存在时返回 NotFound，不会新建
pub struct UpdateMangaHandler {
    manga_repo: Arc<dyn MangaRepositoryPort>,
}

impl UpdateMangaHandler {
    pub fn new(manga_repo: Arc<dyn MangaRepositoryPort>) -> Self {
        Self { manga_repo }
    }

    pub async fn handle(&self, command: UpdateManga) -> Result<Manga, ApplicationError> {
        let manga_id = command.manga_id;
        let data = NewManga::new(command.title, command.chapters);

        let updated = self.manga_repo.update(manga_id, &data).await?;
        if !updated {
            return Err(ApplicationError::not_found("Manga", manga_id));
        }

        tracing::info!(manga_id = %manga_id, "Manga updated");

        Ok(data.with_id(manga_id))
    }
}

// ============================================================================
// DeleteManga
// ============================================================================

/// DeleteManga Handler
pub struct DeleteMangaHandler {
    manga_repo: Arc<dyn MangaRepositoryPort>,
}

impl DeleteMangaHandler {
    pub fn new(manga_repo: Arc<dyn MangaRepositoryPort>) -> Self {
        Self { manga_repo }
    }

    pub async fn handle(&self, command: DeleteManga) -> Result<(), ApplicationError> {
        let manga_id = command.manga_id;

        // 检查漫画是否存在
        let manga = self
            .manga_repo
            .find_by_id(manga_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Manga", manga_id))?;

        // 查询与删除之间可能已被并发删除
        if !self.manga_repo.delete(manga_id).await? {
            return Err(ApplicationError::not_found("Manga", manga_id));
        }

        tracing::info!(
            manga_id = %manga_id,
            title = %manga.title,
            "Manga deleted"
        );

        Ok(())
    }
}

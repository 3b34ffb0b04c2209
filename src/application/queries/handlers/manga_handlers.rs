//! Manga Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::MangaRepositoryPort;
use crate::application::queries::{GetManga, ListMangas};
use crate::domain::Manga;

/// GetManga Handler
pub struct GetMangaHandler {
    manga_repo: Arc<dyn MangaRepositoryPort>,
}

impl GetMangaHandler {
    pub fn new(manga_repo: Arc<dyn MangaRepositoryPort>) -> Self {
        Self { manga_repo }
    }

    pub async fn handle(&self, query: GetManga) -> Result<Manga, ApplicationError> {
        self.manga_repo
            .find_by_id(query.manga_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Manga", query.manga_id))
    }
}

/// ListMangas Handler
pub struct ListMangasHandler {
    manga_repo: Arc<dyn MangaRepositoryPort>,
}

impl ListMangasHandler {
    pub fn new(manga_repo: Arc<dyn MangaRepositoryPort>) -> Self {
        Self { manga_repo }
    }

    pub async fn handle(&self, _query: ListMangas) -> Result<Vec<Manga>, ApplicationError> {
        Ok(self.manga_repo.find_all().await?)
    }
}

//! 测试用 Repository 实现

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::application::ports::{MangaRepositoryPort, RepositoryError};
use crate::domain::{Manga, MangaId, NewManga};

/// 基于 BTreeMap 的内存仓储
#[derive(Default)]
pub struct InMemoryMangaRepository {
    rows: Mutex<BTreeMap<i64, Manga>>,
    next_id: Mutex<i64>,
}

impl InMemoryMangaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl MangaRepositoryPort for InMemoryMangaRepository {
    async fn find_all(&self) -> Result<Vec<Manga>, RepositoryError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: MangaId) -> Result<Option<Manga>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id.value()).cloned())
    }

    async fn insert(&self, manga: &NewManga) -> Result<Manga, RepositoryError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let created = manga.clone().with_id(MangaId::new(*next_id));
        self.rows
            .lock()
            .unwrap()
            .insert(*next_id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: MangaId, manga: &NewManga) -> Result<bool, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id.value()) {
            Some(row) => {
                *row = manga.clone().with_id(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: MangaId) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().remove(&id.value()).is_some())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// 所有操作都失败的仓储
pub struct FailingMangaRepository;

fn unavailable() -> RepositoryError {
    RepositoryError::DatabaseError("database is unavailable".to_string())
}

#[async_trait]
impl MangaRepositoryPort for FailingMangaRepository {
    async fn find_all(&self) -> Result<Vec<Manga>, RepositoryError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: MangaId) -> Result<Option<Manga>, RepositoryError> {
        Err(unavailable())
    }

    async fn insert(&self, _manga: &NewManga) -> Result<Manga, RepositoryError> {
        Err(unavailable())
    }

    async fn update(&self, _id: MangaId, _manga: &NewManga) -> Result<bool, RepositoryError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: MangaId) -> Result<bool, RepositoryError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Err(unavailable())
    }
}

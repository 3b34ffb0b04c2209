//! SQLite Manga Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{MangaRepositoryPort, RepositoryError};
use crate::domain::{Manga, MangaId, NewManga};

/// SQLite Manga Repository
pub struct SqliteMangaRepository {
    pool: DbPool,
}

impl SqliteMangaRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct MangaRow {
    id: i64,
    title: String,
    chapters: i64,
}

impl From<MangaRow> for Manga {
    fn from(row: MangaRow) -> Self {
        Manga::new(MangaId::new(row.id), row.title, row.chapters)
    }
}

fn db_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl MangaRepositoryPort for SqliteMangaRepository {
    async fn find_all(&self) -> Result<Vec<Manga>, RepositoryError> {
        let rows: Vec<MangaRow> =
            sqlx::query_as("SELECT id, title, chapters FROM mangas ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?;

        Ok(rows.into_iter().map(Manga::from).collect())
    }

    async fn find_by_id(&self, id: MangaId) -> Result<Option<Manga>, RepositoryError> {
        let row: Option<MangaRow> =
            sqlx::query_as("SELECT id, title, chapters FROM mangas WHERE id = ?")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        Ok(row.map(Manga::from))
    }

    async fn insert(&self, manga: &NewManga) -> Result<Manga, RepositoryError> {
        let (id,): (i64,) =
            sqlx::query_as("INSERT INTO mangas (title, chapters) VALUES (?, ?) RETURNING id")
                .bind(&manga.title)
                .bind(manga.chapters)
                .fetch_one(&self.pool)
                .await
                .map_err(db_error)?;

        Ok(manga.clone().with_id(MangaId::new(id)))
    }

    async fn update(&self, id: MangaId, manga: &NewManga) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE mangas SET title = ?, chapters = ? WHERE id = ?")
            .bind(&manga.title)
            .bind(manga.chapters)
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: MangaId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM mangas WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}

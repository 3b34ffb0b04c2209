//! Manga Queries

use crate::domain::MangaId;

/// 获取漫画详情查询
#[derive(Debug, Clone)]
pub struct GetManga {
    pub manga_id: MangaId,
}

/// 列出所有漫画查询
#[derive(Debug, Clone)]
pub struct ListMangas;

//! Manga Commands

use crate::domain::{MangaId, NewManga};

/// 创建漫画命令
#[derive(Debug, Clone)]
pub struct CreateManga {
    pub title: String,
    pub chapters: i64,
}

/// 覆盖漫画命令（id 来自路径，不可修改）
#[derive(Debug, Clone)]
pub struct UpdateManga {
    pub manga_id: MangaId,
    pub title: String,
    pub chapters: i64,
}

/// 删除漫画命令
#[derive(Debug, Clone)]
pub struct DeleteManga {
    pub manga_id: MangaId,
}

impl From<CreateManga> for NewManga {
    fn from(command: CreateManga) -> Self {
        NewManga::new(command.title, command.chapters)
    }
}

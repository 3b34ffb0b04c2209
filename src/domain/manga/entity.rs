//! Manga Context - Entity

use serde::{Deserialize, Serialize};

use super::MangaId;

/// 漫画条目
///
/// 不变量:
/// - id 由存储层分配，创建后不可变
/// - title、chapters 不做任何校验（允许空标题、负章节数）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manga {
    pub id: MangaId,
    pub title: String,
    pub chapters: i64,
}

impl Manga {
    pub fn new(id: MangaId, title: impl Into<String>, chapters: i64) -> Self {
        Self {
            id,
            title: title.into(),
            chapters,
        }
    }
}

/// 漫画条目的可写部分（创建/更新时使用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewManga {
    pub title: String,
    pub chapters: i64,
}

impl NewManga {
    pub fn new(title: impl Into<String>, chapters: i64) -> Self {
        Self {
            title: title.into(),
            chapters,
        }
    }

    /// 绑定存储层分配的 id
    pub fn with_id(self, id: MangaId) -> Manga {
        Manga {
            id,
            title: self.title,
            chapters: self.chapters,
        }
    }
}

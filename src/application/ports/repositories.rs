//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Manga, MangaId, NewManga};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Manga Repository Port
///
/// 每个方法对应一次数据库往返；并发安全由实现方的连接池保证
#[async_trait]
pub trait MangaRepositoryPort: Send + Sync {
    /// 获取所有漫画（按 id 升序）
    async fn find_all(&self) -> Result<Vec<Manga>, RepositoryError>;

    /// 根据 ID 查找漫画
    async fn find_by_id(&self, id: MangaId) -> Result<Option<Manga>, RepositoryError>;

    /// 插入漫画，返回带有存储层分配 id 的条目
    async fn insert(&self, manga: &NewManga) -> Result<Manga, RepositoryError>;

    /// 覆盖 title 与 chapters
    ///
    /// 返回 `false` 表示没有匹配的行（不会新建行）
    async fn update(&self, id: MangaId, manga: &NewManga) -> Result<bool, RepositoryError>;

    /// 删除漫画，返回 `false` 表示没有匹配的行
    async fn delete(&self, id: MangaId) -> Result<bool, RepositoryError>;

    /// 检查存储是否可用
    async fn ping(&self) -> Result<(), RepositoryError>;
}

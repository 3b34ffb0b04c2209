//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Manga Context: 漫画条目管理

pub mod manga;

pub use manga::{Manga, MangaId, NewManga};

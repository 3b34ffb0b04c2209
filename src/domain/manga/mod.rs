//! Manga Context - 漫画限界上下文
//!
//! 职责:
//! - 漫画条目 (id, title, chapters) 的数据模型
//! - 路径参数 id 的解析

mod entity;
mod value_objects;

pub use entity::{Manga, NewManga};
pub use value_objects::{InvalidMangaId, MangaId};

//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（MangaRepository）
//! - commands: CQRS 命令及处理器（Create / Update / Delete）
//! - queries: CQRS 查询及处理器（Get / List）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use commands::{
    handlers::{CreateMangaHandler, DeleteMangaHandler, UpdateMangaHandler},
    CreateManga, DeleteManga, UpdateManga,
};

pub use error::ApplicationError;

pub use ports::{MangaRepositoryPort, RepositoryError};

pub use queries::{
    handlers::{GetMangaHandler, ListMangasHandler},
    GetManga, ListMangas,
};

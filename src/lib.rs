//! Mangas - 漫画条目 CRUD 服务
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Manga Context: 漫画条目 (id, title, chapters)
//!
//! 应用层 (application/):
//! - Ports: MangaRepositoryPort
//! - Commands: Create / Update / Delete
//! - Queries: Get / List
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API (axum)
//! - Persistence: SQLite (sqlx)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

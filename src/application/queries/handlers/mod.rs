//! Query Handlers 实现

mod manga_handlers;

pub use manga_handlers::*;

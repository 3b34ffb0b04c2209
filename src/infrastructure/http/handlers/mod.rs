//! HTTP Handlers

mod manga;
mod ping;

pub use manga::*;
pub use ping::*;

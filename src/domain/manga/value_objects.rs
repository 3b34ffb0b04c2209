//! Manga Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// 漫画唯一标识，由存储层自增生成
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MangaId(i64);

impl MangaId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for MangaId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MangaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 无法解析为整数的 id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid manga id: {0:?}")]
pub struct InvalidMangaId(pub String);

impl FromStr for MangaId {
    type Err = InvalidMangaId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| InvalidMangaId(s.to_string()))
    }
}

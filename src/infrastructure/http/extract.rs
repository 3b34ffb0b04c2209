//! HTTP Extractors
//!
//! 把 axum 的提取失败统一转换为 400 `ApiError`

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::application::ApplicationError;
use crate::domain::MangaId;
use crate::infrastructure::http::error::ApiError;

/// JSON 请求体
///
/// 解析失败（非 JSON、字段缺失、类型错误、Content-Type 不对）直接返回 400，
/// 不会用默认值继续处理
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}

/// 路径参数 `{id}`，必须是整数
pub struct MangaIdPath(pub MangaId);

#[async_trait]
impl<S> FromRequestParts<S> for MangaIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        let id = raw.parse::<MangaId>().map_err(ApplicationError::from)?;

        Ok(Self(id))
    }
}

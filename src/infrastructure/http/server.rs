//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;

use axum::middleware;
use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::{error_logging_middleware, json_content_type_middleware};
use super::routes::create_routes;
use super::state::AppState;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 构建带全部中间件的 Router
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600));

    create_routes()
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // 最外层，CORS 预检响应也要带上 JSON Content-Type
        .layer(middleware::from_fn(json_content_type_middleware))
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 启动服务器（带优雅关闭）
    ///
    /// 收到关闭信号后停止接受新连接，等待进行中的请求完成
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state.clone());
        let addr = self.config.addr();

        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::application::testing::FailingMangaRepository;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteMangaRepository,
    };

    async fn create_test_router() -> Router {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let state = AppState::new(Arc::new(SqliteMangaRepository::new(pool)));
        build_router(Arc::new(state))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, String, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(text) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(text.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, content_type, json)
    }

    #[tokio::test]
    async fn test_one_piece_lifecycle() {
        let app = create_test_router().await;

        let (status, content_type, created) = send(
            &app,
            Method::POST,
            "/mangas",
            Some(r#"{"title":"One Piece","chapters":1000}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/json");
        assert_eq!(created, json!({"id": 1, "title": "One Piece", "chapters": 1000}));

        let (status, _, fetched) = send(&app, Method::GET, "/mangas/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, _, deleted) = send(&app, Method::DELETE, "/mangas/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted, json!("Manga has been deleted"));

        let (status, content_type, body) = send(&app, Method::GET, "/mangas/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type, "application/json");
        assert_eq!(body["errno"], json!(404));
    }

    #[tokio::test]
    async fn test_list_empty_array_then_k_items() {
        let app = create_test_router().await;

        let (status, _, body) = send(&app, Method::GET, "/mangas", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        for (title, chapters) in [("Akira", 120), ("Pluto", 65), ("Dorohedoro", 167)] {
            let payload = json!({"title": title, "chapters": chapters}).to_string();
            let (status, _, _) = send(&app, Method::POST, "/mangas", Some(payload.as_str())).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (_, _, body) = send(&app, Method::GET, "/mangas", None).await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], json!({"id": 2, "title": "Pluto", "chapters": 65}));
    }

    #[tokio::test]
    async fn test_create_ignores_body_id() {
        let app = create_test_router().await;

        let (_, _, created) = send(
            &app,
            Method::POST,
            "/mangas",
            Some(r#"{"id":77,"title":"Blame!","chapters":65}"#),
        )
        .await;
        assert_eq!(created["id"], json!(1));
    }

    #[tokio::test]
    async fn test_update_uses_path_id() {
        let app = create_test_router().await;
        send(
            &app,
            Method::POST,
            "/mangas",
            Some(r#"{"title":"Hunter x Hunter","chapters":390}"#),
        )
        .await;

        let (status, _, updated) = send(
            &app,
            Method::PUT,
            "/mangas/1",
            Some(r#"{"id":5,"title":"Hunter x Hunter","chapters":400}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            updated,
            json!({"id": 1, "title": "Hunter x Hunter", "chapters": 400})
        );

        let (_, _, fetched) = send(&app, Method::GET, "/mangas/1", None).await;
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_missing_is_404_without_insert() {
        let app = create_test_router().await;

        let (status, _, _) = send(
            &app,
            Method::PUT,
            "/mangas/9",
            Some(r#"{"title":"Ghost","chapters":1}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, _, body) = send(&app, Method::GET, "/mangas", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_delete_missing_is_404() {
        let app = create_test_router().await;
        let (status, _, _) = send(&app, Method::DELETE, "/mangas/3", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_bodies_are_400() {
        let app = create_test_router().await;

        for body in [
            "not json",
            r#"{"title":"No chapters"}"#,
            r#"{"title":1,"chapters":2}"#,
            r#"{"title":"Bad","chapters":"many"}"#,
        ] {
            let (status, content_type, json) =
                send(&app, Method::POST, "/mangas", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(content_type, "application/json");
            assert_eq!(json["errno"], json!(400));
        }

        let (_, _, listed) = send(&app, Method::GET, "/mangas", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_400() {
        let app = create_test_router().await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/mangas")
            .body(Body::from(r#"{"title":"x","chapters":1}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_400() {
        let app = create_test_router().await;

        let (status, _, _) = send(&app, Method::GET, "/mangas/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _, _) = send(&app, Method::DELETE, "/mangas/1.5", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _, _) = send(
            &app,
            Method::PUT,
            "/mangas/one",
            Some(r#"{"title":"x","chapters":1}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_put_keeps_stored_row() {
        let app = create_test_router().await;
        let (_, _, created) = send(
            &app,
            Method::POST,
            "/mangas",
            Some(r#"{"title":"A","chapters":10}"#),
        )
        .await;

        for body in [r#"{"title":"B"}"#, r#"{"title":"B","chapters":"x"}"#, "{"] {
            let (status, _, json) = send(&app, Method::PUT, "/mangas/1", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(json["errno"], json!(400));
        }

        let (status, _, fetched) = send(&app, Method::GET, "/mangas/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
        assert_eq!(fetched, json!({"id": 1, "title": "A", "chapters": 10}));
    }

    #[tokio::test]
    async fn test_cors_preflight_is_json() {
        let app = create_test_router().await;
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/mangas")
            .header("origin", "http://example.com")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_success());
        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_storage_error_detail_is_not_exposed() {
        let state = AppState::new(Arc::new(FailingMangaRepository));
        let app = build_router(Arc::new(state));

        let (status, _, body) = send(&app, Method::GET, "/mangas/1", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], json!("Internal server error"));
    }

    #[tokio::test]
    async fn test_storage_failure_is_500_and_server_keeps_serving() {
        let state = AppState::new(Arc::new(FailingMangaRepository));
        let app = build_router(Arc::new(state));

        let (status, content_type, body) = send(&app, Method::GET, "/mangas", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(content_type, "application/json");
        assert_eq!(body["errno"], json!(500));

        let (status, _, _) = send(
            &app,
            Method::POST,
            "/mangas",
            Some(r#"{"title":"x","chapters":1}"#),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _, body) = send(&app, Method::GET, "/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("degraded"));
    }

    #[tokio::test]
    async fn test_ping_reports_database() {
        let app = create_test_router().await;
        let (status, _, body) = send(&app, Method::GET, "/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("ok"));
        assert_eq!(body["database"], json!("ok"));
    }

    #[tokio::test]
    async fn test_wrong_method_still_json() {
        let app = create_test_router().await;
        let (status, content_type, _) = send(&app, Method::PATCH, "/mangas/1", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(content_type, "application/json");
    }
}

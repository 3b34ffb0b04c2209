//! Mangas - 漫画条目 CRUD 服务
//!
//! 启动顺序: 配置 → 日志 → 数据库 → 建表 → HTTP 服务

use std::sync::Arc;

use mangas::config::{load_config, print_config};
use mangas::infrastructure::http::{AppState, HttpServer, ServerConfig};
use mangas::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteMangaRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：DATABASE_URL > 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},mangas={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Mangas - 漫画条目 CRUD 服务");
    print_config(&config);

    // 确保数据库文件目录存在
    if let Some(parent) = config
        .database
        .sqlite_file_path()
        .as_deref()
        .and_then(std::path::Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库，失败直接退出
    let db_config = DatabaseConfig::new(&config.database.url, config.database.max_connections);
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let manga_repo = Arc::new(SqliteMangaRepository::new(pool.clone()));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, AppState::new(manga_repo));

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}

use std::net::{Ipv4Addr, SocketAddr};

use tracing::info;
use tracing_subscriber::EnvFilter;

use kata_server::config::AppConfig;
use kata_server::database::client::{Database, DbConfig};
use kata_server::init;
use kata_server::middleware::error::AppResult;
use kata_server::middleware::mw_ctx::create_ctx_state;

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let db = Database::connect(DbConfig {
        url: &config.db_url,
        database: &config.db_database,
        namespace: &config.db_namespace,
        username: config.db_username.as_deref(),
        password: config.db_password.as_deref(),
    })
    .await;

    init::run_migrations(&db).await?;

    let ctx_state = create_ctx_state(db, &config);

    init::create_default_data_for_dev(&ctx_state).await;

    let routes_all = init::main_router(&ctx_state);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.http_port));
    info!("->> LISTENING on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    axum::serve(listener, routes_all.into_make_service())
        .await
        .unwrap();

    Ok(())
}

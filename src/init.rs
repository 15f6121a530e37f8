use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    database::client::Database,
    entities::kamus_entry::KamusEntry,
    interfaces::repositories::kamus_alay::KamusAlayRepositoryInterface,
    middleware::{error::AppResult, mw_ctx::CtxState},
    routes::{cleaning, kamus, swagger},
};

/// Starter dictionary for development setups so the endpoints have something
/// to rewrite before a full kamus alay dump is loaded.
const DEFAULT_KAMUS: &[(&str, &str)] = &[
    ("gak", "tidak"),
    ("ga", "tidak"),
    ("gk", "tidak"),
    ("tdk", "tidak"),
    ("yg", "yang"),
    ("dgn", "dengan"),
    ("utk", "untuk"),
    ("bgt", "banget"),
    ("sy", "saya"),
    ("aja", "saja"),
    ("udah", "sudah"),
    ("kalo", "kalau"),
    ("krn", "karena"),
    ("jd", "jadi"),
    ("km", "kamu"),
];

pub async fn run_migrations(database: &Database) -> AppResult<()> {
    database.run_migrations().await?;
    Ok(())
}

pub async fn create_default_data_for_dev(ctx_state: &Arc<CtxState>) {
    if !ctx_state.is_development {
        return;
    }

    let existing = ctx_state
        .db
        .kamus_alay
        .get_all()
        .await
        .unwrap_or_default();
    if !existing.is_empty() {
        return;
    }

    info!("->> seeding default kamus alay entries");
    for (slang, formal) in DEFAULT_KAMUS {
        let _ = ctx_state
            .db
            .kamus_alay
            .upsert(KamusEntry::new(slang, formal))
            .await;
    }
}

pub fn main_router(ctx_state: &Arc<CtxState>) -> Router {
    Router::new()
        .route("/hc", get(get_hc))
        .merge(kamus::routes())
        .merge(cleaning::routes(ctx_state.upload_max_size_mb))
        .merge(swagger::routes())
        .with_state(ctx_state.clone())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn get_hc() -> Response {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    (StatusCode::OK, format!("v{}", VERSION)).into_response()
}

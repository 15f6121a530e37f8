use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::debug;

use crate::{
    middleware::{
        error::CtxResult,
        mw_ctx::CtxState,
        utils::extractor_utils::CleaningInput,
    },
    services::{cleaning_service::CleaningService, report_service::ReportService},
};

pub fn routes(upload_max_size_mb: u64) -> Router<Arc<CtxState>> {
    let max_bytes_val = (1024 * 1024 * upload_max_size_mb) as usize;
    Router::new()
        .route("/cleaningdata", post(cleaning_data))
        .layer(DefaultBodyLimit::max(max_bytes_val))
}

async fn cleaning_data(
    State(state): State<Arc<CtxState>>,
    input: CleaningInput,
) -> CtxResult<Response> {
    match input {
        CleaningInput::Dataset { file_name, bytes } => {
            debug!("cleaning uploaded dataset {file_name} ({} bytes)", bytes.len());
            let report = ReportService::new(&state.db.kamus_alay).build(&bytes).await?;
            Ok(Json(report).into_response())
        }
        CleaningInput::Text { value } => {
            let cleaned = CleaningService::new(&state.db.kamus_alay)
                .clean(&value)
                .await?;
            Ok(cleaned.into_response())
        }
    }
}

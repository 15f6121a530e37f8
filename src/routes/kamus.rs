use std::collections::HashMap;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{
    interfaces::repositories::kamus_alay::KamusAlayRepositoryInterface,
    middleware::{error::CtxResult, mw_ctx::CtxState},
};

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new().route("/getlist", get(get_list))
}

async fn get_list(State(state): State<Arc<CtxState>>) -> CtxResult<Json<HashMap<String, String>>> {
    let dictionary = state.db.kamus_alay.get_map().await?;
    Ok(Json(dictionary))
}

use crate::config::AppConfig;
use crate::database::client::Database;
use std::sync::Arc;

#[derive(Debug)]
pub struct CtxState {
    pub db: Database,
    pub is_development: bool,
    pub upload_max_size_mb: u64,
}

pub fn create_ctx_state(db: Database, config: &AppConfig) -> Arc<CtxState> {
    let ctx_state = CtxState {
        db,
        is_development: config.is_development,
        upload_max_size_mb: config.upload_file_size_max_mb,
    };
    Arc::new(ctx_state)
}

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entities::kamus_entry::KamusEntry;
use crate::middleware::error::AppResult;

#[async_trait]
pub trait KamusAlayRepositoryInterface {
    async fn get_all(&self) -> AppResult<Vec<KamusEntry>>;
    async fn get_map(&self) -> AppResult<HashMap<String, String>>;
    async fn upsert(&self, entry: KamusEntry) -> AppResult<KamusEntry>;
}

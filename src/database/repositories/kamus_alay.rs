use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::database::client::Db;
use crate::entities::kamus_entry::KamusEntry;
use crate::interfaces::repositories::kamus_alay::KamusAlayRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};

pub const TABLE_NAME: &str = "kamus_alay";

/// Slang dictionary store. Records are keyed by the slang token itself, so
/// re-inserting a slang overwrites its formal value (last write wins).
#[derive(Debug)]
pub struct KamusAlayRepository {
    client: Arc<Db>,
}

impl KamusAlayRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!(
            "
        DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
        DEFINE FIELD IF NOT EXISTS slang ON TABLE {TABLE_NAME} TYPE string;
        DEFINE FIELD IF NOT EXISTS formal ON TABLE {TABLE_NAME} TYPE string;
    "
        );
        let mutation = self.client.query(sql).await?;

        mutation.check()?;

        Ok(())
    }
}

#[async_trait]
impl KamusAlayRepositoryInterface for KamusAlayRepository {
    async fn get_all(&self) -> AppResult<Vec<KamusEntry>> {
        let mut res = self
            .client
            .query(format!("SELECT slang, formal FROM {TABLE_NAME};"))
            .await?;

        let entries = res.take::<Vec<KamusEntry>>(0)?;
        Ok(entries)
    }

    async fn get_map(&self) -> AppResult<HashMap<String, String>> {
        let entries = self.get_all().await?;
        let dictionary = entries
            .into_iter()
            .map(|entry| (entry.slang, entry.formal))
            .collect();
        Ok(dictionary)
    }

    async fn upsert(&self, entry: KamusEntry) -> AppResult<KamusEntry> {
        let slang = entry.slang.clone();
        let created: Option<KamusEntry> = self
            .client
            .upsert((TABLE_NAME, slang.as_str()))
            .content(entry)
            .await?;

        created.ok_or(AppError::Generic {
            description: format!("Could not store kamus entry {slang}"),
        })
    }
}

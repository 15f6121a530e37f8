pub mod test_with_server;

use std::sync::Arc;

use kata_server::entities::kamus_entry::KamusEntry;
use kata_server::interfaces::repositories::kamus_alay::KamusAlayRepositoryInterface;
use kata_server::middleware::mw_ctx::CtxState;

// allowing this because test binaries compile independently and not all of
// them use every helper
#[allow(dead_code)]
pub async fn seed_kamus(ctx_state: &Arc<CtxState>, pairs: &[(&str, &str)]) {
    for (slang, formal) in pairs {
        ctx_state
            .db
            .kamus_alay
            .upsert(KamusEntry::new(slang, formal))
            .await
            .expect("seed kamus entry");
    }
}

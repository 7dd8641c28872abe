pub mod config;
pub mod goal;
pub mod investment;
pub mod transaction;

use uuid::Uuid;

/// Synthesize an opaque entry id. Uniqueness is best-effort, which is all
/// the interactive use case needs — ids are never interpreted.
pub(crate) fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

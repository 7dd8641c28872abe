use async_trait::async_trait;

use crate::errors::CoreError;

/// Trait abstraction for text-generation backends.
///
/// The summary feature is display-only and fire-and-forget relative to
/// domain state; if a backend stops working or changes, we replace only
/// its implementation — the rest of the codebase is untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SummaryProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Generate free-form text for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, CoreError>;
}

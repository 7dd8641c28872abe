use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CoreError;
use crate::models::config::AppConfig;
use crate::models::goal::Goal;
use crate::models::investment::Investment;
use crate::models::transaction::Transaction;

use super::store::KeyValueStore;

/// Fixed key namespace, shared with the original browser storage layout.
pub const KEY_TRANSACTIONS: &str = "transactions";
pub const KEY_INVESTMENTS: &str = "investments";
pub const KEY_GOALS: &str = "goals";
pub const KEY_CONFIG: &str = "config";

/// Typed load/save of the four collections over a raw key-value store.
///
/// Values are plain JSON text with no schema version field; loads
/// tolerate absent optional fields through serde defaults on the models.
/// Every write replaces the whole collection.
pub struct StorageManager;

impl StorageManager {
    pub fn load_transactions(store: &dyn KeyValueStore) -> Result<Vec<Transaction>, CoreError> {
        Self::load_list(store, KEY_TRANSACTIONS)
    }

    pub fn save_transactions(
        store: &mut dyn KeyValueStore,
        transactions: &[Transaction],
    ) -> Result<(), CoreError> {
        Self::save(store, KEY_TRANSACTIONS, transactions)
    }

    pub fn load_investments(store: &dyn KeyValueStore) -> Result<Vec<Investment>, CoreError> {
        Self::load_list(store, KEY_INVESTMENTS)
    }

    pub fn save_investments(
        store: &mut dyn KeyValueStore,
        investments: &[Investment],
    ) -> Result<(), CoreError> {
        Self::save(store, KEY_INVESTMENTS, investments)
    }

    pub fn load_goals(store: &dyn KeyValueStore) -> Result<Vec<Goal>, CoreError> {
        Self::load_list(store, KEY_GOALS)
    }

    pub fn save_goals(store: &mut dyn KeyValueStore, goals: &[Goal]) -> Result<(), CoreError> {
        Self::save(store, KEY_GOALS, goals)
    }

    /// A missing config record yields the first-run defaults.
    pub fn load_config(store: &dyn KeyValueStore) -> Result<AppConfig, CoreError> {
        match store.get(KEY_CONFIG)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(AppConfig::default()),
        }
    }

    pub fn save_config(store: &mut dyn KeyValueStore, config: &AppConfig) -> Result<(), CoreError> {
        Self::save(store, KEY_CONFIG, config)
    }

    /// A missing list collection is an empty one.
    fn load_list<T: DeserializeOwned>(
        store: &dyn KeyValueStore,
        key: &str,
    ) -> Result<Vec<T>, CoreError> {
        match store.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save<T: Serialize + ?Sized>(
        store: &mut dyn KeyValueStore,
        key: &str,
        value: &T,
    ) -> Result<(), CoreError> {
        let raw =
            serde_json::to_string(value).map_err(|e| CoreError::Serialization(e.to_string()))?;
        store.set(key, &raw)
    }
}

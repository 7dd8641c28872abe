pub mod errors;
pub mod i18n;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;
pub mod tabular;

use models::config::{AppConfig, ConfigUpdate, RecurringAlert, RecurringSchedule};
use models::goal::Goal;
use models::investment::{round_shares, Investment, InvestmentAction};
use models::transaction::{Transaction, TransactionKind};
use services::allocation_service::{AllocationOutcome, AllocationService};
use services::ledger_service::LedgerService;
use services::summary_service::SummaryService;
use storage::manager::StorageManager;
use storage::store::KeyValueStore;

use chrono::NaiveDate;

use errors::CoreError;
use providers::traits::SummaryProvider;

/// Main entry point for the fingestor core library.
/// Owns the four collections and the store they persist through.
///
/// Every mutator writes the affected collection back immediately; a failed
/// write is logged and the in-memory state stays authoritative for the
/// session, matching the browser-storage semantics of the original app.
#[must_use]
pub struct FinGestor {
    transactions: Vec<Transaction>,
    investments: Vec<Investment>,
    goals: Vec<Goal>,
    config: AppConfig,
    store: Box<dyn KeyValueStore>,
    ledger: LedgerService,
    allocation: AllocationService,
    summary: SummaryService,
}

impl std::fmt::Debug for FinGestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinGestor")
            .field("transactions", &self.transactions.len())
            .field("investments", &self.investments.len())
            .field("goals", &self.goals.len())
            .field("config", &self.config)
            .finish()
    }
}

impl FinGestor {
    /// Load all collections from the store. Missing keys yield empty
    /// collections and default config, so a fresh store is a valid start.
    pub fn open(store: Box<dyn KeyValueStore>) -> Result<Self, CoreError> {
        let transactions = StorageManager::load_transactions(store.as_ref())?;
        let investments = StorageManager::load_investments(store.as_ref())?;
        let goals = StorageManager::load_goals(store.as_ref())?;
        let config = StorageManager::load_config(store.as_ref())?;

        Ok(Self {
            transactions,
            investments,
            goals,
            config,
            store,
            ledger: LedgerService::new(),
            allocation: AllocationService::new(),
            summary: SummaryService::new(),
        })
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Record a new ledger entry. Returns its id.
    pub fn add_transaction(
        &mut self,
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
    ) -> Result<String, CoreError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(CoreError::Validation(
                "Transaction description must not be empty".into(),
            ));
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(CoreError::Validation(format!(
                "Transaction amount must not be negative, got {amount}"
            )));
        }

        let transaction = Transaction::new(date, description, amount, kind, category);
        let id = transaction.id.clone();
        self.transactions.push(transaction);
        self.persist_transactions();
        Ok(id)
    }

    /// Remove a ledger entry by id. Returns whether anything was removed.
    pub fn delete_transaction(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            self.persist_transactions();
        }
        removed
    }

    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Parse a transaction export (CSV or xlsx bytes) and append every
    /// usable row. Returns the number of rows imported.
    pub fn import_transactions(
        &mut self,
        file_name: &str,
        data: &[u8],
    ) -> Result<usize, CoreError> {
        let sheet = tabular::sheet::Sheet::from_file_bytes(file_name, data)?;
        let imported = tabular::import::parse_transactions(&sheet)?;
        let count = imported.len();
        self.transactions.extend(imported);
        self.persist_transactions();
        Ok(count)
    }

    /// Serialize all transactions to CSV text with the canonical headers.
    pub fn export_transactions_csv(&self) -> Result<String, CoreError> {
        tabular::export::transactions_to_csv(&self.transactions)
    }

    /// Serialize all transactions to xlsx bytes.
    pub fn export_transactions_xlsx(&self) -> Result<Vec<u8>, CoreError> {
        tabular::export::transactions_to_xlsx(&self.transactions)
    }

    // ── Investments ─────────────────────────────────────────────────

    /// Record a brokerage order/event. When `shares` is absent it is
    /// derived from value and price, rounded to 4 fractional digits.
    /// Returns the new entry's id.
    #[allow(clippy::too_many_arguments)]
    pub fn add_investment(
        &mut self,
        name: impl Into<String>,
        ticker: Option<String>,
        isin: Option<String>,
        action: InvestmentAction,
        date: NaiveDate,
        price_per_share: f64,
        invested_value: f64,
        shares: Option<f64>,
        notes: Option<String>,
    ) -> Result<String, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Investment name must not be empty".into(),
            ));
        }
        if !price_per_share.is_finite() || price_per_share < 0.0 {
            return Err(CoreError::Validation(format!(
                "Price per share must not be negative, got {price_per_share}"
            )));
        }
        if !invested_value.is_finite() {
            return Err(CoreError::Validation(format!(
                "Invested value must be a finite number, got {invested_value}"
            )));
        }

        let invested_value = invested_value.abs();
        let shares = match shares {
            Some(shares) if shares.is_finite() => shares,
            _ if price_per_share > 0.0 => round_shares(invested_value / price_per_share),
            _ => 0.0,
        };

        let investment = Investment {
            id: models::new_entry_id(),
            name,
            ticker,
            isin,
            action,
            date,
            price_per_share,
            invested_value,
            shares,
            notes,
        };
        let id = investment.id.clone();
        self.investments.push(investment);
        self.persist_investments();
        Ok(id)
    }

    /// Remove an investment by id. Returns whether anything was removed.
    pub fn delete_investment(&mut self, id: &str) -> bool {
        let before = self.investments.len();
        self.investments.retain(|i| i.id != id);
        let removed = self.investments.len() != before;
        if removed {
            self.persist_investments();
        }
        removed
    }

    #[must_use]
    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    /// Parse a brokerage export (CSV or xlsx bytes) and append its rows.
    /// Returns the number of rows imported.
    pub fn import_investments(&mut self, file_name: &str, data: &[u8]) -> Result<usize, CoreError> {
        let sheet = tabular::sheet::Sheet::from_file_bytes(file_name, data)?;
        let imported = tabular::import::parse_investments(&sheet)?;
        let count = imported.len();
        self.investments.extend(imported);
        self.persist_investments();
        Ok(count)
    }

    /// Serialize all investments to xlsx bytes.
    pub fn export_investments_xlsx(&self) -> Result<Vec<u8>, CoreError> {
        tabular::export::investments_to_xlsx(&self.investments)
    }

    // ── Goals ───────────────────────────────────────────────────────

    /// Create a savings goal. Returns its id.
    pub fn add_goal(
        &mut self,
        title: impl Into<String>,
        target_amount: f64,
        current_amount: f64,
    ) -> Result<String, CoreError> {
        let goal = Goal::new(title, target_amount, current_amount)?;
        let id = goal.id.clone();
        self.goals.push(goal);
        self.persist_goals();
        Ok(id)
    }

    /// Remove a goal by id. Returns whether anything was removed.
    /// Money already allocated stays in the transfer history.
    pub fn delete_goal(&mut self, id: &str) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        let removed = self.goals.len() != before;
        if removed {
            self.persist_goals();
        }
        removed
    }

    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Move the configured percentage of the current balance into a goal,
    /// dated today. Both collections are persisted only when money moved.
    pub fn allocate_to_goal(&mut self, goal_id: &str) -> AllocationOutcome {
        let today = chrono::Utc::now().date_naive();
        let outcome = self.allocation.allocate(
            &mut self.transactions,
            &mut self.goals,
            &self.config,
            goal_id,
            today,
        );
        if matches!(outcome, AllocationOutcome::Allocated { .. }) {
            self.persist_transactions();
            self.persist_goals();
        }
        outcome
    }

    // ── Aggregates ──────────────────────────────────────────────────

    /// Net balance: income minus expense, transfers excluded.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.ledger.balance(&self.transactions)
    }

    /// Expense totals per category in first-seen order, automatic-savings
    /// transfers included.
    #[must_use]
    pub fn expense_by_category(&self) -> Vec<(String, f64)> {
        self.ledger.expense_by_category(&self.transactions)
    }

    /// Total capital deployed into buy orders.
    #[must_use]
    pub fn total_invested(&self) -> f64 {
        self.ledger.total_invested(&self.investments)
    }

    /// Sum of the amounts already put aside across all goals.
    #[must_use]
    pub fn savings_balance(&self) -> f64 {
        self.ledger.savings_balance(&self.goals)
    }

    // ── Config ──────────────────────────────────────────────────────

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Apply a merge-style config patch. A rejected patch leaves the
    /// config unchanged and nothing is persisted.
    pub fn update_config(&mut self, update: ConfigUpdate) -> Result<(), CoreError> {
        self.config.apply(update)?;
        self.persist_config();
        Ok(())
    }

    /// Add a recurring transaction template. Returns its id.
    pub fn add_recurring_schedule(
        &mut self,
        mut schedule: RecurringSchedule,
    ) -> Result<String, CoreError> {
        if schedule.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "Schedule description must not be empty".into(),
            ));
        }
        if schedule.id.is_empty() {
            schedule.id = models::new_entry_id();
        }
        let id = schedule.id.clone();
        self.config.recurring_schedules.push(schedule);
        self.persist_config();
        Ok(id)
    }

    /// Add a day-of-month reminder. Returns its id.
    pub fn add_alert(&mut self, mut alert: RecurringAlert) -> Result<String, CoreError> {
        if alert.title.trim().is_empty() {
            return Err(CoreError::Validation(
                "Alert title must not be empty".into(),
            ));
        }
        if alert.id.is_empty() {
            alert.id = models::new_entry_id();
        }
        let id = alert.id.clone();
        self.config.alerts.push(alert);
        self.persist_config();
        Ok(id)
    }

    /// Remove a reminder by id. Returns whether anything was removed.
    pub fn remove_alert(&mut self, id: &str) -> bool {
        let before = self.config.alerts.len();
        self.config.alerts.retain(|a| a.id != id);
        let removed = self.config.alerts.len() != before;
        if removed {
            self.persist_config();
        }
        removed
    }

    // ── Summary ─────────────────────────────────────────────────────

    /// Ask a text-generation provider for a financial health summary.
    /// Display-only: the result never feeds back into state, and provider
    /// failures degrade to a localized fallback message.
    pub async fn summarize_finances(&self, provider: &dyn SummaryProvider) -> String {
        self.summary
            .summarize(
                provider,
                &self.transactions,
                &self.investments,
                &self.config.currency,
                self.config.language,
            )
            .await
    }

    // ── Internal ────────────────────────────────────────────────────

    fn persist_transactions(&mut self) {
        if let Err(err) = StorageManager::save_transactions(self.store.as_mut(), &self.transactions)
        {
            tracing::warn!(error = %err, "failed to persist transactions");
        }
    }

    fn persist_investments(&mut self) {
        if let Err(err) = StorageManager::save_investments(self.store.as_mut(), &self.investments) {
            tracing::warn!(error = %err, "failed to persist investments");
        }
    }

    fn persist_goals(&mut self) {
        if let Err(err) = StorageManager::save_goals(self.store.as_mut(), &self.goals) {
            tracing::warn!(error = %err, "failed to persist goals");
        }
    }

    fn persist_config(&mut self) {
        if let Err(err) = StorageManager::save_config(self.store.as_mut(), &self.config) {
            tracing::warn!(error = %err, "failed to persist config");
        }
    }
}

use chrono::NaiveDate;

use crate::i18n;
use crate::models::config::AppConfig;
use crate::models::goal::Goal;
use crate::models::transaction::{Transaction, TransactionKind, AUTOMATIC_SAVINGS_CATEGORY};

use super::ledger_service::LedgerService;

/// Result of an allocation attempt. The no-op cases are ordinary
/// statuses, not errors — the caller decides whether to surface them.
#[derive(Debug, Clone, PartialEq)]
pub enum AllocationOutcome {
    /// A transfer entry was recorded and the goal's accumulated amount
    /// grew by the same value.
    Allocated { amount: f64 },
    /// The computed amount was not positive; nothing changed.
    NothingToAllocate,
    /// No goal with the given id exists; nothing changed.
    GoalNotFound,
}

/// Moves a percentage of the current balance into a named goal, recording
/// the move as a transfer entry. The only operation that mutates two
/// collections as one unit.
pub struct AllocationService {
    ledger: LedgerService,
}

impl AllocationService {
    pub fn new() -> Self {
        Self {
            ledger: LedgerService::new(),
        }
    }

    /// Allocate `config.allocation_percentage` percent of the current
    /// balance to the goal with `goal_id`, dated `today`.
    ///
    /// The balance is recomputed from the income/expense history on every
    /// call — transfers are excluded — so repeated allocations against an
    /// unchanged ledger move the same amount each time.
    pub fn allocate(
        &self,
        transactions: &mut Vec<Transaction>,
        goals: &mut [Goal],
        config: &AppConfig,
        goal_id: &str,
        today: NaiveDate,
    ) -> AllocationOutcome {
        // Resolve the goal before computing anything so the two mutations
        // below happen together or not at all.
        let Some(goal) = goals.iter_mut().find(|g| g.id == goal_id) else {
            return AllocationOutcome::GoalNotFound;
        };

        let balance = self.ledger.balance(transactions);
        let amount = if balance > 0.0 {
            balance * f64::from(config.allocation_percentage) / 100.0
        } else {
            0.0
        };
        if amount <= 0.0 {
            return AllocationOutcome::NothingToAllocate;
        }

        goal.current_amount += amount;
        let description = format!(
            "{}: {}",
            i18n::allocation_label(config.language),
            goal.title
        );
        transactions.push(Transaction::new(
            today,
            description,
            amount,
            TransactionKind::Transfer,
            AUTOMATIC_SAVINGS_CATEGORY,
        ));

        AllocationOutcome::Allocated { amount }
    }
}

impl Default for AllocationService {
    fn default() -> Self {
        Self::new()
    }
}

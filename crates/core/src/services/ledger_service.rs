use crate::models::goal::Goal;
use crate::models::investment::Investment;
use crate::models::transaction::{Transaction, TransactionKind, AUTOMATIC_SAVINGS_CATEGORY};

/// Derived aggregates over the in-memory collections.
///
/// Pure business logic — no I/O, no mutation. Everything is recomputed on
/// read and never stored.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Net balance: income minus expense. Transfers are internal moves
    /// and never affect the balance.
    #[must_use]
    pub fn balance(&self, transactions: &[Transaction]) -> f64 {
        transactions
            .iter()
            .map(|t| match t.kind {
                TransactionKind::Income => t.amount,
                TransactionKind::Expense => -t.amount,
                TransactionKind::Transfer => 0.0,
            })
            .sum()
    }

    /// Expense totals grouped by category, in first-seen order.
    ///
    /// Automatic-savings transfers count as spending here (they leave the
    /// disposable pool) even though the balance excludes them.
    #[must_use]
    pub fn expense_by_category(&self, transactions: &[Transaction]) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for t in transactions {
            let charted = t.kind == TransactionKind::Expense
                || (t.kind == TransactionKind::Transfer
                    && t.category == AUTOMATIC_SAVINGS_CATEGORY);
            if !charted {
                continue;
            }
            match totals.iter_mut().find(|(category, _)| category == &t.category) {
                Some((_, sum)) => *sum += t.amount,
                None => totals.push((t.category.clone(), t.amount)),
            }
        }
        totals
    }

    /// Total capital deployed into assets (buy orders only).
    #[must_use]
    pub fn total_invested(&self, investments: &[Investment]) -> f64 {
        investments
            .iter()
            .filter(|i| i.action.is_buy())
            .map(|i| i.invested_value)
            .sum()
    }

    /// Sum of everything already put aside across all goals.
    #[must_use]
    pub fn savings_balance(&self, goals: &[Goal]) -> f64 {
        goals.iter().map(|g| g.current_amount).sum()
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}

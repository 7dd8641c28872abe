use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category written by the allocation operation. Transfers in this
/// category count toward expense-style category charts even though the
/// balance ignores every transfer.
pub const AUTOMATIC_SAVINGS_CATEGORY: &str = "Poupança Automática";

/// Fallbacks used by the importer when a row has no usable value.
pub const FALLBACK_DESCRIPTION: &str = "Sem descrição";
pub const FALLBACK_CATEGORY: &str = "Outros";

/// Suggested category labels. A transaction may carry any free-text
/// category; this list only feeds UI suggestions.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Alimentação",
    "Habitação",
    "Transporte",
    "Saúde",
    "Lazer",
    "Salário",
    "Investimento",
    "Poupança Automática",
    "Transferência Entre Contas",
    "Outros",
];

/// Kind of ledger entry.
///
/// Transfers represent internal moves (e.g. goal funding): they never
/// affect the income-minus-expense balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
    Transfer,
}

impl TransactionKind {
    /// Parse the wire/import spelling, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            "transfer" => Some(TransactionKind::Transfer),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
            TransactionKind::Transfer => write!(f, "transfer"),
        }
    }
}

/// A single ledger entry. Never mutated after creation; removed by id.
///
/// Field names on the wire match the original persisted layout
/// (`type` for the kind), so existing stored data loads unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    /// Non-negative magnitude; the kind carries the direction.
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: super::new_entry_id(),
            date,
            description: description.into(),
            amount,
            kind,
            category: category.into(),
        }
    }
}

//! Header classification and alias-driven row mapping.
//!
//! Aliases are resolved once per file into column positions, producing a
//! typed intermediate row before any domain object is constructed.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{NaiveDate, Utc};

use crate::errors::{CoreError, FileKind};
use crate::models::investment::{Investment, InvestmentAction, FALLBACK_ASSET_NAME};
use crate::models::transaction::{
    Transaction, TransactionKind, FALLBACK_CATEGORY, FALLBACK_DESCRIPTION,
};
use crate::models::new_entry_id;

use super::numeric;
use super::sheet::{Cell, Sheet};

/// Lower-cased headers that mark a file as a brokerage/investment export.
const INVESTMENT_MARKERS: &[&str] = &[
    "ticker",
    "isin",
    "shares",
    "price / share",
    "no. of shares",
    "action",
];

/// Lower-cased headers that mark a file as a transaction export.
const TRANSACTION_MARKERS: &[&str] = &["category", "categoria", "description", "descrição"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TransactionField {
    Id,
    Date,
    Description,
    Amount,
    Debit,
    Credit,
    Kind,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum InvestmentField {
    Id,
    Name,
    Ticker,
    Isin,
    Action,
    Date,
    Price,
    Total,
    Shares,
    Notes,
}

/// Canonical fields and their accepted aliases. Aliases are ordered from
/// canonical spelling to vendor/locale-specific ones; the first header
/// match wins.
const TRANSACTION_ALIASES: &[(TransactionField, &[&str])] = &[
    (TransactionField::Id, &["id"]),
    (TransactionField::Date, &["date", "data do movimento"]),
    (TransactionField::Description, &["description", "descrição"]),
    (TransactionField::Amount, &["amount"]),
    (TransactionField::Debit, &["debito", "débito", "debit"]),
    (TransactionField::Credit, &["credito", "crédito", "credit"]),
    (TransactionField::Kind, &["type"]),
    (TransactionField::Category, &["category", "categoria"]),
];

const INVESTMENT_ALIASES: &[(InvestmentField, &[&str])] = &[
    (InvestmentField::Id, &["id"]),
    (InvestmentField::Name, &["name"]),
    (InvestmentField::Ticker, &["ticker"]),
    (InvestmentField::Isin, &["isin"]),
    (InvestmentField::Action, &["type", "action"]),
    (InvestmentField::Date, &["date", "time"]),
    (InvestmentField::Price, &["pricepershare", "price / share", "price"]),
    (InvestmentField::Total, &["investedvalue", "total"]),
    (InvestmentField::Shares, &["shares", "no. of shares"]),
    (InvestmentField::Notes, &["notes"]),
];

/// Column positions resolved once per file from the header row.
struct ColumnMap<F> {
    columns: HashMap<F, usize>,
}

impl<F: Copy + Eq + Hash> ColumnMap<F> {
    fn resolve(headers: &[String], aliases: &[(F, &[&str])]) -> Self {
        let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
        let mut columns = HashMap::new();
        for (field, names) in aliases {
            let position = names
                .iter()
                .find_map(|name| lowered.iter().position(|h| h == name));
            if let Some(idx) = position {
                columns.insert(*field, idx);
            }
        }
        Self { columns }
    }

    fn cell<'a>(&self, row: &'a [Cell], field: F) -> Option<&'a Cell> {
        self.columns
            .get(&field)
            .and_then(|idx| row.get(*idx))
            .filter(|cell| !cell.is_empty())
    }

    fn text(&self, row: &[Cell], field: F) -> Option<String> {
        self.cell(row, field).and_then(|cell| match cell {
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) => Some(number_as_text(*n)),
            Cell::Empty => None,
        })
    }

    fn decimal(&self, row: &[Cell], field: F) -> Option<f64> {
        self.cell(row, field).and_then(numeric::cell_decimal)
    }

    fn date(&self, row: &[Cell], field: F) -> Option<NaiveDate> {
        self.cell(row, field).and_then(numeric::cell_date)
    }
}

/// Render a numeric cell for text-ish columns without a trailing ".0"
/// (spreadsheets store bare ids as numbers).
fn number_as_text(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Decide what kind of export a header row belongs to.
#[must_use]
pub fn classify(headers_lower: &[String]) -> FileKind {
    let is_investment = headers_lower
        .iter()
        .any(|h| INVESTMENT_MARKERS.contains(&h.as_str()));
    if is_investment {
        FileKind::Investments
    } else {
        FileKind::Transactions
    }
}

/// Typed intermediate transaction row — all aliasing resolved, nothing
/// validated yet.
#[derive(Debug, Default)]
struct TransactionRow {
    id: Option<String>,
    date: Option<NaiveDate>,
    description: Option<String>,
    amount: Option<f64>,
    debit: Option<f64>,
    credit: Option<f64>,
    kind: Option<TransactionKind>,
    category: Option<String>,
}

/// Parse a transaction export.
///
/// Files whose headers carry investment-schema vocabulary are rejected
/// wholesale before any row is read. Rows without a usable amount are
/// dropped silently — import tolerance, not validation failure.
pub fn parse_transactions(sheet: &Sheet) -> Result<Vec<Transaction>, CoreError> {
    if classify(&sheet.headers_lower()) == FileKind::Investments {
        return Err(CoreError::WrongFileKind {
            expected: FileKind::Transactions,
            detected: FileKind::Investments,
        });
    }

    let map = ColumnMap::resolve(&sheet.headers, TRANSACTION_ALIASES);
    let today = Utc::now().date_naive();
    let mut out = Vec::new();

    for row in &sheet.rows {
        let raw = TransactionRow {
            id: map.text(row, TransactionField::Id),
            date: map.date(row, TransactionField::Date),
            description: map.text(row, TransactionField::Description),
            amount: map.decimal(row, TransactionField::Amount),
            debit: map.decimal(row, TransactionField::Debit),
            credit: map.decimal(row, TransactionField::Credit),
            kind: map
                .text(row, TransactionField::Kind)
                .and_then(|s| TransactionKind::parse(&s)),
            category: map.text(row, TransactionField::Category),
        };

        // A normalized amount column wins; otherwise the non-zero side of
        // a debit/credit pair decides both amount and kind. Values keep
        // their magnitude regardless of source sign — some banks export
        // debits as negatives. Rows with neither column are non-data rows
        // (e.g. running-balance lines).
        let credit = raw.credit.unwrap_or(0.0);
        let debit = raw.debit.unwrap_or(0.0);
        let (amount, kind) = if let Some(amount) = raw.amount {
            (amount.abs(), raw.kind.unwrap_or(TransactionKind::Expense))
        } else if credit != 0.0 {
            (credit.abs(), raw.kind.unwrap_or(TransactionKind::Income))
        } else if debit != 0.0 {
            (debit.abs(), raw.kind.unwrap_or(TransactionKind::Expense))
        } else {
            continue;
        };

        out.push(Transaction {
            id: raw.id.unwrap_or_else(new_entry_id),
            date: raw.date.unwrap_or(today),
            description: raw
                .description
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
            amount,
            kind,
            category: raw
                .category
                .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
        });
    }

    Ok(out)
}

/// Typed intermediate investment row.
#[derive(Debug, Default)]
struct InvestmentRow {
    id: Option<String>,
    name: Option<String>,
    ticker: Option<String>,
    isin: Option<String>,
    action: Option<String>,
    date: Option<NaiveDate>,
    price: Option<f64>,
    total: Option<f64>,
    shares: Option<f64>,
    notes: Option<String>,
}

/// Parse an investment export.
///
/// A file with transaction-looking headers and no investment-schema
/// header is rejected as the wrong kind; a file with no data rows at all
/// is an explicit empty-file error.
pub fn parse_investments(sheet: &Sheet) -> Result<Vec<Investment>, CoreError> {
    if sheet.rows.is_empty() {
        return Err(CoreError::EmptyFile);
    }

    let lowered = sheet.headers_lower();
    let has_investment_headers = lowered
        .iter()
        .any(|h| INVESTMENT_MARKERS.contains(&h.as_str()));
    let has_transaction_headers = lowered
        .iter()
        .any(|h| TRANSACTION_MARKERS.contains(&h.as_str()));
    if !has_investment_headers && has_transaction_headers {
        return Err(CoreError::WrongFileKind {
            expected: FileKind::Investments,
            detected: FileKind::Transactions,
        });
    }

    let map = ColumnMap::resolve(&sheet.headers, INVESTMENT_ALIASES);
    let today = Utc::now().date_naive();

    let investments = sheet
        .rows
        .iter()
        .map(|row| {
            let raw = InvestmentRow {
                id: map.text(row, InvestmentField::Id),
                name: map.text(row, InvestmentField::Name),
                ticker: map.text(row, InvestmentField::Ticker),
                isin: map.text(row, InvestmentField::Isin),
                action: map.text(row, InvestmentField::Action),
                date: map.date(row, InvestmentField::Date),
                price: map.decimal(row, InvestmentField::Price),
                total: map.decimal(row, InvestmentField::Total),
                shares: map.decimal(row, InvestmentField::Shares),
                notes: map.text(row, InvestmentField::Notes),
            };

            Investment {
                id: raw.id.unwrap_or_else(new_entry_id),
                name: raw.name.unwrap_or_else(|| FALLBACK_ASSET_NAME.to_string()),
                ticker: raw.ticker,
                isin: raw.isin,
                action: raw
                    .action
                    .map(|s| InvestmentAction::parse_lenient(&s))
                    .unwrap_or_default(),
                date: raw.date.unwrap_or(today),
                price_per_share: raw.price.unwrap_or(0.0),
                invested_value: raw.total.unwrap_or(0.0).abs(),
                shares: raw.shares.unwrap_or(0.0),
                notes: raw.notes,
            }
        })
        .collect();

    Ok(investments)
}

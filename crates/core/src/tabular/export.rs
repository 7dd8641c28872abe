//! Canonical serialization of the collections back out to files.
//!
//! Export always writes the fixed header lists below, never the import
//! aliases. An empty collection still produces a valid header-only file.

use rust_xlsxwriter::Workbook;

use crate::errors::CoreError;
use crate::models::investment::Investment;
use crate::models::transaction::Transaction;

pub const TRANSACTION_HEADERS: [&str; 6] =
    ["id", "date", "description", "amount", "type", "category"];

pub const INVESTMENT_HEADERS: [&str; 10] = [
    "id",
    "name",
    "ticker",
    "isin",
    "type",
    "date",
    "pricePerShare",
    "investedValue",
    "shares",
    "notes",
];

/// Suggested download names, matching the original export buttons.
pub const TRANSACTIONS_CSV_FILE: &str = "extrato_fingestor.csv";
pub const TRANSACTIONS_XLSX_FILE: &str = "extrato_fingestor.xlsx";
pub const INVESTMENTS_XLSX_FILE: &str = "investimentos_fingestor.xlsx";

const TRANSACTIONS_SHEET: &str = "Extrato";
const INVESTMENTS_SHEET: &str = "Investimentos";

/// Serialize transactions to delimited text.
pub fn transactions_to_csv(transactions: &[Transaction]) -> Result<String, CoreError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(TRANSACTION_HEADERS)?;
    for t in transactions {
        writer.write_record(&[
            t.id.clone(),
            t.date.to_string(),
            t.description.clone(),
            t.amount.to_string(),
            t.kind.to_string(),
            t.category.clone(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CoreError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CoreError::Csv(e.to_string()))
}

/// Serialize transactions to spreadsheet binary.
pub fn transactions_to_xlsx(transactions: &[Transaction]) -> Result<Vec<u8>, CoreError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(TRANSACTIONS_SHEET)?;

    for (col, header) in TRANSACTION_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    for (idx, t) in transactions.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, t.id.as_str())?;
        sheet.write_string(row, 1, t.date.to_string())?;
        sheet.write_string(row, 2, t.description.as_str())?;
        sheet.write_number(row, 3, t.amount)?;
        sheet.write_string(row, 4, t.kind.to_string())?;
        sheet.write_string(row, 5, t.category.as_str())?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Serialize investments to spreadsheet binary.
pub fn investments_to_xlsx(investments: &[Investment]) -> Result<Vec<u8>, CoreError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(INVESTMENTS_SHEET)?;

    for (col, header) in INVESTMENT_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    for (idx, inv) in investments.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, inv.id.as_str())?;
        sheet.write_string(row, 1, inv.name.as_str())?;
        sheet.write_string(row, 2, inv.ticker.as_deref().unwrap_or(""))?;
        sheet.write_string(row, 3, inv.isin.as_deref().unwrap_or(""))?;
        sheet.write_string(row, 4, inv.action.to_string())?;
        sheet.write_string(row, 5, inv.date.to_string())?;
        sheet.write_number(row, 6, inv.price_per_share)?;
        sheet.write_number(row, 7, inv.invested_value)?;
        sheet.write_number(row, 8, inv.shares)?;
        sheet.write_string(row, 9, inv.notes.as_deref().unwrap_or(""))?;
    }

    Ok(workbook.save_to_buffer()?)
}

// ═══════════════════════════════════════════════════════════════════
// Export Tests — canonical headers, CSV text, xlsx binary
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use fingestor_core::models::investment::{Investment, InvestmentAction};
use fingestor_core::models::transaction::{Transaction, TransactionKind};
use fingestor_core::tabular::export::{
    investments_to_xlsx, transactions_to_csv, transactions_to_xlsx, INVESTMENTS_XLSX_FILE,
    TRANSACTIONS_CSV_FILE,
};
use fingestor_core::tabular::import::{parse_investments, parse_transactions};
use fingestor_core::tabular::sheet::Sheet;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "t1".into(),
            date: date(2024, 1, 5),
            description: "Supermercado".into(),
            amount: 42.5,
            kind: TransactionKind::Expense,
            category: "Alimentação".into(),
        },
        Transaction {
            id: "t2".into(),
            date: date(2024, 1, 28),
            description: "Salário".into(),
            amount: 1500.0,
            kind: TransactionKind::Income,
            category: "Salário".into(),
        },
    ]
}

fn sample_investment() -> Investment {
    Investment {
        id: "inv-1".into(),
        name: "Vanguard FTSE All-World".into(),
        ticker: Some("VWCE".into()),
        isin: Some("IE00BK5BQT80".into()),
        action: InvestmentAction::MarketBuy,
        date: date(2024, 2, 1),
        price_per_share: 105.2,
        invested_value: 526.0,
        shares: 5.0,
        notes: None,
    }
}

// ═══════════════════════════════════════════════════════════════════
// CSV
// ═══════════════════════════════════════════════════════════════════

#[test]
fn empty_export_is_a_header_only_file() {
    let csv = transactions_to_csv(&[]).unwrap();
    assert_eq!(csv.trim_end(), "id,date,description,amount,type,category");
}

#[test]
fn csv_rows_use_canonical_spellings() {
    let csv = transactions_to_csv(&sample_transactions()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "id,date,description,amount,type,category");
    assert_eq!(lines[1], "t1,2024-01-05,Supermercado,42.5,expense,Alimentação");
    assert_eq!(lines[2], "t2,2024-01-28,Salário,1500,income,Salário");
}

#[test]
fn exported_csv_imports_back_unchanged() {
    let original = sample_transactions();
    let csv = transactions_to_csv(&original).unwrap();

    let sheet = Sheet::from_csv_bytes(csv.as_bytes()).unwrap();
    let reimported = parse_transactions(&sheet).unwrap();

    assert_eq!(reimported, original);
}

#[test]
fn descriptions_with_commas_survive_the_round_trip() {
    let transactions = vec![Transaction {
        id: "t1".into(),
        date: date(2024, 1, 5),
        description: "Jantar, vinho e sobremesa".into(),
        amount: 60.0,
        kind: TransactionKind::Expense,
        category: "Lazer".into(),
    }];
    let csv = transactions_to_csv(&transactions).unwrap();

    let sheet = Sheet::from_csv_bytes(csv.as_bytes()).unwrap();
    let reimported = parse_transactions(&sheet).unwrap();
    assert_eq!(reimported[0].description, "Jantar, vinho e sobremesa");
}

// ═══════════════════════════════════════════════════════════════════
// xlsx
// ═══════════════════════════════════════════════════════════════════

#[test]
fn transaction_xlsx_round_trips_through_the_sheet_parser() {
    let original = sample_transactions();
    let bytes = transactions_to_xlsx(&original).unwrap();

    let sheet = Sheet::from_xlsx_bytes(&bytes).unwrap();
    assert_eq!(
        sheet.headers,
        vec!["id", "date", "description", "amount", "type", "category"]
    );

    let reimported = parse_transactions(&sheet).unwrap();
    assert_eq!(reimported, original);
}

#[test]
fn investment_xlsx_round_trips_through_the_sheet_parser() {
    let original = vec![sample_investment()];
    let bytes = investments_to_xlsx(&original).unwrap();

    let sheet = Sheet::from_xlsx_bytes(&bytes).unwrap();
    assert_eq!(sheet.headers[6], "pricePerShare");
    assert_eq!(sheet.headers[7], "investedValue");

    let reimported = parse_investments(&sheet).unwrap();
    assert_eq!(reimported, original);
}

#[test]
fn empty_optional_fields_come_back_as_none() {
    let mut inv = sample_investment();
    inv.ticker = None;
    inv.notes = None;
    let bytes = investments_to_xlsx(&[inv]).unwrap();

    let sheet = Sheet::from_xlsx_bytes(&bytes).unwrap();
    let reimported = parse_investments(&sheet).unwrap();
    assert_eq!(reimported[0].ticker, None);
    assert_eq!(reimported[0].notes, None);
}

#[test]
fn suggested_file_names_follow_the_app_convention() {
    assert_eq!(TRANSACTIONS_CSV_FILE, "extrato_fingestor.csv");
    assert_eq!(INVESTMENTS_XLSX_FILE, "investimentos_fingestor.xlsx");
}

// ═══════════════════════════════════════════════════════════════════
// Service Tests — LedgerService, AllocationService, SummaryService
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use chrono::NaiveDate;

use fingestor_core::errors::CoreError;
use fingestor_core::models::config::{AppConfig, Language};
use fingestor_core::models::goal::Goal;
use fingestor_core::models::investment::{Investment, InvestmentAction};
use fingestor_core::models::transaction::{
    Transaction, TransactionKind, AUTOMATIC_SAVINGS_CATEGORY,
};
use fingestor_core::providers::traits::SummaryProvider;
use fingestor_core::services::allocation_service::{AllocationOutcome, AllocationService};
use fingestor_core::services::ledger_service::LedgerService;
use fingestor_core::services::summary_service::SummaryService;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tx(amount: f64, kind: TransactionKind, category: &str) -> Transaction {
    Transaction::new(date(2024, 1, 1), "entry", amount, kind, category)
}

fn buy(value: f64) -> Investment {
    Investment {
        id: format!("inv-{value}"),
        name: "VWCE".into(),
        ticker: Some("VWCE".into()),
        isin: None,
        action: InvestmentAction::MarketBuy,
        date: date(2024, 1, 1),
        price_per_share: 100.0,
        invested_value: value,
        shares: value / 100.0,
        notes: None,
    }
}

// ═══════════════════════════════════════════════════════════════════
// Mock Providers
// ═══════════════════════════════════════════════════════════════════

struct CannedProvider {
    reply: String,
}

#[async_trait]
impl SummaryProvider for CannedProvider {
    fn name(&self) -> &str {
        "Canned"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, CoreError> {
        Ok(self.reply.clone())
    }
}

struct FailingProvider;

#[async_trait]
impl SummaryProvider for FailingProvider {
    fn name(&self) -> &str {
        "Failing"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, CoreError> {
        Err(CoreError::Api {
            provider: "Failing".into(),
            message: "simulated outage".into(),
        })
    }
}

// ═══════════════════════════════════════════════════════════════════
// LedgerService
// ═══════════════════════════════════════════════════════════════════

#[test]
fn balance_is_income_minus_expense() {
    let ledger = LedgerService::new();
    let transactions = vec![
        tx(1500.0, TransactionKind::Income, "Salário"),
        tx(300.0, TransactionKind::Expense, "Alimentação"),
        tx(200.0, TransactionKind::Expense, "Transporte"),
    ];
    assert_eq!(ledger.balance(&transactions), 1000.0);
}

#[test]
fn transfers_never_affect_the_balance() {
    let ledger = LedgerService::new();
    let transactions = vec![
        tx(1000.0, TransactionKind::Income, "Salário"),
        tx(400.0, TransactionKind::Transfer, AUTOMATIC_SAVINGS_CATEGORY),
        tx(50.0, TransactionKind::Transfer, "Transferência Entre Contas"),
    ];
    assert_eq!(ledger.balance(&transactions), 1000.0);
}

#[test]
fn balance_of_empty_ledger_is_zero() {
    assert_eq!(LedgerService::new().balance(&[]), 0.0);
}

#[test]
fn expense_by_category_keeps_first_seen_order() {
    let ledger = LedgerService::new();
    let transactions = vec![
        tx(30.0, TransactionKind::Expense, "Lazer"),
        tx(100.0, TransactionKind::Expense, "Alimentação"),
        tx(20.0, TransactionKind::Expense, "Lazer"),
    ];
    let totals = ledger.expense_by_category(&transactions);
    assert_eq!(
        totals,
        vec![("Lazer".to_string(), 50.0), ("Alimentação".to_string(), 100.0)]
    );
}

#[test]
fn automatic_savings_transfers_count_as_category_spending() {
    let ledger = LedgerService::new();
    let transactions = vec![
        tx(100.0, TransactionKind::Expense, "Alimentação"),
        tx(80.0, TransactionKind::Transfer, AUTOMATIC_SAVINGS_CATEGORY),
        tx(999.0, TransactionKind::Transfer, "Transferência Entre Contas"),
        tx(500.0, TransactionKind::Income, "Salário"),
    ];
    let totals = ledger.expense_by_category(&transactions);
    assert_eq!(
        totals,
        vec![
            ("Alimentação".to_string(), 100.0),
            (AUTOMATIC_SAVINGS_CATEGORY.to_string(), 80.0),
        ]
    );
}

#[test]
fn total_invested_counts_only_buys() {
    let ledger = LedgerService::new();
    let mut sell = buy(200.0);
    sell.action = InvestmentAction::MarketSell;
    let mut dividend = buy(15.0);
    dividend.action = InvestmentAction::Dividend;

    let investments = vec![buy(500.0), sell, buy(300.0), dividend];
    assert_eq!(ledger.total_invested(&investments), 800.0);
}

#[test]
fn savings_balance_sums_goal_amounts() {
    let ledger = LedgerService::new();
    let goals = vec![
        Goal::new("Férias", 2000.0, 350.0).unwrap(),
        Goal::new("Carro", 10000.0, 1200.0).unwrap(),
    ];
    assert_eq!(ledger.savings_balance(&goals), 1550.0);
}

// ═══════════════════════════════════════════════════════════════════
// AllocationService
// ═══════════════════════════════════════════════════════════════════

#[test]
fn allocation_moves_percentage_of_balance() {
    let service = AllocationService::new();
    let mut transactions = vec![tx(1000.0, TransactionKind::Income, "Salário")];
    let mut goals = vec![Goal::new("Férias", 2000.0, 0.0).unwrap()];
    let goal_id = goals[0].id.clone();
    let config = AppConfig::default(); // 10%

    let outcome = service.allocate(
        &mut transactions,
        &mut goals,
        &config,
        &goal_id,
        date(2024, 3, 1),
    );

    assert_eq!(outcome, AllocationOutcome::Allocated { amount: 100.0 });
    assert_eq!(goals[0].current_amount, 100.0);

    let transfer = transactions.last().unwrap();
    assert_eq!(transfer.kind, TransactionKind::Transfer);
    assert_eq!(transfer.amount, 100.0);
    assert_eq!(transfer.category, AUTOMATIC_SAVINGS_CATEGORY);
    assert_eq!(transfer.date, date(2024, 3, 1));
    assert!(transfer.description.contains("Férias"));
    assert!(transfer.description.starts_with("Alocação para objetivo"));
}

#[test]
fn repeated_allocation_moves_the_same_amount() {
    // Transfers are excluded from the balance, so an unchanged
    // income/expense history yields the same allocation every time.
    let service = AllocationService::new();
    let mut transactions = vec![tx(1000.0, TransactionKind::Income, "Salário")];
    let mut goals = vec![Goal::new("Férias", 2000.0, 0.0).unwrap()];
    let goal_id = goals[0].id.clone();
    let config = AppConfig::default();

    for _ in 0..3 {
        let outcome = service.allocate(
            &mut transactions,
            &mut goals,
            &config,
            &goal_id,
            date(2024, 3, 1),
        );
        assert_eq!(outcome, AllocationOutcome::Allocated { amount: 100.0 });
    }
    assert_eq!(goals[0].current_amount, 300.0);
    assert_eq!(transactions.len(), 4);
}

#[test]
fn allocation_with_non_positive_balance_is_a_noop() {
    let service = AllocationService::new();
    let mut goals = vec![Goal::new("Férias", 2000.0, 0.0).unwrap()];
    let goal_id = goals[0].id.clone();
    let config = AppConfig::default();

    let mut empty = Vec::new();
    assert_eq!(
        service.allocate(&mut empty, &mut goals, &config, &goal_id, date(2024, 3, 1)),
        AllocationOutcome::NothingToAllocate
    );

    let mut negative = vec![tx(500.0, TransactionKind::Expense, "Habitação")];
    assert_eq!(
        service.allocate(&mut negative, &mut goals, &config, &goal_id, date(2024, 3, 1)),
        AllocationOutcome::NothingToAllocate
    );

    assert_eq!(goals[0].current_amount, 0.0);
    assert_eq!(negative.len(), 1);
}

#[test]
fn allocation_to_unknown_goal_changes_nothing() {
    let service = AllocationService::new();
    let mut transactions = vec![tx(1000.0, TransactionKind::Income, "Salário")];
    let mut goals = vec![Goal::new("Férias", 2000.0, 0.0).unwrap()];
    let config = AppConfig::default();

    let outcome = service.allocate(
        &mut transactions,
        &mut goals,
        &config,
        "no-such-goal",
        date(2024, 3, 1),
    );

    assert_eq!(outcome, AllocationOutcome::GoalNotFound);
    assert_eq!(transactions.len(), 1);
    assert_eq!(goals[0].current_amount, 0.0);
}

#[test]
fn allocation_can_push_goal_past_its_target() {
    // Progress display clamps at 100; the stored amount does not.
    let service = AllocationService::new();
    let mut transactions = vec![tx(10000.0, TransactionKind::Income, "Salário")];
    let mut goals = vec![Goal::new("Pequeno", 500.0, 400.0).unwrap()];
    let goal_id = goals[0].id.clone();
    let config = AppConfig::default();

    service.allocate(&mut transactions, &mut goals, &config, &goal_id, date(2024, 3, 1));
    assert_eq!(goals[0].current_amount, 1400.0);
    assert_eq!(goals[0].progress_percent(), 100.0);
}

// ═══════════════════════════════════════════════════════════════════
// SummaryService
// ═══════════════════════════════════════════════════════════════════

#[test]
fn figures_collapse_the_collections() {
    let service = SummaryService::new();
    let transactions = vec![
        tx(1500.0, TransactionKind::Income, "Salário"),
        tx(300.0, TransactionKind::Expense, "Alimentação"),
        tx(100.0, TransactionKind::Transfer, AUTOMATIC_SAVINGS_CATEGORY),
    ];
    let investments = vec![buy(500.0)];

    let figures = service.figures(&transactions, &investments);
    assert_eq!(figures.income_total, 1500.0);
    assert_eq!(figures.expense_total, 300.0);
    assert_eq!(figures.investment_count, 1);
    assert_eq!(figures.expense_by_category.len(), 2);
}

#[test]
fn prompt_carries_figures_and_language() {
    let service = SummaryService::new();
    let transactions = vec![
        tx(1500.0, TransactionKind::Income, "Salário"),
        tx(300.0, TransactionKind::Expense, "Alimentação"),
    ];
    let figures = service.figures(&transactions, &[]);

    let pt = service.build_prompt(&figures, "€", Language::Pt);
    assert!(pt.contains("1500.00 €"));
    assert!(pt.contains("300.00 €"));
    assert!(pt.contains("Alimentação: 300.00"));
    assert!(pt.contains("Português de Portugal"));

    let en = service.build_prompt(&figures, "$", Language::En);
    assert!(en.contains("1500.00 $"));
    assert!(en.contains("English"));
}

#[tokio::test]
async fn summarize_returns_provider_text() {
    let service = SummaryService::new();
    let provider = CannedProvider {
        reply: "Tudo em ordem.".into(),
    };
    let text = service
        .summarize(&provider, &[], &[], "€", Language::Pt)
        .await;
    assert_eq!(text, "Tudo em ordem.");
}

#[tokio::test]
async fn summarize_degrades_to_localized_fallback() {
    let service = SummaryService::new();

    let pt = service
        .summarize(&FailingProvider, &[], &[], "€", Language::Pt)
        .await;
    assert_eq!(pt, "Não foi possível gerar a análise no momento.");

    let en = service
        .summarize(&FailingProvider, &[], &[], "€", Language::En)
        .await;
    assert_eq!(en, "Could not generate analysis at this time.");
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Asset name used when an imported row carries none.
pub const FALLBACK_ASSET_NAME: &str = "Ativo Desconhecido";

/// Broker order/event type. Wire strings follow the brokerage export
/// vocabulary ("Market buy", "Interest on cash", ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentAction {
    #[default]
    #[serde(rename = "Market buy")]
    MarketBuy,
    #[serde(rename = "Market sell")]
    MarketSell,
    Dividend,
    Deposit,
    Withdrawal,
    #[serde(rename = "Interest on cash")]
    InterestOnCash,
}

impl InvestmentAction {
    /// Money deployed into an asset position. Only these actions count
    /// toward the total-invested aggregate.
    pub fn is_buy(&self) -> bool {
        matches!(self, InvestmentAction::MarketBuy)
    }

    /// Lenient parse for vendor export values. Unknown strings fall back
    /// to a market buy, matching the original import behavior.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "market sell" | "sell" => InvestmentAction::MarketSell,
            "dividend" => InvestmentAction::Dividend,
            "deposit" => InvestmentAction::Deposit,
            "withdrawal" => InvestmentAction::Withdrawal,
            "interest on cash" | "interest" => InvestmentAction::InterestOnCash,
            _ => InvestmentAction::MarketBuy,
        }
    }
}

impl std::fmt::Display for InvestmentAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            InvestmentAction::MarketBuy => "Market buy",
            InvestmentAction::MarketSell => "Market sell",
            InvestmentAction::Dividend => "Dividend",
            InvestmentAction::Deposit => "Deposit",
            InvestmentAction::Withdrawal => "Withdrawal",
            InvestmentAction::InterestOnCash => "Interest on cash",
        };
        write!(f, "{label}")
    }
}

/// A single brokerage order/event. Immutable after creation.
///
/// `ticker`, `isin` and `notes` are absent in older stored data and in
/// many vendor exports; they default to `None` on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isin: Option<String>,
    #[serde(rename = "type")]
    pub action: InvestmentAction,
    pub date: NaiveDate,
    /// Price per unit, ≥ 0.
    pub price_per_share: f64,
    /// Always stored as a non-negative magnitude regardless of source sign.
    pub invested_value: f64,
    pub shares: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Round a derived share count to 4 fractional digits, the granularity
/// used for manual entry.
pub fn round_shares(shares: f64) -> f64 {
    (shares * 10_000.0).round() / 10_000.0
}

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::transaction::TransactionKind;

/// Allocation percentage bounds (inclusive).
pub const ALLOCATION_PERCENTAGE_MIN: u8 = 1;
pub const ALLOCATION_PERCENTAGE_MAX: u8 = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

/// The two supported locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Pie,
    Bar,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Salary,
    Investment,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceFrequency {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

/// A reminder tied to a day of the month (salary day, investment day, ...).
/// `auto_record` decides whether the entry is recorded automatically or
/// the user is only notified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecurringAlert {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub day_of_month: u8,
    pub amount: Option<f64>,
    pub active: bool,
    pub auto_record: bool,
}

/// A transaction template applied on a schedule (e.g. monthly rent).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecurringSchedule {
    pub id: String,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub frequency: RecurrenceFrequency,
    pub day_of_month: u8,
}

/// The configuration singleton. Exactly one instance exists per
/// installation, created with these defaults on first run.
///
/// The persisted layout has no schema version, so every field falls back
/// to its default when absent from stored JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Percentage of the current balance moved by one allocation, 1..=50.
    pub allocation_percentage: u8,
    /// Stored for a future brokerage sync; the sync path itself is inert.
    pub trading212_token: String,
    /// Display currency symbol, currency-agnostic amounts.
    pub currency: String,
    pub user_name: String,
    pub theme: ThemeMode,
    pub language: Language,
    pub show_dashboard_charts: bool,
    pub dashboard_chart_type: ChartType,
    pub show_investment_charts: bool,
    pub investment_chart_type: ChartType,
    pub alerts: Vec<RecurringAlert>,
    pub recurring_schedules: Vec<RecurringSchedule>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            allocation_percentage: 10,
            trading212_token: String::new(),
            currency: "€".to_string(),
            user_name: "Investidor".to_string(),
            theme: ThemeMode::Auto,
            language: Language::Pt,
            show_dashboard_charts: true,
            dashboard_chart_type: ChartType::Pie,
            show_investment_charts: true,
            investment_chart_type: ChartType::Pie,
            alerts: Vec::new(),
            recurring_schedules: Vec::new(),
        }
    }
}

/// Merge-style patch for [`AppConfig`]: `None` fields are left untouched,
/// list fields are replaced wholesale when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigUpdate {
    pub allocation_percentage: Option<u8>,
    pub trading212_token: Option<String>,
    pub currency: Option<String>,
    pub user_name: Option<String>,
    pub theme: Option<ThemeMode>,
    pub language: Option<Language>,
    pub show_dashboard_charts: Option<bool>,
    pub dashboard_chart_type: Option<ChartType>,
    pub show_investment_charts: Option<bool>,
    pub investment_chart_type: Option<ChartType>,
    pub alerts: Option<Vec<RecurringAlert>>,
    pub recurring_schedules: Option<Vec<RecurringSchedule>>,
}

impl AppConfig {
    /// Apply a merge-style update. Validation happens before any field is
    /// written, so a rejected update leaves the config unchanged.
    pub fn apply(&mut self, update: ConfigUpdate) -> Result<(), CoreError> {
        if let Some(pct) = update.allocation_percentage {
            if !(ALLOCATION_PERCENTAGE_MIN..=ALLOCATION_PERCENTAGE_MAX).contains(&pct) {
                return Err(CoreError::Validation(format!(
                    "Allocation percentage must be between {ALLOCATION_PERCENTAGE_MIN} and {ALLOCATION_PERCENTAGE_MAX}, got {pct}"
                )));
            }
        }

        if let Some(pct) = update.allocation_percentage {
            self.allocation_percentage = pct;
        }
        if let Some(token) = update.trading212_token {
            self.trading212_token = token;
        }
        if let Some(currency) = update.currency {
            self.currency = currency;
        }
        if let Some(name) = update.user_name {
            self.user_name = name;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
        if let Some(show) = update.show_dashboard_charts {
            self.show_dashboard_charts = show;
        }
        if let Some(chart) = update.dashboard_chart_type {
            self.dashboard_chart_type = chart;
        }
        if let Some(show) = update.show_investment_charts {
            self.show_investment_charts = show;
        }
        if let Some(chart) = update.investment_chart_type {
            self.investment_chart_type = chart;
        }
        if let Some(alerts) = update.alerts {
            self.alerts = alerts;
        }
        if let Some(schedules) = update.recurring_schedules {
            self.recurring_schedules = schedules;
        }
        Ok(())
    }
}

use crate::i18n;
use crate::models::config::Language;
use crate::models::investment::Investment;
use crate::models::transaction::{Transaction, TransactionKind};
use crate::providers::traits::SummaryProvider;

use super::ledger_service::LedgerService;

/// Aggregate figures handed to the text-generation provider.
/// Row-level data never leaves the process.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialFigures {
    pub income_total: f64,
    pub expense_total: f64,
    pub expense_by_category: Vec<(String, f64)>,
    pub investment_count: usize,
}

/// Builds the advisor prompt from aggregate figures and asks a
/// [`SummaryProvider`] for display-only text.
pub struct SummaryService {
    ledger: LedgerService,
}

impl SummaryService {
    pub fn new() -> Self {
        Self {
            ledger: LedgerService::new(),
        }
    }

    /// Collapse the collections into the aggregates used by the prompt.
    #[must_use]
    pub fn figures(
        &self,
        transactions: &[Transaction],
        investments: &[Investment],
    ) -> FinancialFigures {
        let mut income_total = 0.0;
        let mut expense_total = 0.0;
        for t in transactions {
            match t.kind {
                TransactionKind::Income => income_total += t.amount,
                TransactionKind::Expense => expense_total += t.amount,
                TransactionKind::Transfer => {}
            }
        }
        FinancialFigures {
            income_total,
            expense_total,
            expense_by_category: self.ledger.expense_by_category(transactions),
            investment_count: investments.len(),
        }
    }

    /// Build the senior-advisor prompt, asking for a reply in the
    /// configured language.
    #[must_use]
    pub fn build_prompt(
        &self,
        figures: &FinancialFigures,
        currency: &str,
        language: Language,
    ) -> String {
        let categories = figures
            .expense_by_category
            .iter()
            .map(|(category, total)| format!("{category}: {total:.2}"))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Atua como um consultor financeiro sénior. Analisa estes dados:\n\
             - Rendimento Total: {income:.2} {currency}\n\
             - Despesa Total: {expense:.2} {currency}\n\
             - Maiores Gastos por Categoria: {categories}\n\
             - Número de Investimentos: {investments}\n\
             \n\
             Por favor, fornece:\n\
             1. Um breve resumo da saúde financeira (máximo 2 frases).\n\
             2. Duas dicas práticas para reduzir gastos ou otimizar investimentos.\n\
             3. Uma mensagem motivadora curta.\n\
             \n\
             Responde em {language}. Mantém um tom profissional, mas encorajador. \
             Usa Markdown para a formatação.",
            income = figures.income_total,
            expense = figures.expense_total,
            categories = categories,
            investments = figures.investment_count,
            language = i18n::language_name(language),
        )
    }

    /// Ask the provider for a summary. Degrades to a localized static
    /// message on any failure — this call never returns an error and its
    /// result is display-only.
    pub async fn summarize(
        &self,
        provider: &dyn SummaryProvider,
        transactions: &[Transaction],
        investments: &[Investment],
        currency: &str,
        language: Language,
    ) -> String {
        let figures = self.figures(transactions, investments);
        let prompt = self.build_prompt(&figures, currency, language);
        match provider.generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(provider = provider.name(), error = %err, "summary generation failed");
                i18n::summary_unavailable(language).to_string()
            }
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}

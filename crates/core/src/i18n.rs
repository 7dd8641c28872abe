//! Static strings for the two supported locales. Only the core-owned
//! messages live here; UI copy belongs to the frontend.

use crate::models::config::Language;

/// Description prefix for allocation transfer entries.
pub fn allocation_label(lang: Language) -> &'static str {
    match lang {
        Language::Pt => "Alocação para objetivo",
        Language::En => "Allocation to goal",
    }
}

/// Shown when the summary provider fails or times out.
pub fn summary_unavailable(lang: Language) -> &'static str {
    match lang {
        Language::Pt => "Não foi possível gerar a análise no momento.",
        Language::En => "Could not generate analysis at this time.",
    }
}

/// Language name spelled out for the generation prompt.
pub fn language_name(lang: Language) -> &'static str {
    match lang {
        Language::Pt => "Português de Portugal",
        Language::En => "English",
    }
}

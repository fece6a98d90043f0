//! Combination suggestions for the detail view.

use neurorx_common::DrugRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuggestionKind {
    /// Taken from the record's curated combinations
    Curated,
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynergySuggestion {
    pub kind: SuggestionKind,
    pub regimen: String,
    pub rationale: String,
}

const FUS_RATIONALE: &str =
    "Efflux liability; FUS-assisted BBB opening may improve parenchymal uptake.";

/// Curated combinations first, in record order. An efflux-limited drug with a
/// usable FUS baseline additionally gets a FUS-assisted delivery suggestion.
pub fn suggest_synergies(drug: &DrugRecord) -> Vec<SynergySuggestion> {
    let mut suggestions: Vec<SynergySuggestion> = drug
        .plausible_combos
        .iter()
        .map(|combo| SynergySuggestion {
            kind: SuggestionKind::Curated,
            regimen: combo.regimen.clone(),
            rationale: combo.rationale.clone(),
        })
        .collect();

    if !drug.efflux.is_empty() && drug.auc.fus_base > 0.0 {
        suggestions.push(SynergySuggestion {
            kind: SuggestionKind::Heuristic,
            regimen: format!("{} + FUS (IV)", drug.name),
            rationale: FUS_RATIONALE.to_string(),
        });
    }
    suggestions
}

//! Query ranking of a filtered drug set.
//!
//! A separate heuristic from readiness:
//! score = bbb.numeric + route match + genotype responsive
//!       − genotype resistance + clinician-familiarity bonus
//!
//! Familiar agents are pinned ahead of the rest regardless of score;
//! within each group entries sort by descending score and ties keep
//! their input order.

use neurorx_common::{DrugRecord, QueryPreferences, RankingWeights};
use serde::Serialize;
use tracing::debug;

/// One drug's place in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry<'a> {
    pub drug: &'a DrugRecord,
    pub score: f64,
    /// Display copy, one line per applied term
    pub reasons: Vec<String>,
    pub is_featured: bool,
}

/// Score and reasons are built together so the explanation always mirrors
/// the terms that were actually applied.
fn evaluate(drug: &DrugRecord, prefs: &QueryPreferences, weights: &RankingWeights) -> (f64, Vec<String>) {
    let mut score = drug.bbb.numeric;
    let mut reasons = vec![format!(
        "BBB contribution: {} (~{})",
        drug.bbb.label, drug.bbb.numeric
    )];

    if let Some(route) = prefs.route() {
        if drug.suggests_route(route) {
            score += weights.route_match_bonus;
            reasons.push(format!("Route match: {route} (+{})", weights.route_match_bonus));
        }
    }

    if let Some(genotype) = prefs.genotype() {
        if drug.is_responsive_to(genotype) {
            score += weights.genotype_responsive_bonus;
            reasons.push(format!(
                "Genotype responsive: {genotype} (+{})",
                weights.genotype_responsive_bonus
            ));
        }
        if drug.is_resistant_to(genotype) {
            score -= weights.genotype_resistance_penalty;
            reasons.push(format!(
                "Genotype resistance: {genotype} (−{})",
                weights.genotype_resistance_penalty
            ));
        }
    }

    if weights.is_familiar(&drug.name) {
        score += weights.familiarity_bonus;
        reasons.push(format!(
            "Clinician-familiar repurposed agent (+{})",
            weights.familiarity_bonus
        ));
    }

    (score, reasons)
}

/// Query score of a single drug.
pub fn ranking_score(drug: &DrugRecord, prefs: &QueryPreferences, weights: &RankingWeights) -> f64 {
    evaluate(drug, prefs, weights).0
}

/// Human-readable reasons for [`ranking_score`], in application order.
pub fn explain_ranking(drug: &DrugRecord, prefs: &QueryPreferences, weights: &RankingWeights) -> Vec<String> {
    evaluate(drug, prefs, weights).1
}

/// Rank `drugs` against `prefs`. Empty input yields an empty ranking.
pub fn rank<'a, I>(drugs: I, prefs: &QueryPreferences, weights: &RankingWeights) -> Vec<RankedEntry<'a>>
where
    I: IntoIterator<Item = &'a DrugRecord>,
{
    let mut entries: Vec<RankedEntry<'a>> = drugs
        .into_iter()
        .map(|drug| {
            let (score, reasons) = evaluate(drug, prefs, weights);
            RankedEntry {
                drug,
                score,
                reasons,
                is_featured: weights.is_familiar(&drug.name),
            }
        })
        .collect();

    // Stable: equal keys keep input order
    entries.sort_by(|a, b| {
        b.is_featured
            .cmp(&a.is_featured)
            .then_with(|| b.score.total_cmp(&a.score))
    });

    debug!(
        route = %prefs.route,
        genotype = %prefs.genotype,
        ranked = entries.len(),
        "ranking computed"
    );
    entries
}

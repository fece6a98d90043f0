//! Repurposing readiness score, tier, and trialability label.
//!
//! score = bbb.numeric
//!       + FDA approval + oncology experience
//!       + exposure bonus (largest AUC baseline ≥ threshold)
//!       + genomic signal + genotype responsive − genotype resistance
//!       − pediatric red-flag penalties
//! clamped to [0, 100].
//!
//! The tier cut-offs and the trialability overrides are evaluated
//! independently of each other. A drug can sit in `Go` and still get the
//! default trialability label when its BBB value is below the xenograft
//! cut-off; that combination is the curated policy and is kept as is.

use std::fmt;

use neurorx_common::{DrugRecord, ReadinessWeights};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const TRIALABILITY_DEFAULT: &str = "Needs BBB carrier optimization";
pub const TRIALABILITY_XENOGRAFT: &str = "Ready for mouse xenograft";
pub const TRIALABILITY_LOW_PRIORITY: &str = "Not brain-penetrant, low priority";

/// Coarse recommendation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Go,
    Consider,
    #[serde(rename = "No-go")]
    NoGo,
}

impl Tier {
    /// `score ≥ go → Go`, `consider ≤ score < go → Consider`, else `No-go`.
    pub fn from_score(score: f64, weights: &ReadinessWeights) -> Self {
        if score >= weights.go_threshold {
            Tier::Go
        } else if score >= weights.consider_threshold {
            Tier::Consider
        } else {
            Tier::NoGo
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Go => "Go",
            Tier::Consider => "Consider",
            Tier::NoGo => "No-go",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived on demand from one drug and an optional genotype; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessResult {
    pub score: f64,
    pub tier: Tier,
    pub trialability: String,
    /// Display copy, in a fixed order
    pub rationale: Vec<String>,
}

/// Score one drug. An empty `genotype_context` is treated as absent.
pub fn score_readiness(
    drug: &DrugRecord,
    genotype_context: Option<&str>,
    weights: &ReadinessWeights,
) -> ReadinessResult {
    let bbb = drug.bbb.numeric;
    let exposure = drug.auc.max_base();
    let genotype = genotype_context.filter(|g| !g.is_empty());

    let mut score = bbb;
    if drug.is_fda_approved {
        score += weights.fda_approved_bonus;
    }
    if drug.approved_for_oncology {
        score += weights.oncology_bonus;
    }
    if exposure >= weights.exposure_threshold {
        score += weights.exposure_bonus;
    }
    if !drug.genotypes_responsive.is_empty() {
        score += weights.genomic_signal_bonus;
    }
    if let Some(g) = genotype {
        // A genotype listed on both sides gets both terms
        if drug.is_responsive_to(g) {
            score += weights.genotype_responsive_bonus;
        }
        if drug.is_resistant_to(g) {
            score -= weights.genotype_resistance_penalty;
        }
    }
    for rule in &weights.red_flags {
        if rule.keywords.iter().any(|k| drug.has_red_flag_containing(k)) {
            score -= rule.penalty;
        }
    }
    let score = score.clamp(0.0, 100.0);

    let tier = Tier::from_score(score, weights);
    let trialability = trialability_label(tier, bbb, exposure, weights);

    let mut rationale = vec![
        format!("BBB profile: {}", drug.bbb.label),
        format!("Exposure proxy (AUC base): {exposure}"),
    ];
    if drug.is_fda_approved {
        rationale.push("FDA-approved background".to_string());
    }
    if drug.approved_for_oncology {
        rationale.push("Oncology experience".to_string());
    }
    if !drug.genotypes_responsive.is_empty() {
        rationale.push(format!("Genomic signal: {}", drug.genotypes_responsive.join(", ")));
    }
    if !drug.tox.pediatric_red_flags.is_empty() {
        rationale.push(format!(
            "Pediatric red flags: {}",
            drug.tox.pediatric_red_flags.join(", ")
        ));
    }

    debug!(drug = %drug.id, score, tier = %tier, "readiness scored");

    ReadinessResult {
        score,
        tier,
        trialability: trialability.to_string(),
        rationale,
    }
}

fn trialability_label(tier: Tier, bbb: f64, exposure: f64, weights: &ReadinessWeights) -> &'static str {
    if tier == Tier::Go && bbb >= weights.xenograft_min_bbb && exposure >= weights.xenograft_min_exposure {
        TRIALABILITY_XENOGRAFT
    } else if tier == Tier::NoGo
        && bbb < weights.low_priority_max_bbb
        && exposure < weights.low_priority_max_exposure
    {
        TRIALABILITY_LOW_PRIORITY
    } else {
        TRIALABILITY_DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurorx_common::BbbScore;
    use neurorx_test_utils::{dasatinib, DrugBuilder};
    use pretty_assertions::assert_eq;

    fn weights() -> ReadinessWeights {
        ReadinessWeights::default()
    }

    #[test]
    fn test_tier_boundaries() {
        let w = weights();
        assert_eq!(Tier::from_score(100.0, &w), Tier::Go);
        assert_eq!(Tier::from_score(70.0, &w), Tier::Go);
        assert_eq!(Tier::from_score(69.999, &w), Tier::Consider);
        assert_eq!(Tier::from_score(50.0, &w), Tier::Consider);
        assert_eq!(Tier::from_score(49.999, &w), Tier::NoGo);
        assert_eq!(Tier::from_score(0.0, &w), Tier::NoGo);
    }

    #[test]
    fn test_high_bbb_approved_oral_drug_clamps_to_100() {
        let drug = DrugBuilder::new("x")
            .bbb(BbbScore::High, "High (CNS-penetrant)", 80.0)
            .fda_approved(true)
            .auc(1.6, 0.0, 0.0)
            .build();
        let result = score_readiness(&drug, None, &weights());
        assert_eq!(result.score, 100.0);
        assert_eq!(result.tier, Tier::Go);
        assert_eq!(result.trialability, TRIALABILITY_XENOGRAFT);
        assert_eq!(
            result.rationale,
            vec![
                "BBB profile: High (CNS-penetrant)".to_string(),
                "Exposure proxy (AUC base): 1.6".to_string(),
                "FDA-approved background".to_string(),
            ]
        );
    }

    #[test]
    fn test_dasatinib_consider_with_default_trialability() {
        let result = score_readiness(&dasatinib(), None, &weights());
        // 35 + 10 + 10 + 10 (exposure) + 5 (PDGFRA) − 10 (marrow)
        assert_eq!(result.score, 60.0);
        assert_eq!(result.tier, Tier::Consider);
        assert_eq!(result.trialability, TRIALABILITY_DEFAULT);
    }

    #[test]
    fn test_marrow_penalty_scenario() {
        let drug = DrugBuilder::new("y")
            .bbb(BbbScore::Low, "Low (efflux-limited)", 35.0)
            .fda_approved(true)
            .oncology(true)
            .auc(0.8, 3.6, 1.6)
            .red_flags(&["Marrow suppression", "Bleeding risk"])
            .build();
        let result = score_readiness(&drug, None, &weights());
        assert_eq!(result.score, 55.0);
        assert_eq!(result.tier, Tier::Consider);
        assert_eq!(result.trialability, TRIALABILITY_DEFAULT);
        assert_eq!(
            result.rationale,
            vec![
                "BBB profile: Low (efflux-limited)".to_string(),
                "Exposure proxy (AUC base): 3.6".to_string(),
                "FDA-approved background".to_string(),
                "Oncology experience".to_string(),
                "Pediatric red flags: Marrow suppression, Bleeding risk".to_string(),
            ]
        );
    }

    #[test]
    fn test_each_red_flag_penalty_applies_once() {
        let drug = DrugBuilder::new("z")
            .bbb_numeric(90.0)
            .red_flags(&["Neutropenia", "Marrow suppression", "Seizures", "Breakthrough seizure"])
            .build();
        // 90 − 10 − 15
        assert_eq!(score_readiness(&drug, None, &weights()).score, 65.0);
    }

    #[test]
    fn test_all_red_flags_floor_at_zero() {
        let drug = DrugBuilder::new("z")
            .bbb_numeric(20.0)
            .red_flags(&["SEIZURE risk", "Developmental delay", "neutropenia"])
            .build();
        let result = score_readiness(&drug, None, &weights());
        assert_eq!(result.score, 0.0);
        assert_eq!(result.tier, Tier::NoGo);
        assert_eq!(result.trialability, TRIALABILITY_LOW_PRIORITY);
    }

    #[test]
    fn test_genotype_listed_on_both_sides_gets_both_terms() {
        let drug = DrugBuilder::new("g")
            .bbb_numeric(50.0)
            .responsive(&["H3K27M"])
            .resistance(&["H3K27M"])
            .build();
        // 50 + 5 (signal) + 10 − 10
        assert_eq!(score_readiness(&drug, Some("H3K27M"), &weights()).score, 55.0);
        // 50 + 5
        assert_eq!(score_readiness(&drug, None, &weights()).score, 55.0);
    }

    #[test]
    fn test_genotype_context_bonus_and_penalty() {
        let drug = DrugBuilder::new("g")
            .bbb_numeric(50.0)
            .responsive(&["BRAF V600E"])
            .resistance(&["NRAS activation"])
            .build();
        assert_eq!(score_readiness(&drug, Some("BRAF V600E"), &weights()).score, 65.0);
        assert_eq!(score_readiness(&drug, Some("NRAS activation"), &weights()).score, 45.0);
        assert_eq!(score_readiness(&drug, Some("TP53"), &weights()).score, 55.0);
        assert_eq!(score_readiness(&drug, Some(""), &weights()).score, 55.0);
    }

    #[test]
    fn test_go_tier_with_low_bbb_keeps_default_label() {
        let drug = DrugBuilder::new("q")
            .bbb_numeric(55.0)
            .fda_approved(true)
            .oncology(true)
            .auc(1.2, 0.0, 0.0)
            .build();
        let result = score_readiness(&drug, None, &weights());
        assert_eq!(result.score, 85.0);
        assert_eq!(result.tier, Tier::Go);
        assert_eq!(result.trialability, TRIALABILITY_DEFAULT);
    }

    #[test]
    fn test_no_go_with_exposure_keeps_default_label() {
        let drug = DrugBuilder::new("r").bbb_numeric(30.0).auc(0.9, 0.0, 0.0).build();
        let result = score_readiness(&drug, None, &weights());
        assert_eq!(result.tier, Tier::NoGo);
        assert_eq!(result.trialability, TRIALABILITY_DEFAULT);
    }

    #[test]
    fn test_score_always_in_range() {
        let extremes = [
            DrugBuilder::new("hi")
                .bbb_numeric(100.0)
                .fda_approved(true)
                .oncology(true)
                .auc(5.0, 5.0, 5.0)
                .responsive(&["A"])
                .build(),
            DrugBuilder::new("lo")
                .bbb_numeric(0.0)
                .resistance(&["A"])
                .red_flags(&["seizure", "marrow", "developmental"])
                .build(),
        ];
        for drug in &extremes {
            for ctx in [None, Some("A"), Some("B")] {
                let s = score_readiness(drug, ctx, &weights()).score;
                assert!((0.0..=100.0).contains(&s), "{} {ctx:?} → {s}", drug.id);
            }
        }
    }

    #[test]
    fn test_tier_serializes_with_display_name() {
        assert_eq!(serde_json::to_string(&Tier::NoGo).unwrap(), "\"No-go\"");
    }
}

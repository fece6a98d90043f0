//! Curated drug record types.
//! Field names follow the curated dataset (camelCase) so catalog files
//! can be authored by hand and shared with the presentation layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Blood–brain barrier
// ---------------------------------------------------------------------------

/// Coarse BBB penetration bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BbbScore {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bbb {
    pub score: BbbScore,
    /// Display label, e.g. "Low (efflux-limited)"
    pub label: String,
    /// Ease of penetration, 0–100
    pub numeric: f64,
}

// ---------------------------------------------------------------------------
// Exposure baselines
// ---------------------------------------------------------------------------

/// Saturation-plateau exposure values (µM·hr) at the 24 h reference infusion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auc {
    #[serde(default)]
    pub oral_base: f64,
    #[serde(default)]
    pub ced_base: f64,
    #[serde(default)]
    pub fus_base: f64,
}

impl Auc {
    /// Largest baseline across the three routes; the readiness exposure proxy.
    pub fn max_base(&self) -> f64 {
        self.oral_base.max(self.ced_base).max(self.fus_base)
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.oral_base, self.ced_base, self.fus_base]
    }
}

// ---------------------------------------------------------------------------
// Safety
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toxicity {
    /// Ordered; the first entries are the most clinically relevant.
    #[serde(default)]
    pub pediatric_red_flags: Vec<String>,
    #[serde(default)]
    pub monitoring: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Interactions {
    #[serde(default)]
    pub metabolism: String,
    #[serde(default)]
    pub avoid: Vec<String>,
}

// ---------------------------------------------------------------------------
// Relations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlausibleCombo {
    pub regimen: String,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trial {
    pub nct_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub notes: String,
}

// ---------------------------------------------------------------------------
// Drug record
// ---------------------------------------------------------------------------

/// One curated repurposing candidate. Immutable once loaded.
///
/// Every list field defaults to empty so consumers never special-case
/// a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugRecord {
    pub id: String,
    pub name: String,

    #[serde(rename = "isFDAApproved", default)]
    pub is_fda_approved: bool,
    #[serde(default)]
    pub approved_for_oncology: bool,
    #[serde(default)]
    pub indications: Vec<String>,
    #[serde(default)]
    pub repurposing_targets: Vec<String>,

    pub bbb: Bbb,
    #[serde(default)]
    pub efflux: Vec<String>,
    #[serde(default)]
    pub metabolism: String,
    pub half_life_hours: f64,

    /// Routes of administration
    #[serde(default)]
    pub roa: Vec<String>,
    #[serde(default)]
    pub suggested_routes: Vec<String>,
    /// Route name → free-text delivery note
    #[serde(default)]
    pub delivery_notes: BTreeMap<String, String>,

    #[serde(default)]
    pub auc: Auc,

    #[serde(default)]
    pub genotypes_responsive: Vec<String>,
    #[serde(default)]
    pub resistance_variants: Vec<String>,

    #[serde(default)]
    pub tox: Toxicity,
    #[serde(rename = "severeAEs", default)]
    pub severe_aes: Vec<String>,
    #[serde(default)]
    pub interactions: Interactions,

    #[serde(default)]
    pub synergy_partners: Vec<String>,
    #[serde(default)]
    pub plausible_combos: Vec<PlausibleCombo>,
    #[serde(default)]
    pub trials: Vec<Trial>,
}

impl DrugRecord {
    pub fn suggests_route(&self, route: &str) -> bool {
        self.suggested_routes.iter().any(|r| r == route)
    }

    pub fn is_responsive_to(&self, genotype: &str) -> bool {
        self.genotypes_responsive.iter().any(|g| g == genotype)
    }

    pub fn is_resistant_to(&self, genotype: &str) -> bool {
        self.resistance_variants.iter().any(|g| g == genotype)
    }

    /// Case-insensitive substring match against the pediatric red flags.
    pub fn has_red_flag_containing(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.tox
            .pediatric_red_flags
            .iter()
            .any(|flag| flag.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
id: metformin
name: Metformin
bbb: { score: Low, label: Limited BBB penetration, numeric: 35 }
halfLifeHours: 6
"#;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let drug: DrugRecord = serde_yaml::from_str(MINIMAL).unwrap();
        assert!(drug.efflux.is_empty());
        assert!(drug.suggested_routes.is_empty());
        assert!(drug.tox.pediatric_red_flags.is_empty());
        assert!(drug.trials.is_empty());
        assert_eq!(drug.auc, Auc::default());
        assert!(!drug.is_fda_approved);
    }

    #[test]
    fn test_dataset_field_names() {
        let json = r#"{
            "id": "dasatinib", "name": "Dasatinib",
            "isFDAApproved": true, "approvedForOncology": true,
            "bbb": {"score": "Low", "label": "Low (efflux-limited)", "numeric": 35},
            "halfLifeHours": 4,
            "severeAEs": ["Neutropenia"],
            "auc": {"oralBase": 0.8, "cedBase": 3.6, "fusBase": 1.6},
            "trials": [{"nctId": "NCT03352427", "status": "Completed", "notes": ""}]
        }"#;
        let drug: DrugRecord = serde_json::from_str(json).unwrap();
        assert!(drug.is_fda_approved);
        assert!(drug.approved_for_oncology);
        assert_eq!(drug.severe_aes, vec!["Neutropenia".to_string()]);
        assert_eq!(drug.trials[0].nct_id, "NCT03352427");
        assert!((drug.auc.max_base() - 3.6).abs() < 1e-12);
    }

    #[test]
    fn test_red_flag_match_is_case_insensitive() {
        let mut drug: DrugRecord = serde_yaml::from_str(MINIMAL).unwrap();
        drug.tox.pediatric_red_flags = vec!["Marrow suppression".to_string()];
        assert!(drug.has_red_flag_containing("marrow"));
        assert!(drug.has_red_flag_containing("MARROW"));
        assert!(!drug.has_red_flag_containing("seizure"));
    }
}

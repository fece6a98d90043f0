//! Scoring configuration for readiness, ranking, and exposure modeling.
//!
//! Every heuristic constant the engine uses lives here as a named field with a
//! serde default, so a partial TOML/YAML file overrides only what it names.
//! `Default` reproduces the curated policy exactly.

use serde::{Deserialize, Serialize};

use crate::error::{NeurorxError, Result};

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub readiness: ReadinessWeights,

    #[serde(default)]
    pub ranking: RankingWeights,

    #[serde(default)]
    pub exposure: ExposureConfig,
}

// ── Readiness ─────────────────────────────────────────────────────────────────

/// Additive terms and thresholds of the readiness heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessWeights {
    #[serde(default = "default_ten")]
    pub fda_approved_bonus: f64,

    #[serde(default = "default_ten")]
    pub oncology_bonus: f64,

    /// Applied when the largest AUC baseline reaches `exposure_threshold`
    #[serde(default = "default_ten")]
    pub exposure_bonus: f64,

    #[serde(default = "default_exposure_threshold")]
    pub exposure_threshold: f64,

    /// Applied when the drug lists any responsive genotype
    #[serde(default = "default_genomic_signal")]
    pub genomic_signal_bonus: f64,

    #[serde(default = "default_ten")]
    pub genotype_responsive_bonus: f64,

    /// Subtracted when the genotype context is a listed resistance variant
    #[serde(default = "default_ten")]
    pub genotype_resistance_penalty: f64,

    #[serde(default = "default_red_flag_rules")]
    pub red_flags: Vec<RedFlagRule>,

    #[serde(default = "default_go_threshold")]
    pub go_threshold: f64,

    #[serde(default = "default_consider_threshold")]
    pub consider_threshold: f64,

    #[serde(default = "default_xenograft_min_bbb")]
    pub xenograft_min_bbb: f64,

    #[serde(default = "default_exposure_threshold")]
    pub xenograft_min_exposure: f64,

    #[serde(default = "default_low_priority_max_bbb")]
    pub low_priority_max_bbb: f64,

    #[serde(default = "default_low_priority_max_exposure")]
    pub low_priority_max_exposure: f64,
}

/// One pediatric red-flag penalty. Matches when any red flag contains any
/// keyword (case-insensitive); applied at most once per drug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedFlagRule {
    pub keywords: Vec<String>,
    pub penalty: f64,
}

impl RedFlagRule {
    pub fn new(keywords: &[&str], penalty: f64) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            penalty,
        }
    }
}

fn default_ten() -> f64 { 10.0 }
fn default_exposure_threshold() -> f64 { 1.0 }
fn default_genomic_signal() -> f64 { 5.0 }
fn default_go_threshold() -> f64 { 70.0 }
fn default_consider_threshold() -> f64 { 50.0 }
fn default_xenograft_min_bbb() -> f64 { 60.0 }
fn default_low_priority_max_bbb() -> f64 { 40.0 }
fn default_low_priority_max_exposure() -> f64 { 0.8 }

fn default_red_flag_rules() -> Vec<RedFlagRule> {
    vec![
        RedFlagRule::new(&["seizure"], 15.0),
        RedFlagRule::new(&["marrow", "neutrop"], 10.0),
        RedFlagRule::new(&["developmental"], 15.0),
    ]
}

impl Default for ReadinessWeights {
    fn default() -> Self {
        Self {
            fda_approved_bonus: default_ten(),
            oncology_bonus: default_ten(),
            exposure_bonus: default_ten(),
            exposure_threshold: default_exposure_threshold(),
            genomic_signal_bonus: default_genomic_signal(),
            genotype_responsive_bonus: default_ten(),
            genotype_resistance_penalty: default_ten(),
            red_flags: default_red_flag_rules(),
            go_threshold: default_go_threshold(),
            consider_threshold: default_consider_threshold(),
            xenograft_min_bbb: default_xenograft_min_bbb(),
            xenograft_min_exposure: default_exposure_threshold(),
            low_priority_max_bbb: default_low_priority_max_bbb(),
            low_priority_max_exposure: default_low_priority_max_exposure(),
        }
    }
}

impl ReadinessWeights {
    pub fn validate(&self) -> Result<()> {
        if self.consider_threshold > self.go_threshold {
            return Err(NeurorxError::Config(format!(
                "readiness.consider_threshold ({}) must not exceed go_threshold ({})",
                self.consider_threshold, self.go_threshold
            )));
        }
        if let Some(rule) = self.red_flags.iter().find(|r| r.keywords.is_empty()) {
            return Err(NeurorxError::Config(format!(
                "readiness.red_flags rule with penalty {} has no keywords",
                rule.penalty
            )));
        }
        // An empty keyword would match every flag
        if let Some(rule) = self
            .red_flags
            .iter()
            .find(|r| r.keywords.iter().any(|k| k.trim().is_empty()))
        {
            return Err(NeurorxError::Config(format!(
                "readiness.red_flags rule with penalty {} has an empty keyword",
                rule.penalty
            )));
        }
        Ok(())
    }
}

// ── Ranking ───────────────────────────────────────────────────────────────────

/// Bonuses of the query ranking heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingWeights {
    #[serde(default = "default_fifteen")]
    pub route_match_bonus: f64,

    #[serde(default = "default_fifteen")]
    pub genotype_responsive_bonus: f64,

    #[serde(default = "default_ten")]
    pub genotype_resistance_penalty: f64,

    #[serde(default = "default_familiarity_bonus")]
    pub familiarity_bonus: f64,

    /// Lowercase names of clinician-familiar repurposed agents.
    /// These are pinned ahead of everything else in a ranking.
    #[serde(default = "default_familiar_names")]
    pub familiar_names: Vec<String>,
}

fn default_fifteen() -> f64 { 15.0 }
fn default_familiarity_bonus() -> f64 { 6.0 }

fn default_familiar_names() -> Vec<String> {
    ["trametinib", "panobinostat", "metformin", "everolimus"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            route_match_bonus: default_fifteen(),
            genotype_responsive_bonus: default_fifteen(),
            genotype_resistance_penalty: default_ten(),
            familiarity_bonus: default_familiarity_bonus(),
            familiar_names: default_familiar_names(),
        }
    }
}

impl RankingWeights {
    pub fn is_familiar(&self, drug_name: &str) -> bool {
        let name = drug_name.to_lowercase();
        self.familiar_names.iter().any(|f| f.to_lowercase() == name)
    }
}

// ── Exposure ──────────────────────────────────────────────────────────────────

/// Constants of the illustrative exposure model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureConfig {
    /// Infusion length at which the AUC baselines were curated
    #[serde(default = "default_reference_hours")]
    pub reference_hours: f64,

    /// Oral saturation time constant
    #[serde(default = "default_oral_time_constant")]
    pub oral_time_constant_hours: f64,

    #[serde(default = "default_min_duration")]
    pub min_duration_hours: f64,

    #[serde(default = "default_max_duration")]
    pub max_duration_hours: f64,

    #[serde(default = "default_time_points")]
    pub time_points: Vec<f64>,

    /// Infusion length used for the relative-uptake summary
    #[serde(default = "default_min_duration")]
    pub relative_uptake_hours: f64,

    /// Local/oral fold at which local delivery is called promising
    #[serde(default = "default_promising_fold")]
    pub promising_fold: f64,

    /// Oral baseline below which systemic exposure is called subtherapeutic
    #[serde(default = "default_exposure_threshold")]
    pub subtherapeutic_oral_base: f64,
}

fn default_reference_hours() -> f64 { 24.0 }
fn default_oral_time_constant() -> f64 { 12.0 }
fn default_min_duration() -> f64 { 6.0 }
fn default_max_duration() -> f64 { 72.0 }
fn default_time_points() -> Vec<f64> { vec![0.0, 6.0, 12.0, 24.0, 36.0, 48.0, 60.0, 72.0] }
fn default_promising_fold() -> f64 { 2.0 }

impl Default for ExposureConfig {
    fn default() -> Self {
        Self {
            reference_hours: default_reference_hours(),
            oral_time_constant_hours: default_oral_time_constant(),
            min_duration_hours: default_min_duration(),
            max_duration_hours: default_max_duration(),
            time_points: default_time_points(),
            relative_uptake_hours: default_min_duration(),
            promising_fold: default_promising_fold(),
            subtherapeutic_oral_base: default_exposure_threshold(),
        }
    }
}

impl ExposureConfig {
    /// Clamp an infusion duration into the supported window.
    /// A NaN duration maps to the lower bound.
    pub fn clamp_duration(&self, hours: f64) -> f64 {
        if hours.is_nan() {
            return self.min_duration_hours;
        }
        hours.clamp(self.min_duration_hours, self.max_duration_hours)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.reference_hours > 0.0) || !self.reference_hours.is_finite() {
            return Err(NeurorxError::Config(format!(
                "exposure.reference_hours must be positive and finite, got {}",
                self.reference_hours
            )));
        }
        if !(self.oral_time_constant_hours > 0.0) || !self.oral_time_constant_hours.is_finite() {
            return Err(NeurorxError::Config(format!(
                "exposure.oral_time_constant_hours must be positive and finite, got {}",
                self.oral_time_constant_hours
            )));
        }
        // Written so that a NaN bound fails the check
        if !(self.min_duration_hours > 0.0)
            || !self.max_duration_hours.is_finite()
            || !(self.max_duration_hours >= self.min_duration_hours)
        {
            return Err(NeurorxError::Config(format!(
                "exposure duration window [{}, {}] is invalid",
                self.min_duration_hours, self.max_duration_hours
            )));
        }
        Ok(())
    }
}

// ── Helper Methods ─────────────────────────────────────────────────────────────

impl ScoringConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.readiness.validate()?;
        self.exposure.validate()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

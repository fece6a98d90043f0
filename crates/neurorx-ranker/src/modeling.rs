//! Delivery modeling: per-scenario exposure, verdicts, and the summary
//! lines shown next to a drug's readiness.

use std::fmt;

use neurorx_common::{BbbScore, DrugRecord, ExposureConfig, ScoringConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::exposure::{project_exposure, route_exposures, RelativeUptake, RouteExposures};
use crate::readiness::{score_readiness, ReadinessResult, Tier};

/// Delivery scenario being modeled; the same three routes the exposure
/// model projects.
pub use crate::exposure::ExposureRoute as DeliveryMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryVerdict {
    PromisingWithCed,
    PromisingWithFus,
    SystemicSubtherapeutic,
    RequiresOptimization,
}

impl DeliveryVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryVerdict::PromisingWithCed => "Promising with CED; systemic may be subtherapeutic",
            DeliveryVerdict::PromisingWithFus => "Promising with FUS-assisted delivery",
            DeliveryVerdict::SystemicSubtherapeutic => "Systemic exposure likely subtherapeutic",
            DeliveryVerdict::RequiresOptimization => "Requires optimization",
        }
    }
}

impl fmt::Display for DeliveryVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of modeling one delivery scenario for one drug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelingResult {
    pub mode: DeliveryMode,
    /// Infusion length after clamping
    pub infusion_hours: f64,
    pub exposures: RouteExposures,
    pub uptake: RelativeUptake,
    pub verdict: DeliveryVerdict,
    pub readiness: ReadinessResult,
}

impl ModelingResult {
    /// "CED 24h", "FUS 12h", or "Oral".
    pub fn scenario_name(&self) -> String {
        if self.mode.is_local() {
            format!("{} {}h", self.mode, self.infusion_hours)
        } else {
            self.mode.to_string()
        }
    }
}

/// Model one scenario. Readiness is scored without a genotype context.
pub fn model_delivery(
    drug: &DrugRecord,
    mode: DeliveryMode,
    infusion_hours: f64,
    config: &ScoringConfig,
) -> ModelingResult {
    let exposure_cfg = &config.exposure;
    let infusion_hours = exposure_cfg.clamp_duration(infusion_hours);
    let exposures = route_exposures(drug, infusion_hours, exposure_cfg);
    let uptake = RelativeUptake::from_exposures(&exposures);

    let promising = |fold: Option<f64>| fold.is_some_and(|f| f >= exposure_cfg.promising_fold);
    let verdict = match mode {
        DeliveryMode::Ced if promising(uptake.ced_fold) => DeliveryVerdict::PromisingWithCed,
        DeliveryMode::Fus if promising(uptake.fus_fold) => DeliveryVerdict::PromisingWithFus,
        DeliveryMode::Oral if exposures.oral < exposure_cfg.subtherapeutic_oral_base => {
            DeliveryVerdict::SystemicSubtherapeutic
        }
        _ => DeliveryVerdict::RequiresOptimization,
    };

    debug!(drug = %drug.id, mode = %mode, infusion_hours, verdict = %verdict, "delivery modeled");

    ModelingResult {
        mode,
        infusion_hours,
        exposures,
        uptake,
        verdict,
        readiness: score_readiness(drug, None, &config.readiness),
    }
}

/// Exposure differences between two saved scenarios (`a − b`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDelta {
    pub oral: f64,
    pub ced: f64,
    pub fus: f64,
}

pub fn compare_scenarios(a: &ModelingResult, b: &ModelingResult) -> ScenarioDelta {
    ScenarioDelta {
        oral: a.exposures.oral - b.exposures.oral,
        ced: a.exposures.ced - b.exposures.ced,
        fus: a.exposures.fus - b.exposures.fus,
    }
}

/// Trialability line for the detail view. Below `Go`, a short CED infusion
/// that clearly beats oral exposure overrides the readiness label.
pub fn trialability_summary(drug: &DrugRecord, readiness: &ReadinessResult, config: &ExposureConfig) -> String {
    let oral = drug.auc.oral_base;
    let ced = project_exposure(drug.auc.ced_base, config.relative_uptake_hours, config);
    if readiness.tier != Tier::Go && oral > 0.0 && ced > oral * config.promising_fold {
        "Promising with CED; systemic use may be subtherapeutic".to_string()
    } else {
        readiness.trialability.clone()
    }
}

pub fn cns_risk_note(drug: &DrugRecord) -> &'static str {
    if !drug.efflux.is_empty() && drug.bbb.score != BbbScore::High {
        "efflux-related poor brain penetration may limit efficacy without local delivery."
    } else {
        "no dominant CNS delivery barrier identified beyond standard considerations."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurorx_test_utils::{dasatinib, metformin, onc201, DrugBuilder};

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    #[test]
    fn test_ced_promising_for_dasatinib_at_24h() {
        let result = model_delivery(&dasatinib(), DeliveryMode::Ced, 24.0, &config());
        // CED 3.6 vs oral 0.8 → 4.5×
        assert_eq!(result.verdict, DeliveryVerdict::PromisingWithCed);
        assert!((result.exposures.ced - 3.6).abs() < 1e-12);
        assert_eq!(result.scenario_name(), "CED 24h");
        assert_eq!(result.readiness.tier, Tier::Consider);
    }

    #[test]
    fn test_fus_requires_optimization_below_fold() {
        // 6 h: FUS 0.4 vs oral 0.8
        let result = model_delivery(&dasatinib(), DeliveryMode::Fus, 6.0, &config());
        assert_eq!(result.verdict, DeliveryVerdict::RequiresOptimization);
        let result = model_delivery(&dasatinib(), DeliveryMode::Fus, 48.0, &config());
        assert_eq!(result.verdict, DeliveryVerdict::PromisingWithFus);
    }

    #[test]
    fn test_oral_subtherapeutic() {
        let result = model_delivery(&metformin(), DeliveryMode::Oral, 24.0, &config());
        assert_eq!(result.verdict, DeliveryVerdict::SystemicSubtherapeutic);
        assert_eq!(result.scenario_name(), "Oral");
        let result = model_delivery(&onc201(), DeliveryMode::Oral, 24.0, &config());
        assert_eq!(result.verdict, DeliveryVerdict::RequiresOptimization);
    }

    #[test]
    fn test_zero_oral_never_promising() {
        let drug = DrugBuilder::new("bev").auc(0.0, 5.0, 5.0).build();
        let result = model_delivery(&drug, DeliveryMode::Ced, 72.0, &config());
        assert_eq!(result.uptake.ced_fold, None);
        assert_eq!(result.verdict, DeliveryVerdict::RequiresOptimization);
    }

    #[test]
    fn test_infusion_clamped() {
        let result = model_delivery(&dasatinib(), DeliveryMode::Ced, 1.0, &config());
        assert_eq!(result.infusion_hours, 6.0);
        assert_eq!(result.scenario_name(), "CED 6h");
    }

    #[test]
    fn test_compare_scenarios() {
        let drug = dasatinib();
        let long = model_delivery(&drug, DeliveryMode::Ced, 48.0, &config());
        let short = model_delivery(&drug, DeliveryMode::Ced, 24.0, &config());
        let delta = compare_scenarios(&long, &short);
        assert_eq!(delta.oral, 0.0);
        assert!((delta.ced - 3.6).abs() < 1e-12);
        assert!((delta.fus - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_trialability_summary_ced_override() {
        let drug = DrugBuilder::new("x")
            .bbb_numeric(40.0)
            .auc(0.2, 4.0, 0.0)
            .build();
        let readiness = score_readiness(&drug, None, &config().readiness);
        assert_eq!(readiness.tier, Tier::Consider);
        // 6 h CED 1.0 > 2 × 0.2
        assert_eq!(
            trialability_summary(&drug, &readiness, &config().exposure),
            "Promising with CED; systemic use may be subtherapeutic"
        );
    }

    #[test]
    fn test_trialability_summary_falls_back_to_label() {
        let drug = dasatinib();
        let readiness = score_readiness(&drug, None, &config().readiness);
        // 6 h CED 0.9 is not above 2 × 0.8
        assert_eq!(
            trialability_summary(&drug, &readiness, &config().exposure),
            readiness.trialability
        );
    }

    #[test]
    fn test_cns_risk_note() {
        assert!(cns_risk_note(&dasatinib()).starts_with("efflux-related"));
        assert!(cns_risk_note(&onc201()).starts_with("no dominant"));
    }

    #[test]
    fn test_mode_labels_match_exposure_routes() {
        assert_eq!("ced".parse::<DeliveryMode>().unwrap(), DeliveryMode::Ced);
        assert!("iv".parse::<DeliveryMode>().is_err());
        let result = model_delivery(&dasatinib(), DeliveryMode::Fus, 12.0, &config());
        assert_eq!(result.mode, crate::exposure::ExposureRoute::Fus);
        assert_eq!(result.scenario_name(), "FUS 12h");
        assert_eq!(serde_json::to_value(result.mode).unwrap(), "FUS");
    }
}

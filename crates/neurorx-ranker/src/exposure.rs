//! Illustrative tumor-exposure model.
//!
//! Local delivery (CED, FUS) scales the curated 24 h baseline linearly with
//! infusion length. The scaling is deliberately uncapped: a 48 h infusion
//! projects twice the baseline. Oral exposure saturates exponentially with a
//! fixed time constant. None of this is a pharmacokinetic simulation.

use std::fmt;
use std::str::FromStr;

use neurorx_common::{DrugRecord, ExposureConfig, NeurorxError};
use serde::{Deserialize, Serialize};

/// Route family the exposure model distinguishes. Also the delivery
/// scenario selector of the modeling workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExposureRoute {
    Oral,
    #[serde(rename = "CED")]
    Ced,
    #[serde(rename = "FUS")]
    Fus,
}

impl ExposureRoute {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExposureRoute::Oral => "Oral",
            ExposureRoute::Ced => "CED",
            ExposureRoute::Fus => "FUS",
        }
    }

    pub fn is_local(&self) -> bool {
        !matches!(self, ExposureRoute::Oral)
    }

    /// Curated baseline for this route.
    pub fn base_of(&self, drug: &DrugRecord) -> f64 {
        match self {
            ExposureRoute::Oral => drug.auc.oral_base,
            ExposureRoute::Ced => drug.auc.ced_base,
            ExposureRoute::Fus => drug.auc.fus_base,
        }
    }
}

impl fmt::Display for ExposureRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExposureRoute {
    type Err = NeurorxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "oral" => Ok(ExposureRoute::Oral),
            "ced" => Ok(ExposureRoute::Ced),
            "fus" => Ok(ExposureRoute::Fus),
            other => Err(NeurorxError::Config(format!("unknown delivery mode: {other}"))),
        }
    }
}

/// One `(t, y)` sample of an exposure curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Hours since start of delivery
    pub t: f64,
    /// Exposure, µM·hr
    pub y: f64,
}

impl CurvePoint {
    /// Renderers drop points that fail this; the model never does.
    pub fn is_renderable(&self) -> bool {
        self.t.is_finite() && self.y.is_finite() && self.t >= 0.0 && self.y >= 0.0
    }
}

/// Projected exposure of a local infusion.
///
/// `duration_hours` is clamped to the configured window (6–72 h by default),
/// then `base * duration / reference` (24 h by default). A NaN duration
/// projects the lower bound of the window.
pub fn project_exposure(base: f64, duration_hours: f64, config: &ExposureConfig) -> f64 {
    let hours = config.clamp_duration(duration_hours);
    base * (hours / config.reference_hours)
}

/// Exposure curve sampled at `time_points`, returned in ascending `t`.
///
/// * Oral: `base * (1 - e^(-t / tau))`, duration ignored.
/// * CED / FUS: `project_exposure(base, duration) * min(t / duration, 1)`,
///   with the same duration clamp as [`project_exposure`].
pub fn project_curve(
    route: ExposureRoute,
    base: f64,
    duration_hours: f64,
    time_points: &[f64],
    config: &ExposureConfig,
) -> Vec<CurvePoint> {
    let mut times = time_points.to_vec();
    times.sort_by(f64::total_cmp);

    match route {
        ExposureRoute::Oral => {
            let tau = config.oral_time_constant_hours;
            times
                .into_iter()
                .map(|t| CurvePoint { t, y: base * (1.0 - (-t / tau).exp()) })
                .collect()
        }
        ExposureRoute::Ced | ExposureRoute::Fus => {
            let hours = config.clamp_duration(duration_hours);
            let plateau = project_exposure(base, hours, config);
            times
                .into_iter()
                .map(|t| CurvePoint { t, y: plateau * (t / hours).min(1.0) })
                .collect()
        }
    }
}

/// Oral, CED and FUS curves of one drug for one infusion length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureProfile {
    /// Infusion length after clamping
    pub duration_hours: f64,
    pub oral: Vec<CurvePoint>,
    pub ced: Vec<CurvePoint>,
    pub fus: Vec<CurvePoint>,
}

impl ExposureProfile {
    pub fn series(&self) -> [(ExposureRoute, &[CurvePoint]); 3] {
        [
            (ExposureRoute::Oral, self.oral.as_slice()),
            (ExposureRoute::Ced, self.ced.as_slice()),
            (ExposureRoute::Fus, self.fus.as_slice()),
        ]
    }
}

pub fn exposure_profile(
    drug: &DrugRecord,
    duration_hours: f64,
    time_points: &[f64],
    config: &ExposureConfig,
) -> ExposureProfile {
    let curve = |route: ExposureRoute| {
        project_curve(route, route.base_of(drug), duration_hours, time_points, config)
    };
    ExposureProfile {
        duration_hours: config.clamp_duration(duration_hours),
        oral: curve(ExposureRoute::Oral),
        ced: curve(ExposureRoute::Ced),
        fus: curve(ExposureRoute::Fus),
    }
}

/// Point exposure per route for one infusion length. Oral is the plain baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteExposures {
    pub oral: f64,
    pub ced: f64,
    pub fus: f64,
}

pub fn route_exposures(drug: &DrugRecord, duration_hours: f64, config: &ExposureConfig) -> RouteExposures {
    RouteExposures {
        oral: drug.auc.oral_base,
        ced: project_exposure(drug.auc.ced_base, duration_hours, config),
        fus: project_exposure(drug.auc.fus_base, duration_hours, config),
    }
}

/// Local-over-oral exposure folds. `None` means not computable because the
/// oral baseline is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeUptake {
    pub ced_fold: Option<f64>,
    pub fus_fold: Option<f64>,
}

impl RelativeUptake {
    pub fn from_exposures(exposures: &RouteExposures) -> Self {
        let fold = |local: f64| (exposures.oral > 0.0).then(|| local / exposures.oral);
        Self {
            ced_fold: fold(exposures.ced),
            fus_fold: fold(exposures.fus),
        }
    }

    pub fn is_computable(&self) -> bool {
        self.ced_fold.is_some() && self.fus_fold.is_some()
    }

    pub fn summary(&self) -> String {
        match (self.ced_fold, self.fus_fold) {
            (Some(ced), Some(fus)) => format!(
                "CED exposure estimated ~{ced:.1}× higher than oral; FUS exposure ~{fus:.1}× higher."
            ),
            _ => "Relative uptake not computed due to negligible oral exposure.".to_string(),
        }
    }
}

pub fn relative_uptake(drug: &DrugRecord, duration_hours: f64, config: &ExposureConfig) -> RelativeUptake {
    RelativeUptake::from_exposures(&route_exposures(drug, duration_hours, config))
}

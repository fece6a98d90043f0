//! neurorx-ranker — Readiness scoring, query ranking and delivery modeling.
//! Every function here is a pure computation over a `DrugRecord` and the
//! weights in `ScoringConfig`; nothing is cached between calls.

pub mod evidence;
pub mod exposure;
pub mod modeling;
pub mod ranking;
pub mod readiness;
pub mod synergy;

pub use evidence::{evidence_links, EvidenceLink};
pub use exposure::{
    exposure_profile, project_curve, project_exposure, relative_uptake, route_exposures,
    CurvePoint, ExposureProfile, ExposureRoute, RelativeUptake, RouteExposures,
};
pub use modeling::{
    cns_risk_note, compare_scenarios, model_delivery, trialability_summary, DeliveryMode,
    DeliveryVerdict, ModelingResult, ScenarioDelta,
};
pub use ranking::{explain_ranking, rank, ranking_score, RankedEntry};
pub use readiness::{score_readiness, ReadinessResult, Tier};
pub use synergy::{suggest_synergies, SuggestionKind, SynergySuggestion};

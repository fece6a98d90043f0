//! neurorx-common — Shared types, errors, and scoring configuration used across all NeuroRx crates.

pub mod error;
pub mod entities;
pub mod query;
pub mod scoring_config;

// Re-export commonly used types
pub use error::{NeurorxError, Result};
pub use entities::{Auc, Bbb, BbbScore, DrugRecord, PlausibleCombo, Toxicity, Trial};
pub use query::{ApprovalScope, DeliveryRoute, QueryPreferences, TumorType};
pub use scoring_config::{ExposureConfig, RankingWeights, ReadinessWeights, ScoringConfig};

//! Query-side vocabulary shared by the ranking engine and its callers.
//!
//! The engine itself matches routes and genotypes as plain strings; these
//! enumerations exist so the presentation layer hands over pre-validated values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NeurorxError;

// ── Approval scope ────────────────────────────────────────────────────────────

/// Which regulatory subset of the catalog a query ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ApprovalScope {
    #[default]
    #[serde(rename = "FDA-approved")]
    FdaApproved,
    #[serde(rename = "oncology-only")]
    OncologyOnly,
    #[serde(rename = "any")]
    Any,
}

impl ApprovalScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalScope::FdaApproved => "FDA-approved",
            ApprovalScope::OncologyOnly => "oncology-only",
            ApprovalScope::Any => "any",
        }
    }

    /// FDA-approved keeps approved drugs; oncology-only additionally
    /// requires an oncology indication.
    pub fn admits(&self, is_fda_approved: bool, approved_for_oncology: bool) -> bool {
        match self {
            ApprovalScope::FdaApproved => is_fda_approved,
            ApprovalScope::OncologyOnly => is_fda_approved && approved_for_oncology,
            ApprovalScope::Any => true,
        }
    }
}

impl fmt::Display for ApprovalScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalScope {
    type Err = NeurorxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fda-approved" | "fda" => Ok(ApprovalScope::FdaApproved),
            "oncology-only" | "oncology" => Ok(ApprovalScope::OncologyOnly),
            "any" => Ok(ApprovalScope::Any),
            other => Err(NeurorxError::Config(format!("unknown approval scope: {other}"))),
        }
    }
}

// ── Tumor type ────────────────────────────────────────────────────────────────

/// Tumor context of a query. Carried for display; it does not alter scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TumorType {
    #[default]
    #[serde(rename = "DIPG")]
    Dipg,
    #[serde(rename = "pHGG")]
    PediatricHgg,
    #[serde(rename = "LGG")]
    Lgg,
    Medulloblastoma,
}

impl TumorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TumorType::Dipg => "DIPG",
            TumorType::PediatricHgg => "pHGG",
            TumorType::Lgg => "LGG",
            TumorType::Medulloblastoma => "Medulloblastoma",
        }
    }
}

impl fmt::Display for TumorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TumorType {
    type Err = NeurorxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dipg" => Ok(TumorType::Dipg),
            "phgg" => Ok(TumorType::PediatricHgg),
            "lgg" => Ok(TumorType::Lgg),
            "medulloblastoma" => Ok(TumorType::Medulloblastoma),
            other => Err(NeurorxError::Config(format!("unknown tumor type: {other}"))),
        }
    }
}

// ── Delivery route ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeliveryRoute {
    #[default]
    Systemic,
    #[serde(rename = "CED")]
    Ced,
    Intraventricular,
    #[serde(rename = "FUS")]
    Fus,
    Nanoparticle,
}

impl DeliveryRoute {
    /// Name as it appears in `suggestedRoutes`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryRoute::Systemic => "Systemic",
            DeliveryRoute::Ced => "CED",
            DeliveryRoute::Intraventricular => "Intraventricular",
            DeliveryRoute::Fus => "FUS",
            DeliveryRoute::Nanoparticle => "Nanoparticle",
        }
    }
}

impl fmt::Display for DeliveryRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryRoute {
    type Err = NeurorxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "systemic" => Ok(DeliveryRoute::Systemic),
            "ced" => Ok(DeliveryRoute::Ced),
            "intraventricular" => Ok(DeliveryRoute::Intraventricular),
            "fus" => Ok(DeliveryRoute::Fus),
            "nanoparticle" => Ok(DeliveryRoute::Nanoparticle),
            other => Err(NeurorxError::Config(format!("unknown delivery route: {other}"))),
        }
    }
}

// ── Query preferences ─────────────────────────────────────────────────────────

/// Per-request ranking preferences. An empty string means "not specified".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryPreferences {
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub genotype: String,
}

impl QueryPreferences {
    pub fn new(route: impl Into<String>, genotype: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            genotype: genotype.into(),
        }
    }

    pub fn for_route(route: DeliveryRoute) -> Self {
        Self::new(route.as_str(), "")
    }

    pub fn route(&self) -> Option<&str> {
        (!self.route.is_empty()).then_some(self.route.as_str())
    }

    pub fn genotype(&self) -> Option<&str> {
        (!self.genotype.is_empty()).then_some(self.genotype.as_str())
    }
}

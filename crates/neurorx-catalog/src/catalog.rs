//! Catalog loading and validation.

use std::collections::HashMap;
use std::path::Path;

use neurorx_common::{ApprovalScope, DrugRecord, NeurorxError, Result};
use tracing::{debug, info};

use crate::filter::filter_by_scope;
use crate::source::DrugSource;

/// Curated dataset compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../data/drugs.yaml");

/// Immutable, validated collection of drug records.
#[derive(Debug, Clone)]
pub struct Catalog {
    drugs: Vec<DrugRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    /// Fails on duplicate ids or records that break the data invariants.
    pub fn from_records(drugs: Vec<DrugRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(drugs.len());
        for (pos, drug) in drugs.iter().enumerate() {
            validate_record(drug)?;
            if index.insert(drug.id.clone(), pos).is_some() {
                return Err(NeurorxError::DuplicateDrugId(drug.id.clone()));
            }
        }
        debug!("catalog built with {} records", drugs.len());
        Ok(Self { drugs, index })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let drugs: Vec<DrugRecord> = serde_yaml::from_str(content)?;
        Self::from_records(drugs)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let drugs: Vec<DrugRecord> = serde_json::from_str(content)?;
        Self::from_records(drugs)
    }

    /// Load from a `.yaml`/`.yml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let catalog = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            other => return Err(NeurorxError::UnsupportedFormat(other.to_string())),
        };
        info!("Loaded {} drugs from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The curated pediatric neuro-oncology dataset shipped with the crate.
    pub fn bundled() -> Result<Self> {
        let catalog = Self::from_yaml_str(BUNDLED_CATALOG)?;
        info!("Loaded {} drugs from bundled catalog", catalog.len());
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&DrugRecord> {
        self.index.get(id).map(|&pos| &self.drugs[pos])
    }

    /// Like [`Catalog::get`], but a missing id is an error.
    pub fn require(&self, id: &str) -> Result<&DrugRecord> {
        self.get(id)
            .ok_or_else(|| NeurorxError::DrugNotFound(id.to_string()))
    }

    pub fn drugs(&self) -> &[DrugRecord] {
        &self.drugs
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrugRecord> {
        self.drugs.iter()
    }

    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }

    pub fn filter(&self, scope: ApprovalScope) -> Vec<&DrugRecord> {
        filter_by_scope(&self.drugs, scope)
    }
}

impl DrugSource for Catalog {
    fn drugs(&self) -> &[DrugRecord] {
        &self.drugs
    }

    fn get(&self, id: &str) -> Option<&DrugRecord> {
        Catalog::get(self, id)
    }
}

fn invalid(drug: &DrugRecord, reason: String) -> NeurorxError {
    NeurorxError::InvalidRecord {
        id: drug.id.clone(),
        reason,
    }
}

/// Check the record-level data invariants.
fn validate_record(drug: &DrugRecord) -> Result<()> {
    if drug.id.trim().is_empty() {
        return Err(invalid(drug, "empty id".to_string()));
    }
    let bbb = drug.bbb.numeric;
    if !bbb.is_finite() || !(0.0..=100.0).contains(&bbb) {
        return Err(invalid(drug, format!("bbb.numeric {bbb} outside [0, 100]")));
    }
    for (route, base) in ["oralBase", "cedBase", "fusBase"]
        .iter()
        .zip(drug.auc.as_array())
    {
        if !base.is_finite() || base < 0.0 {
            return Err(invalid(drug, format!("auc.{route} must be a non-negative number, got {base}")));
        }
    }
    if !(drug.half_life_hours > 0.0) {
        return Err(invalid(
            drug,
            format!("halfLifeHours must be positive, got {}", drug.half_life_hours),
        ));
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Configuration loading for NeuroRx.
//! Reads neurorx.toml from the current directory or path in NEURORX_CONFIG env var.

use std::path::{Path, PathBuf};

use anyhow::Context;
use neurorx_common::{ApprovalScope, DeliveryRoute, ScoringConfig, TumorType};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Where drug records come from. Unset means the bundled dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

/// Defaults for `rank` when the corresponding flag is not given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub scope: ApprovalScope,
    #[serde(default)]
    pub tumor: TumorType,
    #[serde(default)]
    pub route: DeliveryRoute,
    #[serde(default)]
    pub genotype: String,
    #[serde(default = "default_top")]
    pub top: usize,
}

fn default_top() -> usize { 10 }

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            scope: ApprovalScope::default(),
            tumor: TumorType::default(),
            route: DeliveryRoute::default(),
            genotype: String::new(),
            top: default_top(),
        }
    }
}

impl Config {
    /// Load configuration from neurorx.toml.
    /// Checks NEURORX_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let path = std::env::var("NEURORX_CONFIG")
            .unwrap_or_else(|_| "neurorx.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    /// A missing file is not an error: the curated defaults apply.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            warn!("Config file not found: {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.scoring.validate()?;
        Ok(config)
    }
}

//! Subcommand handlers. Each returns the text to print so the rendering can
//! be tested without capturing stdout.

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;
use neurorx_catalog::Catalog;
use neurorx_common::{ApprovalScope, DeliveryRoute, DrugRecord, QueryPreferences, TumorType};
use neurorx_ranker::{
    cns_risk_note, compare_scenarios, evidence_links, exposure_profile, model_delivery, rank,
    relative_uptake, score_readiness, suggest_synergies, trialability_summary, DeliveryMode,
    EvidenceLink, ExposureProfile, ModelingResult, RankedEntry, ReadinessResult, RelativeUptake,
    ScenarioDelta, SynergySuggestion,
};
use serde::Serialize;

use crate::config::Config;

/// Loaded configuration plus the catalog it points at.
pub struct App {
    pub config: Config,
    pub catalog: Catalog,
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

// ── rank ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RankArgs {
    /// FDA-approved, oncology-only, or any
    #[arg(long)]
    pub scope: Option<ApprovalScope>,
    /// DIPG, pHGG, LGG, or Medulloblastoma
    #[arg(long)]
    pub tumor: Option<TumorType>,
    /// Systemic, CED, Intraventricular, FUS, or Nanoparticle
    #[arg(long)]
    pub route: Option<DeliveryRoute>,
    #[arg(long)]
    pub genotype: Option<String>,
    /// Number of entries to show
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Serialize)]
struct RankingOutput<'a> {
    scope: ApprovalScope,
    tumor: TumorType,
    preferences: QueryPreferences,
    entries: Vec<RankedEntry<'a>>,
}

pub fn rank_command(app: &App, args: RankArgs, json: bool) -> Result<String> {
    let defaults = &app.config.query;
    let scope = args.scope.unwrap_or(defaults.scope);
    let tumor = args.tumor.unwrap_or(defaults.tumor);
    let route = args.route.unwrap_or(defaults.route);
    let genotype = args.genotype.unwrap_or_else(|| defaults.genotype.clone());
    let top = args.top.unwrap_or(defaults.top);

    let preferences = QueryPreferences::new(route.as_str(), genotype);
    let mut entries = rank(
        app.catalog.filter(scope),
        &preferences,
        &app.config.scoring.ranking,
    );
    entries.truncate(top);

    if json {
        return to_json(&RankingOutput {
            scope,
            tumor,
            preferences,
            entries,
        });
    }

    let mut out = String::new();
    writeln!(
        out,
        "{tumor} · {scope} · route {route} · genotype {}",
        preferences.genotype().unwrap_or("—")
    )?;
    if entries.is_empty() {
        writeln!(out, "No candidates in scope.")?;
    }
    for (pos, entry) in entries.iter().enumerate() {
        let marker = if entry.is_featured { "★" } else { " " };
        writeln!(
            out,
            "{:>2}. {marker} {:<24} {:>5}",
            pos + 1,
            entry.drug.name,
            entry.score
        )?;
        for reason in &entry.reasons {
            writeln!(out, "       {reason}")?;
        }
    }
    Ok(out)
}

// ── readiness ─────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ReadinessArgs {
    /// Drug id, e.g. dasatinib
    pub drug: String,
    #[arg(long)]
    pub genotype: Option<String>,
}

fn write_readiness(out: &mut String, drug: &DrugRecord, result: &ReadinessResult) -> Result<()> {
    writeln!(out, "{}: {} ({})", drug.name, result.score, result.tier)?;
    writeln!(out, "Trialability: {}", result.trialability)?;
    for line in &result.rationale {
        writeln!(out, "  - {line}")?;
    }
    Ok(())
}

pub fn readiness_command(app: &App, args: ReadinessArgs, json: bool) -> Result<String> {
    let drug = app.catalog.require(&args.drug)?;
    let result = score_readiness(drug, args.genotype.as_deref(), &app.config.scoring.readiness);
    if json {
        return to_json(&result);
    }
    let mut out = String::new();
    write_readiness(&mut out, drug, &result)?;
    Ok(out)
}

// ── exposure ──────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ExposureArgs {
    pub drug: String,
    /// Infusion length for CED and FUS, clamped to the configured window
    #[arg(long, default_value_t = 24.0)]
    pub hours: f64,
}

pub fn exposure_command(app: &App, args: ExposureArgs, json: bool) -> Result<String> {
    let drug = app.catalog.require(&args.drug)?;
    let cfg = &app.config.scoring.exposure;
    let profile = exposure_profile(drug, args.hours, &cfg.time_points, cfg);
    if json {
        return to_json(&profile);
    }
    render_profile(drug, &profile)
}

fn render_profile(drug: &DrugRecord, profile: &ExposureProfile) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "{}: projected exposure (µM·hr), infusion {}h",
        drug.name, profile.duration_hours
    )?;
    writeln!(out, "{:>6} {:>8} {:>8} {:>8}", "t (h)", "Oral", "CED", "FUS")?;
    let rows = profile.oral.iter().zip(&profile.ced).zip(&profile.fus);
    for ((oral, ced), fus) in rows {
        if !(oral.is_renderable() && ced.is_renderable() && fus.is_renderable()) {
            continue;
        }
        writeln!(
            out,
            "{:>6} {:>8.2} {:>8.2} {:>8.2}",
            oral.t, oral.y, ced.y, fus.y
        )?;
    }
    Ok(out)
}

// ── model ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ModelArgs {
    pub drug: String,
    /// Oral, CED, or FUS
    #[arg(long, default_value = "CED")]
    pub mode: DeliveryMode,
    #[arg(long, default_value_t = 24.0)]
    pub hours: f64,
    /// Second infusion length to compare against
    #[arg(long)]
    pub compare: Option<f64>,
}

#[derive(Serialize)]
struct ModelOutput {
    scenario: String,
    result: ModelingResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    compared_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delta: Option<ScenarioDelta>,
}

pub fn model_command(app: &App, args: ModelArgs, json: bool) -> Result<String> {
    let drug = app.catalog.require(&args.drug)?;
    let scoring = &app.config.scoring;
    let result = model_delivery(drug, args.mode, args.hours, scoring);
    let baseline = args
        .compare
        .map(|hours| model_delivery(drug, args.mode, hours, scoring));

    let output = ModelOutput {
        scenario: result.scenario_name(),
        delta: baseline.as_ref().map(|b| compare_scenarios(&result, b)),
        compared_with: baseline.as_ref().map(ModelingResult::scenario_name),
        result,
    };
    if json {
        return to_json(&output);
    }

    let result = &output.result;
    let mut out = String::new();
    writeln!(out, "{} · {}", drug.name, output.scenario)?;
    writeln!(
        out,
        "Exposure: oral {:.2}, CED {:.2}, FUS {:.2}",
        result.exposures.oral, result.exposures.ced, result.exposures.fus
    )?;
    writeln!(out, "{}", result.uptake.summary())?;
    writeln!(out, "Verdict: {}", result.verdict)?;
    writeln!(
        out,
        "Readiness: {} ({}) · {}",
        result.readiness.score, result.readiness.tier, result.readiness.trialability
    )?;
    if let (Some(name), Some(delta)) = (&output.compared_with, &output.delta) {
        writeln!(
            out,
            "vs {name}: oral {:+.2}, CED {:+.2}, FUS {:+.2}",
            delta.oral, delta.ced, delta.fus
        )?;
    }
    Ok(out)
}

// ── detail ────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DetailArgs {
    pub drug: String,
    #[arg(long)]
    pub genotype: Option<String>,
}

#[derive(Serialize)]
struct DrugDetail<'a> {
    drug: &'a DrugRecord,
    readiness: ReadinessResult,
    trialability: String,
    cns_risk: &'static str,
    uptake: RelativeUptake,
    uptake_summary: String,
    synergies: Vec<SynergySuggestion>,
    evidence: Vec<EvidenceLink>,
}

pub fn detail_command(app: &App, args: DetailArgs, json: bool) -> Result<String> {
    let drug = app.catalog.require(&args.drug)?;
    let scoring = &app.config.scoring;
    let readiness = score_readiness(drug, args.genotype.as_deref(), &scoring.readiness);
    let uptake = relative_uptake(drug, scoring.exposure.relative_uptake_hours, &scoring.exposure);
    let detail = DrugDetail {
        drug,
        trialability: trialability_summary(drug, &readiness, &scoring.exposure),
        readiness,
        cns_risk: cns_risk_note(drug),
        uptake_summary: uptake.summary(),
        uptake,
        synergies: suggest_synergies(drug),
        evidence: evidence_links(drug),
    };
    if json {
        return to_json(&detail);
    }

    let mut out = String::new();
    write_readiness(&mut out, drug, &detail.readiness)?;
    writeln!(out, "Summary: {}", detail.trialability)?;
    writeln!(out, "CNS risk: {}", detail.cns_risk)?;
    writeln!(out, "{}", detail.uptake_summary)?;
    if !detail.synergies.is_empty() {
        writeln!(out, "Synergies:")?;
        for s in &detail.synergies {
            writeln!(out, "  - {}: {}", s.regimen, s.rationale)?;
        }
    }
    writeln!(out, "Evidence:")?;
    for link in &detail.evidence {
        writeln!(out, "  - {}: {}", link.label, link.url)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App {
            config: Config::default(),
            catalog: Catalog::bundled().unwrap(),
        }
    }

    fn rank_args() -> RankArgs {
        RankArgs {
            scope: None,
            tumor: None,
            route: None,
            genotype: None,
            top: None,
        }
    }

    #[test]
    fn test_rank_text_lists_featured_first() {
        let out = rank_command(&app(), rank_args(), false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "DIPG · FDA-approved · route Systemic · genotype —");
        assert!(lines[1].contains("★ Everolimus"));
        assert!(lines[1].ends_with("81"));
    }

    #[test]
    fn test_rank_top_truncates() {
        let args = RankArgs {
            top: Some(2),
            ..rank_args()
        };
        let out = rank_command(&app(), args, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["entries"].as_array().unwrap().len(), 2);
        assert_eq!(value["scope"], "FDA-approved");
    }

    #[test]
    fn test_rank_uses_config_defaults() {
        let mut app = app();
        app.config.query.scope = ApprovalScope::Any;
        app.config.query.genotype = "H3K27M".to_string();
        let out = rank_command(&app, rank_args(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["entries"].as_array().unwrap().len(), 7);
        assert_eq!(value["preferences"]["genotype"], "H3K27M");
    }

    #[test]
    fn test_readiness_unknown_drug_is_error() {
        let args = ReadinessArgs {
            drug: "aspirin".to_string(),
            genotype: None,
        };
        let err = readiness_command(&app(), args, false).unwrap_err();
        assert!(err.to_string().contains("aspirin"));
    }

    #[test]
    fn test_readiness_json_tier() {
        let args = ReadinessArgs {
            drug: "bevacizumab".to_string(),
            genotype: None,
        };
        let out = readiness_command(&app(), args, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["tier"], "No-go");
        assert_eq!(value["trialability"], "Not brain-penetrant, low priority");
    }

    #[test]
    fn test_exposure_table_has_one_row_per_time_point() {
        let args = ExposureArgs {
            drug: "dasatinib".to_string(),
            hours: 24.0,
        };
        let out = exposure_command(&app(), args, false).unwrap();
        // header + column titles + 8 default time points
        assert_eq!(out.lines().count(), 10);
        assert!(out.lines().last().unwrap().contains("3.60"));
    }

    #[test]
    fn test_model_with_comparison() {
        let args = ModelArgs {
            drug: "dasatinib".to_string(),
            mode: DeliveryMode::Ced,
            hours: 48.0,
            compare: Some(24.0),
        };
        let out = model_command(&app(), args, false).unwrap();
        assert!(out.starts_with("Dasatinib · CED 48h"));
        assert!(out.contains("Verdict: Promising with CED; systemic may be subtherapeutic"));
        assert!(out.contains("vs CED 24h: oral +0.00, CED +3.60, FUS +1.60"));
    }

    #[test]
    fn test_detail_json_sections() {
        let args = DetailArgs {
            drug: "dasatinib".to_string(),
            genotype: None,
        };
        let out = detail_command(&app(), args, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["drug"]["isFDAApproved"], true);
        assert_eq!(value["synergies"].as_array().unwrap().len(), 2);
        assert_eq!(value["evidence"].as_array().unwrap().len(), 4);
        assert!(value["cns_risk"].as_str().unwrap().starts_with("efflux-related"));
    }
}

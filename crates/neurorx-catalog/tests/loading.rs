//! Loading catalogs from files on disk.

use std::io::Write;

use neurorx_catalog::{Catalog, DrugSource};
use neurorx_common::{ApprovalScope, NeurorxError};
use pretty_assertions::assert_eq;
use tempfile::Builder;

const MINIMAL_YAML: &str = r#"
- id: temozolomide
  name: Temozolomide
  isFDAApproved: true
  approvedForOncology: true
  bbb:
    score: High
    label: High
    numeric: 75
  halfLifeHours: 1.8
  auc:
    oralBase: 1.2
    cedBase: 0
    fusBase: 0
- id: sirolimus
  name: Sirolimus
  bbb:
    score: Low
    label: Limited
    numeric: 20
  halfLifeHours: 62
"#;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_yaml_file_with_defaults() {
    let file = write_temp(".yaml", MINIMAL_YAML);
    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);

    let sirolimus = catalog.require("sirolimus").unwrap();
    assert!(!sirolimus.is_fda_approved);
    assert!(sirolimus.suggested_routes.is_empty());
    assert_eq!(sirolimus.auc.max_base(), 0.0);

    let ids: Vec<&str> = catalog
        .filter(ApprovalScope::OncologyOnly)
        .iter()
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(ids, vec!["temozolomide"]);
}

#[test]
fn test_load_json_matches_bundled() {
    let bundled = Catalog::bundled().unwrap();
    let json = serde_json::to_string_pretty(bundled.drugs()).unwrap();
    let file = write_temp(".json", &json);
    let loaded = Catalog::load(file.path()).unwrap();
    assert_eq!(loaded.drugs(), bundled.drugs());
}

#[test]
fn test_unsupported_extension() {
    let file = write_temp(".csv", "id,name\n");
    let err = Catalog::load(file.path()).unwrap_err();
    assert!(matches!(err, NeurorxError::UnsupportedFormat(ext) if ext == "csv"));
}

#[test]
fn test_missing_required_field_rejected() {
    let file = write_temp(".yaml", "- id: x\n  name: X\n  halfLifeHours: 1\n");
    assert!(matches!(Catalog::load(file.path()), Err(NeurorxError::Yaml(_))));
}

#[test]
fn test_bundled_dataset_content() {
    let catalog = Catalog::bundled().unwrap();
    let source: &dyn DrugSource = &catalog;
    let dasatinib = source.get("dasatinib").unwrap();
    assert_eq!(dasatinib.efflux, vec!["P-gp".to_string(), "BCRP".to_string()]);
    assert_eq!(dasatinib.trials[0].nct_id, "NCT03352427");
    assert!(dasatinib.delivery_notes.contains_key("CED"));
    assert_eq!(source.by_scope(ApprovalScope::FdaApproved).len(), 6);
    assert!(catalog.iter().all(|d| (0.0..=100.0).contains(&d.bbb.numeric)));
}

//! Outbound evidence links for a drug: regulatory label, DailyMed, PubChem,
//! and one entry per registered trial.

use neurorx_common::DrugRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceLink {
    pub label: String,
    pub url: String,
}

impl EvidenceLink {
    fn new(label: impl Into<String>, url: String) -> Self {
        Self {
            label: label.into(),
            url,
        }
    }
}

pub fn evidence_links(drug: &DrugRecord) -> Vec<EvidenceLink> {
    let name = urlencoding::encode(&drug.name);
    let mut links = vec![
        EvidenceLink::new(
            "FDA Label",
            format!(
                "https://www.accessdata.fda.gov/scripts/cder/daf/index.cfm?event=BasicSearch.process&searchTerm={name}"
            ),
        ),
        EvidenceLink::new(
            "DailyMed",
            format!("https://dailymed.nlm.nih.gov/dailymed/search.cfm?query={name}"),
        ),
        EvidenceLink::new(
            "PubChem",
            format!("https://pubchem.ncbi.nlm.nih.gov/compound/{name}"),
        ),
    ];
    links.extend(drug.trials.iter().map(|trial| {
        EvidenceLink::new(
            format!("ClinicalTrials.gov ({})", trial.nct_id),
            format!("https://clinicaltrials.gov/study/{}", trial.nct_id),
        )
    }));
    links
}

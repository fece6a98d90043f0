//! Builders for synthetic drug records.
//!
//! Tests construct exactly the attributes they exercise; everything else
//! takes a neutral default (Medium BBB at 50, no approvals, zero exposure,
//! empty lists).

use neurorx_common::{Auc, Bbb, BbbScore, DrugRecord, PlausibleCombo, Trial};

pub struct DrugBuilder {
    drug: DrugRecord,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl DrugBuilder {
    /// Name defaults to the id.
    pub fn new(id: &str) -> Self {
        Self {
            drug: DrugRecord {
                id: id.to_string(),
                name: id.to_string(),
                is_fda_approved: false,
                approved_for_oncology: false,
                indications: vec![],
                repurposing_targets: vec![],
                bbb: Bbb {
                    score: BbbScore::Medium,
                    label: "Moderate".to_string(),
                    numeric: 50.0,
                },
                efflux: vec![],
                metabolism: String::new(),
                half_life_hours: 12.0,
                roa: vec![],
                suggested_routes: vec![],
                delivery_notes: Default::default(),
                auc: Auc::default(),
                genotypes_responsive: vec![],
                resistance_variants: vec![],
                tox: Default::default(),
                severe_aes: vec![],
                interactions: Default::default(),
                synergy_partners: vec![],
                plausible_combos: vec![],
                trials: vec![],
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.drug.name = name.to_string();
        self
    }

    pub fn fda_approved(mut self, approved: bool) -> Self {
        self.drug.is_fda_approved = approved;
        self
    }

    pub fn oncology(mut self, approved: bool) -> Self {
        self.drug.approved_for_oncology = approved;
        self
    }

    pub fn bbb(mut self, score: BbbScore, label: &str, numeric: f64) -> Self {
        self.drug.bbb = Bbb {
            score,
            label: label.to_string(),
            numeric,
        };
        self
    }

    pub fn bbb_numeric(mut self, numeric: f64) -> Self {
        self.drug.bbb.numeric = numeric;
        self
    }

    pub fn auc(mut self, oral: f64, ced: f64, fus: f64) -> Self {
        self.drug.auc = Auc {
            oral_base: oral,
            ced_base: ced,
            fus_base: fus,
        };
        self
    }

    pub fn half_life_hours(mut self, hours: f64) -> Self {
        self.drug.half_life_hours = hours;
        self
    }

    pub fn suggested_routes(mut self, routes: &[&str]) -> Self {
        self.drug.suggested_routes = strings(routes);
        self
    }

    pub fn responsive(mut self, genotypes: &[&str]) -> Self {
        self.drug.genotypes_responsive = strings(genotypes);
        self
    }

    pub fn resistance(mut self, variants: &[&str]) -> Self {
        self.drug.resistance_variants = strings(variants);
        self
    }

    pub fn red_flags(mut self, flags: &[&str]) -> Self {
        self.drug.tox.pediatric_red_flags = strings(flags);
        self
    }

    pub fn efflux(mut self, pumps: &[&str]) -> Self {
        self.drug.efflux = strings(pumps);
        self
    }

    pub fn combo(mut self, regimen: &str, rationale: &str) -> Self {
        self.drug.plausible_combos.push(PlausibleCombo {
            regimen: regimen.to_string(),
            rationale: rationale.to_string(),
        });
        self
    }

    pub fn trial(mut self, nct_id: &str, status: &str) -> Self {
        self.drug.trials.push(Trial {
            nct_id: nct_id.to_string(),
            status: status.to_string(),
            notes: String::new(),
        });
        self
    }

    pub fn build(self) -> DrugRecord {
        self.drug
    }
}

/// Dasatinib as curated: efflux-limited, strong local-delivery baselines,
/// marrow red flag.
pub fn dasatinib() -> DrugRecord {
    DrugBuilder::new("dasatinib")
        .name("Dasatinib")
        .fda_approved(true)
        .oncology(true)
        .bbb(BbbScore::Low, "Low (efflux-limited)", 35.0)
        .efflux(&["P-gp", "BCRP"])
        .suggested_routes(&["Systemic", "FUS", "CED"])
        .responsive(&["PDGFRA"])
        .resistance(&["ABC transporter upregulation"])
        .red_flags(&["Marrow suppression", "Bleeding risk", "Pleural effusion"])
        .auc(0.8, 3.6, 1.6)
        .combo(
            "Dasatinib + Everolimus",
            "PDGFR/SRC + mTOR co-inhibition; evidence of synergy and improved CNS levels with mTOR inhibition.",
        )
        .trial("NCT03352427", "Completed")
        .build()
}

/// Metformin as curated: clinician-familiar, low BBB, oral only.
pub fn metformin() -> DrugRecord {
    DrugBuilder::new("metformin")
        .name("Metformin")
        .fda_approved(true)
        .bbb(BbbScore::Low, "Limited BBB penetration", 35.0)
        .efflux(&["OCT transporters (uptake dependent)"])
        .suggested_routes(&["Systemic"])
        .red_flags(&["Lactic acidosis (rare, renal impairment)"])
        .auc(0.6, 0.0, 0.0)
        .build()
}

/// ONC201 as curated: investigational, high BBB, H3K27M-responsive.
pub fn onc201() -> DrugRecord {
    DrugBuilder::new("onc201")
        .name("ONC201 (Dordaviprone)")
        .bbb(BbbScore::High, "High (CNS-penetrant)", 80.0)
        .suggested_routes(&["Systemic"])
        .responsive(&["H3K27M"])
        .resistance(&["DRD2 loss"])
        .red_flags(&["GI upset"])
        .auc(1.6, 0.0, 0.0)
        .build()
}

/// Small mixed catalog: one approved oncology agent, one approved
/// non-oncology agent, one investigational agent.
pub fn synthetic_catalog() -> Vec<DrugRecord> {
    vec![dasatinib(), metformin(), onc201()]
}

//! Government scheme reference data: price support, subsidies, loans, insurance.
//!
//! These records are hand-authored and static. They are not part of the
//! crop catalog and never touch the document store.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::i18n::{self, Language};

/// The informational modules reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    Msp,
    Subsidy,
    Loan,
    Insurance,
}

impl SchemeKind {
    pub const ALL: [SchemeKind; 4] = [Self::Msp, Self::Subsidy, Self::Loan, Self::Insurance];

    /// Main-menu token for this module (`2`..`5`).
    pub fn from_menu_token(token: &str) -> Option<Self> {
        match token {
            "2" => Some(Self::Msp),
            "3" => Some(Self::Subsidy),
            "4" => Some(Self::Loan),
            "5" => Some(Self::Insurance),
            _ => None,
        }
    }

    /// Message key of the module title.
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::Msp => "module_msp",
            Self::Subsidy => "module_subsidy",
            Self::Loan => "module_loan",
            Self::Insurance => "module_insurance",
        }
    }

    /// All records for this module, in display order.
    pub fn records(self) -> &'static [SchemeRecord] {
        let all = registry();
        match self {
            Self::Msp => &all.msp,
            Self::Subsidy => &all.subsidy,
            Self::Loan => &all.loan,
            Self::Insurance => &all.insurance,
        }
    }
}

impl std::fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Msp => write!(f, "msp"),
            Self::Subsidy => write!(f, "subsidy"),
            Self::Loan => write!(f, "loan"),
            Self::Insurance => write!(f, "insurance"),
        }
    }
}

/// One scheme entry: a flat field map with a `name` title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeRecord {
    pub kind: SchemeKind,
    pub fields: Map<String, Value>,
}

impl SchemeRecord {
    fn new(kind: SchemeKind, value: Value) -> Self {
        let fields = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { kind, fields }
    }

    /// Base-language title.
    pub fn display_name(&self) -> String {
        self.fields
            .get("name")
            .and_then(i18n::value_text)
            .unwrap_or_default()
    }

    /// Title in `language`, using a stored `name_{code}` variant when present.
    pub fn localized_name(&self, language: Language) -> String {
        i18n::resolve_field(&self.fields, "name", language).unwrap_or_default()
    }
}

struct Registry {
    msp: Vec<SchemeRecord>,
    subsidy: Vec<SchemeRecord>,
    loan: Vec<SchemeRecord>,
    insurance: Vec<SchemeRecord>,
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| Registry {
        msp: msp_records(),
        subsidy: subsidy_records(),
        loan: loan_records(),
        insurance: insurance_records(),
    })
}

// ── Records ─────────────────────────────────────────────────────────

fn msp_records() -> Vec<SchemeRecord> {
    [
        json!({
            "name": "Paddy (Common)",
            "name_hi": "धान (सामान्य)",
            "name_mr": "भात (सामान्य)",
            "season_year": "Kharif 2024-25",
            "amount_per_quintal": 2300,
            "procurement_agency": "Food Corporation of India (FCI) and state agencies",
        }),
        json!({
            "name": "Wheat",
            "name_hi": "गेहूं",
            "name_mr": "गहू",
            "season_year": "Rabi 2025-26",
            "amount_per_quintal": 2425,
            "procurement_agency": "Food Corporation of India (FCI) and state agencies",
        }),
        json!({
            "name": "Cotton (Medium Staple)",
            "name_hi": "कपास (मध्यम रेशा)",
            "name_mr": "कापूस (मध्यम धागा)",
            "season_year": "Kharif 2024-25",
            "amount_per_quintal": 7121,
            "procurement_agency": "Cotton Corporation of India (CCI)",
        }),
        json!({
            "name": "Tur (Arhar)",
            "name_hi": "तुअर (अरहर)",
            "name_mr": "तूर",
            "season_year": "Kharif 2024-25",
            "amount_per_quintal": 7550,
            "procurement_agency": "NAFED",
            "notes": "Procured under the Price Support Scheme when market prices fall below MSP.",
        }),
    ]
    .into_iter()
    .map(|v| SchemeRecord::new(SchemeKind::Msp, v))
    .collect()
}

fn subsidy_records() -> Vec<SchemeRecord> {
    [
        json!({
            "name": "PM-KISAN",
            "name_hi": "पीएम-किसान",
            "name_mr": "पीएम-किसान",
            "benefit": "₹6,000 per year in three equal instalments, paid directly to the bank account",
            "eligibility": "All landholding farmer families",
            "how_to_apply": "Register on the PM-KISAN portal or at the nearest Common Service Centre",
            "documents_required": ["Aadhaar card", "Land records", "Bank account details"],
            "website": "https://pmkisan.gov.in",
        }),
        json!({
            "name": "PM-KUSUM",
            "name_hi": "पीएम-कुसुम",
            "name_mr": "पीएम-कुसुम",
            "benefit": "Subsidy of up to 60% on standalone solar pumps",
            "eligibility": "Individual farmers, farmer groups and cooperatives",
            "how_to_apply": "Apply through the state renewable energy department portal",
            "documents_required": ["Aadhaar card", "Land records", "Bank passbook"],
            "website": "https://pmkusum.mnre.gov.in",
        }),
        json!({
            "name": "Soil Health Card",
            "name_hi": "मृदा स्वास्थ्य कार्ड",
            "name_mr": "मृदा आरोग्य पत्रिका",
            "benefit": "Free soil testing with crop-wise nutrient recommendations",
            "eligibility": "All farmers",
            "how_to_apply": "Contact the local agriculture office or Krishi Vigyan Kendra",
            "website": "https://soilhealth.dac.gov.in",
        }),
        json!({
            "name": "PM Krishi Sinchai Yojana (Micro Irrigation)",
            "name_hi": "पीएम कृषि सिंचाई योजना (सूक्ष्म सिंचाई)",
            "name_mr": "पीएम कृषी सिंचन योजना (सूक्ष्म सिंचन)",
            "benefit": "55% subsidy for small and marginal farmers, 45% for others on drip and sprinkler systems",
            "eligibility": "Farmers with own land and a water source",
            "how_to_apply": "Apply on the state agriculture department portal",
            "documents_required": ["Aadhaar card", "7/12 extract or land record", "Bank account details"],
            "website": "https://pmksy.gov.in",
        }),
    ]
    .into_iter()
    .map(|v| SchemeRecord::new(SchemeKind::Subsidy, v))
    .collect()
}

fn loan_records() -> Vec<SchemeRecord> {
    [
        json!({
            "name": "Kisan Credit Card (KCC)",
            "name_hi": "किसान क्रेडिट कार्ड (केसीसी)",
            "name_mr": "किसान क्रेडिट कार्ड (केसीसी)",
            "provider": "Commercial, cooperative and regional rural banks",
            "interest_rate": "7% per year, effectively 4% with prompt repayment",
            "max_amount": "₹3 lakh at concessional rate",
            "repayment": "Within 12 months for crop loans",
            "eligibility": "Owner cultivators, tenant farmers and sharecroppers",
            "documents_required": ["Aadhaar card", "Land records", "Passport-size photograph"],
        }),
        json!({
            "name": "Agriculture Infrastructure Fund",
            "name_hi": "कृषि अवसंरचना कोष",
            "name_mr": "कृषी पायाभूत सुविधा निधी",
            "provider": "Scheduled commercial banks and cooperative banks",
            "interest_rate": "3% interest subvention per year",
            "max_amount": "₹2 crore per project",
            "repayment": "Up to 7 years with moratorium of up to 2 years",
            "eligibility": "Farmers, FPOs, agri-entrepreneurs and cooperatives",
            "website": "https://agriinfra.dac.gov.in",
        }),
    ]
    .into_iter()
    .map(|v| SchemeRecord::new(SchemeKind::Loan, v))
    .collect()
}

fn insurance_records() -> Vec<SchemeRecord> {
    [
        json!({
            "name": "Pradhan Mantri Fasal Bima Yojana (PMFBY)",
            "name_hi": "प्रधानमंत्री फसल बीमा योजना",
            "name_mr": "प्रधानमंत्री पीक विमा योजना",
            "coverage": "Yield loss from natural calamities, pests and diseases, plus post-harvest losses",
            "premium_rates": [
                {"crop_type": "Kharif food and oilseed crops", "farmer_share": "2%"},
                {"crop_type": "Rabi food and oilseed crops", "farmer_share": "1.5%"},
                {"crop_type": "Commercial and horticultural crops", "farmer_share": "5%"},
            ],
            "claim_process": "Report crop loss within 72 hours on the crop insurance app or helpline",
            "helpline": "14447",
            "website": "https://pmfby.gov.in",
        }),
        json!({
            "name": "Restructured Weather Based Crop Insurance Scheme (RWBCIS)",
            "name_hi": "पुनर्गठित मौसम आधारित फसल बीमा योजना",
            "name_mr": "पुनर्रचित हवामान आधारित पीक विमा योजना",
            "coverage": "Losses from adverse rainfall, temperature, humidity and wind",
            "premium_rates": [
                {"crop_type": "Kharif crops", "farmer_share": "2%"},
                {"crop_type": "Rabi crops", "farmer_share": "1.5%"},
            ],
            "claim_process": "Claims settled automatically from weather station data",
            "website": "https://pmfby.gov.in",
        }),
    ]
    .into_iter()
    .map(|v| SchemeRecord::new(SchemeKind::Insurance, v))
    .collect()
}

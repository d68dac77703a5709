//! Canonical crop record, normalized once from loosely-typed JSON.
//!
//! Standard crops (kharif/rabi datasets, `crops` collection) name themselves
//! with `name`; specialty crops (cash/fruit) use `crop_name`. Both shapes map
//! onto [`CropRecord`], with `_hi`/`_mr` siblings folded into a
//! [`LocalizedText`] overlay.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::i18n::{self, Language};

/// Crop categories offered in the crop menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropCategory {
    Kharif,
    Rabi,
    Cash,
    Fruit,
}

impl CropCategory {
    /// Menu order.
    pub const ALL: [CropCategory; 4] = [Self::Kharif, Self::Rabi, Self::Cash, Self::Fruit];

    /// Crop-menu digit for this category.
    pub fn from_menu_token(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Kharif),
            "2" => Some(Self::Rabi),
            "3" => Some(Self::Cash),
            "4" => Some(Self::Fruit),
            _ => None,
        }
    }

    /// String-table key of the category label.
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Kharif => "category_kharif",
            Self::Rabi => "category_rabi",
            Self::Cash => "category_cash",
            Self::Fruit => "category_fruit",
        }
    }

    /// Record shape used by this category's sources.
    pub const fn kind(self) -> CropKind {
        match self {
            Self::Kharif | Self::Rabi => CropKind::Standard,
            Self::Cash | Self::Fruit => CropKind::Specialty,
        }
    }

    /// Season given to dataset records that omit one.
    pub const fn default_season(self) -> Option<&'static str> {
        match self {
            Self::Kharif => Some("Kharif"),
            Self::Rabi => Some("Rabi"),
            Self::Cash | Self::Fruit => None,
        }
    }
}

impl std::fmt::Display for CropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Kharif => "kharif",
            Self::Rabi => "rabi",
            Self::Cash => "cash",
            Self::Fruit => "fruit",
        };
        write!(f, "{s}")
    }
}

/// Which naming field a record uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropKind {
    /// Uses `name`.
    Standard,
    /// Uses `crop_name`.
    Specialty,
}

impl CropKind {
    pub const fn name_field(self) -> &'static str {
        match self {
            Self::Standard => "name",
            Self::Specialty => "crop_name",
        }
    }

    const fn fallback_name_field(self) -> &'static str {
        match self {
            Self::Standard => "crop_name",
            Self::Specialty => "name",
        }
    }
}

/// A text value in the default language plus optional stored translations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub base: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overlay: BTreeMap<Language, String>,
}

impl LocalizedText {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            overlay: BTreeMap::new(),
        }
    }

    /// Read `field` and its language-suffixed siblings from `object`.
    ///
    /// Returns `None` when the base field is absent and no variant exists.
    pub fn from_fields(object: &Map<String, Value>, field: &str) -> Option<Self> {
        let base = object.get(field).and_then(i18n::value_text);
        let mut overlay = BTreeMap::new();
        for language in Language::ALL.into_iter().filter(|l| !l.is_default()) {
            if let Some(text) = object
                .get(&format!("{field}_{}", language.code()))
                .and_then(i18n::value_text)
                .filter(|s| !s.is_empty())
            {
                overlay.insert(language, text);
            }
        }
        if base.is_none() && overlay.is_empty() {
            return None;
        }
        Some(Self {
            base: base.unwrap_or_default(),
            overlay,
        })
    }

    /// Text for `language`: the stored variant if any, otherwise the base
    /// text passed through the phrase table.
    pub fn get(&self, language: Language) -> Cow<'_, str> {
        if let Some(text) = self.overlay.get(&language) {
            return Cow::Borrowed(text.as_str());
        }
        if language.is_default() || self.base.is_empty() {
            Cow::Borrowed(self.base.as_str())
        } else {
            Cow::Owned(i18n::translate_phrases(&self.base, language))
        }
    }
}

/// One fertilizer application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FertilizerStep {
    pub stage: Option<LocalizedText>,
    pub dosage: Option<LocalizedText>,
}

/// One disease or pest entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestEntry {
    pub name: LocalizedText,
}

/// A crop record from any source, in canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    pub name: LocalizedText,
    pub kind: CropKind,
    pub season: Option<LocalizedText>,
    pub sowing_time: Option<LocalizedText>,
    pub harvesting_time: Option<LocalizedText>,
    pub expected_yield: Option<LocalizedText>,
    pub minimum_price: Option<LocalizedText>,
    pub fertilizer_schedule: Vec<FertilizerStep>,
    pub diseases: Vec<PestEntry>,
}

impl CropRecord {
    /// Normalize a raw document. Returns `None` for non-objects and records
    /// without a display name.
    pub fn from_value(value: &Value, kind: CropKind) -> Option<Self> {
        let object = value.as_object()?;

        let name_field = [kind.name_field(), kind.fallback_name_field()]
            .into_iter()
            .find(|f| {
                object
                    .get(*f)
                    .and_then(i18n::value_text)
                    .is_some_and(|s| !s.is_empty())
            })?;
        let name = LocalizedText::from_fields(object, name_field)?;

        let sowing_time = LocalizedText::from_fields(object, "sowing_time")
            .or_else(|| LocalizedText::from_fields(object, "sowing_or_planting_time"))
            .or_else(|| LocalizedText::from_fields(object, "crop.sowing_time"));

        let minimum_price = LocalizedText::from_fields(object, "msp_rupees_per_quintal").or_else(|| {
            LocalizedText::from_fields(object, "average_market_price_rupees_per_quintal")
        });

        let fertilizer_schedule = object
            .get("fertilizer_schedule")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|entry| FertilizerStep {
                        stage: LocalizedText::from_fields(entry, "stage"),
                        dosage: LocalizedText::from_fields(entry, "dosage_per_acre"),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let diseases = [("major_diseases", "disease_name"), ("major_pests", "pest_name")]
            .into_iter()
            .flat_map(|(list, field)| {
                object
                    .get(list)
                    .and_then(Value::as_array)
                    .into_iter()
                    .flatten()
                    .filter_map(Value::as_object)
                    .filter_map(move |entry| LocalizedText::from_fields(entry, field))
                    .map(|name| PestEntry { name })
            })
            .collect();

        Some(Self {
            name,
            kind,
            season: LocalizedText::from_fields(object, "season"),
            sowing_time,
            harvesting_time: LocalizedText::from_fields(object, "harvesting_time"),
            expected_yield: LocalizedText::from_fields(object, "expected_yield_per_acre_quintals"),
            minimum_price,
            fertilizer_schedule,
            diseases,
        })
    }

    /// Fill in the season when the source omitted it.
    pub fn with_default_season(mut self, season: Option<&str>) -> Self {
        if self.season.as_ref().is_none_or(|s| s.base.is_empty()) {
            if let Some(season) = season {
                self.season = Some(LocalizedText::new(season));
            }
        }
        self
    }

    /// Trimmed base name, as shown in lists before localization.
    pub fn display_name(&self) -> &str {
        self.name.base.trim()
    }

    /// Localized display name.
    pub fn localized_name(&self, language: Language) -> String {
        self.name.get(language).trim().to_string()
    }

    /// Dedup key: lowercase trimmed base name.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name.base)
    }
}

/// Lowercase, trimmed form used for name comparisons.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn standard_record_normalizes() {
        let raw = json!({
            "name": " Wheat ",
            "name_hi": "गेहूं",
            "season": "Rabi",
            "sowing_time": "November",
            "harvesting_time": "March to April",
            "expected_yield_per_acre_quintals": 20,
            "msp_rupees_per_quintal": "2425",
            "fertilizer_schedule": [
                {"stage": "Basal", "dosage_per_acre": "50 kg DAP"},
                {"stage": "Tillering", "dosage_per_acre": "45 kg Urea", "dosage_per_acre_hi": "45 किग्रा यूरिया"}
            ],
            "major_diseases": [{"disease_name": "Rust"}, {"symptoms": "no name"}]
        });
        let record = CropRecord::from_value(&raw, CropKind::Standard).unwrap();

        assert_eq!(record.display_name(), "Wheat");
        assert_eq!(record.normalized_name(), "wheat");
        assert_eq!(record.localized_name(Language::Hindi), "गेहूं");
        assert_eq!(record.expected_yield.as_ref().unwrap().base, "20");
        assert_eq!(record.fertilizer_schedule.len(), 2);
        assert_eq!(
            record.fertilizer_schedule[1].dosage.as_ref().unwrap().get(Language::Hindi),
            "45 किग्रा यूरिया"
        );
        assert_eq!(record.diseases.len(), 1);
        assert_eq!(record.diseases[0].name.base, "Rust");
    }

    #[test]
    fn specialty_record_uses_crop_name_and_planting_time() {
        let raw = json!({
            "crop_name": "Mango",
            "sowing_or_planting_time": "July to August",
            "average_market_price_rupees_per_quintal": "4000",
            "major_diseases": [{"disease_name": "Powdery mildew"}],
            "major_pests": [{"pest_name": "Mango hopper"}]
        });
        let record = CropRecord::from_value(&raw, CropKind::Specialty).unwrap();

        assert_eq!(record.kind, CropKind::Specialty);
        assert_eq!(record.display_name(), "Mango");
        assert_eq!(record.sowing_time.as_ref().unwrap().base, "July to August");
        assert_eq!(record.minimum_price.as_ref().unwrap().base, "4000");
        let names: Vec<_> = record.diseases.iter().map(|d| d.name.base.as_str()).collect();
        assert_eq!(names, ["Powdery mildew", "Mango hopper"]);
    }

    #[test]
    fn name_field_falls_back_across_shapes() {
        let raw = json!({"crop_name": "Cotton"});
        let record = CropRecord::from_value(&raw, CropKind::Standard).unwrap();
        assert_eq!(record.display_name(), "Cotton");
    }

    #[test]
    fn records_without_name_are_rejected() {
        assert!(CropRecord::from_value(&json!({"season": "Kharif"}), CropKind::Standard).is_none());
        assert!(CropRecord::from_value(&json!({"name": "   "}), CropKind::Standard).is_none());
        assert!(CropRecord::from_value(&json!("Wheat"), CropKind::Standard).is_none());
    }

    #[test]
    fn legacy_dotted_sowing_key_is_accepted() {
        let raw = json!({"name": "Gram", "crop.sowing_time": "October"});
        let record = CropRecord::from_value(&raw, CropKind::Standard).unwrap();
        assert_eq!(record.sowing_time.unwrap().base, "October");
    }

    #[test]
    fn default_season_only_fills_gaps() {
        let raw = json!({"name": "Rice"});
        let record = CropRecord::from_value(&raw, CropKind::Standard)
            .unwrap()
            .with_default_season(Some("Kharif"));
        assert_eq!(record.season.unwrap().base, "Kharif");

        let raw = json!({"name": "Maize", "season": "Zaid"});
        let record = CropRecord::from_value(&raw, CropKind::Standard)
            .unwrap()
            .with_default_season(Some("Kharif"));
        assert_eq!(record.season.unwrap().base, "Zaid");
    }

    #[test]
    fn serialized_record_drops_unmapped_source_fields() {
        let raw = json!({
            "name": "Rice",
            "_id": "64f0",
            "soil_notes": "clay loam with standing water",
            "season": "Kharif"
        });
        let record = CropRecord::from_value(&raw, CropKind::Standard).unwrap();
        let body = serde_json::to_string(&record).unwrap();
        assert!(!body.contains("64f0"), "{body}");
        assert!(!body.contains("clay loam"), "{body}");
        assert!(body.contains("Kharif"));
    }

    #[test]
    fn localized_text_translates_only_without_stored_variant() {
        let text = LocalizedText::new("June to July");
        assert_eq!(text.get(Language::English), "June to July");
        assert_eq!(text.get(Language::Hindi), "जून से जुलाई");

        let mut stored = LocalizedText::new("June to July");
        stored.overlay.insert(Language::Hindi, "जून-जुलाई".into());
        assert_eq!(stored.get(Language::Hindi), "जून-जुलाई");
    }
}

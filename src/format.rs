//! Text rendering for crop and scheme records.
//!
//! Output is plain, line-oriented text sized for SMS/WhatsApp. Chunking is
//! left to the channel codec.

use serde_json::{Map, Value};

use crate::catalog::{CropRecord, LocalizedText};
use crate::i18n::{self, Language};

/// Entries shown in the fertilizer and disease sections.
pub const SECTION_LIMIT: usize = 5;

const INDENT: &str = "  ";

/// Bookkeeping fields never shown to users.
const INTERNAL_KEYS: &[&str] = &["_id", "__v", "createdAt", "updatedAt", "created_at", "updated_at"];

/// Whether `text` carries no information.
fn is_no_data(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text.eq_ignore_ascii_case("n/a")
}

/// Localized text, or the "not available" marker.
fn text_or_unavailable(value: Option<&LocalizedText>, language: Language) -> String {
    value
        .map(|v| v.get(language).trim().to_string())
        .filter(|s| !is_no_data(s))
        .unwrap_or_else(|| i18n::t(language, "not_available"))
}

/// The fixed five-line crop header.
pub fn summary_block(record: &CropRecord, language: Language) -> String {
    [
        ("label_season", record.season.as_ref()),
        ("label_sowing", record.sowing_time.as_ref()),
        ("label_harvesting", record.harvesting_time.as_ref()),
        ("label_yield", record.expected_yield.as_ref()),
        ("label_min_price", record.minimum_price.as_ref()),
    ]
    .into_iter()
    .map(|(label, value)| {
        format!(
            "{}: {}",
            i18n::template(language, label),
            text_or_unavailable(value, language)
        )
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/// Numbered lines for the first few items, or a single "not available" line.
fn numbered(lines: Vec<String>, language: Language) -> String {
    if lines.is_empty() {
        return i18n::t(language, "not_available");
    }
    lines
        .into_iter()
        .take(SECTION_LIMIT)
        .enumerate()
        .map(|(i, line)| format!("{}. {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `index. stage: dosage` for the first entries of the fertilizer schedule.
pub fn fertilizer_section(record: &CropRecord, language: Language) -> String {
    let lines = record
        .fertilizer_schedule
        .iter()
        .map(|step| {
            format!(
                "{}: {}",
                text_or_unavailable(step.stage.as_ref(), language),
                text_or_unavailable(step.dosage.as_ref(), language)
            )
        })
        .collect();
    numbered(lines, language)
}

/// `index. name` for the first entries of the disease and pest list.
pub fn disease_section(record: &CropRecord, language: Language) -> String {
    let lines = record
        .diseases
        .iter()
        .map(|entry| text_or_unavailable(Some(&entry.name), language))
        .collect();
    numbered(lines, language)
}

/// Display title for a field key.
///
/// Known scheme fields have curated, translated titles; anything else is
/// converted from `snake_case` to Title Case.
pub fn title_for(key: &str, language: Language) -> String {
    let curated = format!("field_{key}");
    let title = i18n::template(language, &curated);
    if title != curated {
        return title.to_string();
    }
    key.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render every visible field of `record`, descending into nested values.
pub fn full_dump(record: &Map<String, Value>, language: Language) -> String {
    let mut lines = Vec::new();
    dump_object(record, language, 0, &mut lines);
    lines.join("\n")
}

fn dump_object(object: &Map<String, Value>, language: Language, depth: usize, out: &mut Vec<String>) {
    let pad = INDENT.repeat(depth);
    for (key, value) in object {
        if i18n::is_localized_key(key) || INTERNAL_KEYS.contains(&key.as_str()) {
            continue;
        }
        let title = title_for(key, language);
        match value {
            Value::Object(nested) => {
                out.push(format!("{pad}{title}:"));
                dump_object(nested, language, depth + 1, out);
            }
            Value::Array(items) if items.iter().any(|v| v.is_object() || v.is_array()) => {
                out.push(format!("{pad}{title}:"));
                dump_list(items, language, depth + 1, out);
            }
            _ => {
                let text = text_or_unavailable(LocalizedText::from_fields(object, key).as_ref(), language);
                out.push(format!("{pad}{title}: {text}"));
            }
        }
    }
}

fn dump_list(items: &[Value], language: Language, depth: usize, out: &mut Vec<String>) {
    let pad = INDENT.repeat(depth);
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::Object(nested) => {
                let index = (i + 1).to_string();
                out.push(format!(
                    "{pad}- {}",
                    i18n::resolve(language, "field_item", &[("index", index.as_str())])
                ));
                dump_object(nested, language, depth + 1, out);
            }
            Value::Array(inner) => dump_list(inner, language, depth + 1, out),
            scalar => {
                let text = i18n::value_text(scalar)
                    .filter(|s| !is_no_data(s))
                    .unwrap_or_else(|| i18n::t(language, "not_available"));
                out.push(format!("{pad}- {text}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CropKind;
    use serde_json::json;

    fn wheat() -> CropRecord {
        CropRecord::from_value(
            &json!({
                "name": "Wheat",
                "season": "Rabi",
                "sowing_time": "November",
                "harvesting_time": "N/A",
                "expected_yield_per_acre_quintals": 18,
                "fertilizer_schedule": [
                    {"stage": "Basal", "dosage_per_acre": "50 kg DAP"},
                    {"stage": "21 days after sowing", "dosage_per_acre": "40 kg Urea"},
                    {"stage": "Tillering"}
                ],
                "major_diseases": [{"disease_name": "Rust"}],
                "major_pests": [{"pest_name": "Aphid"}]
            }),
            CropKind::Standard,
        )
        .unwrap()
    }

    #[test]
    fn summary_has_five_lines_with_fallbacks() {
        let text = summary_block(&wheat(), Language::English);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Season: Rabi",
                "Sowing/Planting: November",
                "Harvesting: Not available",
                "Expected yield (quintals/acre): 18",
                "Minimum price (₹/quintal): Not available",
            ]
        );
    }

    #[test]
    fn summary_translates_stored_english_values() {
        let text = summary_block(&wheat(), Language::Hindi);
        assert!(text.contains("नवंबर"), "{text}");
        assert!(text.contains(&i18n::t(Language::Hindi, "not_available")));
    }

    #[test]
    fn fertilizer_lines_are_numbered() {
        let text = fertilizer_section(&wheat(), Language::English);
        assert_eq!(
            text,
            "1. Basal: 50 kg DAP\n2. 21 days after sowing: 40 kg Urea\n3. Tillering: Not available"
        );
    }

    #[test]
    fn sections_cap_at_five_entries() {
        let diseases: Vec<Value> = (1..=8).map(|i| json!({"disease_name": format!("D{i}")})).collect();
        let record = CropRecord::from_value(
            &json!({"crop_name": "Banana", "major_diseases": diseases}),
            CropKind::Specialty,
        )
        .unwrap();

        let text = disease_section(&record, Language::English);
        assert_eq!(text.lines().count(), SECTION_LIMIT);
        assert!(text.ends_with("5. D5"));
    }

    #[test]
    fn empty_sections_say_not_available() {
        let record = CropRecord::from_value(&json!({"name": "Moong"}), CropKind::Standard).unwrap();
        assert_eq!(fertilizer_section(&record, Language::English), "Not available");
        assert_eq!(disease_section(&record, Language::Marathi), i18n::t(Language::Marathi, "not_available"));
        assert_eq!(
            disease_section(&wheat(), Language::English),
            "1. Rust\n2. Aphid"
        );
    }

    #[test]
    fn titles() {
        assert_eq!(title_for("how_to_apply", Language::English), "How to Apply");
        assert_eq!(title_for("msp_rupees_per_quintal", Language::English), "Msp Rupees Per Quintal");
        assert_eq!(title_for("website", Language::Hindi), i18n::t(Language::Hindi, "field_website"));
    }

    #[test]
    fn full_dump_nests_and_localizes() {
        let record = json!({
            "_id": "64f0",
            "name": "Crop Insurance",
            "name_hi": "फसल बीमा",
            "helpline": "",
            "documents_required": ["Aadhaar card", "Land records"],
            "premium_rates": [
                {"crop_type": "Kharif", "farmer_share": "2%"},
                {"crop_type": "Rabi", "farmer_share": "1.5%"}
            ],
            "contact": {"office": "District agriculture office"}
        });
        let map = record.as_object().unwrap();

        let english = full_dump(map, Language::English);
        assert_eq!(
            english,
            [
                "Scheme: Crop Insurance",
                "Helpline: Not available",
                "Documents Required: Aadhaar card, Land records",
                "Premium Rates:",
                "  - Item 1",
                "    Crop Type: Kharif",
                "    Farmer Share: 2%",
                "  - Item 2",
                "    Crop Type: Rabi",
                "    Farmer Share: 1.5%",
                "Contact:",
                "  Office: District agriculture office",
            ]
            .join("\n")
        );

        let hindi = full_dump(map, Language::Hindi);
        assert!(hindi.contains("फसल बीमा"));
        assert!(!hindi.contains("64f0"));
    }
}

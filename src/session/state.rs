//! Per-sender conversation state.

use serde::{Deserialize, Serialize};

use crate::catalog::{CropCategory, CropRecord};
use crate::i18n::Language;
use crate::schemes::{SchemeKind, SchemeRecord};

/// Where a conversation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "kind", rename_all = "snake_case")]
pub enum DialogStep {
    /// Waiting for a language-selector token.
    ChoosingLanguage,
    MainMenu,
    CropMenu,
    /// A numbered list of crops in one category.
    CategoryList(CropCategory),
    AwaitingCropNameSearch,
    /// A crop has been selected; waiting for fertilizer/disease choice.
    CropInfoMenu,
    FertilizerView,
    DiseaseView,
    /// A numbered list of scheme records.
    ModuleList(SchemeKind),
    ModuleDetail(SchemeKind),
}

impl Default for DialogStep {
    fn default() -> Self {
        Self::ChoosingLanguage
    }
}

impl std::fmt::Display for DialogStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChoosingLanguage => write!(f, "choosing_language"),
            Self::MainMenu => write!(f, "main_menu"),
            Self::CropMenu => write!(f, "crop_menu"),
            Self::CategoryList(category) => write!(f, "{category}_list"),
            Self::AwaitingCropNameSearch => write!(f, "awaiting_crop_name_search"),
            Self::CropInfoMenu => write!(f, "crop_info_menu"),
            Self::FertilizerView => write!(f, "fertilizer_view"),
            Self::DiseaseView => write!(f, "disease_view"),
            Self::ModuleList(kind) => write!(f, "module_list({kind})"),
            Self::ModuleDetail(kind) => write!(f, "module_detail({kind})"),
        }
    }
}

/// The record a conversation is drilling into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectedRecord {
    Crop(CropRecord),
    Scheme(SchemeRecord),
}

/// One numbered entry of the last rendered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionOption {
    pub display_name: String,
    pub record: SelectedRecord,
}

/// Conversation state for one sender.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unset until the sender answers the language gate.
    pub language: Option<Language>,
    #[serde(default)]
    pub step: DialogStep,
    #[serde(default)]
    pub selection_options: Vec<SelectionOption>,
    #[serde(default)]
    pub selected_record: Option<SelectedRecord>,
    #[serde(default)]
    pub selected_record_name: Option<String>,
}

impl Session {
    /// The confirmed language, or English before one is chosen.
    pub fn language(&self) -> Language {
        self.language.unwrap_or_default()
    }

    /// Move to a list step, replacing any previous options.
    pub fn show_list(&mut self, step: DialogStep, options: Vec<SelectionOption>) {
        self.step = step;
        self.selection_options = options;
    }

    /// Resolve a 1-based numeric reply against the current options.
    pub fn option_at(&self, reply: &str) -> Option<&SelectionOption> {
        let index: usize = reply.trim().parse().ok()?;
        index
            .checked_sub(1)
            .and_then(|i| self.selection_options.get(i))
    }

    /// Store the chosen record and clear the list it came from.
    pub fn select(&mut self, option: SelectionOption, step: DialogStep) {
        self.selected_record_name = Some(option.display_name);
        self.selected_record = Some(option.record);
        self.selection_options.clear();
        self.step = step;
    }

    /// The selected crop, if the selection is a crop.
    pub fn selected_crop(&self) -> Option<&CropRecord> {
        match &self.selected_record {
            Some(SelectedRecord::Crop(crop)) => Some(crop),
            _ => None,
        }
    }

    /// Return to the main menu, dropping any list or selection.
    pub fn reset_to_main_menu(&mut self) {
        self.step = DialogStep::MainMenu;
        self.selection_options.clear();
        self.selected_record = None;
        self.selected_record_name = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CropKind;
    use serde_json::json;

    fn crop(name: &str) -> SelectedRecord {
        let record = CropRecord::from_value(&json!({"name": name}), CropKind::Standard).unwrap();
        SelectedRecord::Crop(record)
    }

    fn session_with_list() -> Session {
        let mut session = Session {
            language: Some(Language::English),
            ..Session::default()
        };
        session.show_list(
            DialogStep::CategoryList(CropCategory::Rabi),
            vec![
                SelectionOption { display_name: "Wheat".into(), record: crop("Wheat") },
                SelectionOption { display_name: "Gram".into(), record: crop("Gram") },
            ],
        );
        session
    }

    #[test]
    fn default_session_starts_at_language_gate() {
        let session = Session::default();
        assert_eq!(session.step, DialogStep::ChoosingLanguage);
        assert!(session.language.is_none());
    }

    #[test]
    fn option_at_is_one_based() {
        let session = session_with_list();
        assert_eq!(session.option_at("1").unwrap().display_name, "Wheat");
        assert_eq!(session.option_at(" 2 ").unwrap().display_name, "Gram");
        assert!(session.option_at("0").is_none());
        assert!(session.option_at("3").is_none());
        assert!(session.option_at("two").is_none());
    }

    #[test]
    fn select_clears_options() {
        let mut session = session_with_list();
        let option = session.option_at("2").cloned().unwrap();
        session.select(option, DialogStep::CropInfoMenu);

        assert_eq!(session.step, DialogStep::CropInfoMenu);
        assert!(session.selection_options.is_empty());
        assert_eq!(session.selected_record_name.as_deref(), Some("Gram"));
        assert_eq!(session.selected_crop().unwrap().display_name(), "Gram");
        assert!(session.selected_record_name.is_some());
    }

    #[test]
    fn step_display_names() {
        assert_eq!(DialogStep::CategoryList(CropCategory::Kharif).to_string(), "kharif_list");
        assert_eq!(DialogStep::ModuleList(SchemeKind::Loan).to_string(), "module_list(loan)");
        assert_eq!(DialogStep::ChoosingLanguage.to_string(), "choosing_language");
    }

    #[test]
    fn session_survives_json() {
        let session = session_with_list();
        let body = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&body).unwrap();
        assert_eq!(back, session);
    }
}

//! The dialog state machine.
//!
//! One call to [`DialogEngine::handle`] processes one inbound message: it
//! loads the sender's session, applies the transition for the current step,
//! writes the session back (or deletes it on exit) and returns the reply
//! text. It never fails; data-layer errors become the generic error reply.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::menus;
use crate::catalog::{Catalog, CropCategory};
use crate::error::CatalogError;
use crate::i18n::Language;
use crate::schemes::SchemeKind;
use crate::session::{DialogStep, SelectedRecord, SelectionOption, Session, SessionStore};

/// Ends the conversation from any step past the language gate.
pub const EXIT_COMMAND: &str = "0";

/// Reset to the main menu from any step past the language gate.
const MENU_COMMANDS: &[&str] = &["menu", "hi", "hello", "start", "help"];

/// Crop-menu token for the name search.
const SEARCH_TOKEN: &str = "5";

/// Reply produced for one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogReply {
    pub text: String,
    /// The session was deleted by the exit command.
    pub session_closed: bool,
}

impl DialogReply {
    fn open(text: String) -> Self {
        Self {
            text,
            session_closed: false,
        }
    }
}

fn is_menu_command(input: &str) -> bool {
    input.is_empty() || MENU_COMMANDS.iter().any(|c| input.eq_ignore_ascii_case(c))
}

fn crop_options(entries: Vec<crate::catalog::CatalogEntry>) -> Vec<SelectionOption> {
    entries
        .into_iter()
        .map(|entry| SelectionOption {
            display_name: entry.display_name,
            record: SelectedRecord::Crop(entry.record),
        })
        .collect()
}

fn scheme_options(kind: SchemeKind) -> Vec<SelectionOption> {
    kind.records()
        .iter()
        .map(|record| SelectionOption {
            display_name: record.display_name(),
            record: SelectedRecord::Scheme(record.clone()),
        })
        .collect()
}

pub struct DialogEngine {
    catalog: Arc<Catalog>,
    sessions: Arc<dyn SessionStore>,
}

impl DialogEngine {
    pub fn new(catalog: Arc<Catalog>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { catalog, sessions }
    }

    /// Process one message from `sender`.
    pub async fn handle(&self, sender: &str, input: &str) -> DialogReply {
        let input = input.trim();

        let mut session = match self.sessions.get(sender).await {
            Ok(session) => session,
            Err(e) => {
                error!(sender = %sender, error = %e, "Failed to load session");
                return DialogReply::open(menus::generic_error(Language::default()));
            }
        };

        if session.language.is_none() {
            let text = Self::language_gate(&mut session, input);
            return DialogReply::open(self.persist(sender, &session, text).await);
        }

        let language = session.language();

        if input == EXIT_COMMAND {
            if let Err(e) = self.sessions.delete(sender).await {
                error!(sender = %sender, error = %e, "Failed to delete session");
            }
            info!(sender = %sender, "Session closed");
            return DialogReply {
                text: menus::goodbye(language),
                session_closed: true,
            };
        }

        if is_menu_command(input) {
            session.reset_to_main_menu();
            let text = menus::main_menu(language);
            return DialogReply::open(self.persist(sender, &session, text).await);
        }

        let snapshot = session.clone();
        let from = session.step;
        let text = match self.transition(&mut session, input, language).await {
            Ok(text) => text,
            Err(e) => {
                error!(sender = %sender, step = %from, error = %e, "Data error during dialog");
                session = snapshot;
                menus::generic_error(language)
            }
        };
        debug!(sender = %sender, from = %from, to = %session.step, "Dialog transition");

        DialogReply::open(self.persist(sender, &session, text).await)
    }

    /// Store `session` and return `text`, or the generic error if the write fails.
    async fn persist(&self, sender: &str, session: &Session, text: String) -> String {
        match self.sessions.set(sender, session).await {
            Ok(()) => text,
            Err(e) => {
                error!(sender = %sender, error = %e, "Failed to save session");
                menus::generic_error(session.language())
            }
        }
    }

    /// Language selection. Only selector tokens leave the gate.
    fn language_gate(session: &mut Session, input: &str) -> String {
        match Language::from_selector(input) {
            Some(language) => {
                session.language = Some(language);
                session.reset_to_main_menu();
                menus::main_menu(language)
            }
            None => {
                session.step = DialogStep::ChoosingLanguage;
                menus::language_prompt()
            }
        }
    }

    async fn transition(
        &self,
        session: &mut Session,
        input: &str,
        language: Language,
    ) -> Result<String, CatalogError> {
        let text = match session.step {
            DialogStep::ChoosingLanguage => Self::recover(session, language),

            DialogStep::MainMenu => {
                if input == "1" {
                    session.step = DialogStep::CropMenu;
                    menus::crop_menu(language)
                } else if let Some(kind) = SchemeKind::from_menu_token(input) {
                    let options = scheme_options(kind);
                    if options.is_empty() {
                        menus::empty_module(language)
                    } else {
                        let text = menus::module_list(kind, &options, language);
                        session.show_list(DialogStep::ModuleList(kind), options);
                        text
                    }
                } else {
                    menus::invalid_option(language, menus::main_menu(language))
                }
            }

            DialogStep::CropMenu => {
                if let Some(category) = CropCategory::from_menu_token(input) {
                    self.open_category(session, category, language).await?
                } else if input == SEARCH_TOKEN {
                    session.step = DialogStep::AwaitingCropNameSearch;
                    menus::search_prompt(language)
                } else {
                    menus::invalid_option(language, menus::crop_menu(language))
                }
            }

            DialogStep::CategoryList(_) | DialogStep::ModuleList(_) => {
                Self::choose_from_list(session, input, language)
            }

            DialogStep::AwaitingCropNameSearch => match self.catalog.find_by_exact_name(input).await? {
                Some(found) => {
                    debug!(name = %found.heading, origin = ?found.origin, "Crop found by name");
                    let text = menus::crop_info(&found.record, language);
                    session.select(
                        SelectionOption {
                            display_name: found.heading,
                            record: SelectedRecord::Crop(found.record),
                        },
                        DialogStep::CropInfoMenu,
                    );
                    text
                }
                None => {
                    session.reset_to_main_menu();
                    menus::crop_not_found(input, language)
                }
            },

            DialogStep::CropInfoMenu => {
                let Some(crop) = session.selected_crop() else {
                    return Ok(Self::recover(session, language));
                };
                match input {
                    "1" => {
                        let text = menus::fertilizer_view(crop, language);
                        session.step = DialogStep::FertilizerView;
                        text
                    }
                    "2" => {
                        let text = menus::disease_view(crop, language);
                        session.step = DialogStep::DiseaseView;
                        text
                    }
                    _ => {
                        session.reset_to_main_menu();
                        menus::main_menu(language)
                    }
                }
            }

            DialogStep::FertilizerView | DialogStep::DiseaseView => {
                let Some(crop) = session.selected_crop() else {
                    return Ok(Self::recover(session, language));
                };
                if input == "1" {
                    let text = menus::crop_info(crop, language);
                    session.step = DialogStep::CropInfoMenu;
                    text
                } else {
                    session.reset_to_main_menu();
                    menus::main_menu(language)
                }
            }

            DialogStep::ModuleDetail(kind) => {
                let options = scheme_options(kind);
                if input == "1" && !options.is_empty() {
                    let text = menus::module_list(kind, &options, language);
                    session.selected_record = None;
                    session.selected_record_name = None;
                    session.show_list(DialogStep::ModuleList(kind), options);
                    text
                } else {
                    session.reset_to_main_menu();
                    menus::main_menu(language)
                }
            }
        };
        Ok(text)
    }

    async fn open_category(
        &self,
        session: &mut Session,
        category: CropCategory,
        language: Language,
    ) -> Result<String, CatalogError> {
        let options = crop_options(self.catalog.list_by_category(category).await?);
        if options.is_empty() {
            return Ok(menus::empty_category(category, language));
        }
        let text = menus::category_list(category, &options, language);
        session.show_list(DialogStep::CategoryList(category), options);
        Ok(text)
    }

    /// Resolve a numeric reply in a list step.
    fn choose_from_list(session: &mut Session, input: &str, language: Language) -> String {
        if session.selection_options.is_empty() {
            return Self::recover(session, language);
        }

        let Some(option) = session.option_at(input).cloned() else {
            let list = match session.step {
                DialogStep::CategoryList(category) => {
                    menus::category_list(category, &session.selection_options, language)
                }
                DialogStep::ModuleList(kind) => {
                    menus::module_list(kind, &session.selection_options, language)
                }
                _ => return Self::recover(session, language),
            };
            return menus::invalid_selection(list, language);
        };

        let (text, next) = match (&option.record, session.step) {
            (SelectedRecord::Crop(crop), DialogStep::CategoryList(_)) => {
                (menus::crop_info(crop, language), DialogStep::CropInfoMenu)
            }
            (SelectedRecord::Scheme(scheme), DialogStep::ModuleList(kind)) => {
                (menus::module_detail(scheme, language), DialogStep::ModuleDetail(kind))
            }
            _ => return Self::recover(session, language),
        };
        session.select(option, next);
        text
    }

    /// The session lacks context its step requires; start over at the main menu.
    fn recover(session: &mut Session, language: Language) -> String {
        warn!(step = %session.step, "Session missing context, resetting to main menu");
        session.reset_to_main_menu();
        menus::main_menu(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DatasetSource;
    use crate::error::DatabaseError;
    use crate::i18n;
    use crate::session::InMemorySessionStore;
    use crate::store::{DocumentStore, MemoryDocumentStore};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    const SENDER: &str = "+919876543210";

    struct Harness {
        _dir: tempfile::TempDir,
        engine: DialogEngine,
        sessions: Arc<InMemorySessionStore>,
    }

    impl Harness {
        async fn send(&self, input: &str) -> DialogReply {
            self.engine.handle(SENDER, input).await
        }

        async fn session(&self) -> Session {
            self.sessions.get(SENDER).await.unwrap()
        }

        /// Fresh sender, language prompt shown, English chosen.
        async fn in_main_menu(self) -> Self {
            self.send("hello").await;
            self.send("1").await;
            self
        }
    }

    async fn harness_with_store(store: Arc<dyn DocumentStore>) -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let kharif: Vec<Value> = ["Rice", "Maize", "Bajra", "Jowar", "Soybean"]
            .iter()
            .map(|name| {
                json!({
                    "name": name,
                    "sowing_time": "June to July",
                    "fertilizer_schedule": [{"stage": "Basal", "dosage_per_acre": "50 kg DAP"}],
                    "major_diseases": [{"disease_name": "Blast"}]
                })
            })
            .collect();
        std::fs::write(dir.path().join("kharifData.json"), Value::from(kharif).to_string()).unwrap();

        let catalog = Arc::new(Catalog::new(dir.path(), store));
        let sessions = InMemorySessionStore::new(None);
        Harness {
            _dir: dir,
            engine: DialogEngine::new(catalog, sessions.clone()),
            sessions,
        }
    }

    async fn harness() -> Harness {
        harness_with_store(Arc::new(MemoryDocumentStore::new())).await
    }

    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn find_all(&self, _: &str) -> Result<Vec<Value>, DatabaseError> {
            Err(DatabaseError::Query("unavailable".into()))
        }
        async fn find_by_field(&self, _: &str, _: &str, _: &str) -> Result<Option<Value>, DatabaseError> {
            Err(DatabaseError::Query("unavailable".into()))
        }
        async fn upsert_by_key(&self, _: &str, _: &str, _: &Value) -> Result<(), DatabaseError> {
            Err(DatabaseError::Query("unavailable".into()))
        }
    }

    #[tokio::test]
    async fn fresh_sender_gets_language_prompt_for_non_selector() {
        let h = harness().await;
        let reply = h.send("5").await;
        assert_eq!(reply.text, menus::language_prompt());
        assert_eq!(h.session().await.step, DialogStep::ChoosingLanguage);
        assert!(h.session().await.language.is_none());
    }

    #[tokio::test]
    async fn first_contact_selector_picks_language() {
        let h = harness().await;
        let reply = h.send("1").await;
        assert_eq!(reply.text, menus::main_menu(Language::English));
        let session = h.session().await;
        assert_eq!(session.step, DialogStep::MainMenu);
        assert_eq!(session.language, Some(Language::English));

        let reply = h.engine.handle("+910000000000", "lang_mr").await;
        assert_eq!(reply.text, i18n::t(Language::Marathi, "main_menu"));
    }

    #[tokio::test]
    async fn gate_rejects_everything_but_selectors() {
        let h = harness().await;
        h.send("").await;
        for input in ["menu", "0", "4", "hello", "English"] {
            let reply = h.send(input).await;
            assert_eq!(reply.text, menus::language_prompt(), "input {input:?}");
            assert!(!reply.session_closed);
            let session = h.session().await;
            assert_eq!(session.step, DialogStep::ChoosingLanguage);
            assert!(session.language.is_none());
        }
    }

    #[tokio::test]
    async fn selecting_default_language_shows_main_menu() {
        let h = harness().await;
        h.send("hi").await;
        let reply = h.send("1").await;
        assert_eq!(reply.text, menus::main_menu(Language::English));
        let session = h.session().await;
        assert_eq!(session.step, DialogStep::MainMenu);
        assert_eq!(session.language, Some(Language::English));
    }

    #[tokio::test]
    async fn hindi_selection_localizes_menus() {
        let h = harness().await;
        h.send("hi").await;
        let reply = h.send("2").await;
        assert_eq!(reply.text, i18n::t(Language::Hindi, "main_menu"));
    }

    #[tokio::test]
    async fn main_menu_one_opens_crop_menu() {
        let h = harness().await.in_main_menu().await;
        let reply = h.send("1").await;
        assert_eq!(reply.text, menus::crop_menu(Language::English));
        assert_eq!(h.session().await.step, DialogStep::CropMenu);
    }

    #[tokio::test]
    async fn out_of_range_selection_keeps_list() {
        let h = harness().await.in_main_menu().await;
        h.send("1").await;
        let list = h.send("1").await;
        assert!(list.text.contains("5. Soybean"));

        let reply = h.send("9").await;
        assert!(reply.text.starts_with(&i18n::t(Language::English, "invalid_selection")));
        let session = h.session().await;
        assert_eq!(session.step, DialogStep::CategoryList(CropCategory::Kharif));
        assert_eq!(session.selection_options.len(), 5);
        assert!(session.selected_record.is_none());

        let reply = h.send("abc").await;
        assert!(reply.text.starts_with(&i18n::t(Language::English, "invalid_selection")));
    }

    #[tokio::test]
    async fn drill_into_crop_views_and_back() {
        let h = harness().await.in_main_menu().await;
        h.send("1").await;
        h.send("1").await;

        let info = h.send("2").await;
        assert!(info.text.starts_with("Crop: Maize"));
        let session = h.session().await;
        assert_eq!(session.step, DialogStep::CropInfoMenu);
        assert_eq!(session.selected_record_name.as_deref(), Some("Maize"));
        assert!(session.selection_options.is_empty());

        let fertilizer = h.send("1").await;
        assert!(fertilizer.text.contains("1. Basal: 50 kg DAP"));
        assert_eq!(h.session().await.step, DialogStep::FertilizerView);

        h.send("1").await;
        assert_eq!(h.session().await.step, DialogStep::CropInfoMenu);

        let diseases = h.send("2").await;
        assert!(diseases.text.contains("1. Blast"));

        let back = h.send("x").await;
        assert_eq!(back.text, menus::main_menu(Language::English));
        assert_eq!(h.session().await.step, DialogStep::MainMenu);
    }

    #[tokio::test]
    async fn crop_info_other_input_returns_to_main_menu() {
        let h = harness().await.in_main_menu().await;
        h.send("1").await;
        h.send("1").await;
        h.send("1").await;
        let reply = h.send("7").await;
        assert_eq!(reply.text, menus::main_menu(Language::English));
        assert!(h.session().await.selected_record.is_none());
    }

    #[tokio::test]
    async fn unknown_crop_search_returns_to_main_menu() {
        let h = harness().await.in_main_menu().await;
        h.send("1").await;
        assert_eq!(h.send("5").await.text, menus::search_prompt(Language::English));

        let reply = h.send("Unobtainium").await;
        assert_eq!(reply.text, "Crop \"Unobtainium\" not found.\nReply menu for main menu.");
        assert_eq!(h.session().await.step, DialogStep::MainMenu);
    }

    #[tokio::test]
    async fn search_hit_opens_crop_info() {
        let h = harness().await.in_main_menu().await;
        h.send("1").await;
        h.send("5").await;
        let reply = h.send("  jowar ").await;
        assert!(reply.text.starts_with("Crop: Jowar"));
        assert_eq!(h.session().await.step, DialogStep::CropInfoMenu);
    }

    #[tokio::test]
    async fn exit_deletes_session_and_next_message_hits_gate() {
        let h = harness().await.in_main_menu().await;
        h.send("1").await;

        let reply = h.send("0").await;
        assert!(reply.session_closed);
        assert_eq!(reply.text, menus::goodbye(Language::English));
        assert!(h.sessions.is_empty().await);

        let reply = h.send("hello").await;
        assert_eq!(reply.text, menus::language_prompt());
        let session = h.session().await;
        assert_eq!(session.step, DialogStep::ChoosingLanguage);
        assert!(session.language.is_none());
    }

    #[tokio::test]
    async fn exit_works_from_every_step() {
        let paths: &[(&[&str], DialogStep)] = &[
            (&[], DialogStep::MainMenu),
            (&["1"], DialogStep::CropMenu),
            (&["1", "1"], DialogStep::CategoryList(CropCategory::Kharif)),
            (&["1", "5"], DialogStep::AwaitingCropNameSearch),
            (&["1", "1", "1"], DialogStep::CropInfoMenu),
            (&["1", "1", "1", "1"], DialogStep::FertilizerView),
            (&["1", "1", "1", "2"], DialogStep::DiseaseView),
            (&["2"], DialogStep::ModuleList(SchemeKind::Msp)),
            (&["2", "1"], DialogStep::ModuleDetail(SchemeKind::Msp)),
        ];

        let h = harness().await;
        for (inputs, expected) in paths {
            h.send("hello").await;
            h.send("1").await;
            for input in *inputs {
                h.send(input).await;
            }
            assert_eq!(h.session().await.step, *expected);

            let reply = h.send("0").await;
            assert!(reply.session_closed, "exit from {expected}");
            assert!(h.sessions.is_empty().await, "session kept after exit from {expected}");

            let reply = h.send("menu").await;
            assert_eq!(reply.text, menus::language_prompt(), "after exit from {expected}");
        }
    }

    #[tokio::test]
    async fn universal_commands_reset_from_any_step() {
        let h = harness().await.in_main_menu().await;
        h.send("1").await;
        h.send("1").await;
        for input in ["MENU", "Help", "start", ""] {
            let reply = h.send(input).await;
            assert_eq!(reply.text, menus::main_menu(Language::English));
            let session = h.session().await;
            assert_eq!(session.step, DialogStep::MainMenu);
            assert!(session.selection_options.is_empty());
            h.send("1").await;
            h.send("1").await;
        }
    }

    #[tokio::test]
    async fn unrecognized_menu_input_rerenders_menu() {
        let h = harness().await.in_main_menu().await;
        let reply = h.send("banana").await;
        assert_eq!(
            reply.text,
            menus::invalid_option(Language::English, menus::main_menu(Language::English))
        );
        assert_eq!(h.session().await.step, DialogStep::MainMenu);

        h.send("1").await;
        let reply = h.send("9").await;
        assert!(reply.text.ends_with(&menus::crop_menu(Language::English)));
        assert_eq!(h.session().await.step, DialogStep::CropMenu);
    }

    #[tokio::test]
    async fn scheme_module_list_and_detail() {
        let h = harness().await.in_main_menu().await;
        let list = h.send("5").await;
        assert!(list.text.starts_with("Crop Insurance:"));
        assert_eq!(h.session().await.step, DialogStep::ModuleList(SchemeKind::Insurance));

        let detail = h.send("1").await;
        assert!(detail.text.contains("Premium Rates:"));
        assert!(detail.text.contains("- Item 1"));
        assert_eq!(h.session().await.step, DialogStep::ModuleDetail(SchemeKind::Insurance));

        h.send("1").await;
        let session = h.session().await;
        assert_eq!(session.step, DialogStep::ModuleList(SchemeKind::Insurance));
        assert!(session.selected_record.is_none());

        h.send("1").await;
        h.send("anything").await;
        assert_eq!(h.session().await.step, DialogStep::MainMenu);
    }

    #[tokio::test]
    async fn empty_category_stays_in_crop_menu() {
        let h = harness().await.in_main_menu().await;
        h.send("1").await;
        let reply = h.send("4").await;
        assert!(reply.text.starts_with("No crops found in Fruit category."));
        assert_eq!(h.session().await.step, DialogStep::CropMenu);
    }

    #[tokio::test]
    async fn store_failure_gives_generic_error_and_keeps_state() {
        let h = harness_with_store(Arc::new(FailingStore)).await.in_main_menu().await;
        h.send("1").await;

        let reply = h.send("3").await;
        assert_eq!(reply.text, menus::generic_error(Language::English));
        assert!(!reply.session_closed);
        assert_eq!(h.session().await.step, DialogStep::CropMenu);
    }

    #[tokio::test]
    async fn store_failure_during_search_keeps_search_step() {
        let h = harness_with_store(Arc::new(FailingStore)).await.in_main_menu().await;
        h.send("1").await;
        h.send("5").await;

        let reply = h.send("Cotton").await;
        assert_eq!(reply.text, menus::generic_error(Language::English));
        let session = h.session().await;
        assert_eq!(session.step, DialogStep::AwaitingCropNameSearch);
        assert!(session.selected_record.is_none());

        let reply = h.send("rice").await;
        assert!(reply.text.starts_with("Crop: Rice"));
    }

    #[tokio::test]
    async fn missing_selection_context_resets_to_main_menu() {
        let h = harness().await.in_main_menu().await;
        let mut session = h.session().await;
        session.step = DialogStep::FertilizerView;
        h.sessions.set(SENDER, &session).await.unwrap();

        let reply = h.send("1").await;
        assert_eq!(reply.text, menus::main_menu(Language::English));
        assert_eq!(h.session().await.step, DialogStep::MainMenu);
    }

    #[tokio::test]
    async fn explicit_dataset_sources_are_supported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(&path, r#"[{"crop_name": "Papaya"}]"#).unwrap();
        let catalog = Catalog::with_sources(
            vec![DatasetSource::from_path(CropCategory::Fruit, &path)],
            Arc::new(MemoryDocumentStore::new()),
        );
        let engine = DialogEngine::new(Arc::new(catalog), InMemorySessionStore::new(None));

        engine.handle("a", "hi").await;
        engine.handle("a", "1").await;
        engine.handle("a", "1").await;
        let reply = engine.handle("a", "4").await;
        assert!(reply.text.contains("1. Papaya"));
    }
}

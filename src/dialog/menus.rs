//! Reply texts for each dialog step.

use crate::catalog::{CropCategory, CropRecord};
use crate::format;
use crate::i18n::{self, Language};
use crate::schemes::{SchemeKind, SchemeRecord};
use crate::session::{SelectedRecord, SelectionOption};

/// Shown before any language is chosen. Identical in every table.
pub fn language_prompt() -> String {
    i18n::t(Language::English, "language_prompt")
}

pub fn main_menu(language: Language) -> String {
    i18n::t(language, "main_menu")
}

pub fn crop_menu(language: Language) -> String {
    i18n::t(language, "crop_menu")
}

pub fn search_prompt(language: Language) -> String {
    i18n::t(language, "search_prompt")
}

pub fn goodbye(language: Language) -> String {
    i18n::t(language, "goodbye")
}

pub fn generic_error(language: Language) -> String {
    i18n::t(language, "generic_error")
}

/// `message` followed by a blank line and `menu`.
pub fn with_menu(message: String, menu: String) -> String {
    format!("{message}\n\n{menu}")
}

pub fn invalid_option(language: Language, menu: String) -> String {
    with_menu(i18n::t(language, "invalid_option"), menu)
}

fn option_name(option: &SelectionOption, language: Language) -> String {
    match &option.record {
        SelectedRecord::Crop(crop) => crop.localized_name(language),
        SelectedRecord::Scheme(scheme) => scheme.localized_name(language),
    }
}

fn numbered_list(heading: String, options: &[SelectionOption], language: Language) -> String {
    let mut lines = vec![heading];
    lines.extend(
        options
            .iter()
            .enumerate()
            .map(|(i, option)| format!("{}. {}", i + 1, option_name(option, language))),
    );
    lines.push(String::new());
    lines.push(i18n::t(language, "list_footer"));
    lines.push(i18n::t(language, "nav_footer"));
    lines.join("\n")
}

fn category_label(category: CropCategory, language: Language) -> String {
    i18n::t(language, category.label_key())
}

pub fn category_list(category: CropCategory, options: &[SelectionOption], language: Language) -> String {
    let heading = i18n::resolve(
        language,
        "category_list_heading",
        &[("category", category_label(category, language).as_str())],
    );
    numbered_list(heading, options, language)
}

pub fn empty_category(category: CropCategory, language: Language) -> String {
    let message = i18n::resolve(
        language,
        "no_crops_in_category",
        &[("category", category_label(category, language).as_str())],
    );
    with_menu(message, crop_menu(language))
}

pub fn module_list(kind: SchemeKind, options: &[SelectionOption], language: Language) -> String {
    let heading = i18n::resolve(
        language,
        "module_list_heading",
        &[("module", i18n::template(language, kind.title_key()))],
    );
    numbered_list(heading, options, language)
}

pub fn empty_module(language: Language) -> String {
    with_menu(i18n::t(language, "no_module_records"), main_menu(language))
}

/// The list a numeric reply is resolved against, re-rendered after an
/// out-of-range or non-numeric reply.
pub fn invalid_selection(list: String, language: Language) -> String {
    with_menu(i18n::t(language, "invalid_selection"), list)
}

/// Crop heading, summary block and the fertilizer/disease prompt.
pub fn crop_info(crop: &CropRecord, language: Language) -> String {
    let heading = i18n::resolve(language, "crop_heading", &[("name", crop.localized_name(language).as_str())]);
    format!(
        "{heading}\n\n{}\n\n{}\n{}",
        format::summary_block(crop, language),
        i18n::t(language, "crop_info_prompt"),
        i18n::t(language, "nav_footer"),
    )
}

fn view(heading_key: &str, body: String, crop: &CropRecord, language: Language) -> String {
    let heading = i18n::resolve(language, heading_key, &[("name", crop.localized_name(language).as_str())]);
    format!(
        "{heading}\n{body}\n\n{}\n{}",
        i18n::t(language, "view_footer"),
        i18n::t(language, "nav_footer"),
    )
}

pub fn fertilizer_view(crop: &CropRecord, language: Language) -> String {
    view("fertilizer_heading", format::fertilizer_section(crop, language), crop, language)
}

pub fn disease_view(crop: &CropRecord, language: Language) -> String {
    view("disease_heading", format::disease_section(crop, language), crop, language)
}

pub fn module_detail(scheme: &SchemeRecord, language: Language) -> String {
    format!(
        "{}\n\n{}\n{}",
        format::full_dump(&scheme.fields, language),
        i18n::t(language, "module_detail_footer"),
        i18n::t(language, "nav_footer"),
    )
}

/// `Crop "<input>" not found.` plus the back-to-menu hint.
pub fn crop_not_found(input: &str, language: Language) -> String {
    format!(
        "{}\n{}",
        i18n::resolve(language, "crop_not_found", &[("name", input)]),
        i18n::t(language, "back_to_menu_hint"),
    )
}

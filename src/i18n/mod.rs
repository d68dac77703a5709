//! Localization: language selection, message tables, and field resolution.
//!
//! Every lookup falls back to English, then to the key itself, so a
//! missing translation degrades to readable text instead of an error.

pub mod phrases;
mod strings;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use phrases::translate_phrases;

/// Supported conversation languages. English is the default and fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Hindi,
    Marathi,
}

impl Language {
    /// All languages, in selector order.
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Marathi];

    /// Short code used as the field suffix for localized variants.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Marathi => "mr",
        }
    }

    /// Parse a language code (`en`, `hi`, `mr`), tolerant of case and region tags.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::English),
            "hi" => Some(Self::Hindi),
            "mr" => Some(Self::Marathi),
            _ => None,
        }
    }

    /// Map a language-gate reply to a language: a menu number (`1`, `2`,
    /// `3`) or a WhatsApp button id (`lang_en`, `lang_hi`, `lang_mr`).
    pub fn from_selector(token: &str) -> Option<Self> {
        let token = token.trim();
        match token {
            "1" => Some(Self::English),
            "2" => Some(Self::Hindi),
            "3" => Some(Self::Marathi),
            _ => token.strip_prefix("lang_").and_then(Self::from_code),
        }
    }

    pub fn is_default(self) -> bool {
        self == Self::English
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

type Table = HashMap<&'static str, &'static str>;

fn tables() -> &'static HashMap<Language, Table> {
    static TABLES: OnceLock<HashMap<Language, Table>> = OnceLock::new();
    TABLES.get_or_init(|| {
        HashMap::from([
            (Language::English, strings::EN.iter().copied().collect()),
            (Language::Hindi, strings::HI.iter().copied().collect()),
            (Language::Marathi, strings::MR.iter().copied().collect()),
        ])
    })
}

/// Look up the raw template for `key`, falling back to English and then the key.
pub fn template(language: Language, key: &str) -> &str {
    let tables = tables();
    tables
        .get(&language)
        .and_then(|t| t.get(key))
        .or_else(|| tables.get(&Language::English).and_then(|t| t.get(key)))
        .copied()
        .unwrap_or(key)
}

/// Resolve `key` for `language` with no placeholders.
pub fn t(language: Language, key: &str) -> String {
    template(language, key).to_string()
}

/// Resolve `key` for `language`, substituting `{name}` placeholders.
///
/// Unknown placeholders are left as-is.
pub fn resolve(language: Language, key: &str, vars: &[(&str, &str)]) -> String {
    let mut message = template(language, key).to_string();
    for (name, value) in vars {
        message = message.replace(&format!("{{{name}}}"), value);
    }
    message
}

/// Render a scalar JSON value as display text.
///
/// Strings are trimmed, numbers and booleans are printed, string arrays are
/// joined with `", "`. Objects, nested arrays, and null yield `None`.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) if items.iter().all(|v| !v.is_object() && !v.is_array()) => Some(
            items
                .iter()
                .filter_map(value_text)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        _ => None,
    }
}

/// Resolve a record field for `language`.
///
/// Returns `record["{base}_{code}"]` when present and non-empty, otherwise
/// `record[base]`.
pub fn resolve_field(record: &Map<String, Value>, base: &str, language: Language) -> Option<String> {
    if !language.is_default() {
        let localized = record
            .get(&format!("{base}_{}", language.code()))
            .and_then(value_text)
            .filter(|s| !s.is_empty());
        if localized.is_some() {
            return localized;
        }
    }
    record.get(base).and_then(value_text)
}

/// True when `key` is a localized sibling (`*_hi`, `*_mr`) of a base field.
pub fn is_localized_key(key: &str) -> bool {
    Language::ALL
        .iter()
        .filter(|l| !l.is_default())
        .any(|l| key.ends_with(&format!("_{}", l.code())))
}

//! Best-effort phrase substitution for values stored only in English.
//!
//! This is a cosmetic layer, not a translator: it swaps a fixed list of
//! whole words and phrases (seasons, months, common agronomic terms) and
//! leaves everything else untouched. Values that carry a stored `_hi` or
//! `_mr` variant never pass through here.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::Language;

/// One language's substitutions.
struct Phrasebook {
    months: &'static [(&'static str, &'static str)],
    /// Replaces "to" between two months or two numbers.
    range_word: &'static str,
    words: &'static [(&'static str, &'static str)],
}

/// "May" is only translated inside a range, never on its own.
const AMBIGUOUS_MONTH: &str = "may";

static HINDI_BOOK: Phrasebook = Phrasebook {
    months: &[
        ("january", "जनवरी"),
        ("february", "फरवरी"),
        ("march", "मार्च"),
        ("april", "अप्रैल"),
        ("may", "मई"),
        ("june", "जून"),
        ("july", "जुलाई"),
        ("august", "अगस्त"),
        ("september", "सितंबर"),
        ("october", "अक्टूबर"),
        ("november", "नवंबर"),
        ("december", "दिसंबर"),
    ],
    range_word: "से",
    words: &[
        ("kharif", "खरीफ"),
        ("rabi", "रबी"),
        ("zaid", "जायद"),
        ("perennial", "बारहमासी"),
        ("annual", "वार्षिक"),
        ("days after sowing", "बुवाई के बाद दिन"),
        ("at sowing", "बुवाई के समय"),
        ("basal", "आधार खुराक"),
        ("top dressing", "टॉप ड्रेसिंग"),
        ("quintals", "क्विंटल"),
        ("per acre", "प्रति एकड़"),
        ("days", "दिन"),
    ],
};

static MARATHI_BOOK: Phrasebook = Phrasebook {
    months: &[
        ("january", "जानेवारी"),
        ("february", "फेब्रुवारी"),
        ("march", "मार्च"),
        ("april", "एप्रिल"),
        ("may", "मे"),
        ("june", "जून"),
        ("july", "जुलै"),
        ("august", "ऑगस्ट"),
        ("september", "सप्टेंबर"),
        ("october", "ऑक्टोबर"),
        ("november", "नोव्हेंबर"),
        ("december", "डिसेंबर"),
    ],
    range_word: "ते",
    words: &[
        ("kharif", "खरीप"),
        ("rabi", "रबी"),
        ("zaid", "उन्हाळी"),
        ("perennial", "बारमाही"),
        ("annual", "वार्षिक"),
        ("days after sowing", "पेरणीनंतर दिवस"),
        ("at sowing", "पेरणीच्या वेळी"),
        ("basal", "पायाभूत मात्रा"),
        ("top dressing", "वरखत"),
        ("quintals", "क्विंटल"),
        ("per acre", "प्रति एकर"),
        ("days", "दिवस"),
    ],
};

fn alternation<'a>(phrases: impl Iterator<Item = &'a str>) -> String {
    let mut phrases: Vec<&str> = phrases.collect();
    // Longest first so "days after sowing" wins over "days".
    phrases.sort_by_key(|p| std::cmp::Reverse(p.len()));
    phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|")
}

struct PhraseTable {
    /// `<month|number> to <month|number>`.
    range: Regex,
    range_word: &'static str,
    /// Whole words and phrases, months other than "may" included.
    pattern: Regex,
    replacements: HashMap<&'static str, &'static str>,
}

impl PhraseTable {
    fn build(book: &'static Phrasebook) -> Option<Self> {
        let months = alternation(book.months.iter().map(|(from, _)| *from));
        let bound = format!(r"(?:{months}|\d+(?:\.\d+)?)");
        let range = Regex::new(&format!(r"(?i)\b({bound})(\s+)to(\s+)({bound})\b")).ok()?;

        let words = book
            .words
            .iter()
            .chain(book.months.iter().filter(|(from, _)| *from != AMBIGUOUS_MONTH));
        let pattern = Regex::new(&format!(
            r"(?i)\b(?:{})\b",
            alternation(words.map(|(from, _)| *from))
        ))
        .ok()?;

        Some(Self {
            range,
            range_word: book.range_word,
            pattern,
            replacements: book.words.iter().chain(book.months).copied().collect(),
        })
    }

    fn lookup(&self, matched: &str) -> String {
        self.replacements
            .get(matched.to_lowercase().as_str())
            .map(|s| (*s).to_string())
            .unwrap_or_else(|| matched.to_string())
    }

    fn apply(&self, text: &str) -> String {
        let ranged = self.range.replace_all(text, |caps: &Captures<'_>| {
            format!(
                "{}{}{}{}{}",
                self.lookup(&caps[1]),
                &caps[2],
                self.range_word,
                &caps[3],
                self.lookup(&caps[4])
            )
        });
        self.pattern
            .replace_all(&ranged, |caps: &Captures<'_>| self.lookup(&caps[0]))
            .into_owned()
    }
}

fn table(language: Language) -> Option<&'static PhraseTable> {
    static HINDI: OnceLock<Option<PhraseTable>> = OnceLock::new();
    static MARATHI: OnceLock<Option<PhraseTable>> = OnceLock::new();
    match language {
        Language::English => None,
        Language::Hindi => HINDI.get_or_init(|| PhraseTable::build(&HINDI_BOOK)).as_ref(),
        Language::Marathi => MARATHI.get_or_init(|| PhraseTable::build(&MARATHI_BOOK)).as_ref(),
    }
}

/// Substitute known English phrases in `text` for `language`.
///
/// English input is returned unchanged.
pub fn translate_phrases(text: &str, language: Language) -> String {
    match table(language) {
        Some(table) => table.apply(text),
        None => text.to_string(),
    }
}

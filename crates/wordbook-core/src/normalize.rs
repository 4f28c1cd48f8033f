use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static CDATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").expect("valid CDATA pattern"));

pub trait Normalizer {
    /// Single-line cleanup: CDATA wrappers removed, NFC, whitespace collapsed and trimmed
    fn normalize(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw else {
            return String::new();
        };

        collapse_whitespace(&unwrap_markup(raw))
    }

    /// Like [`Normalizer::normalize`] but keeps line boundaries so per-sense
    /// lines survive until segmentation. Blank lines are dropped.
    fn normalize_lines(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw else {
            return String::new();
        };

        unwrap_markup(raw)
            .lines()
            .map(collapse_whitespace)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub struct DefaultNormalizer;
impl Normalizer for DefaultNormalizer {}

pub fn normalize(raw: Option<&str>) -> String {
    DefaultNormalizer.normalize(raw)
}

pub fn normalize_lines(raw: Option<&str>) -> String {
    DefaultNormalizer.normalize_lines(raw)
}

/// Collapse every whitespace run, newlines included, to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn unwrap_markup(raw: &str) -> String {
    CDATA.replace_all(raw, "$1").nfc().collect()
}

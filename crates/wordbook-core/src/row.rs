//! Row grammar of the Markdown table.
//!
//! The renderer formats rows with these helpers and the patcher matches rows
//! with [`missing_phonetic_pattern`], so both always agree on the layout:
//!
//! `| <index> | <headword> | <phonetic> | <gloss> |`

use std::sync::LazyLock;

use regex::Regex;
use wordbook_types::RenderedRow;

pub const SEPARATOR: char = '|';
pub const ESCAPE: char = '\\';
/// Embedded line break inside a gloss cell, never escaped
pub const LINE_BREAK: &str = "<br>";
pub const EMPTY_PHONETIC: &str = "[]";

static MISSING_PHONETIC: LazyLock<Regex> = LazyLock::new(|| {
    let sep = regex::escape(&SEPARATOR.to_string());
    // headword: escaped separators or anything but a separator/backslash
    let pattern = format!(
        r"(?m)^{sep} (\d+) {sep} ((?:\\.|[^\\{sep}])+) {sep} {empty} {sep}",
        empty = regex::escape(EMPTY_PHONETIC),
    );
    Regex::new(&pattern).expect("valid row pattern")
});

/// Matches the first three cells of a row whose phonetic cell is `[]`.
/// Group 1 is the index, group 2 the escaped headword.
pub fn missing_phonetic_pattern() -> &'static Regex {
    &MISSING_PHONETIC
}

/// Backslash-escape separators and backslashes so every cell stays in the
/// row pattern's headword grammar.
pub fn escape(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for c in field.chars() {
        if c == SEPARATOR || c == ESCAPE {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Inverse of [`escape`]. A dangling trailing backslash is kept.
pub fn unescape(field: &str) -> String {
    let mut unescaped = String::with_capacity(field.len());
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            unescaped.push(chars.next().unwrap_or(ESCAPE));
        } else {
            unescaped.push(c);
        }
    }
    unescaped
}

/// `| a | b | c |` for already escaped cells
pub fn cells<S: AsRef<str>>(cells: &[S]) -> String {
    let inner = cells
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(&format!(" {SEPARATOR} "));
    format!("{SEPARATOR} {inner} {SEPARATOR}")
}

pub fn separator_row(columns: usize) -> String {
    let mut row = String::from(SEPARATOR);
    for _ in 0..columns {
        row.push_str("------");
        row.push(SEPARATOR);
    }
    row
}

pub fn format_row(row: &RenderedRow) -> String {
    let index = row.index.to_string();
    cells(&[
        index.as_str(),
        row.headword.as_str(),
        row.phonetic.as_str(),
        row.gloss.as_str(),
    ])
}

/// Wrap a phonetic transcription in brackets.
///
/// Empty becomes `[]`, `[...]` is kept, `/.../` slashes are swapped for brackets.
pub fn bracket_phonetic(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return EMPTY_PHONETIC.to_string();
    }
    if raw.starts_with('[') && raw.ends_with(']') {
        return raw.to_string();
    }

    let inner = raw
        .strip_prefix('/')
        .and_then(|r| r.strip_suffix('/'))
        .unwrap_or(raw);
    format!("[{}]", inner.trim())
}

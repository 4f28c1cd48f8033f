//! Part-of-speech marker vocabulary and boundary-aware matching.

/// English abbreviations, matched literally and case-sensitively.
pub const ENGLISH_MARKERS: &[&str] = &[
    "adj.", "v.", "n.", "adv.", "prep.", "conj.", "int.", "pron.", "det.", "num.", "art.", "aux.",
    "modal.", "part.", "inf.", "ger.", "past.", "pp.", "pres.", "3rd.", "pl.", "sing.", "abbr.",
    "symb.", "prefix.", "suffix.", "comb.", "form.",
];

/// Bracketed CJK tags.
pub const CJK_MARKERS: &[&str] = &[
    "【名】",
    "【形】",
    "【动】",
    "【副】",
    "【介】",
    "【连】",
    "【叹】",
    "【代】",
    "【数】",
    "【冠】",
    "【助】",
    "【情】",
    "【分】",
    "【不定】",
    "【动名】",
    "【过去】",
    "【过去分】",
    "【现在】",
    "【第三人称】",
    "【复数】",
    "【单数】",
    "【缩写】",
    "【符号】",
    "【前缀】",
    "【后缀】",
    "【组合】",
    "【形式】",
];

/// A marker found in a gloss, `start` is a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch {
    pub start: usize,
    pub marker: &'static str,
}

impl MarkerMatch {
    pub fn end(&self) -> usize {
        self.start + self.marker.len()
    }
}

/// Every marker in matching priority order.
///
/// First match wins. No marker is a prefix of one listed after it, so the
/// first match is also the longest one.
pub fn markers() -> impl Iterator<Item = &'static str> {
    ENGLISH_MARKERS.iter().chain(CJK_MARKERS).copied()
}

/// Marker that `text` starts with, if any.
pub fn leading_marker(text: &str) -> Option<&'static str> {
    markers().find(|marker| text.starts_with(marker))
}

/// All marker occurrences that sit at the start of `text` or right after whitespace.
pub fn find_markers(text: &str) -> Vec<MarkerMatch> {
    let mut found = Vec::new();
    let mut at_boundary = true;
    let mut resume_at = 0;

    for (i, c) in text.char_indices() {
        if at_boundary && i >= resume_at {
            if let Some(marker) = leading_marker(&text[i..]) {
                found.push(MarkerMatch { start: i, marker });
                resume_at = i + marker.len();
            }
        }
        at_boundary = c.is_whitespace();
    }

    found
}

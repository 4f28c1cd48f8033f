use serde::{Deserialize, Serialize};

/// Raw record as pulled out of the source document, before any cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub headword: Option<String>,
    pub phonetic: Option<String>,
    pub gloss: Option<String>,
}

impl SourceRecord {
    pub fn new(headword: &str, phonetic: Option<&str>, gloss: Option<&str>) -> Self {
        Self {
            headword: Some(headword.to_string()),
            phonetic: phonetic.map(str::to_string),
            gloss: gloss.map(str::to_string),
        }
    }
}

/// A cleaned vocabulary entry. `headword` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub headword: String,
    pub phonetic: String,
    pub gloss: String,
}

impl Entry {
    /// Returns `None` for an empty headword, such entries never reach the table.
    pub fn new(
        headword: impl Into<String>,
        phonetic: impl Into<String>,
        gloss: impl Into<String>,
    ) -> Option<Self> {
        let headword = headword.into();
        if headword.is_empty() {
            return None;
        }

        Some(Self {
            headword,
            phonetic: phonetic.into(),
            gloss: gloss.into(),
        })
    }
}

/// One part-of-speech sense of a gloss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseSegment {
    /// Part-of-speech marker such as `adj.` or `【名】`
    pub marker: Option<String>,
    pub content: String,
}

impl SenseSegment {
    pub fn marked(marker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            marker: Some(marker.into()),
            content: content.into(),
        }
    }

    pub fn unmarked(content: impl Into<String>) -> Self {
        Self {
            marker: None,
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// A table row with every field already escaped for embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedRow {
    pub index: usize,
    pub headword: String,
    pub phonetic: String,
    pub gloss: String,
}

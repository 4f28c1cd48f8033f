use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Vocabulary".to_string()
}

fn default_description() -> String {
    "Entries extracted from the wordbook".to_string()
}

fn default_columns() -> [String; 4] {
    ["No.", "Word", "Phonetic", "Meaning"].map(String::from)
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TableConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    /// Column titles: index, headword, phonetic, gloss
    #[serde(default = "default_columns")]
    pub columns: [String; 4],
    /// Render part-of-speech markers as `**adj.**`
    #[serde(default)]
    pub bold_markers: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            columns: default_columns(),
            bold_markers: false,
        }
    }
}

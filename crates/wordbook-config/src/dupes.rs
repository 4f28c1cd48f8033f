use serde::{Deserialize, Serialize};

fn default_column() -> String {
    "C".to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_has_headers() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DupesConfig {
    /// Column letter (`C`, `AA`) or header name
    #[serde(default = "default_column")]
    pub column: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// First row holds column names and is not counted
    #[serde(default = "default_has_headers")]
    pub has_headers: bool,
}

impl Default for DupesConfig {
    fn default() -> Self {
        Self {
            column: default_column(),
            delimiter: default_delimiter(),
            has_headers: default_has_headers(),
        }
    }
}

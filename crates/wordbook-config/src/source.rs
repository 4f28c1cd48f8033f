use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_input() -> PathBuf {
    PathBuf::from("docs/dict.xml")
}

fn default_output() -> PathBuf {
    PathBuf::from("docs/dict.md")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SourceConfig {
    /// XML wordbook to read
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Markdown table to write, also the default target of `patch`
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PatchConfig {
    /// JSON object of `headword -> [phonetic]` merged over the built-in table
    pub extra_phonetics: Option<PathBuf>,
}

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dupes::DupesConfig;
use self::patch::PatchConfig;
use self::source::SourceConfig;
use self::table::TableConfig;

pub mod dupes;
pub mod patch;
pub mod source;
pub mod table;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to open config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub table: TableConfig,
    pub patch: PatchConfig,
    pub dupes: DupesConfig,
}

impl Config {
    /// Defaults with `WORDBOOK_*` environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load a JSON profile, then apply environment overrides on top
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.apply_env();
        Ok(config)
    }

    /// Load `path` when given, otherwise fall back to [`Config::new`]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::new()),
        }
    }

    fn apply_env(&mut self) {
        if let Ok(input) = env::var("WORDBOOK_INPUT") {
            self.source.input = PathBuf::from(input);
        }
        if let Ok(output) = env::var("WORDBOOK_OUTPUT") {
            self.source.output = PathBuf::from(output);
        }
        if let Some(bold) = env::var("WORDBOOK_BOLD_MARKERS")
            .ok()
            .and_then(|v| parse_flag(&v))
        {
            self.table.bold_markers = bold;
        }
        if let Ok(column) = env::var("WORDBOOK_DUPES_COLUMN") {
            self.dupes.column = column;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

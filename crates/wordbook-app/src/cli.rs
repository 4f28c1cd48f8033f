use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use wordbook_config::Config;

/// Turn an XML wordbook into a Markdown vocabulary table
#[derive(Parser, Debug, Clone)]
#[command(name = "wordbook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// More logging, repeat for debug and trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// JSON config profile
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// 0 quiet, 1 normal, 2 debug, 3+ trace
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render the wordbook as a Markdown table
    Convert(ConvertArgs),

    /// Fill empty `[]` phonetics in a rendered table
    Patch(PatchArgs),

    /// Report duplicate values in one column of a CSV/TSV file
    Dupes(DupesArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// XML wordbook to read
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Markdown file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Document title
    #[arg(long)]
    pub title: Option<String>,

    /// Render markers as `**adj.**`
    #[arg(long)]
    pub bold_markers: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PatchArgs {
    /// Markdown table to patch, defaults to the configured output
    pub document: Option<PathBuf>,

    /// JSON object of extra `headword -> [phonetic]` entries
    #[arg(long)]
    pub extra: Option<PathBuf>,

    /// Report without writing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DupesArgs {
    /// CSV or TSV file
    pub file: PathBuf,

    /// Column letter (`C`) or header name. A header spelled like a letter wins.
    #[arg(long)]
    pub column: Option<String>,

    /// Field delimiter, one ASCII character or `\t` for tabs
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<char>,

    /// The first row is data, not headers
    #[arg(long)]
    pub no_headers: bool,
}

impl ConvertArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.source.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.source.output = output.clone();
        }
        if let Some(title) = &self.title {
            config.table.title = title.clone();
        }
        if self.bold_markers {
            config.table.bold_markers = true;
        }
    }
}

impl PatchArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(document) = &self.document {
            config.source.output = document.clone();
        }
        if let Some(extra) = &self.extra {
            config.patch.extra_phonetics = Some(extra.clone());
        }
    }
}

impl DupesArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(column) = &self.column {
            config.dupes.column = column.clone();
        }
        if let Some(delimiter) = self.delimiter {
            config.dupes.delimiter = delimiter;
        }
        if self.no_headers {
            config.dupes.has_headers = false;
        }
    }
}

fn parse_delimiter(value: &str) -> Result<char, String> {
    if matches!(value, r"\t" | "tab") {
        return Ok('\t');
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(format!("expected one ASCII character, got {value:?}")),
    }
}

use anyhow::{Context, Result, bail};
use wordbook_config::Config;
use wordbook_config::table::TableConfig;
use wordbook_core::{MarkerStyle, PatchReport, Pipeline, PhoneticTable, TableLayout, patch};
use wordbook_dupes::{ColumnSelector, DuplicateReport, analyze, read_column};
use wordbook_io::{SourceReader, XmlWordbookReader, read_document, write_document};

use crate::cli::DupesArgs;

pub fn layout(table: &TableConfig) -> TableLayout {
    TableLayout {
        title: table.title.clone(),
        description: table.description.clone(),
        columns: table.columns.clone(),
        marker_style: if table.bold_markers {
            MarkerStyle::Bold
        } else {
            MarkerStyle::Plain
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub entries: usize,
    pub skipped: usize,
}

/// Read the wordbook, render it and write the table.
/// Nothing is written when the source cannot be read.
pub fn convert(config: &Config) -> Result<ConvertSummary> {
    let input = &config.source.input;
    let records = XmlWordbookReader
        .read(input)
        .with_context(|| format!("Failed to read wordbook {}", input.display()))?;

    let conversion = Pipeline::new(layout(&config.table)).convert(&records);
    write_document(&config.source.output, &conversion.document)?;

    tracing::info!(
        "Wrote {} entries to {}",
        conversion.entries,
        config.source.output.display()
    );

    Ok(ConvertSummary {
        entries: conversion.entries,
        skipped: conversion.skipped,
    })
}

pub fn phonetic_table(config: &Config) -> Result<PhoneticTable> {
    let mut table = PhoneticTable::builtin();
    if let Some(extra) = &config.patch.extra_phonetics {
        table
            .extend_from_file(extra)
            .with_context(|| format!("Failed to load extra phonetics {}", extra.display()))?;
    }
    Ok(table)
}

pub fn patch_document(config: &Config, dry_run: bool) -> Result<PatchReport> {
    let path = &config.source.output;
    let document = read_document(path)?;
    let table = phonetic_table(config)?;

    let report = patch(&document, &table);
    for headword in &report.missing {
        tracing::info!("Still missing a phonetic: {headword}");
    }

    if dry_run {
        tracing::info!("Dry run, {} left untouched", path.display());
    } else {
        write_document(path, &report.document)?;
    }

    Ok(report)
}

pub fn dupes(config: &Config, args: &DupesArgs) -> Result<DuplicateReport> {
    let delimiter = config.dupes.delimiter;
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got {delimiter:?}");
    }

    let selector = ColumnSelector::parse(&config.dupes.column);
    let values = read_column(&args.file, &selector, delimiter as u8, config.dupes.has_headers)?;
    tracing::info!("Checking {} rows of {}", values.len(), args.file.display());

    Ok(analyze(values))
}

/// Human-readable duplicate report with column statistics
pub fn format_dupes(column: &str, report: &DuplicateReport) -> String {
    let dupes = &report.duplicates;
    let mut out = if dupes.is_empty() {
        format!("Column {column}: no duplicate values\n")
    } else {
        format!("Column {column}: {} duplicate values\n", dupes.len())
    };

    for dupe in dupes {
        let positions = dupe
            .positions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let (first, last) = dupe.span();
        out.push_str(&format!(
            "\n'{}' - {} times\n  rows: {positions}\n  range: {first} - {last}\n",
            dupe.value,
            dupe.count()
        ));
    }

    let summary = &report.summary;
    out.push_str(&format!(
        "\nTotal rows: {}\nUnique values: {}\nDuplicated values: {}\nDuplicate rate: {:.2}%\n",
        summary.total,
        summary.unique,
        summary.duplicated,
        summary.rate()
    ));
    out
}

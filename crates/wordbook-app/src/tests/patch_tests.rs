use std::path::Path;

use clap::Parser;
use pretty_assertions::assert_eq;
use wordbook_config::Config;
use wordbook_core::Pipeline;
use wordbook_dupes::{DuplicateReport, DuplicateSummary};
use wordbook_types::SourceRecord;

use crate::cli::DupesArgs;
use crate::commands;

fn rendered_table(dir: &Path) -> Config {
    let records = [
        SourceRecord::new("idle", None, Some("adj. not working")),
        SourceRecord::new("crunch", Some("[krʌntʃ]"), Some("v. to crush")),
        SourceRecord::new("zyzzyva", None, Some("n. a weevil")),
        SourceRecord::new("Genius", None, Some("n. talent")),
    ];

    let mut config = Config::default();
    config.source.output = dir.join("dict.md");

    let document = Pipeline::new(commands::layout(&config.table))
        .convert(&records)
        .document;
    std::fs::write(&config.source.output, document).unwrap();
    config
}

#[test]
fn test_patch_fills_known_headwords() {
    let dir = tempfile::tempdir().unwrap();
    let config = rendered_table(dir.path());

    let report = commands::patch_document(&config, false).unwrap();
    assert_eq!(report.substituted, 2);
    assert_eq!(report.missing, vec!["zyzzyva".to_string()]);

    let document = std::fs::read_to_string(&config.source.output).unwrap();
    let rows: Vec<&str> = document.lines().skip(6).collect();
    assert_eq!(
        rows,
        vec![
            "| 1 | idle | [ˈaɪd(ə)l] | adj. not working |",
            "| 2 | crunch | [krʌntʃ] | v. to crush |",
            "| 3 | zyzzyva | [] | n. a weevil |",
            "| 4 | Genius | [ˈdʒiːniəs] | n. talent |",
        ]
    );
}

#[test]
fn test_patch_twice_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let config = rendered_table(dir.path());

    commands::patch_document(&config, false).unwrap();
    let once = std::fs::read_to_string(&config.source.output).unwrap();

    let report = commands::patch_document(&config, false).unwrap();
    assert_eq!(report.substituted, 0);
    assert_eq!(std::fs::read_to_string(&config.source.output).unwrap(), once);
}

#[test]
fn test_dry_run_leaves_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = rendered_table(dir.path());
    let before = std::fs::read_to_string(&config.source.output).unwrap();

    let report = commands::patch_document(&config, true).unwrap();
    assert_eq!(report.substituted, 2);
    assert_eq!(std::fs::read_to_string(&config.source.output).unwrap(), before);
}

#[test]
fn test_extra_phonetics_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = rendered_table(dir.path());
    let extra = dir.path().join("extra.json");
    std::fs::write(&extra, r#"{ "zyzzyva": "[ˈzɪzɪvə]" }"#).unwrap();
    config.patch.extra_phonetics = Some(extra);

    let report = commands::patch_document(&config, false).unwrap();
    assert_eq!(report.substituted, 3);
    assert!(report.missing.is_empty());
}

#[test]
fn test_patch_missing_document_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.source.output = dir.path().join("absent.md");

    assert!(commands::patch_document(&config, false).is_err());
}

#[test]
fn test_dupes_report() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("words.csv");
    std::fs::write(&file, "no,zh,word\n1,空闲,idle\n2,雾,haze\n3,闲置,idle\n4,,\n5,,\n").unwrap();

    let args = DupesArgs {
        file,
        column: None,
        delimiter: None,
        no_headers: false,
    };
    let report = commands::dupes(&Config::default(), &args).unwrap();
    assert_eq!(
        report.summary,
        DuplicateSummary {
            total: 5,
            unique: 3,
            duplicated: 2,
        }
    );

    assert_eq!(
        commands::format_dupes("C", &report),
        "Column C: 2 duplicate values\n\
         \n'idle' - 2 times\n  rows: 1, 3\n  range: 1 - 3\n\
         \n'<empty>' - 2 times\n  rows: 4, 5\n  range: 4 - 5\n\
         \nTotal rows: 5\nUnique values: 3\nDuplicated values: 2\nDuplicate rate: 66.67%\n"
    );
}

#[test]
fn test_dupes_by_short_header_name() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("words.tsv");
    std::fs::write(&file, "no\tzh\tword\n1\t雾\thaze\n2\t雾\tmist\n").unwrap();

    let cli = crate::cli::Cli::parse_from([
        "wordbook",
        "dupes",
        file.to_str().unwrap(),
        "--column",
        "zh",
        "--delimiter",
        "tab",
    ]);
    let crate::cli::Command::Dupes(args) = cli.command else {
        panic!("expected dupes");
    };
    let mut config = Config::default();
    args.apply(&mut config);

    let report = commands::dupes(&config, &args).unwrap();
    assert_eq!(report.duplicates.len(), 1);
    assert_eq!(report.duplicates[0].value, "雾");
}

#[test]
fn test_dupes_none() {
    let report = DuplicateReport {
        duplicates: Vec::new(),
        summary: DuplicateSummary {
            total: 2,
            unique: 2,
            duplicated: 0,
        },
    };
    assert_eq!(
        commands::format_dupes("C", &report),
        "Column C: no duplicate values\n\
         \nTotal rows: 2\nUnique values: 2\nDuplicated values: 0\nDuplicate rate: 0.00%\n"
    );
}

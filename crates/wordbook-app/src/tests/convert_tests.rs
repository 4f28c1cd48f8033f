use std::path::Path;

use pretty_assertions::assert_eq;
use wordbook_config::Config;

use crate::commands;

const WORDBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wordbook>
  <item>
    <word>quick</word>
    <phonetic><![CDATA[[kwɪk]]]></phonetic>
    <trans><![CDATA[adj. fast adv. quickly]]></trans>
  </item>
  <item>
    <word>idle</word>
    <phonetic></phonetic>
    <trans><![CDATA[adj. not working
v. to waste time]]></trans>
  </item>
  <item>
    <word></word>
    <trans>n. orphan</trans>
  </item>
  <item>
    <word>content</word>
    <phonetic>/ˈkɒntent/</phonetic>
    <trans>happy; joyful; at ease</trans>
  </item>
  <item>
    <word>either|or</word>
    <trans>conj. one | the other</trans>
  </item>
</wordbook>
"#;

fn config_in(dir: &Path) -> Config {
    let mut config = Config::default();
    config.source.input = dir.join("dict.xml");
    config.source.output = dir.join("out").join("dict.md");
    config.table.title = "Dictionary".to_string();
    config.table.description = "Extracted from dict.xml".to_string();
    config
}

#[test]
fn test_convert_writes_full_table() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.source.input, WORDBOOK).unwrap();

    let summary = commands::convert(&config).unwrap();
    assert_eq!(summary.entries, 4);
    assert_eq!(summary.skipped, 1);

    let document = std::fs::read_to_string(&config.source.output).unwrap();
    assert_eq!(
        document,
        "# Dictionary\n\n\
         Extracted from dict.xml\n\n\
         | No. | Word | Phonetic | Meaning |\n\
         |------|------|------|------|\n\
         | 1 | quick | [kwɪk] | adj. fast<br>adv. quickly |\n\
         | 2 | idle | [] | adj. not working<br>v. to waste time |\n\
         | 3 | content | [ˈkɒntent] | happy<br>joyful<br>at ease |\n\
         | 4 | either\\|or | [] | conj. one \\| the other |\n"
    );
}

#[test]
fn test_convert_bold_markers() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path());
    config.table.bold_markers = true;
    std::fs::write(&config.source.input, WORDBOOK).unwrap();

    commands::convert(&config).unwrap();
    let document = std::fs::read_to_string(&config.source.output).unwrap();
    assert!(document.contains("| 1 | quick | [kwɪk] | **adj.** fast<br>**adv.** quickly |"));
}

#[test]
fn test_malformed_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.source.input, "<wordbook><item><word>idle</trans></item>").unwrap();

    let err = commands::convert(&config).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read wordbook"));
    assert!(!config.source.output.exists());
}

#[test]
fn test_missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    assert!(commands::convert(&config).is_err());
    assert!(!config.source.output.exists());
}

#[test]
fn test_empty_wordbook_renders_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.source.input, "<wordbook></wordbook>").unwrap();

    let summary = commands::convert(&config).unwrap();
    assert_eq!(summary.entries, 0);

    let document = std::fs::read_to_string(&config.source.output).unwrap();
    assert_eq!(document.lines().count(), 6);
    assert!(document.ends_with("|------|------|------|------|\n"));
}

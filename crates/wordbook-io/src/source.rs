use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use wordbook_types::SourceRecord;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed XML at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    #[error("Document has no root element")]
    Empty,
}

/// Reads vocabulary records out of a source document
pub trait SourceReader {
    fn read(&self, path: &Path) -> Result<Vec<SourceRecord>, SourceError>;

    /// File extensions this reader understands
    fn supported_formats(&self) -> Vec<String>;
}

/// Wordbook XML:
///
/// ```xml
/// <wordbook>
///   <item>
///     <word>idle</word>
///     <phonetic><![CDATA[[ˈaɪd(ə)l]]]></phonetic>
///     <trans><![CDATA[adj. not working]]></trans>
///   </item>
/// </wordbook>
/// ```
///
/// Only `<item>` elements directly under the root are read.
pub struct XmlWordbookReader;

impl SourceReader for XmlWordbookReader {
    fn read(&self, path: &Path) -> Result<Vec<SourceRecord>, SourceError> {
        tracing::info!("Reading wordbook from {}", path.display());
        let xml = std::fs::read_to_string(path)?;
        let records = parse_wordbook(&xml)?;
        tracing::info!("Read {} records", records.len());
        Ok(records)
    }

    fn supported_formats(&self) -> Vec<String> {
        vec!["xml".to_string()]
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Headword,
    Phonetic,
    Gloss,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"word" => Some(Field::Headword),
            b"phonetic" => Some(Field::Phonetic),
            b"trans" => Some(Field::Gloss),
            _ => None,
        }
    }

    fn assign(self, record: &mut SourceRecord, text: String) {
        let slot = match self {
            Field::Headword => &mut record.headword,
            Field::Phonetic => &mut record.phonetic,
            Field::Gloss => &mut record.gloss,
        };
        *slot = Some(text);
    }
}

pub fn parse_wordbook(xml: &str) -> Result<Vec<SourceRecord>, SourceError> {
    let mut reader = Reader::from_str(xml);
    let mut records = Vec::new();

    let mut depth = 0usize;
    let mut seen_root = false;
    let mut item: Option<SourceRecord> = None;
    let mut field: Option<(Field, String)> = None;

    loop {
        let event = reader.read_event().map_err(|e| SourceError::Malformed {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(e) => {
                depth += 1;
                seen_root = true;
                let name = e.local_name();
                match depth {
                    2 if name.as_ref() == b"item" => item = Some(SourceRecord::default()),
                    3 if item.is_some() => {
                        field = Field::from_tag(name.as_ref()).map(|f| (f, String::new()));
                    }
                    _ => {}
                }
            }
            Event::Empty(e) => {
                seen_root = true;
                let name = e.local_name();
                if depth == 1 && name.as_ref() == b"item" {
                    records.push(SourceRecord::default());
                } else if depth == 2
                    && let Some(record) = item.as_mut()
                    && let Some(f) = Field::from_tag(name.as_ref())
                {
                    f.assign(record, String::new());
                }
            }
            Event::Text(text) => {
                if let Some((_, buf)) = field.as_mut() {
                    let text = text.unescape().map_err(|e| SourceError::Malformed {
                        position: reader.buffer_position() as u64,
                        message: e.to_string(),
                    })?;
                    buf.push_str(&text);
                }
            }
            Event::CData(data) => {
                if let Some((_, buf)) = field.as_mut() {
                    let text = std::str::from_utf8(&data).map_err(|e| SourceError::Malformed {
                        position: reader.buffer_position() as u64,
                        message: e.to_string(),
                    })?;
                    buf.push_str(text);
                }
            }
            Event::End(_) => {
                match depth {
                    3 => {
                        if let Some(record) = item.as_mut()
                            && let Some((f, text)) = field.take()
                        {
                            f.assign(record, text);
                        }
                    }
                    2 => {
                        if let Some(record) = item.take() {
                            records.push(record);
                        }
                    }
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(SourceError::Malformed {
            position: reader.buffer_position() as u64,
            message: format!("{depth} unclosed element(s) at end of document"),
        });
    }
    if !seen_root {
        return Err(SourceError::Empty);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_items_in_order() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<wordbook>
  <item>
    <word>idle</word>
    <phonetic><![CDATA[[ˈaɪd(ə)l]]]></phonetic>
    <trans><![CDATA[adj. not working
v. to waste time]]></trans>
  </item>
  <item>
    <word>haze</word>
    <trans>n. mist &amp; smoke</trans>
  </item>
</wordbook>"#;

        let records = parse_wordbook(xml).unwrap();
        assert_eq!(
            records,
            vec![
                SourceRecord::new(
                    "idle",
                    Some("[ˈaɪd(ə)l]"),
                    Some("adj. not working\nv. to waste time"),
                ),
                SourceRecord::new("haze", None, Some("n. mist & smoke")),
            ]
        );
    }

    #[test]
    fn test_empty_elements() {
        let xml = "<wordbook><item><word>notch</word><phonetic/><trans></trans></item><item/></wordbook>";
        let records = parse_wordbook(xml).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], SourceRecord::new("notch", Some(""), Some("")));
        assert_eq!(records[1], SourceRecord::default());
    }

    #[test]
    fn test_nested_items_are_ignored() {
        let xml = "<wordbook><group><item><word>deep</word></item></group></wordbook>";
        assert!(parse_wordbook(xml).unwrap().is_empty());
    }

    #[test]
    fn test_mismatched_tags_are_fatal() {
        let xml = "<wordbook><item><word>idle</phonetic></item></wordbook>";
        let err = parse_wordbook(xml).unwrap_err();
        assert!(matches!(err, SourceError::Malformed { .. }), "{err}");
    }

    #[test]
    fn test_truncated_document_is_fatal() {
        let xml = "<wordbook><item><word>idle</word>";
        assert!(parse_wordbook(xml).is_err());
    }

    #[test]
    fn test_empty_document_is_fatal() {
        assert!(matches!(parse_wordbook(""), Err(SourceError::Empty)));
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.xml");
        std::fs::write(&path, "<wordbook><item><word>tweak</word></item></wordbook>").unwrap();

        let records = XmlWordbookReader.read(&path).unwrap();
        assert_eq!(records, vec![SourceRecord::new("tweak", None, None)]);
    }

    #[test]
    fn test_missing_file() {
        let err = XmlWordbookReader
            .read(Path::new("no/such/dict.xml"))
            .unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}

use wordbook_types::{Entry, SourceRecord};

use crate::normalize::{DefaultNormalizer, Normalizer};
use crate::render::{TableLayout, TableRenderer};

/// Result of one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub document: String,
    pub entries: usize,
    /// Records dropped for lacking a headword
    pub skipped: usize,
}

/// Source records to finished table: normalize, drop headless entries, render.
pub struct Pipeline<N: Normalizer = DefaultNormalizer> {
    normalizer: N,
    renderer: TableRenderer,
}

impl Pipeline {
    pub fn new(layout: TableLayout) -> Self {
        Self::with_normalizer(DefaultNormalizer, layout)
    }
}

impl<N: Normalizer> Pipeline<N> {
    pub fn with_normalizer(normalizer: N, layout: TableLayout) -> Self {
        Self {
            normalizer,
            renderer: TableRenderer::new(layout),
        }
    }

    pub fn entry(&self, record: &SourceRecord) -> Option<Entry> {
        let headword = self.normalizer.normalize(record.headword.as_deref());
        let phonetic = self.normalizer.normalize(record.phonetic.as_deref());
        // gloss keeps its line breaks for the segmenter
        let gloss = self.normalizer.normalize_lines(record.gloss.as_deref());

        let entry = Entry::new(headword, phonetic, gloss);
        if entry.is_none() {
            tracing::debug!("Skipping record without headword: {record:?}");
        }
        entry
    }

    pub fn entries<'a>(&self, records: impl IntoIterator<Item = &'a SourceRecord>) -> Vec<Entry> {
        records
            .into_iter()
            .filter_map(|record| self.entry(record))
            .collect()
    }

    pub fn convert(&self, records: &[SourceRecord]) -> Conversion {
        let entries = self.entries(records);
        let skipped = records.len() - entries.len();
        tracing::info!("Rendering {} entries, skipped {skipped}", entries.len());

        Conversion {
            document: self.renderer.render(&entries),
            entries: entries.len(),
            skipped,
        }
    }
}

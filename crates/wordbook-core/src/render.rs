use wordbook_types::{Entry, RenderedRow};

use crate::row::{self, bracket_phonetic, escape};
use crate::segment::{MarkerStyle, format_gloss};

/// Everything about the table that is not row data.
#[derive(Debug, Clone)]
pub struct TableLayout {
    pub title: String,
    pub description: String,
    /// Index, headword, phonetic and gloss column titles
    pub columns: [String; 4],
    pub marker_style: MarkerStyle,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            title: "Vocabulary".to_string(),
            description: String::new(),
            columns: ["No.", "Word", "Phonetic", "Meaning"].map(String::from),
            marker_style: MarkerStyle::Plain,
        }
    }
}

impl TableLayout {
    /// Title, description and the two header rows, each line newline-terminated
    pub fn header(&self) -> String {
        let mut header = String::new();
        if !self.title.is_empty() {
            header.push_str(&format!("# {}\n\n", self.title));
        }
        if !self.description.is_empty() {
            header.push_str(&format!("{}\n\n", self.description));
        }

        let titles: Vec<String> = self.columns.iter().map(|c| escape(c)).collect();
        header.push_str(&row::cells(&titles));
        header.push('\n');
        header.push_str(&row::separator_row(self.columns.len()));
        header.push('\n');
        header
    }
}

pub struct TableRenderer {
    layout: TableLayout,
}

impl TableRenderer {
    pub fn new(layout: TableLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    /// Segment, escape and number entries. Indices start at 1 with no gaps.
    pub fn rows(&self, entries: &[Entry]) -> Vec<RenderedRow> {
        entries
            .iter()
            .filter(|entry| {
                if entry.headword.is_empty() {
                    tracing::debug!("Skipping entry without headword");
                    return false;
                }
                true
            })
            .enumerate()
            .map(|(i, entry)| RenderedRow {
                index: i + 1,
                headword: escape(&entry.headword),
                phonetic: escape(&bracket_phonetic(&entry.phonetic)),
                gloss: escape(&format_gloss(&entry.gloss, self.layout.marker_style)),
            })
            .collect()
    }

    pub fn render(&self, entries: &[Entry]) -> String {
        let mut document = self.layout.header();
        for rendered in self.rows(entries) {
            document.push_str(&row::format_row(&rendered));
            document.push('\n');
        }
        document
    }
}

pub fn render(entries: &[Entry], layout: &TableLayout) -> String {
    TableRenderer::new(layout.clone()).render(entries)
}

//! Splits a multi-sense gloss into one segment per part of speech.
//!
//! Strategies are tried in [`STRATEGIES`] order and the first applicable one
//! wins. When none applies the trimmed gloss is kept verbatim.

use wordbook_types::SenseSegment;

use crate::marker::{find_markers, leading_marker};
use crate::normalize::collapse_whitespace;
use crate::row::LINE_BREAK;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One sense per source line, unmarked lines continue the previous sense
    LineBreaks,
    /// Split before every part-of-speech marker
    Markers,
    Semicolons,
    Periods,
}

pub const STRATEGIES: &[Strategy] = &[
    Strategy::LineBreaks,
    Strategy::Markers,
    Strategy::Semicolons,
    Strategy::Periods,
];

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::LineBreaks => "line-breaks",
            Strategy::Markers => "markers",
            Strategy::Semicolons => "semicolons",
            Strategy::Periods => "periods",
        }
    }

    /// `None` when the strategy does not apply to `gloss`
    pub fn split(&self, gloss: &str) -> Option<Vec<SenseSegment>> {
        match self {
            Strategy::LineBreaks => split_lines(gloss),
            Strategy::Markers => split_markers(gloss),
            Strategy::Semicolons => split_delimiter(gloss, ';'),
            Strategy::Periods => split_delimiter(gloss, '.'),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkerStyle {
    #[default]
    Plain,
    /// `**adj.** quick`
    Bold,
}

pub fn segment(gloss: &str) -> Vec<SenseSegment> {
    segment_with(gloss, STRATEGIES)
}

pub fn segment_with(gloss: &str, strategies: &[Strategy]) -> Vec<SenseSegment> {
    for strategy in strategies {
        if let Some(segments) = strategy.split(gloss) {
            tracing::trace!(
                strategy = strategy.name(),
                segments = segments.len(),
                "gloss segmented"
            );
            return segments;
        }
    }

    verbatim(gloss)
}

pub fn format_segment(segment: &SenseSegment, style: MarkerStyle) -> String {
    let content = segment.content.trim();
    match (&segment.marker, style) {
        (Some(marker), MarkerStyle::Plain) => format!("{marker} {content}"),
        (Some(marker), MarkerStyle::Bold) => format!("**{marker}** {content}"),
        (None, _) => content.to_string(),
    }
}

/// Join segments with a line break before every segment but the first.
pub fn format_segments(segments: &[SenseSegment], style: MarkerStyle) -> String {
    segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .map(|segment| format_segment(segment, style))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

pub fn format_gloss(gloss: &str, style: MarkerStyle) -> String {
    format_segments(&segment(gloss), style)
}

fn split_lines(gloss: &str) -> Option<Vec<SenseSegment>> {
    let lines: Vec<String> = gloss
        .lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 || !lines.iter().any(|line| leading_marker(line).is_some()) {
        return None;
    }

    let mut segments: Vec<SenseSegment> = Vec::new();
    for line in &lines {
        let found = find_markers(line);

        // text ahead of the first marker continues the previous sense
        let leading = line[..found.first().map_or(line.len(), |m| m.start)].trim();
        if !leading.is_empty() {
            match segments.last_mut() {
                Some(last) if last.content.is_empty() => last.content = leading.to_string(),
                Some(last) => {
                    last.content.push(' ');
                    last.content.push_str(leading);
                }
                None => segments.push(SenseSegment::unmarked(leading)),
            }
        }

        for (i, m) in found.iter().enumerate() {
            let end = found.get(i + 1).map_or(line.len(), |next| next.start);
            segments.push(SenseSegment::marked(m.marker, line[m.end()..end].trim()));
        }
    }

    segments.retain(|segment| !segment.is_empty());
    Some(segments)
}

fn split_markers(gloss: &str) -> Option<Vec<SenseSegment>> {
    let text = collapse_whitespace(gloss);
    let found = find_markers(&text);
    let first = found.first()?;

    let mut segments = Vec::with_capacity(found.len() + 1);

    let leading = text[..first.start].trim();
    if !leading.is_empty() {
        segments.push(SenseSegment::unmarked(leading));
    }

    for (i, m) in found.iter().enumerate() {
        let end = found.get(i + 1).map_or(text.len(), |next| next.start);
        let content = text[m.end()..end].trim();
        if content.is_empty() {
            tracing::debug!(marker = m.marker, "dropping marker without content");
            continue;
        }
        segments.push(SenseSegment::marked(m.marker, content));
    }

    Some(segments)
}

fn split_delimiter(gloss: &str, delimiter: char) -> Option<Vec<SenseSegment>> {
    let text = collapse_whitespace(gloss);
    let segments: Vec<SenseSegment> = text
        .split(delimiter)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(SenseSegment::unmarked)
        .collect();

    (segments.len() > 1).then_some(segments)
}

fn verbatim(gloss: &str) -> Vec<SenseSegment> {
    let text = collapse_whitespace(gloss);
    if text.is_empty() {
        Vec::new()
    } else {
        vec![SenseSegment::unmarked(text)]
    }
}

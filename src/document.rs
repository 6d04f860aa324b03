//! Markdown documents laid out as rows and divided into sections.
//!
//! This is the static side of the picture: parse once, freeze the section index, and answer
//! geometry queries from the row layout. Level-2 ATX headings divide the document; everything
//! before the first of them is the header, and a short footer closes it.

use crate::config::Config;
use crate::error::DocumentError;
use crate::geometry::Bounds;
use crate::section::{SectionIndex, SectionKind};
use std::ops::Range;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

const HEADING_QUERY: &str = "(atx_heading) @heading";

#[derive(Clone, Debug, PartialEq, Eq)]
/// One rendered line of the document.
pub struct Row {
    /// Text shown for the row.
    pub text: String,
    /// Heading level when the row is an ATX heading.
    pub heading: Option<usize>,
}

impl Row {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            heading: None,
        }
    }
}

#[derive(Debug)]
struct Heading {
    row: usize,
    level: usize,
    title: String,
}

/// A parsed document: its rows, its sections, and which rows each section owns.
pub struct Document {
    /// Display title, from the first level-1 heading or the caller's fallback.
    pub title: String,
    /// Rendered rows in order.
    pub rows: Vec<Row>,
    /// Row range owned by each section, indexed by section order.
    pub spans: Vec<Range<usize>>,
    /// Identity and order of the sections.
    pub index: SectionIndex,
}

impl Document {
    /// Parses markdown into rows and sections.
    ///
    /// `fallback_title` names the document when it has no level-1 heading before its first
    /// section.
    ///
    /// # Errors
    ///
    /// Returns an error if the markdown grammar cannot be loaded or the parse fails.
    pub fn parse(
        fallback_title: &str,
        markdown: &str,
        config: &Config,
    ) -> Result<Self, DocumentError> {
        let headings = extract_headings(markdown)?;
        let first_split = headings.iter().find(|h| h.level == 2).map(|h| h.row);
        let title = headings
            .iter()
            .filter(|h| first_split.is_none_or(|split| h.row < split))
            .find(|h| h.level == 1)
            .map_or_else(|| fallback_title.to_string(), |h| h.title.clone());

        // Row 0 is a title banner so the header is never empty; source line n is row n + 1.
        let mut rows = vec![Row::plain(title.clone())];
        rows.extend(markdown.lines().map(Row::plain));
        for heading in &headings {
            if let Some(row) = rows.get_mut(heading.row + 1) {
                row.heading = Some(heading.level);
            }
        }

        let splits: Vec<&Heading> = headings.iter().filter(|h| h.level == 2).collect();
        let mut spans = Vec::with_capacity(splits.len() + 2);
        let mut start = 0;
        for split in &splits {
            spans.push(start..split.row + 1);
            start = split.row + 1;
        }
        spans.push(start..rows.len());

        let footer_start = rows.len();
        rows.push(Row::plain(""));
        rows.push(Row::plain(format!("── end of {title} ──")));
        spans.push(footer_start..rows.len());

        let body = splits.iter().map(|h| {
            let kind = if config
                .listing_titles
                .iter()
                .any(|t| t.eq_ignore_ascii_case(&h.title))
            {
                SectionKind::Listing
            } else {
                SectionKind::Item
            };
            (kind, h.title.clone())
        });
        let index = SectionIndex::assemble(&title, body, Some("End"))?;

        Ok(Self {
            title,
            rows,
            spans,
            index,
        })
    }

    #[must_use]
    /// Total number of rendered rows.
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    /// First row of the section at `order`.
    pub fn start_row(&self, order: usize) -> Option<usize> {
        self.spans.get(order).map(|span| span.start)
    }

    #[must_use]
    /// Bounds of the section at `order` with each row `row_height` units tall.
    pub fn bounds(&self, order: usize, row_height: f64) -> Option<Bounds> {
        self.spans.get(order).map(|span| {
            Bounds::new(
                rows_to_units(span.start, row_height),
                rows_to_units(span.end, row_height),
            )
        })
    }
}

/// Converts a row count to layout units.
#[must_use]
pub fn rows_to_units(rows: usize, row_height: f64) -> f64 {
    f64::from(u32::try_from(rows).unwrap_or(u32::MAX)) * row_height
}

fn extract_headings(markdown: &str) -> Result<Vec<Heading>, DocumentError> {
    let language: tree_sitter::Language = tree_sitter_md::LANGUAGE.into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| DocumentError::Language(e.to_string()))?;
    let tree = parser.parse(markdown, None).ok_or(DocumentError::Parse)?;
    let query =
        Query::new(&language, HEADING_QUERY).map_err(|e| DocumentError::Language(e.to_string()))?;

    let source = markdown.as_bytes();
    let mut headings = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source);
    while let Some(m) = matches.next() {
        for capture in m.captures {
            if let Some(heading) = read_heading(capture.node, source) {
                headings.push(heading);
            }
        }
    }
    headings.sort_by_key(|h| h.row);
    Ok(headings)
}

fn read_heading(node: Node, source: &[u8]) -> Option<Heading> {
    let mut level = None;
    let mut title = String::new();
    let mut walker = node.walk();
    for child in node.children(&mut walker) {
        let kind = child.kind();
        if let Some(marker) = kind
            .strip_prefix("atx_h")
            .and_then(|rest| rest.strip_suffix("_marker"))
        {
            level = marker.parse().ok();
        } else if kind == "inline" {
            title = child.utf8_text(source).ok()?.trim().to_string();
        }
    }
    Some(Heading {
        row: node.start_position().row,
        level: level?,
        title,
    })
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;

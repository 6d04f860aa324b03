use super::Document;
use crate::config::Config;
use crate::geometry::Bounds;
use crate::section::SectionKind;

const SAMPLE: &str = "# Holiday

Photos from the trip.

## Contents

- Beach

## Beach Day

Sand.

### Later

Sunset.

## Beach Day

Again.
";

fn config() -> Config {
    Config::parse("").unwrap()
}

#[test]
fn test_sections_follow_level_two_headings() {
    let doc = Document::parse("fallback", SAMPLE, &config()).unwrap();

    assert_eq!(doc.title, "Holiday");
    let kinds: Vec<SectionKind> = doc.index.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Header,
            SectionKind::Listing,
            SectionKind::Item,
            SectionKind::Item,
            SectionKind::Footer,
        ]
    );
    let ids: Vec<&str> = doc.index.iter().map(|s| s.fragment()).collect();
    assert_eq!(ids, vec!["", "contents", "beach-day", "beach-day-2", "footer"]);
}

#[test]
fn test_spans_cover_every_row_in_order() {
    let doc = Document::parse("fallback", SAMPLE, &config()).unwrap();

    // Banner row, 19 source lines, two footer rows.
    assert_eq!(doc.total_rows(), 22);
    assert_eq!(doc.spans, vec![0..5, 5..9, 9..17, 17..20, 20..22]);
    assert_eq!(doc.rows[0].text, "Holiday");
    assert_eq!(doc.rows[1].heading, Some(1));
    assert_eq!(doc.rows[5].heading, Some(2));
    assert_eq!(doc.rows[13].heading, Some(3));
    assert_eq!(doc.rows[2].heading, None);
}

#[test]
fn test_bounds_scale_with_row_height() {
    let doc = Document::parse("fallback", SAMPLE, &config()).unwrap();
    assert_eq!(doc.bounds(1, 16.0), Some(Bounds::new(80.0, 144.0)));
    assert_eq!(doc.start_row(2), Some(9));
    assert_eq!(doc.bounds(9, 16.0), None);
}

#[test]
fn test_document_without_sections() {
    let doc = Document::parse("notes", "Just a paragraph.\n", &config()).unwrap();
    assert_eq!(doc.title, "notes");
    assert_eq!(doc.index.len(), 2);
    assert_eq!(doc.spans, vec![0..2, 2..4]);
}

#[test]
fn test_listing_titles_come_from_config() {
    let cfg = Config::parse("listing_titles = [\"Albums\"]").unwrap();
    let doc = Document::parse("x", "## Albums\n\n## Contents\n", &cfg).unwrap();
    let kinds: Vec<SectionKind> = doc.index.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Header,
            SectionKind::Listing,
            SectionKind::Item,
            SectionKind::Footer,
        ]
    );
    // A heading on the first line leaves the banner alone in the header.
    assert_eq!(doc.spans[0], 0..1);
}

use super::{slugify, Section, SectionIndex, SectionKind, FOOTER_ID};
use crate::error::IndexError;

#[test]
fn test_slugify() {
    assert_eq!(slugify("IMG_0042.JPG"), "img-0042-jpg");
    assert_eq!(slugify("  Hello, World!  "), "hello-world");
    assert_eq!(slugify("déjà vu"), "d-j-vu");
    assert_eq!(slugify("---"), "section");
    assert_eq!(slugify(""), "section");
}

#[test]
fn test_assemble_assigns_stable_ids() {
    let index = SectionIndex::assemble(
        "Holiday",
        vec![
            (SectionKind::Listing, "Contents".to_string()),
            (SectionKind::Item, "Beach".to_string()),
            (SectionKind::Item, "Beach".to_string()),
            (SectionKind::Item, "Footer".to_string()),
        ],
        Some("End"),
    )
    .unwrap();

    let ids: Vec<Option<&str>> = index.iter().map(|s| s.id.as_deref()).collect();
    assert_eq!(
        ids,
        vec![
            None,
            Some("contents"),
            Some("beach"),
            Some("beach-2"),
            Some("footer-2"),
            Some(FOOTER_ID),
        ]
    );
    let orders: Vec<usize> = index.iter().map(|s| s.order).collect();
    assert_eq!(orders, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(index.header().fragment(), "");
    assert_eq!(index.footer().map(|s| s.order), Some(5));
    assert_eq!(index.first_listing().map(|s| s.order), Some(1));
}

#[test]
fn test_assemble_is_deterministic() {
    let body = || {
        vec![
            (SectionKind::Item, "a b".to_string()),
            (SectionKind::Item, "A-B".to_string()),
        ]
    };
    let first = SectionIndex::assemble("Doc", body(), None).unwrap();
    let second = SectionIndex::assemble("Doc", body(), None).unwrap();
    let ids = |i: &SectionIndex| i.iter().map(|s| s.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(first.footer(), None);
}

#[test]
fn test_validation() {
    assert_eq!(SectionIndex::new(vec![]).unwrap_err(), IndexError::Empty);

    let item = |id: &str| Section::new(SectionKind::Item, Some(id.to_string()), id);
    let header = || Section::new(SectionKind::Header, None, "Top");
    let footer = || Section::new(SectionKind::Footer, Some(FOOTER_ID.into()), "End");

    assert_eq!(
        SectionIndex::new(vec![item("a")]).unwrap_err(),
        IndexError::MissingHeader
    );
    assert_eq!(
        SectionIndex::new(vec![header(), item("a"), header()]).unwrap_err(),
        IndexError::MisplacedHeader(2)
    );
    assert_eq!(
        SectionIndex::new(vec![header(), footer(), item("a")]).unwrap_err(),
        IndexError::MisplacedFooter(1)
    );
    assert_eq!(
        SectionIndex::new(vec![header(), item("a"), item("a")]).unwrap_err(),
        IndexError::DuplicateId("a".to_string())
    );
    assert_eq!(
        SectionIndex::new(vec![header(), item("")]).unwrap_err(),
        IndexError::EmptyId(1)
    );
}

#[test]
fn test_lookup_helpers() {
    let index = SectionIndex::assemble(
        "Doc",
        vec![(SectionKind::Item, "One".to_string())],
        Some("End"),
    )
    .unwrap();

    assert_eq!(index.by_fragment("").map(|s| s.order), Some(0));
    assert_eq!(index.by_fragment("one").map(|s| s.order), Some(1));
    assert_eq!(index.by_fragment("#one").map(|s| s.order), Some(1));
    assert_eq!(index.by_fragment("two"), None);
    assert_eq!(index.offset(1, 1).map(|s| s.order), Some(2));
    assert_eq!(index.offset(0, -1), None);
    assert_eq!(index.offset(2, 1), None);
}

#[test]
fn test_serializes_as_list() {
    let index = SectionIndex::assemble(
        "Doc",
        vec![(SectionKind::Item, "One".to_string())],
        None,
    )
    .unwrap();
    let json = serde_json::to_value(&index).unwrap();
    assert_eq!(json[0]["kind"], "header");
    assert_eq!(json[0]["id"], serde_json::Value::Null);
    assert_eq!(json[1]["kind"], "content-item");
    assert_eq!(json[1]["id"], "one");
    assert_eq!(json[1]["order"], 1);
}

//! Section representation for a single long-scrolling document.
//!
//! A section is one navigable unit: the introductory header, an optional listing, a content
//! item, or the closing footer. The index fixes identity and order once at load; geometry is
//! never stored here because it belongs to the live layout.

use crate::error::IndexError;
use serde::Serialize;
use std::collections::HashSet;

/// Fixed id carried by the footer.
pub const FOOTER_ID: &str = "footer";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// What part of the document a section plays.
pub enum SectionKind {
    /// Introductory top of the document; the default location.
    Header,
    /// A sub-listing linking elsewhere.
    Listing,
    /// One piece of content.
    #[serde(rename = "content-item")]
    Item,
    /// Closing end of the document.
    Footer,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Navigable division of the document with a stable identity and fixed position.
pub struct Section {
    /// Deterministic anchor id; `None` for the header, which maps to an empty fragment.
    pub id: Option<String>,
    /// Role of the section in the document.
    pub kind: SectionKind,
    /// Position in document order, assigned by [`SectionIndex::new`].
    pub order: usize,
    /// Human-readable heading.
    pub title: String,
}

impl Section {
    #[must_use]
    /// Creates a section; its order is assigned when it joins an index.
    pub fn new(kind: SectionKind, id: Option<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            order: 0,
            title: title.into(),
        }
    }

    #[must_use]
    /// The persisted fragment selecting this section, empty for the header.
    pub fn fragment(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
/// Ordered, immutable list of sections: the source of truth for ordering and identity.
pub struct SectionIndex {
    sections: Vec<Section>,
}

impl SectionIndex {
    /// Validates and freezes a list of sections, numbering them in the order given.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] when the list is empty, does not start with the header, places
    /// a header or footer out of position, or carries empty or duplicate ids.
    pub fn new(mut sections: Vec<Section>) -> Result<Self, IndexError> {
        let first = sections.first().ok_or(IndexError::Empty)?;
        if first.kind != SectionKind::Header {
            return Err(IndexError::MissingHeader);
        }

        let last = sections.len() - 1;
        let mut seen = HashSet::new();
        for (order, section) in sections.iter_mut().enumerate() {
            section.order = order;
            match section.kind {
                SectionKind::Header if order != 0 => {
                    return Err(IndexError::MisplacedHeader(order));
                }
                SectionKind::Footer if order != last => {
                    return Err(IndexError::MisplacedFooter(order));
                }
                _ => {}
            }
            if let Some(id) = &section.id {
                if id.is_empty() {
                    return Err(IndexError::EmptyId(order));
                }
                if !seen.insert(id.clone()) {
                    return Err(IndexError::DuplicateId(id.clone()));
                }
            }
        }

        Ok(Self { sections })
    }

    /// Builds an index from titled body sections, deriving every id from its title.
    ///
    /// The header gets no id and the footer the fixed [`FOOTER_ID`]; body slugs are
    /// disambiguated in document order with numeric suffixes and never take a sentinel.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if a body entry is itself a header or footer.
    pub fn assemble<I>(header: &str, body: I, footer: Option<&str>) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = (SectionKind, String)>,
    {
        let mut taken: HashSet<String> = HashSet::from([FOOTER_ID.to_string()]);
        let mut sections = vec![Section::new(SectionKind::Header, None, header)];

        for (kind, title) in body {
            let base = slugify(&title);
            let mut id = base.clone();
            let mut n = 2;
            while taken.contains(&id) {
                id = format!("{base}-{n}");
                n += 1;
            }
            taken.insert(id.clone());
            sections.push(Section::new(kind, Some(id), title));
        }

        if let Some(title) = footer {
            sections.push(Section::new(
                SectionKind::Footer,
                Some(FOOTER_ID.to_string()),
                title,
            ));
        }

        Self::new(sections)
    }

    #[must_use]
    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// Always false for a constructed index; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    /// Section at a document position.
    pub fn get(&self, order: usize) -> Option<&Section> {
        self.sections.get(order)
    }

    #[must_use]
    /// Neighbour of `order` at signed distance `delta`, if one exists.
    pub fn offset(&self, order: usize, delta: isize) -> Option<&Section> {
        order.checked_add_signed(delta).and_then(|o| self.get(o))
    }

    #[must_use]
    /// The default location: the header.
    pub fn header(&self) -> &Section {
        &self.sections[0]
    }

    #[must_use]
    /// The last section in document order.
    pub fn last(&self) -> &Section {
        &self.sections[self.sections.len() - 1]
    }

    #[must_use]
    /// The footer, when the document has one.
    pub fn footer(&self) -> Option<&Section> {
        Some(self.last()).filter(|s| s.kind == SectionKind::Footer)
    }

    #[must_use]
    /// The first listing in document order.
    pub fn first_listing(&self) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == SectionKind::Listing)
    }

    #[must_use]
    /// Resolves a persisted fragment; the empty fragment selects the header.
    pub fn by_fragment(&self, fragment: &str) -> Option<&Section> {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        if fragment.is_empty() {
            return Some(self.header());
        }
        self.sections
            .iter()
            .find(|s| s.id.as_deref() == Some(fragment))
    }

    /// Sections in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }
}

impl<'a> IntoIterator for &'a SectionIndex {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

#[must_use]
/// Derives a stable anchor id from content: lowercase ASCII alphanumerics joined by single
/// hyphens. Text with no usable characters falls back to `section`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut gap = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("section");
    }
    slug
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;

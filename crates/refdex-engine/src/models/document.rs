use serde::Serialize;

/// How a heading was written in the source document.
///
/// Preserved so renderers can reproduce the exact heading/anchor convention
/// and existing deep links keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadingStyle {
    /// `## Title` — anchor derived from the title text.
    Atx,
    /// `<h2 id="...">Title</h2>` — anchor taken verbatim from the id attribute.
    Html,
}

/// An illustrative code fragment embedded under a heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Language tag from the fence info string, if any.
    pub lang: Option<String>,
    /// Fence content, verbatim, without the fence delimiters.
    pub code: String,
}

/// A heading with its anchor, snippets, and nested subsections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    /// Heading level, 1..=6.
    pub level: u8,
    /// Unique within the document.
    pub anchor: String,
    pub style: HeadingStyle,
    pub snippets: Vec<Snippet>,
    pub children: Vec<Section>,
}

impl Section {
    pub fn new(title: String, level: u8, anchor: String, style: HeadingStyle) -> Self {
        Self {
            title,
            level,
            anchor,
            style,
            snippets: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// A parsed reference document.
///
/// Sections appear in source order; `preamble` holds snippets found before
/// the first heading. Constructed once by the parser, immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub preamble: Vec<Snippet>,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.preamble.is_empty() && self.sections.is_empty()
    }

    /// Look up a section by its anchor id.
    pub fn section_by_anchor(&self, anchor: &str) -> Option<&Section> {
        find_by_anchor(&self.sections, anchor)
    }

    /// Number of sections in the whole tree.
    pub fn section_count(&self) -> usize {
        fn count(sections: &[Section]) -> usize {
            sections.iter().map(|s| 1 + count(&s.children)).sum()
        }
        count(&self.sections)
    }
}

fn find_by_anchor<'a>(sections: &'a [Section], anchor: &str) -> Option<&'a Section> {
    for section in sections {
        if section.anchor == anchor {
            return Some(section);
        }
        if let Some(found) = find_by_anchor(&section.children, anchor) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(anchor: &str, children: Vec<Section>) -> Section {
        Section {
            children,
            ..Section::new("T".to_string(), 2, anchor.to_string(), HeadingStyle::Atx)
        }
    }

    #[test]
    fn empty_document_has_no_sections() {
        let doc = Document::default();
        assert!(doc.is_empty());
        assert_eq!(doc.section_count(), 0);
    }

    #[test]
    fn lookup_finds_nested_anchor() {
        let doc = Document {
            preamble: vec![],
            sections: vec![section("outer", vec![section("inner", vec![])])],
        };

        assert_eq!(doc.section_by_anchor("inner").unwrap().anchor, "inner");
        assert!(doc.section_by_anchor("missing").is_none());
    }

    #[test]
    fn section_count_includes_descendants() {
        let doc = Document {
            preamble: vec![],
            sections: vec![
                section("a", vec![section("b", vec![section("c", vec![])])]),
                section("d", vec![]),
            ],
        };

        assert_eq!(doc.section_count(), 4);
    }
}

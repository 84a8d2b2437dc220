use crate::parsing::ParseError;
use std::collections::HashMap;

/// GitHub-style slug for a heading title: lowercase, punctuation dropped,
/// spaces and hyphens become `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.trim().to_lowercase().chars() {
        match c {
            ' ' | '-' => slug.push('-'),
            '_' => slug.push('_'),
            c if c.is_alphanumeric() => slug.push(c),
            _ => {}
        }
    }
    slug
}

/// Every anchor seen while parsing, with the line it was introduced on.
/// Registration rejects duplicates; silent renaming would break existing
/// deep links into the document.
#[derive(Debug, Default)]
pub struct AnchorIndex {
    seen: HashMap<String, usize>,
}

impl AnchorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, anchor: &str, line: usize) -> Result<(), ParseError> {
        if self.seen.contains_key(anchor) {
            return Err(ParseError::DuplicateAnchor {
                anchor: anchor.to_string(),
                line,
            });
        }
        self.seen.insert(anchor.to_string(), line);
        Ok(())
    }

    pub fn contains(&self, anchor: &str) -> bool {
        self.seen.contains_key(anchor)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Swift", "swift")]
    #[case("Control Flow", "control-flow")]
    #[case("Error Handling: try/catch", "error-handling-trycatch")]
    #[case("Go 1.22", "go-122")]
    #[case("snake_case names", "snake_case-names")]
    #[case("  padded  ", "padded")]
    fn slugs(#[case] title: &str, #[case] expected: &str) {
        assert_eq!(slugify(title), expected);
    }

    #[test]
    fn register_rejects_duplicates() {
        let mut index = AnchorIndex::new();
        index.register("go-concurrency", 3).unwrap();
        assert!(index.contains("go-concurrency"));

        let err = index.register("go-concurrency", 9).unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicateAnchor {
                anchor: "go-concurrency".to_string(),
                line: 9
            }
        );
    }

    #[test]
    fn distinct_anchors_accumulate() {
        let mut index = AnchorIndex::new();
        index.register("a", 1).unwrap();
        index.register("b", 2).unwrap();
        assert_eq!(index.len(), 2);
    }
}

//! # Reference document parsing
//!
//! Two-phase, single-pass parsing of a reference document:
//!
//! 1. **Line classification** (`classify`): each line is classified into a
//!    `LineClass` of local facts (blank, fence signature, heading signatures)
//! 2. **Section building** (`builder`): a `SectionBuilder` maintains the open
//!    section stack and fence state, and emits the finished tree
//!
//! ## Key invariants
//!
//! - Anchors are unique within a document; a duplicate is a hard error
//! - Fenced code blocks are raw zones: heading syntax inside a fence is
//!   snippet content, never structure
//! - An unterminated fence at end of input is a hard error, not a snippet

pub mod builder;
pub mod classify;
pub mod kinds;

use crate::models::Document;
use builder::SectionBuilder;
use classify::LineClassifier;

pub use classify::LineClass;

/// A structural problem in the source document. Never recovered silently:
/// a best-effort tree could render a misleading table of contents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unterminated code fence opened at line {line}")]
    UnterminatedFence { line: usize },
    #[error("duplicate anchor `{anchor}` at line {line}")]
    DuplicateAnchor { anchor: String, line: usize },
    #[error("malformed heading tag at line {line}")]
    MalformedHeading { line: usize },
}

/// Parse a reference document into its section tree.
///
/// Single pass, top to bottom. Headings open sections (nested by level),
/// fenced blocks become snippets of the enclosing section, anything else
/// is skipped.
///
/// ```
/// let doc = refdex_engine::parsing::parse(
///     "## Go\n\n~~~go\nch := make(chan int) // unbuffered\n~~~\n",
/// )
/// .unwrap();
///
/// assert_eq!(doc.sections[0].anchor, "go");
/// assert_eq!(doc.sections[0].snippets[0].lang.as_deref(), Some("go"));
/// ```
pub fn parse(text: &str) -> Result<Document, ParseError> {
    let classifier = LineClassifier;
    let mut builder = SectionBuilder::new();

    for (i, line) in text.lines().enumerate() {
        let lc = classifier.classify(i + 1, line);
        builder.push(&lc)?;
    }

    builder.finish()
}

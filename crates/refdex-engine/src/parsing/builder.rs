use crate::anchors::{AnchorIndex, slugify};
use crate::models::{Document, HeadingStyle, Section, Snippet};

use super::ParseError;
use super::classify::LineClass;
use super::kinds::{CodeFence, FenceKind, heading};

#[derive(Debug)]
enum LeafState {
    None,
    Fence {
        kind: FenceKind,
        lang: Option<String>,
        opened_at: usize,
        lines: Vec<String>,
    },
}

/// Phase 2 of parsing: a state machine that consumes classified lines and
/// assembles the section tree.
///
/// Open sections live on a stack; a new heading closes every section at the
/// same or deeper level before opening. Fences are raw zones: until the
/// matching closer, every line is snippet content.
pub struct SectionBuilder {
    anchors: AnchorIndex,
    stack: Vec<Section>,
    roots: Vec<Section>,
    preamble: Vec<Snippet>,
    leaf: LeafState,
}

impl SectionBuilder {
    pub fn new() -> Self {
        Self {
            anchors: AnchorIndex::new(),
            stack: Vec::new(),
            roots: Vec::new(),
            preamble: Vec::new(),
            leaf: LeafState::None,
        }
    }

    pub fn push(&mut self, c: &LineClass) -> Result<(), ParseError> {
        if matches!(self.leaf, LeafState::Fence { .. }) {
            self.consume_fence_line(c);
            return Ok(());
        }

        if c.is_blank {
            return Ok(());
        }

        if let Some(sig) = c.fence_sig {
            let remainder = c.raw.trim_start();
            self.leaf = LeafState::Fence {
                kind: CodeFence::kind(sig),
                lang: CodeFence::lang(remainder),
                opened_at: c.number,
                lines: Vec::new(),
            };
            return Ok(());
        }

        if let Some(atx) = &c.atx {
            let title = heading::plain_text(&atx.text);
            let anchor = slugify(&title);
            return self.open_section(title, atx.level, anchor, HeadingStyle::Atx, c.number);
        }

        if let Some(html) = &c.html {
            return self.open_section(
                html.text.clone(),
                html.level,
                html.id.clone(),
                HeadingStyle::Html,
                c.number,
            );
        }

        if c.html_open {
            return Err(ParseError::MalformedHeading { line: c.number });
        }

        // Prose is not part of the model; skip it.
        Ok(())
    }

    pub fn finish(mut self) -> Result<Document, ParseError> {
        if let LeafState::Fence { opened_at, .. } = self.leaf {
            return Err(ParseError::UnterminatedFence { line: opened_at });
        }

        while let Some(closed) = self.stack.pop() {
            self.attach(closed);
        }

        Ok(Document {
            preamble: self.preamble,
            sections: self.roots,
        })
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence {
            kind,
            lang,
            opened_at,
            mut lines,
        } = std::mem::replace(&mut self.leaf, LeafState::None)
        else {
            return;
        };

        if CodeFence::closes(kind, c.fence_sig) {
            self.push_snippet(Snippet {
                lang,
                code: lines.join("\n"),
            });
        } else {
            lines.push(c.raw.clone());
            self.leaf = LeafState::Fence {
                kind,
                lang,
                opened_at,
                lines,
            };
        }
    }

    fn open_section(
        &mut self,
        title: String,
        level: u8,
        anchor: String,
        style: HeadingStyle,
        line: usize,
    ) -> Result<(), ParseError> {
        self.anchors.register(&anchor, line)?;

        while self.stack.last().is_some_and(|top| top.level >= level) {
            let Some(closed) = self.stack.pop() else { break };
            self.attach(closed);
        }

        self.stack.push(Section::new(title, level, anchor, style));
        Ok(())
    }

    fn attach(&mut self, closed: Section) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(closed),
            None => self.roots.push(closed),
        }
    }

    fn push_snippet(&mut self, snippet: Snippet) {
        match self.stack.last_mut() {
            Some(section) => section.snippets.push(snippet),
            None => self.preamble.push(snippet),
        }
    }
}

impl Default for SectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

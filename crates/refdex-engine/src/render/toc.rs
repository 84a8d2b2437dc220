use crate::models::{Document, Section};

/// Render the table of contents as a nested markdown bullet list of
/// `[title](#anchor)` links.
///
/// A document with zero sections renders to an empty string.
pub fn render_toc(doc: &Document) -> String {
    let mut out = String::new();
    for section in &doc.sections {
        push_entry(&mut out, section, 0);
    }
    out
}

fn push_entry(out: &mut String, section: &Section, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&format!("- [{}](#{})\n", section.title, section.anchor));
    for child in &section.children {
        push_entry(out, child, depth + 1);
    }
}

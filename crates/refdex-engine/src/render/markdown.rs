use crate::models::{Document, HeadingStyle, Section, Snippet};
use crate::parsing::kinds::CodeFence;

/// Render the document back to markdown, preserving the heading/anchor/fence
/// conventions of the source format so existing links keep working.
///
/// Re-parsing the output reproduces the same section hierarchy.
pub fn render_markdown(doc: &Document) -> String {
    let mut out = String::new();
    for snippet in &doc.preamble {
        push_snippet(&mut out, snippet);
    }
    for section in &doc.sections {
        push_section(&mut out, section);
    }
    out
}

fn push_section(out: &mut String, section: &Section) {
    match section.style {
        HeadingStyle::Atx => {
            out.push_str(&"#".repeat(section.level as usize));
            out.push(' ');
            out.push_str(&section.title);
        }
        HeadingStyle::Html => {
            out.push_str(&format!(
                "<h{level} id=\"{anchor}\">{title}</h{level}>",
                level = section.level,
                anchor = section.anchor,
                title = section.title,
            ));
        }
    }
    out.push_str("\n\n");

    for snippet in &section.snippets {
        push_snippet(out, snippet);
    }
    for child in &section.children {
        push_section(out, child);
    }
}

fn push_snippet(out: &mut String, snippet: &Snippet) {
    // Fall back to tildes when the content itself contains a backtick fence.
    let fence = if snippet
        .code
        .lines()
        .any(|l| l.trim_start().starts_with(CodeFence::BACKTICKS))
    {
        CodeFence::TILDES
    } else {
        CodeFence::BACKTICKS
    };

    out.push_str(fence);
    if let Some(lang) = &snippet.lang {
        out.push_str(lang);
    }
    out.push('\n');
    if !snippet.code.is_empty() {
        out.push_str(&snippet.code);
        out.push('\n');
    }
    out.push_str(fence);
    out.push_str("\n\n");
}

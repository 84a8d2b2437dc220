use crate::models::{Document, Section, Snippet};
use html_escape::encode_text;

/// Render the table of contents and body as an HTML fragment.
///
/// Headings keep their anchors as `<hN id="...">` tags, so links into the
/// source document resolve in the rendered output too.
pub fn render_html(doc: &Document) -> String {
    let mut out = String::new();

    if !doc.sections.is_empty() {
        out.push_str("<ul class=\"toc\">\n");
        for section in &doc.sections {
            push_toc_entry(&mut out, section);
        }
        out.push_str("</ul>\n");
    }

    for snippet in &doc.preamble {
        push_snippet(&mut out, snippet);
    }
    for section in &doc.sections {
        push_section(&mut out, section);
    }

    out
}

fn push_toc_entry(out: &mut String, section: &Section) {
    out.push_str(&format!(
        "<li><a href=\"#{}\">{}</a>",
        section.anchor,
        encode_text(&section.title)
    ));
    if !section.children.is_empty() {
        out.push_str("<ul>");
        for child in &section.children {
            push_toc_entry(out, child);
        }
        out.push_str("</ul>");
    }
    out.push_str("</li>\n");
}

fn push_section(out: &mut String, section: &Section) {
    out.push_str(&format!(
        "<h{level} id=\"{anchor}\">{title}</h{level}>\n",
        level = section.level,
        anchor = section.anchor,
        title = encode_text(&section.title),
    ));
    for snippet in &section.snippets {
        push_snippet(out, snippet);
    }
    for child in &section.children {
        push_section(out, child);
    }
}

fn push_snippet(out: &mut String, snippet: &Snippet) {
    match &snippet.lang {
        Some(lang) => out.push_str(&format!("<pre><code class=\"language-{lang}\">")),
        None => out.push_str("<pre><code>"),
    }
    out.push_str(&encode_text(&snippet.code));
    out.push_str("</code></pre>\n");
}

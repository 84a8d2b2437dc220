use pretty_assertions::assert_eq;
use refdex_engine::parsing::parse;
use refdex_engine::render::{render_html, render_markdown, render_toc};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

#[test]
fn fixture_parses_into_expected_hierarchy() {
    let doc = parse(&load_fixture("syntax_reference")).unwrap();

    assert_eq!(doc.sections.len(), 1);
    let root = &doc.sections[0];
    assert_eq!(root.anchor, "language-syntax-reference");

    let languages: Vec<&str> = root.children.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(languages, vec!["Swift", "Go", "Java"]);

    for language in &root.children {
        assert_eq!(language.children.len(), 2);
        for topic in &language.children {
            assert_eq!(topic.level, 3);
            assert_eq!(topic.snippets.len(), 1);
        }
    }
}

#[test]
fn anchors_resolve_to_their_sections() {
    let doc = parse(&load_fixture("syntax_reference")).unwrap();

    let section = doc.section_by_anchor("go-concurrency").unwrap();
    assert_eq!(section.title, "Concurrency");
    assert_eq!(section.snippets[0].lang.as_deref(), Some("go"));

    assert!(doc.section_by_anchor("rust-lifetimes").is_none());
}

#[test]
fn toc_covers_every_heading_once() {
    let doc = parse(&load_fixture("syntax_reference")).unwrap();
    let toc = render_toc(&doc);

    assert_eq!(toc.lines().count(), doc.section_count());
    insta::assert_snapshot!(toc, @r"
    - [Language Syntax Reference](#language-syntax-reference)
      - [Swift](#swift)
        - [Optionals](#swift-optionals)
        - [Closures](#swift-closures)
      - [Go](#go)
        - [Concurrency](#go-concurrency)
        - [Error handling](#go-errors)
      - [Java](#java)
        - [Records](#java-records)
        - [Streams](#java-streams)
    ");
}

#[test]
fn markdown_roundtrip_reproduces_the_tree() {
    let doc = parse(&load_fixture("syntax_reference")).unwrap();
    let reparsed = parse(&render_markdown(&doc)).unwrap();

    assert_eq!(doc, reparsed);
}

#[test]
fn html_output_keeps_source_anchors() {
    let doc = parse(&load_fixture("syntax_reference")).unwrap();
    let html = render_html(&doc);

    for anchor in [
        "swift-optionals",
        "swift-closures",
        "go-concurrency",
        "go-errors",
        "java-records",
        "java-streams",
    ] {
        assert!(html.contains(&format!("id=\"{anchor}\"")), "missing {anchor}");
    }

    // Snippet content is escaped, not interpreted.
    assert!(html.contains("ch &lt;- 42"));
    assert!(html.contains("n -&gt; n * 2"));
}

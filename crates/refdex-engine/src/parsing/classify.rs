use super::kinds::{AtxHeading, CodeFence, FenceSig, HtmlHeading};

/// Classification of a single line containing only local facts.
///
/// Phase 1 of parsing: each line is classified independently, without
/// reference to surrounding context. The builder decides what the facts
/// mean (a fence sig inside an open fence is content or a closer, etc.).
#[derive(Debug, Clone)]
pub struct LineClass {
    /// 1-based source line number, for error reporting.
    pub number: usize,
    pub is_blank: bool,
    /// The line verbatim, without the trailing newline.
    pub raw: String,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
    /// If the line is an ATX heading.
    pub atx: Option<AtxHeading>,
    /// If the line is a well-formed `<hN id="...">` heading.
    pub html: Option<HtmlHeading>,
    /// If the line starts an `<hN>` tag at all, even a malformed one.
    pub html_open: bool,
}

/// Classifies individual lines for the section building phase.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(&self, number: usize, line: &str) -> LineClass {
        let raw = line.trim_end_matches(['\r', '\n']);
        let remainder = raw.trim_start();

        LineClass {
            number,
            is_blank: remainder.is_empty(),
            raw: raw.to_string(),
            fence_sig: CodeFence::sig(remainder),
            atx: AtxHeading::sig(remainder),
            html: HtmlHeading::parse(remainder),
            html_open: HtmlHeading::looks_like(remainder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> LineClass {
        LineClassifier.classify(1, line)
    }

    #[test]
    fn blank_line() {
        assert!(classify("   ").is_blank);
        assert!(!classify("text").is_blank);
    }

    #[test]
    fn fence_line_is_not_a_heading() {
        let c = classify("```go");
        assert_eq!(c.fence_sig, Some(FenceSig::Backticks));
        assert!(c.atx.is_none());
    }

    #[test]
    fn heading_line_carries_level_and_text() {
        let c = classify("## Go");
        let atx = c.atx.unwrap();
        assert_eq!(atx.level, 2);
        assert_eq!(atx.text, "Go");
    }

    #[test]
    fn anchored_tag_is_both_open_and_well_formed() {
        let c = classify(r#"<h3 id="go-concurrency">Concurrency</h3>"#);
        assert!(c.html_open);
        assert_eq!(c.html.unwrap().id, "go-concurrency");
    }

    #[test]
    fn malformed_tag_is_open_but_not_well_formed() {
        let c = classify("<h3>No anchor</h3>");
        assert!(c.html_open);
        assert!(c.html.is_none());
    }

    #[test]
    fn raw_preserves_indentation() {
        let c = classify("    indented := true\n");
        assert_eq!(c.raw, "    indented := true");
    }
}

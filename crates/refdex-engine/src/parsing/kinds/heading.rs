use pulldown_cmark::{Event, Parser};

/// An ATX heading (`# Title` … `###### Title`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtxHeading {
    pub level: u8,
    /// Raw heading text, inline markup not yet stripped.
    pub text: String,
}

impl AtxHeading {
    pub fn sig(remainder: &str) -> Option<Self> {
        let hashes = remainder.bytes().take_while(|&b| b == b'#').count();
        if hashes == 0 || hashes > 6 {
            return None;
        }
        // "#tag" is not a heading, and neither is a bare "#"
        let rest = remainder[hashes..].strip_prefix(' ')?;
        let text = rest.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            level: hashes as u8,
            text: text.to_string(),
        })
    }
}

/// Strip inline markup from heading text (`**Bold** title` → `Bold title`)
/// so titles and derived anchors are stable regardless of emphasis.
pub fn plain_text(raw: &str) -> String {
    let mut out = String::new();
    for event in Parser::new(raw) {
        match event {
            Event::Text(t) | Event::Code(t) => out.push_str(&t),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            _ => {}
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Swift", 1, "Swift")]
    #[case("## Control Flow", 2, "Control Flow")]
    #[case("###### Deep", 6, "Deep")]
    fn detect_atx_heading(#[case] line: &str, #[case] level: u8, #[case] text: &str) {
        let h = AtxHeading::sig(line).unwrap();
        assert_eq!(h.level, level);
        assert_eq!(h.text, text);
    }

    #[rstest]
    #[case("#not-a-heading")]
    #[case("####### Too deep")]
    #[case("# ")]
    #[case("plain prose")]
    fn reject_non_headings(#[case] line: &str) {
        assert_eq!(AtxHeading::sig(line), None);
    }

    #[rstest]
    #[case("**Bold** title", "Bold title")]
    #[case("`defer` statement", "defer statement")]
    #[case("plain", "plain")]
    #[case("[linked](https://example.com) title", "linked title")]
    fn strips_inline_markup(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(plain_text(raw), expected);
    }
}

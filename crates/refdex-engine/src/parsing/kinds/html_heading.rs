use regex::Regex;
use std::sync::OnceLock;

static TAG_OPEN: OnceLock<Regex> = OnceLock::new();
static TAG_FULL: OnceLock<Regex> = OnceLock::new();

/// A heading written as a single-line HTML tag with an explicit anchor,
/// e.g. `<h3 id="go-concurrency">Concurrency</h3>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlHeading {
    pub level: u8,
    pub id: String,
    pub text: String,
}

impl HtmlHeading {
    /// Whether the line starts an `<hN>` tag at all, well-formed or not.
    /// Used to distinguish a malformed heading from ordinary prose.
    pub fn looks_like(remainder: &str) -> bool {
        let re = TAG_OPEN
            .get_or_init(|| Regex::new(r"^<h[1-6][\s>/]").expect("invalid heading open regex"));
        re.is_match(remainder)
    }

    /// Parse a well-formed heading tag. Requires a non-empty id attribute
    /// and a matching close tag on the same line.
    pub fn parse(remainder: &str) -> Option<Self> {
        let re = TAG_FULL.get_or_init(|| {
            Regex::new(r#"^<h([1-6])\s+id="([^"]*)"\s*>(.*)</h([1-6])>\s*$"#)
                .expect("invalid heading regex")
        });
        let caps = re.captures(remainder)?;
        let level: u8 = caps[1].parse().ok()?;
        let close: u8 = caps[4].parse().ok()?;
        if level != close || caps[2].is_empty() {
            return None;
        }
        Some(Self {
            level,
            id: caps[2].to_string(),
            text: caps[3].trim().to_string(),
        })
    }
}

use crate::models::Document;

/// Serialize the parsed document tree as pretty-printed JSON.
pub fn render_json(doc: &Document) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;

    #[test]
    fn json_carries_the_whole_tree() {
        let doc = parse("# Go\n\n```go\npackage main\n```\n").unwrap();
        let json = render_json(&doc).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sections"][0]["anchor"], "go");
        assert_eq!(value["sections"][0]["style"], "Atx");
        assert_eq!(value["sections"][0]["snippets"][0]["lang"], "go");
    }
}

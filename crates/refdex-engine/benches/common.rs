// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_reference_content(topics: usize) -> String {
    let mut content = String::from("# Generated Reference\n\n");

    for i in 0..topics {
        content.push_str(&format!("## Topic {i}\n\n"));
        content.push_str(&format!("<h3 id=\"topic-{i}-example\">Example</h3>\n\n"));
        content.push_str("```go\nfunc example() {\n    fmt.Println(\"hi\") // greet\n}\n```\n\n");
    }

    content
}

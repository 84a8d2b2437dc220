pub mod anchors;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use anchors::{AnchorIndex, slugify};
pub use io::*;
pub use models::{Document, HeadingStyle, ReferenceFile, Section, Snippet};
pub use parsing::{ParseError, parse};
pub use render::{render_html, render_json, render_markdown, render_toc};

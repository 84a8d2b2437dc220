pub mod document;
pub mod reference_file;

pub use document::{Document, HeadingStyle, Section, Snippet};
pub use reference_file::ReferenceFile;

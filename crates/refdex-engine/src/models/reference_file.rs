use relative_path::{RelativePath, RelativePathBuf};

/// A reference document on disk, addressed relative to the docs root,
/// with a display-friendly name for list panels.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl ReferenceFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without the .md extension, for list panels and titles.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_name()
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .unwrap_or("Untitled")
            .to_string()
    }
}

impl From<RelativePathBuf> for ReferenceFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for ReferenceFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

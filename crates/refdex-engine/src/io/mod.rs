use crate::models::{Document, ReferenceFile};
use crate::parsing;
use anyhow::Context;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid docs directory: {0}")]
    InvalidDocsDir(String),
}

/// Read a reference document and return its content
pub fn read_file(relative_path: &RelativePath, docs_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(docs_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Read and parse a reference document in one step
pub fn load_document(relative_path: &RelativePath, docs_root: &Path) -> anyhow::Result<Document> {
    let content = read_file(relative_path, docs_root)?;
    let document = parsing::parse(&content)
        .with_context(|| format!("failed to parse reference document {relative_path}"))?;
    Ok(document)
}

/// Scan for reference documents in the docs directory
pub fn scan_reference_files(docs_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !docs_root.exists() {
        return Err(IoError::InvalidDocsDir(
            "docs directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(docs_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// List reference documents as display-friendly entries, sorted by path
pub fn list_reference_files(docs_root: &Path) -> Result<Vec<ReferenceFile>, IoError> {
    let files = scan_reference_files(docs_root)?;
    Ok(files
        .iter()
        .filter_map(|path| path.strip_prefix(docs_root).ok())
        .map(|relative| {
            ReferenceFile::new(RelativePathBuf::from(
                relative.to_string_lossy().replace('\\', "/"),
            ))
        })
        .collect())
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_docs_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

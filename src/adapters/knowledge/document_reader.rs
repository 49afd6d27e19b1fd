//! Reads knowledge documents from the docs folder.
//!
//! Only files directly inside the folder are considered. PDFs go through
//! `pdf-extract`; `.txt` and `.md` files are read as UTF-8.

use std::path::{Path, PathBuf};

use futures::future::try_join_all;

use crate::domain::knowledge::Document;
use crate::ports::KnowledgeError;

/// Reader for the configured documents folder.
#[derive(Debug, Clone)]
pub struct DocumentReader {
    docs_path: PathBuf,
}

impl DocumentReader {
    pub fn new(docs_path: impl Into<PathBuf>) -> Self {
        Self {
            docs_path: docs_path.into(),
        }
    }

    pub fn docs_path(&self) -> &Path {
        &self.docs_path
    }

    /// Supported files in the folder, sorted by file name.
    pub fn list_sources(&self) -> Result<Vec<PathBuf>, KnowledgeError> {
        let entries = std::fs::read_dir(&self.docs_path).map_err(|e| KnowledgeError::DocsFolder {
            path: self.docs_path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut sources: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && SourceKind::of(path).is_some())
            .collect();
        sources.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(sources)
    }

    /// Extracts the text of every supported file.
    ///
    /// Extraction runs on the blocking pool. The first unreadable file fails
    /// the whole read.
    pub async fn read_all(&self) -> Result<Vec<Document>, KnowledgeError> {
        let sources = self.list_sources()?;
        tracing::info!(
            path = %self.docs_path.display(),
            files = sources.len(),
            "reading knowledge documents"
        );

        let reads = sources.into_iter().map(|path| async move {
            let file = file_name(&path);
            tokio::task::spawn_blocking(move || read_document(&path))
                .await
                .map_err(|e| KnowledgeError::Document {
                    name: file,
                    message: e.to_string(),
                })?
        });

        try_join_all(reads).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    Pdf,
    Text,
}

impl SourceKind {
    fn of(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(SourceKind::Pdf),
            "txt" | "md" => Some(SourceKind::Text),
            _ => None,
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn read_document(path: &Path) -> Result<Document, KnowledgeError> {
    let failed = |message: String| KnowledgeError::Document {
        name: file_name(path),
        message,
    };

    let content = match SourceKind::of(path) {
        Some(SourceKind::Pdf) => {
            pdf_extract::extract_text(path).map_err(|e| failed(e.to_string()))?
        }
        Some(SourceKind::Text) => std::fs::read_to_string(path).map_err(|e| failed(e.to_string()))?,
        None => return Err(failed("unsupported file type".to_string())),
    };

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name(path));

    Ok(Document::new(name, content))
}

//! Directory ingestion for the CI entry point.
//!
//! The engine only ever sees two flat strings; this collector builds one of
//! them by concatenating every matching file under a directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::DirEntry;

use crate::config::IngestSettings;
use crate::error::{Error, Result};
use crate::types::{TextKind, TextUnit};

/// Concatenated text of one side plus the files it came from.
#[derive(Debug, Clone)]
pub struct CollectedText {
    pub kind: TextKind,
    pub text: String,
    pub files: Vec<PathBuf>,
    /// Files that matched by extension but could not be read or were not valid text.
    pub skipped: Vec<PathBuf>,
}

impl CollectedText {
    pub fn empty(kind: TextKind) -> Self {
        Self { kind, text: String::new(), files: Vec::new(), skipped: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn into_unit(self) -> TextUnit {
        TextUnit::new(self.kind, self.text)
    }
}

#[derive(Default)]
pub struct SourceCollector {
    settings: IngestSettings,
}

impl SourceCollector {
    pub fn new(settings: IngestSettings) -> Self {
        Self { settings }
    }

    pub fn collect(&self, root: &Path, kind: TextKind) -> Result<CollectedText> {
        if !root.is_dir() {
            return Err(Error::NotFound(format!("{} directory {}", kind, root.display())));
        }
        let collected = read_all(kind, self.list_files(root, kind));
        debug!(
            %kind,
            files = collected.files.len(),
            skipped = collected.skipped.len(),
            bytes = collected.text.len(),
            "collected sources"
        );
        Ok(collected)
    }

    fn list_files(&self, root: &Path, kind: TextKind) -> Vec<PathBuf> {
        let extensions = match kind {
            TextKind::Code => &self.settings.code_extensions,
            TextKind::Doc => &self.settings.doc_extensions,
        };
        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_excluded(e))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "skipping entry that could not be walked");
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .and_then(|s| s.to_str())
                    .is_some_and(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
            })
            .map(|e| e.path().to_path_buf())
            .collect();
        files.sort();
        files
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.settings.excluded_dirs.iter().any(|ex| ex == name))
    }
}

/// Concatenate `files` in order. Unreadable and non-text files are skipped with a warning.
fn read_all(kind: TextKind, files: Vec<PathBuf>) -> CollectedText {
    let mut collected = CollectedText::empty(kind);
    for path in files {
        match read_text(&path) {
            Ok(Some(content)) => {
                collected.text.push_str(&content);
                collected.text.push('\n');
                collected.files.push(path);
            }
            Ok(None) => {
                warn!(path = %path.display(), "skipping file that is not UTF-8 text");
                collected.skipped.push(path);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable file");
                collected.skipped.push(path);
            }
        }
    }
    collected
}

/// `Ok(None)` for content that is not text (invalid UTF-8 or NUL bytes).
fn read_text(path: &Path) -> Result<Option<String>> {
    let bytes = fs::read(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    if bytes.contains(&0) {
        return Ok(None);
    }
    Ok(String::from_utf8(bytes).ok())
}

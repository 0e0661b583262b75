//! File intake: turning caller-supplied handles or a directory into a worklist

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use nextshift_router::{normalize_file_path, split_extension};
use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::IntakeConfig;
use crate::error::AnalyzerError;
use crate::source::{ContentSource, FileContent, MemoryContent};

/// How many file names a [`FileTypeSummary`] lists before collapsing the rest
const SUMMARY_SAMPLE: usize = 5;

/// Extension bucket for files without one
const UNKNOWN_EXTENSION: &str = "unknown";

/// A project file handed to the analyzer
///
/// The pipeline never mutates it; content is only pulled through `read_text`.
#[derive(Clone)]
pub struct SourceFile {
    /// Path relative to the project root, forward slashes
    pub name: String,
    /// Extension without the dot, empty when the file has none
    pub extension: String,
    content: Arc<dyn ContentSource>,
}

impl SourceFile {
    pub fn new(name: impl AsRef<str>, content: Arc<dyn ContentSource>) -> Self {
        let name = normalize_file_path(name.as_ref()).into_owned();
        let extension = split_extension(file_name_of(&name))
            .1
            .unwrap_or("")
            .to_string();

        Self {
            name,
            extension,
            content,
        }
    }

    /// File backed by bytes the caller already holds
    pub fn in_memory(name: impl AsRef<str>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(name, Arc::new(MemoryContent::new(bytes)))
    }

    /// File on disk, named relative to `root`
    pub fn from_path(root: &Path, path: &Path) -> Self {
        let relative = path.strip_prefix(root).unwrap_or(path);
        Self::new(
            relative.to_string_lossy(),
            Arc::new(FileContent::new(path)),
        )
    }

    /// Last path segment of `name`
    pub fn file_name(&self) -> &str {
        file_name_of(&self.name)
    }

    /// Read the content and decode it as UTF-8 text
    pub async fn read_text(&self) -> Result<String, AnalyzerError> {
        let bytes = self
            .content
            .read()
            .await
            .map_err(|e| AnalyzerError::ContentRead {
                name: self.name.clone(),
                reason: e.to_string(),
            })?;

        String::from_utf8(bytes).map_err(|e| AnalyzerError::ContentRead {
            name: self.name.clone(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("extension", &self.extension)
            .field("content", &self.content.name())
            .finish()
    }
}

fn file_name_of(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Ordered worklist of source files
///
/// Caller-supplied files keep their order; directory walks are sorted by
/// file name at every level so repeated runs see the same sequence.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    files: Vec<SourceFile>,
}

impl FileSet {
    pub fn new(files: Vec<SourceFile>) -> Self {
        Self { files }
    }

    /// Walk a project directory, skipping ignored directories
    pub fn from_dir(root: impl AsRef<Path>, config: &IntakeConfig) -> Result<Self, AnalyzerError> {
        let root = root.as_ref();
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !config.is_ignored(entry.file_name()));

        for entry in walker {
            let entry = entry.map_err(|source| AnalyzerError::Walk {
                root: root.to_path_buf(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            if files.len() >= config.max_files {
                warn!(
                    "Stopping intake of {:?} at {} files (max_files)",
                    root, config.max_files
                );
                break;
            }

            files.push(SourceFile::from_path(root, entry.path()));
        }

        debug!("Collected {} files from {:?}", files.len(), root);
        Ok(Self { files })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceFile> {
        self.files.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|file| file.name.as_str())
    }

    /// Per-extension counts, in order of first appearance
    pub fn type_summary(&self) -> FileTypeSummary {
        let mut by_extension: Vec<(String, usize)> = Vec::new();

        for file in &self.files {
            let ext = if file.extension.is_empty() {
                UNKNOWN_EXTENSION
            } else {
                file.extension.as_str()
            };

            match by_extension.iter_mut().find(|(seen, _)| seen == ext) {
                Some((_, count)) => *count += 1,
                None => by_extension.push((ext.to_string(), 1)),
            }
        }

        FileTypeSummary {
            total: self.files.len(),
            by_extension,
            sample: self
                .names()
                .take(SUMMARY_SAMPLE)
                .map(str::to_string)
                .collect(),
        }
    }
}

impl FromIterator<SourceFile> for FileSet {
    fn from_iter<I: IntoIterator<Item = SourceFile>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a SourceFile;
    type IntoIter = std::slice::Iter<'a, SourceFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Overview of a selection: how many files, which kinds, a few names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTypeSummary {
    pub total: usize,
    pub by_extension: Vec<(String, usize)>,
    pub sample: Vec<String>,
}

impl FileTypeSummary {
    /// Files not listed in `sample`
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.sample.len())
    }
}

impl fmt::Display for FileTypeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.total == 1 { "file" } else { "files" };
        writeln!(f, "{} {} selected", self.total, noun)?;

        let types = self
            .by_extension
            .iter()
            .map(|(ext, count)| format!("{count} {ext}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "Types: {types}")?;

        for name in &self.sample {
            writeln!(f, "  {name}")?;
        }

        if self.remaining() > 0 {
            writeln!(f, "  + {} more files", self.remaining())?;
        }

        Ok(())
    }
}

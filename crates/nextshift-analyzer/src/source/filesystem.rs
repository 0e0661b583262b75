//! Filesystem content backend

use crate::source::ContentSource;
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use tokio::fs;

/// Filesystem content backend
///
/// Nothing is touched on disk until `read` is called.
#[derive(Debug, Clone)]
pub struct FileContent {
    path: PathBuf,
}

impl FileContent {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileContent {
    async fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path).await
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}

//! In-memory content backend

use crate::source::ContentSource;
use async_trait::async_trait;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory content backend
///
/// Holds bytes handed over by the caller, such as an uploaded file.
/// Counts reads so callers can check how often content was pulled.
#[derive(Clone)]
pub struct MemoryContent {
    bytes: Arc<[u8]>,
    reads: Arc<AtomicUsize>,
}

impl MemoryContent {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes: Vec<u8> = bytes.into();
        Self {
            bytes: Arc::from(bytes),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `read` has been called
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[async_trait]
impl ContentSource for MemoryContent {
    async fn read(&self) -> io::Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.bytes.to_vec())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_content_read() {
        let content = MemoryContent::new("export default function Page() {}");

        let bytes = content.read().await.unwrap();
        assert_eq!(bytes, b"export default function Page() {}");
        assert_eq!(content.read_count(), 1);
    }

    #[tokio::test]
    async fn test_memory_content_clones_share_counter() {
        let content = MemoryContent::new(vec![0xff, 0xfe]);
        let clone = content.clone();

        clone.read().await.unwrap();
        assert_eq!(content.read_count(), 1);
        assert_eq!(content.len(), 2);
    }
}

//! Lazily-read file content

use async_trait::async_trait;
use std::io;

pub mod filesystem;
pub mod memory;

pub use filesystem::FileContent;
pub use memory::MemoryContent;

/// Trait for the backing store of a source file's bytes
///
/// Reads are side-effect free; the analyzer calls `read` at most once per file.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Read the full content
    async fn read(&self) -> io::Result<Vec<u8>>;

    /// Get content backend name
    fn name(&self) -> &'static str;
}

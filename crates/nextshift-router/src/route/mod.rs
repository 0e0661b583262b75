/// Route module for file-system routes
///
/// Contains pure components for segment classification and route parsing:
/// - Pure functions (same input → same output)
/// - Immutable data structures
/// - Pattern matching for control flow

pub mod parser;
pub mod pattern;

// Re-export commonly used types
pub use parser::{parse_pattern, ParsedPattern};
pub use pattern::{classify_segment, SegmentKind, CATCH_ALL_MARKER};

/// Pattern parsing for route files
///
/// Pure functional parsers that transform a route file's path (relative to the
/// routes directory, extension already removed) into its URL pattern.
/// All functions are **pure**: same input → same output, no side effects.

use crate::error::RouteError;
use super::pattern::{classify_segment, SegmentKind};

/// Result of parsing one route path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    /// URL pattern in Next.js syntax, like `/products/[id]`
    pub source_path: String,
    /// Parameter names in path order, catch-all marker kept (`...slug`)
    pub params: Vec<String>,
    /// Highest segment weight (1 for fully static routes)
    pub complexity: u32,
}

impl ParsedPattern {
    /// Whether any segment binds a parameter
    pub fn is_dynamic(&self) -> bool {
        !self.params.is_empty()
    }
}

/// Internal state accumulator for fold-based parsing
///
/// All mutations are local to the fold accumulator.
#[derive(Default)]
struct ParseState {
    pattern: String,
    params: Vec<String>,
    complexity: u32,
}

impl ParseState {
    /// Appends a classified segment to the pattern
    fn with_segment(mut self, raw: &str, kind: SegmentKind) -> Self {
        self.pattern.push('/');
        self.pattern.push_str(raw);

        if let Some(param) = kind.param() {
            self.params.push(param);
        }

        self.complexity = self.complexity.max(kind.weight());
        self
    }

    /// Finalizes the pattern, handling the root route
    fn finalize(mut self) -> ParsedPattern {
        if self.pattern.is_empty() {
            self.pattern = "/".to_string();
        }

        ParsedPattern {
            source_path: self.pattern,
            params: self.params,
            complexity: self.complexity.max(1),
        }
    }
}

/// Checks if a segment should be skipped during parsing
///
/// Empty segments, route groups and parallel slots never reach the URL.
fn should_skip_segment(segment: &str) -> bool {
    segment.is_empty()
        || segment == "."
        || (segment.starts_with('(') && segment.ends_with(')')) // Route groups
        || segment.starts_with('@') // Parallel route slots
}

/// Processes a single segment and updates the parse state
fn process_segment(state: ParseState, segment: &str) -> Result<ParseState, RouteError> {
    if should_skip_segment(segment) {
        return Ok(state);
    }

    let kind = classify_segment(segment)?;
    Ok(state.with_segment(segment, kind))
}

/// Parses a route path into its URL pattern (pure function)
///
/// # Examples
///
/// ```
/// use nextshift_router::route::parser::parse_pattern;
///
/// let parsed = parse_pattern("products/[id]").unwrap();
/// assert_eq!(parsed.source_path, "/products/[id]");
/// assert_eq!(parsed.params, vec!["id".to_string()]);
/// assert_eq!(parsed.complexity, 3);
///
/// let parsed = parse_pattern("").unwrap();
/// assert_eq!(parsed.source_path, "/");
/// assert!(!parsed.is_dynamic());
/// ```
///
/// # Errors
///
/// Returns [`RouteError::MalformedSegment`] carrying the whole path when any
/// segment has invalid bracket syntax.
pub fn parse_pattern(path: &str) -> Result<ParsedPattern, RouteError> {
    path.split('/')
        .try_fold(ParseState::default(), process_segment)
        .map(ParseState::finalize)
        .map_err(|e| e.in_path(path))
}

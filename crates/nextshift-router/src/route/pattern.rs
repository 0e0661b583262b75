/// Segment classification for Next.js file-system routes
///
/// Pure parsing of a single path segment into a typed shape.
/// All functions are **pure**: same input → same output, no side effects.

use crate::error::RouteError;

/// Marker that prefixes a catch-all parameter name inside brackets
pub const CATCH_ALL_MARKER: &str = "...";

/// Represents the shape of one route path segment
///
/// # Examples
///
/// ```
/// use nextshift_router::route::pattern::{classify_segment, SegmentKind};
///
/// assert_eq!(classify_segment("about"), Ok(SegmentKind::Static("about".into())));
/// assert_eq!(classify_segment("[id]"), Ok(SegmentKind::Dynamic("id".into())));
/// assert_eq!(classify_segment("[...slug]"), Ok(SegmentKind::CatchAll("slug".into())));
/// assert_eq!(
///     classify_segment("[[...slug]]"),
///     Ok(SegmentKind::OptionalCatchAll("slug".into()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// Plain text segment: `about`
    Static(String),
    /// Named parameter: `[id]`
    Dynamic(String),
    /// Remainder of the path, one or more segments: `[...slug]`
    CatchAll(String),
    /// Remainder of the path, zero or more segments: `[[...slug]]`
    OptionalCatchAll(String),
}

impl SegmentKind {
    /// Whether this segment binds a parameter
    pub fn is_dynamic(&self) -> bool {
        !matches!(self, SegmentKind::Static(_))
    }

    /// Parameter name as written in the route file, catch-all marker included
    ///
    /// `[id]` → `id`, `[...slug]` and `[[...slug]]` → `...slug`.
    pub fn param(&self) -> Option<String> {
        match self {
            SegmentKind::Static(_) => None,
            SegmentKind::Dynamic(name) => Some(name.clone()),
            SegmentKind::CatchAll(name) | SegmentKind::OptionalCatchAll(name) => {
                Some(format!("{CATCH_ALL_MARKER}{name}"))
            }
        }
    }

    /// Ordinal migration weight of this segment shape
    pub fn weight(&self) -> u32 {
        match self {
            SegmentKind::Static(_) => 1,
            SegmentKind::Dynamic(_) => 3,
            SegmentKind::CatchAll(_) => 5,
            SegmentKind::OptionalCatchAll(_) => 7,
        }
    }

    /// React Router spelling of this segment
    pub fn translated(&self) -> String {
        match self {
            SegmentKind::Static(text) => text.clone(),
            SegmentKind::Dynamic(name) => format!(":{name}"),
            SegmentKind::CatchAll(_) | SegmentKind::OptionalCatchAll(_) => "*".to_string(),
        }
    }
}

/// Classifies a segment into its shape (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional catch-all**: `[[...name]]`
/// 2. **Catch-all**: `[...name]`
/// 3. **Dynamic**: `[name]`
/// 4. **Static**: text without any bracket
///
/// Anything else that contains `[` or `]` is rejected, as is a bracketed
/// segment with an empty name.
pub fn classify_segment(segment: &str) -> Result<SegmentKind, RouteError> {
    let malformed = || RouteError::malformed(segment, segment);

    if !segment.contains(['[', ']']) {
        return Ok(SegmentKind::Static(segment.to_string()));
    }

    // Double brackets only ever wrap an optional catch-all
    if let Some(inner) = segment
        .strip_prefix("[[")
        .and_then(|s| s.strip_suffix("]]"))
    {
        return inner
            .strip_prefix(CATCH_ALL_MARKER)
            .and_then(param_name)
            .map(|name| SegmentKind::OptionalCatchAll(name.to_string()))
            .ok_or_else(malformed);
    }

    let inner = segment
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(malformed)?;

    match inner.strip_prefix(CATCH_ALL_MARKER) {
        Some(rest) => param_name(rest)
            .map(|name| SegmentKind::CatchAll(name.to_string()))
            .ok_or_else(malformed),
        None => param_name(inner)
            .map(|name| SegmentKind::Dynamic(name.to_string()))
            .ok_or_else(malformed),
    }
}

/// Accepts a bracket body as a parameter name
///
/// Names must be non-empty and free of brackets, dots-only runs and whitespace.
fn param_name(raw: &str) -> Option<&str> {
    let valid = !raw.is_empty()
        && !raw.starts_with('.')
        && !raw.contains(['[', ']'])
        && !raw.chars().any(char::is_whitespace);

    valid.then_some(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        let seg = classify_segment("about").unwrap();
        assert_eq!(seg, SegmentKind::Static("about".to_string()));
        assert!(!seg.is_dynamic());
        assert_eq!(seg.param(), None);
    }

    #[test]
    fn test_classify_dynamic() {
        let seg = classify_segment("[id]").unwrap();
        assert_eq!(seg, SegmentKind::Dynamic("id".to_string()));
        assert_eq!(seg.param(), Some("id".to_string()));
        assert_eq!(seg.translated(), ":id");
    }

    #[test]
    fn test_classify_catch_all() {
        let seg = classify_segment("[...slug]").unwrap();
        assert_eq!(seg, SegmentKind::CatchAll("slug".to_string()));
        assert_eq!(seg.param(), Some("...slug".to_string()));
        assert_eq!(seg.translated(), "*");
    }

    #[test]
    fn test_classify_optional_catch_all() {
        let seg = classify_segment("[[...params]]").unwrap();
        assert_eq!(seg, SegmentKind::OptionalCatchAll("params".to_string()));
        assert_eq!(seg.param(), Some("...params".to_string()));
        assert_eq!(seg.translated(), "*");
    }

    #[test]
    fn test_weights_are_ordered_by_shape() {
        let weights: Vec<u32> = ["about", "[id]", "[...slug]", "[[...slug]]"]
            .iter()
            .map(|s| classify_segment(s).unwrap().weight())
            .collect();
        assert_eq!(weights, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_rejects_malformed_segments() {
        for segment in [
            "[id", "id]", "[]", "[...]", "[[id]]", "[[...]]", "x[id]", "[id]x", "[[...a]", "[a b]",
            "[[[...a]]]", "[....a]",
        ] {
            assert!(
                matches!(classify_segment(segment), Err(RouteError::MalformedSegment { .. })),
                "expected {segment:?} to be rejected"
            );
        }
    }
}

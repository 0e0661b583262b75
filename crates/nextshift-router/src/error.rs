use thiserror::Error;

/// Errors raised while reading Next.js route syntax
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A segment uses brackets but is not `[name]`, `[...name]` or `[[...name]]`
    #[error("malformed route segment `{segment}` in `{path}`")]
    MalformedSegment { path: String, segment: String },
}

impl RouteError {
    pub(crate) fn malformed(path: impl Into<String>, segment: impl Into<String>) -> Self {
        RouteError::MalformedSegment {
            path: path.into(),
            segment: segment.into(),
        }
    }

    /// Re-anchors the error on the full path that was being processed
    pub(crate) fn in_path(self, path: &str) -> Self {
        match self {
            RouteError::MalformedSegment { segment, .. } => RouteError::malformed(path, segment),
        }
    }

    /// The offending segment
    pub fn segment(&self) -> &str {
        match self {
            RouteError::MalformedSegment { segment, .. } => segment,
        }
    }
}

//! Advisory warnings for routes whose translation loses information

use serde::Serialize;

use crate::route::CATCH_ALL_MARKER;
use crate::RouteDescriptor;

/// Opening of an optional catch-all segment in Next.js syntax
const OPTIONAL_CATCH_ALL_OPEN: &str = "[[";

pub const CATCH_ALL_WARNING: &str =
    "catch-all routes require a wildcard-based equivalent, not a named parameter.";

pub const OPTIONAL_CATCH_ALL_WARNING: &str =
    "optional catch-all routes require explicit handling for the parameter-absent case.";

/// A single advisory attached to a route at report time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Lists the follow-ups a route needs after translation
///
/// Warnings never block translation. An optional catch-all triggers both
/// messages since it is also a catch-all.
///
/// # Examples
///
/// ```
/// use nextshift_router::{warnings_for, RouteDescriptor, RouteConvention};
///
/// let route = RouteDescriptor::from_path("pages/about.tsx", "pages", RouteConvention::Pages).unwrap();
/// assert!(warnings_for(&route).is_empty());
///
/// let route = RouteDescriptor::from_path("pages/shop/[[...params]].tsx", "pages", RouteConvention::Pages).unwrap();
/// assert_eq!(warnings_for(&route).len(), 2);
/// ```
pub fn warnings_for(route: &RouteDescriptor) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if !route.is_dynamic {
        return warnings;
    }

    if route.params.iter().any(|p| p.contains(CATCH_ALL_MARKER)) {
        warnings.push(Warning::new(CATCH_ALL_WARNING));
    }

    if route.source_path.contains(OPTIONAL_CATCH_ALL_OPEN) {
        warnings.push(Warning::new(OPTIONAL_CATCH_ALL_WARNING));
    }

    warnings
}

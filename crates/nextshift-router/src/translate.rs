//! Next.js → React Router path translation

use crate::error::RouteError;
use crate::route::classify_segment;

/// Translates a Next.js route path into React Router syntax
///
/// Each `/`-separated segment is classified on its own, so the shapes are
/// matched from most to least specific: `[[...name]]` → `*`,
/// `[...name]` → `*`, `[name]` → `:name`. Everything else passes through,
/// including empty segments, so slashes are preserved exactly.
///
/// # Examples
///
/// ```
/// use nextshift_router::translate;
///
/// assert_eq!(translate("/products/[id]").unwrap(), "/products/:id");
/// assert_eq!(translate("/category/[...slug]").unwrap(), "/category/*");
/// assert_eq!(translate("/shop/[[...params]]").unwrap(), "/shop/*");
/// assert_eq!(translate("/about").unwrap(), "/about");
/// ```
///
/// # Errors
///
/// [`RouteError::MalformedSegment`] when a segment contains brackets in any
/// other arrangement.
pub fn translate(path: &str) -> Result<String, RouteError> {
    path.split('/')
        .map(|segment| classify_segment(segment).map(|kind| kind.translated()))
        .collect::<Result<Vec<_>, _>>()
        .map(|segments| segments.join("/"))
        .map_err(|e| e.in_path(path))
}

/// Translates a batch of paths, one result per input
///
/// A malformed path only fails its own entry.
pub fn translate_all<'a, I>(paths: I) -> Vec<Result<String, RouteError>>
where
    I: IntoIterator<Item = &'a str>,
{
    paths.into_iter().map(translate).collect()
}

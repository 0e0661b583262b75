/// File path utilities for validation and normalization
///
/// Route files arrive from drag-and-drop lists, directory walks on any
/// platform, or hand-written fixtures. These helpers bring them to one
/// relative, forward-slash form before any route parsing happens.
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a relative file path is in canonical form
///
/// # Rules
///
/// - Must not be empty
/// - Must not start or end with `/`
/// - Must not contain `//`, `\` or a `.` segment
///
/// # Examples
///
/// ```
/// use nextshift_router::path::is_canonical_file_path;
///
/// assert!(is_canonical_file_path("pages/about.tsx"));
/// assert!(is_canonical_file_path("pages/[id].tsx"));
///
/// assert!(!is_canonical_file_path(""));
/// assert!(!is_canonical_file_path("/pages/about.tsx"));
/// assert!(!is_canonical_file_path("pages//about.tsx"));
/// assert!(!is_canonical_file_path("pages\\about.tsx"));
/// assert!(!is_canonical_file_path("./pages/about.tsx"));
/// ```
pub fn is_canonical_file_path(path: &str) -> bool {
    if path.is_empty() || path.starts_with('/') || path.ends_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    !path.split('/').any(|segment| segment == ".")
}

/// Normalize a file path to canonical relative form
///
/// Returns `Cow::Borrowed` when input is already canonical (zero allocations).
/// Returns `Cow::Owned` when normalization is needed (single allocation).
///
/// # Handles
///
/// - Backslashes: `pages\blog\[slug].tsx` → `pages/blog/[slug].tsx`
/// - Leading and trailing slashes: `/pages/about.tsx/` → `pages/about.tsx`
/// - Empty and `.` segments: `./pages//about.tsx` → `pages/about.tsx`
///
/// # Examples
///
/// ```
/// use nextshift_router::path::normalize_file_path;
/// use std::borrow::Cow;
///
/// let path = normalize_file_path("pages/about.tsx");
/// assert!(matches!(path, Cow::Borrowed("pages/about.tsx")));
///
/// assert_eq!(normalize_file_path("pages\\blog\\[slug].tsx"), "pages/blog/[slug].tsx");
/// assert_eq!(normalize_file_path("./pages//about.tsx"), "pages/about.tsx");
/// ```
pub fn normalize_file_path(path: &str) -> Cow<'_, str> {
    if is_canonical_file_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect::<Vec<_>>()
        .join("/");

    Cow::Owned(normalized)
}

/// Splits a file name into stem and extension
///
/// The extension is only recognised after the last `]`, so a bare bracket
/// segment such as `[...slug]` keeps its dots.
///
/// # Examples
///
/// ```
/// use nextshift_router::path::split_extension;
///
/// assert_eq!(split_extension("[...slug].tsx"), ("[...slug]", Some("tsx")));
/// assert_eq!(split_extension("[...slug]"), ("[...slug]", None));
/// assert_eq!(split_extension("Makefile"), ("Makefile", None));
/// ```
pub fn split_extension(file_name: &str) -> (&str, Option<&str>) {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() && !ext.contains(']') => {
            (stem, Some(ext))
        }
        _ => (file_name, None),
    }
}

//! # nextshift router
//!
//! Reads Next.js file-system routes and rewrites them for React Router:
//! - Static routes (`pages/about.tsx` → `/about`)
//! - Dynamic segments (`[id]` → `:id`)
//! - Catch-all segments (`[...slug]` → `*`)
//! - Optional catch-all segments (`[[...slug]]` → `*`)
//! - Both the `pages/` and the `app/` directory conventions
//!
//! Every function here is pure. Discovery on disk, progress reporting and
//! aggregate statistics live in `nextshift-analyzer`.
//!
//! ## Example
//!
//! ```
//! use nextshift_router::{translate, warnings_for, RouteConvention, RouteDescriptor, RouteTier};
//!
//! let route = RouteDescriptor::from_path(
//!     "pages/category/[...slug].tsx",
//!     "pages",
//!     RouteConvention::Pages,
//! )
//! .unwrap();
//!
//! assert_eq!(route.source_path, "/category/[...slug]");
//! assert_eq!(route.params, vec!["...slug".to_string()]);
//! assert_eq!(route.tier(), RouteTier::Complex);
//! assert_eq!(translate(&route.source_path).unwrap(), "/category/*");
//! assert_eq!(warnings_for(&route).len(), 1);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Module Declarations
// ============================================================================

mod complexity;
mod error;
pub mod path;
pub mod route;
mod translate;
mod warnings;

pub use complexity::RouteTier;
pub use error::RouteError;
pub use path::{normalize_file_path, split_extension};
pub use route::{classify_segment, parse_pattern, SegmentKind};
pub use translate::{translate, translate_all};
pub use warnings::{warnings_for, Warning, CATCH_ALL_WARNING, OPTIONAL_CATCH_ALL_WARNING};

// ============================================================================
// Core Types
// ============================================================================

/// Directory layout a Next.js project uses for its routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteConvention {
    /// `pages/blog/[slug].tsx`: every module is a route
    Pages,
    /// `app/blog/[slug]/page.tsx`: only `page` modules are routes
    App,
}

impl RouteConvention {
    /// Checks whether a file (relative to the routes directory) defines a route
    ///
    /// Pages: any module with a route extension, except `_app`, `_document`,
    /// `_error` style files and API handlers under `api/`.
    /// App: only `page.*` modules outside private `_folder` directories.
    ///
    /// # Examples
    ///
    /// ```
    /// use nextshift_router::RouteConvention;
    ///
    /// let exts = vec!["tsx".to_string(), "jsx".to_string()];
    ///
    /// assert!(RouteConvention::Pages.is_route_file("blog/[slug].tsx", &exts));
    /// assert!(!RouteConvention::Pages.is_route_file("_app.tsx", &exts));
    /// assert!(!RouteConvention::Pages.is_route_file("styles.css", &exts));
    ///
    /// assert!(RouteConvention::App.is_route_file("blog/[slug]/page.tsx", &exts));
    /// assert!(!RouteConvention::App.is_route_file("blog/[slug]/layout.tsx", &exts));
    /// ```
    pub fn is_route_file(self, relative: &str, extensions: &[String]) -> bool {
        let relative = normalize_file_path(relative);
        let file_name = relative.rsplit('/').next().unwrap_or("");

        let (stem, ext) = split_extension(file_name);
        let Some(ext) = ext else {
            return false;
        };
        if !extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
            return false;
        }

        match self {
            RouteConvention::Pages => {
                !stem.starts_with('_') && relative.split('/').next() != Some("api")
            }
            RouteConvention::App => {
                stem == "page" && !relative.split('/').any(|segment| segment.starts_with('_'))
            }
        }
    }
}

/// A route discovered in a Next.js project
///
/// Read-only once created; identified by `source_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// URL pattern in Next.js syntax, like `/products/[id]`
    pub source_path: String,
    /// File that defines the route, like `pages/products/[id].tsx`
    pub component_file: String,
    /// Whether any segment binds a parameter
    pub is_dynamic: bool,
    /// Parameter names in path order; catch-alls keep their `...` marker
    pub params: Vec<String>,
    /// Heaviest segment weight: 1 static, 3 dynamic, 5 catch-all, 7 optional catch-all
    pub complexity: u32,
}

impl RouteDescriptor {
    /// Builds a descriptor from a route file path
    ///
    /// `root_dir` is stripped from the front of `file_path` when present.
    /// Pages routes drop a trailing `index`; app routes drop the `page` file.
    ///
    /// # Errors
    ///
    /// [`RouteError::MalformedSegment`] naming `file_path` when a directory or
    /// file name has invalid bracket syntax.
    pub fn from_path(
        file_path: &str,
        root_dir: &str,
        convention: RouteConvention,
    ) -> Result<Self, RouteError> {
        let file_path = normalize_file_path(file_path);
        let root_dir = normalize_file_path(root_dir);

        let relative = file_path
            .strip_prefix(&*root_dir)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(&*file_path);

        let (dir, file_name) = relative.rsplit_once('/').unwrap_or(("", relative));
        let (stem, _) = split_extension(file_name);

        let route_part = match convention {
            RouteConvention::Pages if stem == "index" => dir.to_string(),
            RouteConvention::Pages if dir.is_empty() => stem.to_string(),
            RouteConvention::Pages => format!("{dir}/{stem}"),
            RouteConvention::App => dir.to_string(),
        };

        let parsed = parse_pattern(&route_part).map_err(|e| e.in_path(&file_path))?;

        Ok(RouteDescriptor {
            is_dynamic: parsed.is_dynamic(),
            source_path: parsed.source_path,
            component_file: file_path.into_owned(),
            params: parsed.params,
            complexity: parsed.complexity,
        })
    }

    /// React Router path for this route
    pub fn translated(&self) -> Result<String, RouteError> {
        translate(&self.source_path)
    }

    pub fn tier(&self) -> RouteTier {
        RouteTier::from_score(self.complexity)
    }

    pub fn warnings(&self) -> Vec<Warning> {
        warnings_for(self)
    }
}

//! Route discovery over a project's file list

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use nextshift_router::{normalize_file_path, RouteConvention, RouteDescriptor, RouteError};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::RoutesConfig;
use crate::intake::FileSet;

/// Routes found in a project plus the files that could not be parsed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteExtraction {
    /// One route per `source_path`, sorted by it
    pub routes: Vec<RouteDescriptor>,
    #[serde(skip)]
    pub rejected: Vec<RouteError>,
}

impl RouteExtraction {
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn dynamic_count(&self) -> usize {
        self.routes.iter().filter(|r| r.is_dynamic).count()
    }
}

/// Discovers Next.js routes from relative file names
///
/// Recognizes `pages/` and `app/` (also under `src/`). A malformed file is
/// reported in `rejected` and does not stop the others.
#[derive(Debug, Clone, Default)]
pub struct RouteExtractor {
    config: RoutesConfig,
}

impl RouteExtractor {
    pub fn new(config: RoutesConfig) -> Self {
        Self { config }
    }

    pub fn extract_from_files(&self, files: &FileSet) -> RouteExtraction {
        self.extract_from_names(files.names())
    }

    pub fn extract_from_names<'a, I>(&self, names: I) -> RouteExtraction
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(|name| normalize_file_path(name).into_owned())
            .collect();
        names.sort();

        let roots = self.route_roots();
        let mut routes: BTreeMap<String, RouteDescriptor> = BTreeMap::new();
        let mut rejected = Vec::new();

        for name in &names {
            let Some((root, convention)) = roots
                .iter()
                .find(|(root, _)| name.starts_with(&format!("{root}/")))
            else {
                continue;
            };

            let relative = &name[root.len() + 1..];
            if !convention.is_route_file(relative, &self.config.extensions) {
                continue;
            }

            match RouteDescriptor::from_path(name, root, *convention) {
                Ok(route) => match routes.entry(route.source_path.clone()) {
                    Entry::Vacant(slot) => {
                        debug!("Route {} from {}", route.source_path, name);
                        slot.insert(route);
                    }
                    Entry::Occupied(existing) => {
                        warn!(
                            "Duplicate route {}: keeping {}, ignoring {}",
                            existing.key(),
                            existing.get().component_file,
                            name
                        );
                    }
                },
                Err(e) => {
                    warn!("Skipping route file: {}", e);
                    rejected.push(e);
                }
            }
        }

        RouteExtraction {
            routes: routes.into_values().collect(),
            rejected,
        }
    }

    /// Candidate route directories, most specific first
    fn route_roots(&self) -> Vec<(String, RouteConvention)> {
        let pages = normalize_file_path(&self.config.pages_dir).into_owned();
        let app = normalize_file_path(&self.config.app_dir).into_owned();

        vec![
            (format!("src/{pages}"), RouteConvention::Pages),
            (format!("src/{app}"), RouteConvention::App),
            (pages, RouteConvention::Pages),
            (app, RouteConvention::App),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_files_outside_route_dirs() {
        let extraction = RouteExtractor::default().extract_from_names([
            "components/Header.tsx",
            "lib/page.tsx",
            "pagesextra/index.tsx",
        ]);
        assert!(extraction.is_empty());
        assert!(extraction.rejected.is_empty());
    }

    #[test]
    fn test_src_directory_layout() {
        let extraction = RouteExtractor::default()
            .extract_from_names(["src/pages/index.tsx", "src/pages/users/[id].tsx"]);

        let paths: Vec<&str> = extraction
            .routes
            .iter()
            .map(|r| r.source_path.as_str())
            .collect();
        assert_eq!(paths, vec!["/", "/users/[id]"]);
        assert_eq!(extraction.dynamic_count(), 1);
    }
}

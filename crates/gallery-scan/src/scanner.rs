//! Component discovery by directory listing.
//!
//! The scanner reads the components directory fresh on every call: there is
//! no cross-request cache, so a file added or removed on disk is visible on
//! the next scan. An unreadable directory is treated as "no components" and
//! logged, never propagated as an error.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Source extensions recognized as components.
pub const COMPONENT_EXTENSIONS: [&str; 2] = ["tsx", "jsx"];

/// Record identifying one discoverable component.
///
/// Built fresh on every scan and discarded after the render that used it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    /// Lowercased file stem, used as the URL path segment.
    pub route_key: String,
    /// Original case-preserved file stem, used as the visible name.
    pub display_name: String,
    /// Absolute or config-relative path to the source file.
    pub file_path: PathBuf,
}

/// Discovers components by listing a fixed directory.
#[derive(Debug, Clone)]
pub struct ComponentScanner {
    source_dir: PathBuf,
}

impl ComponentScanner {
    /// Create a scanner over the given components directory.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// The directory this scanner reads.
    #[must_use]
    pub fn source_dir(&self) -> &PathBuf {
        &self.source_dir
    }

    /// List component descriptors in directory order.
    ///
    /// Returns an empty list if the directory cannot be read. Two files
    /// whose stems lowercase to the same route key would make resolution
    /// ordering-dependent, so later duplicates are skipped with a warning.
    #[must_use]
    pub fn scan(&self) -> Vec<ComponentDescriptor> {
        let entries = match fs::read_dir(&self.source_dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    dir = %self.source_dir.display(),
                    error = %e,
                    "Failed to read components directory"
                );
                return Vec::new();
            }
        };

        let mut descriptors: Vec<ComponentDescriptor> = Vec::new();
        for entry in entries.filter_map(Result::ok) {
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            let Some(stem) = strip_component_extension(&name) else {
                continue;
            };
            if stem.is_empty() {
                continue;
            }

            let route_key = stem.to_lowercase();
            if let Some(existing) = descriptors.iter().find(|d| d.route_key == route_key) {
                tracing::warn!(
                    route_key = %route_key,
                    kept = %existing.display_name,
                    skipped = %stem,
                    "Duplicate route key, skipping component"
                );
                continue;
            }

            descriptors.push(ComponentDescriptor {
                route_key,
                display_name: stem.to_owned(),
                file_path: entry.path(),
            });
        }
        descriptors
    }

    /// Resolve a route segment case-insensitively against the current scan.
    ///
    /// Returns `None` for an unknown segment or an unreadable directory;
    /// the miss is logged with the attempted segment.
    #[must_use]
    pub fn resolve(&self, segment: &str) -> Option<ComponentDescriptor> {
        let key = segment.to_lowercase();
        let found = self.scan().into_iter().find(|d| d.route_key == key);
        if found.is_none() {
            tracing::warn!(segment = %segment, "No component matches route segment");
        }
        found
    }

    /// All valid route segments, for route pre-generation.
    ///
    /// Empty when the directory is empty or unreadable.
    #[must_use]
    pub fn route_keys(&self) -> Vec<String> {
        self.scan().into_iter().map(|d| d.route_key).collect()
    }

    /// Read a component's raw source text.
    ///
    /// I/O errors surface to the caller, which treats them as load
    /// failures.
    pub fn read_source(&self, descriptor: &ComponentDescriptor) -> io::Result<String> {
        fs::read_to_string(&descriptor.file_path)
    }
}

/// Strip a recognized component extension, returning the stem.
fn strip_component_extension(name: &str) -> Option<&str> {
    COMPONENT_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext).and_then(|s| s.strip_suffix('.')))
}

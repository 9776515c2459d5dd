//! Filesystem loader for sitetree.
//!
//! This crate provides [`FsLoader`], which turns a source directory into a
//! [`SitemapTree`]. It handles:
//!
//! - Recursive directory scanning with hidden-file and extension filters
//! - Parallel file reads on the global rayon thread pool
//! - Deterministic insertion order (sorted relative paths)
//!
//! Each file becomes a [`Resource`] whose source is the path relative to the
//! source directory and whose destination is derived from it with
//! [`to_destination_path`] (`path/first.txt` -> `/path/first/`).
//!
//! [`FsLoader::build_tree`] logs and skips unreadable files;
//! [`FsLoader::try_build_tree`] fails with a [`ScanError`] instead.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sitetree_fs::FsLoader;
//!
//! let tree = FsLoader::load(None, None)?.try_build_tree()?;
//! for (url, resource) in tree.resources() {
//!     println!("/{url} <- {}", resource.source());
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod scanner;

pub use error::ScanError;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use sitetree::SitemapTree;
use sitetree_config::{Config, Overrides, SourceConfig};
use sitetree_resource::{Resource, ResourceError, to_destination_path};

use scanner::Scanner;

/// Resources read from disk, plus the files that could not be read.
#[derive(Debug, Default)]
pub struct LoadResult {
    /// Successfully read resources, in sorted source order.
    pub resources: Vec<Arc<Resource>>,
    /// Errors for files that were discovered but could not be read.
    pub errors: Vec<ResourceError>,
}

/// Builds resources and trees from a source directory.
#[derive(Debug, Clone)]
pub struct FsLoader {
    source: SourceConfig,
}

impl FsLoader {
    /// Create a loader for a resolved source configuration.
    #[must_use]
    pub fn new(source: SourceConfig) -> Self {
        Self { source }
    }

    /// Create a loader from a loaded [`Config`].
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.source_resolved.clone())
    }

    /// Load `sitetree.toml` (explicit or discovered) and create a loader for it.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Config`] if the configuration can't be loaded.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&Overrides>,
    ) -> Result<Self, ScanError> {
        let config = Config::load(config_path, overrides)?;
        Ok(Self::from_config(&config))
    }

    /// Source configuration in use.
    #[must_use]
    pub fn source(&self) -> &SourceConfig {
        &self.source
    }

    /// Read every discovered file into a resource.
    ///
    /// Reads run in parallel; the returned resources keep the sorted scan
    /// order. Files that fail to read are reported in
    /// [`LoadResult::errors`] and left out.
    #[must_use]
    pub fn load_resources(&self) -> LoadResult {
        let files = Scanner::new(&self.source).scan();

        let results: Vec<Result<Resource, ResourceError>> = files
            .par_iter()
            .map(|rel_path| read_resource(&self.source.dir, rel_path))
            .collect();

        let mut loaded = LoadResult::default();
        for result in results {
            match result {
                Ok(resource) => loaded.resources.push(Arc::new(resource)),
                Err(e) => loaded.errors.push(e),
            }
        }
        loaded
    }

    /// Scan the source directory and build a tree from every readable file.
    ///
    /// Unreadable files are logged and skipped. Insertion happens on the
    /// calling thread in sorted path order.
    #[must_use]
    pub fn build_tree(&self) -> SitemapTree {
        let LoadResult { resources, errors } = self.load_resources();

        for e in &errors {
            tracing::warn!(error = %e, "Failed to read resource, skipping");
        }

        let mut tree = SitemapTree::new();
        for resource in resources {
            tree.add(resource);
        }

        tracing::info!(
            source_dir = %self.source.dir.display(),
            nodes = tree.len(),
            skipped = errors.len(),
            "Sitemap tree built"
        );

        tree
    }

    /// Scan the source directory and build a tree, failing on the first
    /// unreadable file.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Resource`] for the first file (in sorted order)
    /// that could not be read. No tree is built in that case.
    pub fn try_build_tree(&self) -> Result<SitemapTree, ScanError> {
        let LoadResult { resources, errors } = self.load_resources();
        if let Some(e) = errors.into_iter().next() {
            return Err(e.into());
        }

        let mut tree = SitemapTree::new();
        for resource in resources {
            tree.add(resource);
        }

        tracing::info!(
            source_dir = %self.source.dir.display(),
            nodes = tree.len(),
            "Sitemap tree built"
        );

        Ok(tree)
    }
}

/// Read one file relative to `source_dir` into a resource.
fn read_resource(source_dir: &Path, rel_path: &Path) -> Result<Resource, ResourceError> {
    let full_path = source_dir.join(rel_path);
    let data = fs::read(&full_path).map_err(|e| ResourceError::io(e, &full_path))?;

    Ok(Resource::new(
        rel_path.to_string_lossy(),
        to_destination_path(rel_path),
        data,
    ))
}

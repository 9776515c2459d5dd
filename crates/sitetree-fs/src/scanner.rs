//! File discovery by filesystem walking.
//!
//! The Scanner only identifies files that could become resources. No content
//! is read here; `FsLoader` reads the files afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use sitetree_config::SourceConfig;

/// Discovers candidate resource files under a source directory.
pub(crate) struct Scanner<'a> {
    source: &'a SourceConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a SourceConfig) -> Self {
        Self { source }
    }

    /// Scan the source directory and return paths relative to it.
    ///
    /// Paths are sorted so that insertion order (and therefore child order
    /// in the tree) doesn't depend on directory listing order. Returns an
    /// empty Vec if the source directory doesn't exist.
    ///
    /// Symlinked directories are followed. A link that points back to a
    /// directory already on the current path is skipped, so cycles end.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        if self.source.dir.is_dir() {
            let mut open_dirs = Vec::new();
            self.scan_directory(&self.source.dir, Path::new(""), &mut open_dirs, &mut files);
        } else {
            tracing::debug!(dir = %self.source.dir.display(), "Source directory missing, nothing to scan");
        }
        files.sort();
        files
    }

    /// `open_dirs` holds the canonical paths of the directories being walked,
    /// from the source directory down to `dir_path`'s parent.
    fn scan_directory(
        &self,
        dir_path: &Path,
        rel_prefix: &Path,
        open_dirs: &mut Vec<PathBuf>,
        files: &mut Vec<PathBuf>,
    ) {
        let canonical = match fs::canonicalize(dir_path) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(dir = %dir_path.display(), error = %e, "Failed to resolve directory, skipping");
                return;
            }
        };
        if open_dirs.contains(&canonical) {
            tracing::debug!(dir = %dir_path.display(), "Directory symlink cycle, skipping");
            return;
        }

        let entries = match fs::read_dir(dir_path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir_path.display(), error = %e, "Failed to read directory, skipping");
                return;
            }
        };

        open_dirs.push(canonical);
        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name();
            if !self.source.include_hidden && name.to_string_lossy().starts_with('.') {
                continue;
            }

            let rel_path = rel_prefix.join(&name);
            let entry_path = entry.path();

            if is_dir(&entry, &entry_path) {
                self.scan_directory(&entry_path, &rel_path, open_dirs, files);
            } else if self.source.allows_extension(&rel_path) {
                files.push(rel_path);
            }
        }
        open_dirs.pop();
    }
}

/// Directory check that follows symlinks. Broken links count as files so the
/// read error surfaces later with the file's path.
fn is_dir(entry: &fs::DirEntry, path: &Path) -> bool {
    match entry.file_type() {
        Ok(t) if t.is_symlink() => fs::metadata(path).is_ok_and(|m| m.is_dir()),
        Ok(t) => t.is_dir(),
        Err(_) => false,
    }
}

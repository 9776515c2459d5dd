//! Resource production errors.

use std::path::{Path, PathBuf};

/// Semantic error categories for resource loading.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum ResourceErrorKind {
    /// Source file does not exist.
    NotFound,
    /// Permission denied while reading the source.
    PermissionDenied,
    /// Source path exists but is not a regular file.
    NotAFile,
    /// Other/unknown error category.
    Other,
}

/// Error raised while producing a [`Resource`](crate::Resource) from storage.
#[derive(Debug)]
pub struct ResourceError {
    kind: ResourceErrorKind,
    path: Option<PathBuf>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ResourceError {
    /// Create a new resource error.
    #[must_use]
    pub fn new(kind: ResourceErrorKind) -> Self {
        Self {
            kind,
            path: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(ResourceErrorKind::NotFound).with_path(path)
    }

    /// Create a resource error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ResourceErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ResourceErrorKind::PermissionDenied,
            std::io::ErrorKind::IsADirectory => ResourceErrorKind::NotAFile,
            _ => ResourceErrorKind::Other,
        };
        Self::new(kind).with_path(path).with_source(err)
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> ResourceErrorKind {
        self.kind
    }

    /// Path the error refers to, if known.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl std::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "Kind: message (path: /foo/bar)"
        let kind_str = match self.kind {
            ResourceErrorKind::NotFound => "Not found",
            ResourceErrorKind::PermissionDenied => "Permission denied",
            ResourceErrorKind::NotAFile => "Not a file",
            ResourceErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

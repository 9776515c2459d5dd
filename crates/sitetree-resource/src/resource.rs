//! The [`Resource`] value.

use std::fs;
use std::path::Path;

use crate::destination::to_destination_path;
use crate::error::{ResourceError, ResourceErrorKind};

/// An immutable resource to be placed in the URL namespace.
///
/// The tree never re-parses or re-validates these fields. Identity matters:
/// lookups by resource compare the shared handle, not the contents, so two
/// resources with identical fields are still distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    source: String,
    destination: String,
    data: Vec<u8>,
}

impl Resource {
    /// Create a resource from already-produced parts.
    ///
    /// `destination` is expected to be normalized (see
    /// [`to_destination_path`]); it is stored as given.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            data: data.into(),
        }
    }

    /// Load a resource from a file.
    ///
    /// The destination is derived from `destination_path` when given,
    /// otherwise from `source_path`. The source identifier is `source_path`
    /// as written by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] with kind `NotFound` if `source_path` does not
    /// exist, `NotAFile` if it is a directory, or the mapped I/O kind if the
    /// file can't be read.
    pub fn from_file(
        source_path: impl AsRef<Path>,
        destination_path: Option<&Path>,
    ) -> Result<Self, ResourceError> {
        let source_path = source_path.as_ref();

        let metadata = fs::metadata(source_path).map_err(|e| ResourceError::io(e, source_path))?;
        if !metadata.is_file() {
            return Err(ResourceError::new(ResourceErrorKind::NotAFile).with_path(source_path));
        }

        let data = fs::read(source_path).map_err(|e| ResourceError::io(e, source_path))?;
        let destination = to_destination_path(destination_path.unwrap_or(source_path));

        tracing::trace!(source = %source_path.display(), %destination, "Loaded resource");

        Ok(Self {
            source: source_path.to_string_lossy().into_owned(),
            destination,
            data,
        })
    }

    /// Source identifier (e.g. the relative file path).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Normalized destination path (e.g. `/path/first/`).
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Raw content.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Content as UTF-8 text, if valid.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }

    /// Non-empty path segments of the destination, in order.
    ///
    /// Empty tokens are discarded, so `"/"`, `""` and `"//"` yield nothing.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.destination.split('/').filter(|s| !s.is_empty())
    }
}

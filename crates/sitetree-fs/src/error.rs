//! Error types for loading a tree from disk.

use sitetree_config::ConfigError;
use sitetree_resource::ResourceError;

/// Error from a strict load of a source directory.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A discovered file could not be read.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
}

//! Resource values for the sitetree URL index.
//!
//! A [`Resource`] is an immutable bundle of a source identifier, a normalized
//! destination path and opaque content. The sitemap tree consumes resources
//! only through [`Resource::destination`] (to find where a resource lives) and
//! [`Resource::source`] (surfaced unchanged through lookups).
//!
//! # Destination Convention
//!
//! Destinations are URL-style paths that always start and end with `/` and
//! use `/` as the separator regardless of the host platform:
//! - `"/"` - root
//! - `"/guide/"` - top-level page
//! - `"/path/first/"` - nested page
//!
//! # Example
//!
//! ```
//! use sitetree_resource::{Resource, to_destination_path};
//!
//! let resource = Resource::new("path/first.txt", to_destination_path("path/first.txt"), "Some content.");
//! assert_eq!(resource.destination(), "/path/first/");
//! assert_eq!(resource.text(), Some("Some content."));
//! ```

mod destination;
mod error;
mod resource;

pub use destination::to_destination_path;
pub use error::{ResourceError, ResourceErrorKind};
pub use resource::Resource;

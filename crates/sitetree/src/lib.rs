//! Sitemap tree for hierarchical URL namespaces.
//!
//! This crate provides:
//! - [`SitemapTree`]: a trie keyed by URL path segments with a tree-wide URL index
//! - [`NodeRef`]: a borrowed handle for read-only traversal of a node
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use sitetree::SitemapTree;
//! use sitetree_resource::Resource;
//!
//! let mut tree = SitemapTree::new();
//! tree.add(Arc::new(Resource::new("path/first.txt", "/path/first/", "Some content.")));
//! tree.add(Arc::new(Resource::new("path/second.txt", "/path/second/", "Some other content.")));
//!
//! let first = tree.from_url("path/first").unwrap();
//! assert_eq!(first.resource().unwrap().source(), "path/first.txt");
//! assert_eq!(first.siblings().len(), 2);
//! assert_eq!(tree.root().children().len(), 1);
//! ```

mod error;
pub(crate) mod node;
pub(crate) mod tree;

pub use error::TreeError;
pub use node::{Ancestors, NodeRef, Walk};
pub use tree::{NodeId, SitemapTree};

// Re-export Resource for convenience
pub use sitetree_resource::Resource;

//! Borrowed node handles and traversal iterators.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use sitetree_resource::Resource;

use crate::tree::{Node, NodeId, SitemapTree};

/// Read-only handle to one node of a [`SitemapTree`].
///
/// Handles are `Copy` and borrow the tree, so every handle sees the same
/// URL index and the same children as the tree itself. Two handles are equal
/// when they point at the same node of the same tree.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a SitemapTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a SitemapTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(self) -> &'a Node {
        self.tree.get(self.id)
    }

    /// Arena id of this node.
    #[must_use]
    pub fn id(self) -> NodeId {
        self.id
    }

    /// True for the root of the tree.
    #[must_use]
    pub fn is_root(self) -> bool {
        self.node().parent.is_none()
    }

    /// Path segment this node represents. `None` for the root.
    #[must_use]
    pub fn url_part(self) -> Option<&'a str> {
        self.node().url_part.as_deref()
    }

    /// Full URL without leading or trailing slash (e.g. `"path/first"`).
    /// `None` for the root.
    #[must_use]
    pub fn url(self) -> Option<&'a str> {
        self.node().url.as_deref()
    }

    /// Attached resource, if a destination terminates here.
    #[must_use]
    pub fn resource(self) -> Option<&'a Arc<Resource>> {
        self.node().resource.as_ref()
    }

    /// Parent node. `None` for the root.
    #[must_use]
    pub fn parent(self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|id| NodeRef::new(self.tree, id))
    }

    /// Direct children in first-insertion order.
    pub fn children(self) -> impl ExactSizeIterator<Item = NodeRef<'a>> + DoubleEndedIterator {
        let tree = self.tree;
        self.node()
            .children
            .iter()
            .map(move |&id| NodeRef::new(tree, id))
    }

    /// Children of the parent, including this node.
    ///
    /// The root has no parent; its siblings are just itself.
    #[must_use]
    pub fn siblings(self) -> Vec<NodeRef<'a>> {
        match self.parent() {
            Some(parent) => parent.children().collect(),
            None => vec![self],
        }
    }

    /// Ancestors from the parent up to and including the root.
    #[must_use]
    pub fn ancestors(self) -> Ancestors<'a> {
        Ancestors {
            next: self.parent(),
        }
    }

    /// Number of segments from the root (0 for the root).
    #[must_use]
    pub fn depth(self) -> usize {
        self.ancestors().count()
    }

    /// Depth-first pre-order walk of the subtree rooted here.
    #[must_use]
    pub fn walk(self) -> Walk<'a> {
        Walk {
            tree: self.tree,
            stack: vec![self.id],
        }
    }

    /// Look up a node by URL in the shared index.
    #[must_use]
    pub fn from_url(self, url: &str) -> Option<NodeRef<'a>> {
        self.tree.from_url(url)
    }

    /// The URL index shared by the whole tree.
    #[must_use]
    pub fn all_urls(self) -> &'a HashMap<String, NodeId> {
        self.tree.all_urls()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("url", &self.url())
            .field("has_resource", &self.resource().is_some())
            .finish()
    }
}

/// Iterator over a node's ancestors, nearest first.
pub struct Ancestors<'a> {
    next: Option<NodeRef<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

/// Depth-first pre-order iterator; children are visited in insertion order.
pub struct Walk<'a> {
    tree: &'a SitemapTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // Reverse so the first child is popped next
        self.stack.extend(self.tree.get(id).children.iter().rev().copied());
        Some(NodeRef::new(self.tree, id))
    }
}

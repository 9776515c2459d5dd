//! Sitemap tree storage and insertion.
//!
//! # Architecture
//!
//! Nodes are stored in a flat `Vec<Node>` (the arena) with parent/children
//! relationships tracked by [`NodeId`]s. The root always lives at index 0.
//! This provides:
//! - O(1) URL lookups via the `urls` `HashMap`, one instance for the whole tree
//! - O(d) ancestor walks where d is the node depth
//! - No ownership cycles: parents own children by id, the back-reference is
//!   just another id
//!
//! # Insertion
//!
//! [`SitemapTree::add`] splits a resource's destination into non-empty
//! segments and walks down from the root, reusing existing children whose
//! segment matches and creating the rest. Every created node is registered in
//! the URL index at the same time, so the index is always exact.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use sitetree_resource::Resource;

use crate::error::TreeError;
use crate::node::{NodeRef, Walk};

/// Identifier of a node inside a [`SitemapTree`].
///
/// Ids are only meaningful for the tree that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena position of this node.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

const ROOT: NodeId = NodeId(0);

/// One path segment of the tree.
#[derive(Debug)]
pub(crate) struct Node {
    /// Segment this node represents. `None` only for the root.
    pub(crate) url_part: Option<String>,
    /// Slash-joined path from the root. `None` only for the root.
    pub(crate) url: Option<String>,
    pub(crate) resource: Option<Arc<Resource>>,
    pub(crate) parent: Option<NodeId>,
    /// Children in first-insertion order.
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    fn root() -> Self {
        Self {
            url_part: None,
            url: None,
            resource: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Trie of URL path segments with a tree-wide URL index.
///
/// Insertion takes `&mut self`, so writers are serialized by the borrow
/// checker. Once built, the tree is `Send + Sync` and any number of readers
/// can traverse it through [`NodeRef`] handles.
#[derive(Debug)]
pub struct SitemapTree {
    nodes: Vec<Node>,
    urls: HashMap<String, NodeId>,
}

impl Default for SitemapTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SitemapTree {
    /// Create a tree containing only the root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
            urls: HashMap::new(),
        }
    }

    /// Handle to the root node.
    #[must_use]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, ROOT)
    }

    /// Handle to a node by id.
    ///
    /// Returns `None` if the id does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    /// Add a resource below the root.
    ///
    /// Returns the id of the node the resource was attached to. A resource
    /// whose destination has no segments attaches to the root. If the node
    /// already holds a resource it is replaced.
    pub fn add(&mut self, resource: Arc<Resource>) -> NodeId {
        let target = self.ensure_path(ROOT, &resource);
        self.attach(target, resource);
        target
    }

    /// Add a resource below an existing node.
    ///
    /// Segments are resolved relative to `start`; created nodes get URLs
    /// prefixed with the URL of `start`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] if `start` is not part of this tree.
    pub fn add_at(&mut self, start: NodeId, resource: Arc<Resource>) -> Result<NodeId, TreeError> {
        self.check_id(start)?;
        let target = self.ensure_path(start, &resource);
        self.attach(target, resource);
        Ok(target)
    }

    /// Add a resource below the root, refusing to replace an attached one.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Occupied`] if the destination node already holds
    /// a resource. The tree is left unchanged in that case.
    pub fn try_add(&mut self, resource: Arc<Resource>) -> Result<NodeId, TreeError> {
        self.try_add_at(ROOT, resource)
    }

    /// Add a resource below an existing node, refusing to replace an attached one.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] if `start` is not part of this tree,
    /// or [`TreeError::Occupied`] if the destination node already holds a
    /// resource.
    pub fn try_add_at(
        &mut self,
        start: NodeId,
        resource: Arc<Resource>,
    ) -> Result<NodeId, TreeError> {
        self.check_id(start)?;

        if let Some(existing) = self.find_path(start, &resource)
            && self.nodes[existing.0].resource.is_some()
        {
            return Err(TreeError::Occupied {
                url: self.nodes[existing.0].url.clone().unwrap_or_default(),
            });
        }

        let target = self.ensure_path(start, &resource);
        self.attach(target, resource);
        Ok(target)
    }

    /// Look up a node by its full URL (no leading or trailing slash).
    ///
    /// Only exact matches are returned; the root has no URL and is never
    /// found this way.
    #[must_use]
    pub fn from_url(&self, url: &str) -> Option<NodeRef<'_>> {
        self.urls.get(url).map(|&id| NodeRef::new(self, id))
    }

    /// Find the node holding this exact resource instance.
    ///
    /// Compares handles with [`Arc::ptr_eq`], so an equal but separately
    /// allocated resource is not found.
    #[must_use]
    pub fn from_resource(&self, resource: &Arc<Resource>) -> Option<NodeRef<'_>> {
        self.nodes
            .iter()
            .position(|node| {
                node.resource
                    .as_ref()
                    .is_some_and(|attached| Arc::ptr_eq(attached, resource))
            })
            .map(|i| NodeRef::new(self, NodeId(i)))
    }

    /// The URL index shared by every node of the tree.
    #[must_use]
    pub fn all_urls(&self) -> &HashMap<String, NodeId> {
        &self.urls
    }

    /// Number of nodes, not counting the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// True if nothing but the root exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Depth-first pre-order walk over every node, starting at the root.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        self.root().walk()
    }

    /// Every attached resource with the URL of its node, in walk order.
    ///
    /// A resource attached to the root is reported with an empty URL.
    pub fn resources(&self) -> impl Iterator<Item = (&str, &Arc<Resource>)> {
        self.walk()
            .filter_map(|node| node.resource().map(|r| (node.url().unwrap_or_default(), r)))
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn check_id(&self, id: NodeId) -> Result<(), TreeError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(TreeError::UnknownNode(id))
        }
    }

    fn find_child(&self, parent: NodeId, segment: &str) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child.0].url_part.as_deref() == Some(segment))
    }

    /// Follow existing nodes only. `None` if any segment is missing.
    fn find_path(&self, start: NodeId, resource: &Resource) -> Option<NodeId> {
        resource
            .segments()
            .try_fold(start, |current, segment| self.find_child(current, segment))
    }

    /// Follow existing nodes, creating missing ones.
    fn ensure_path(&mut self, start: NodeId, resource: &Resource) -> NodeId {
        let mut current = start;
        for segment in resource.segments() {
            current = match self.find_child(current, segment) {
                Some(child) => child,
                None => self.create_child(current, segment),
            };
        }
        current
    }

    fn create_child(&mut self, parent: NodeId, segment: &str) -> NodeId {
        let url = match &self.nodes[parent.0].url {
            Some(prefix) => format!("{prefix}/{segment}"),
            None => segment.to_owned(),
        };
        let id = NodeId(self.nodes.len());

        tracing::trace!(%url, "Creating node");

        self.nodes.push(Node {
            url_part: Some(segment.to_owned()),
            url: Some(url.clone()),
            resource: None,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        self.urls.insert(url, id);

        id
    }

    fn attach(&mut self, target: NodeId, resource: Arc<Resource>) {
        let node = &mut self.nodes[target.0];
        if let Some(previous) = &node.resource {
            tracing::debug!(
                url = node.url.as_deref().unwrap_or_default(),
                previous = previous.source(),
                source = resource.source(),
                "Replacing attached resource"
            );
        }
        node.resource = Some(resource);
    }
}

#[cfg(test)]
mod tests {
    // Ensure the tree can be shared across reader threads
    static_assertions::assert_impl_all!(super::SitemapTree: Send, Sync);

    use pretty_assertions::assert_eq;

    use super::*;

    fn resource(source: &str, destination: &str, data: &str) -> Arc<Resource> {
        Arc::new(Resource::new(source, destination, data))
    }

    fn sample_tree() -> SitemapTree {
        let mut tree = SitemapTree::new();
        tree.add(resource("path/first.txt", "/path/first/", "Some content."));
        tree.add(resource("path/second.txt", "/path/second/", "Some other content."));
        tree
    }

    /// Collect every node reachable from the root by following children.
    fn reachable(tree: &SitemapTree) -> Vec<NodeRef<'_>> {
        let mut found = Vec::new();
        let mut stack = vec![tree.root()];
        while let Some(node) = stack.pop() {
            stack.extend(node.children());
            found.push(node);
        }
        found
    }

    // Initialization

    #[test]
    fn test_new_root_has_no_resource() {
        let tree = SitemapTree::new();
        assert!(tree.root().resource().is_none());
    }

    #[test]
    fn test_new_root_has_no_parent() {
        let tree = SitemapTree::new();
        assert!(tree.root().parent().is_none());
        assert!(tree.root().is_root());
    }

    #[test]
    fn test_new_root_has_no_children() {
        let tree = SitemapTree::new();
        assert_eq!(tree.root().children().len(), 0);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_new_root_has_no_url_part_or_url() {
        let tree = SitemapTree::new();
        assert_eq!(tree.root().url_part(), None);
        assert_eq!(tree.root().url(), None);
        assert!(tree.all_urls().is_empty());
    }

    // add

    #[test]
    fn test_add_first_level() {
        let tree = sample_tree();
        let child = tree.root().children().next().unwrap();

        assert!(child.resource().is_none());
        let parent = child.parent().unwrap();
        assert_eq!(parent.children().len(), 1);
        assert!(parent.resource().is_none());
        assert_eq!(parent.url_part(), None);
        assert_eq!(parent.url(), None);

        assert_eq!(child.children().len(), 2);
        assert_eq!(child.url_part(), Some("path"));
        assert_eq!(child.url(), Some("path"));
    }

    #[test]
    fn test_add_second_level_first_child() {
        let tree = sample_tree();
        let child = tree.root().children().next().unwrap().children().next().unwrap();

        let attached = child.resource().unwrap();
        assert_eq!(attached.source(), "path/first.txt");
        assert_eq!(attached.destination(), "/path/first/");
        assert_eq!(attached.text(), Some("Some content."));

        let parent = child.parent().unwrap();
        assert_eq!(parent.children().len(), 2);
        assert!(parent.resource().is_none());
        assert_eq!(parent.url_part(), Some("path"));
        assert_eq!(parent.url(), Some("path"));

        assert_eq!(child.children().len(), 0);
        assert_eq!(child.url_part(), Some("first"));
        assert_eq!(child.url(), Some("path/first"));
    }

    #[test]
    fn test_add_second_level_second_child() {
        let tree = sample_tree();
        let child = tree.root().children().next().unwrap().children().nth(1).unwrap();

        let attached = child.resource().unwrap();
        assert_eq!(attached.source(), "path/second.txt");
        assert_eq!(attached.destination(), "/path/second/");
        assert_eq!(attached.text(), Some("Some other content."));

        assert_eq!(child.url_part(), Some("second"));
        assert_eq!(child.url(), Some("path/second"));
    }

    #[test]
    fn test_add_creates_intermediate_nodes_without_resources() {
        let mut tree = SitemapTree::new();
        let r = resource("c.md", "/a/b/c/", "");
        tree.add(Arc::clone(&r));

        let leaf = tree.from_url("a/b/c").unwrap();
        assert!(Arc::ptr_eq(leaf.resource().unwrap(), &r));
        assert!(tree.from_url("a").unwrap().resource().is_none());
        assert!(tree.from_url("a/b").unwrap().resource().is_none());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_add_returns_attached_node() {
        let mut tree = SitemapTree::new();
        let id = tree.add(resource("b.md", "/a/b/", ""));

        assert_eq!(tree.node(id).unwrap().url(), Some("a/b"));
    }

    #[test]
    fn test_add_shares_prefix() {
        let mut tree = SitemapTree::new();
        tree.add(resource("b", "/a/b/", ""));
        tree.add(resource("c", "/a/c/", ""));

        assert_eq!(tree.root().children().len(), 1);
        let a = tree.from_url("a").unwrap();
        let parts: Vec<_> = a.children().map(NodeRef::url_part).collect();
        assert_eq!(parts, vec![Some("b"), Some("c")]);
    }

    #[test]
    fn test_add_repeat_prefix_does_not_duplicate() {
        let mut tree = SitemapTree::new();
        tree.add(resource("b", "/a/b/", ""));
        tree.add(resource("d", "/a/d/", ""));

        let a_nodes = tree
            .walk()
            .filter(|n| n.url_part() == Some("a"))
            .count();
        assert_eq!(a_nodes, 1);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_add_children_keep_insertion_order() {
        let mut tree = SitemapTree::new();
        for name in ["zeta", "alpha", "mid"] {
            tree.add(resource(name, &format!("/{name}/"), ""));
        }

        let parts: Vec<_> = tree.root().children().map(NodeRef::url_part).collect();
        assert_eq!(parts, vec![Some("zeta"), Some("alpha"), Some("mid")]);
    }

    #[test]
    fn test_add_empty_destination_attaches_to_root() {
        let mut tree = SitemapTree::new();
        let r = resource("index.md", "", "");

        let id = tree.add(Arc::clone(&r));

        assert_eq!(id, tree.root().id());
        assert!(Arc::ptr_eq(tree.root().resource().unwrap(), &r));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_add_slash_destination_attaches_to_root() {
        let mut tree = SitemapTree::new();
        tree.add(resource("index.md", "/", ""));

        assert!(tree.root().resource().is_some());
        assert!(tree.all_urls().is_empty());
    }

    #[test]
    fn test_add_later_write_wins() {
        let mut tree = SitemapTree::new();
        let first = resource("a.md", "/a/", "first");
        let second = resource("a/index.md", "/a/", "second");

        tree.add(Arc::clone(&first));
        tree.add(Arc::clone(&second));

        let node = tree.from_url("a").unwrap();
        assert!(Arc::ptr_eq(node.resource().unwrap(), &second));
        assert!(tree.from_resource(&first).is_none());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_add_onto_intermediate_node() {
        let mut tree = SitemapTree::new();
        tree.add(resource("c", "/a/b/c/", ""));
        let r = resource("b", "/a/b/", "");
        tree.add(Arc::clone(&r));

        let b = tree.from_url("a/b").unwrap();
        assert!(Arc::ptr_eq(b.resource().unwrap(), &r));
        assert_eq!(b.children().len(), 1);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_add_at_prefixes_start_url() {
        let mut tree = SitemapTree::new();
        let a = tree.add(resource("a", "/a/", ""));

        let id = tree.add_at(a, resource("b", "/b/c/", "")).unwrap();

        let node = tree.node(id).unwrap();
        assert_eq!(node.url(), Some("a/b/c"));
        assert_eq!(tree.from_url("a/b/c").unwrap(), node);
        assert!(tree.from_url("b").is_none());
    }

    #[test]
    fn test_add_at_empty_destination_attaches_to_start() {
        let mut tree = SitemapTree::new();
        let a = tree.add(resource("a", "/a/", ""));
        let r = resource("other", "", "");

        let id = tree.add_at(a, Arc::clone(&r)).unwrap();

        assert_eq!(id, a);
        assert!(Arc::ptr_eq(tree.node(a).unwrap().resource().unwrap(), &r));
    }

    #[test]
    fn test_add_at_unknown_node() {
        let mut tree = SitemapTree::new();
        let other = {
            let mut other = SitemapTree::new();
            other.add(resource("x", "/x/y/", ""))
        };

        let err = tree.add_at(other, resource("a", "/a/", "")).unwrap_err();

        assert_eq!(err, TreeError::UnknownNode(other));
        assert!(tree.is_empty());
    }

    // try_add

    #[test]
    fn test_try_add_new_destination() {
        let mut tree = SitemapTree::new();
        let id = tree.try_add(resource("a", "/a/b/", "")).unwrap();
        assert_eq!(tree.node(id).unwrap().url(), Some("a/b"));
    }

    #[test]
    fn test_try_add_fills_intermediate_node() {
        let mut tree = SitemapTree::new();
        tree.add(resource("c", "/a/b/c/", ""));

        assert!(tree.try_add(resource("b", "/a/b/", "")).is_ok());
    }

    #[test]
    fn test_try_add_occupied_keeps_first() {
        let mut tree = SitemapTree::new();
        let first = resource("a.md", "/a/b/", "first");
        tree.add(Arc::clone(&first));

        let err = tree.try_add(resource("a/b.md", "/a/b/", "second")).unwrap_err();

        assert_eq!(
            err,
            TreeError::Occupied {
                url: "a/b".to_owned()
            }
        );
        assert_eq!(err.to_string(), "Resource already attached at 'a/b'");
        assert!(tree.from_resource(&first).is_some());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_try_add_occupied_root() {
        let mut tree = SitemapTree::new();
        tree.add(resource("index.md", "/", ""));

        let err = tree.try_add(resource("other.md", "", "")).unwrap_err();

        assert_eq!(err, TreeError::Occupied { url: String::new() });
    }

    #[test]
    fn test_try_add_at_prefixes_start_url() {
        let mut tree = SitemapTree::new();
        let guide = tree.add(resource("guide.md", "/guide/", ""));

        let id = tree.try_add_at(guide, resource("setup.md", "/setup/", "")).unwrap();

        let node = tree.node(id).unwrap();
        assert_eq!(node.url(), Some("guide/setup"));
        assert_eq!(node.parent().unwrap().id(), guide);
        assert_eq!(tree.from_url("guide/setup").unwrap(), node);
        assert!(tree.from_url("setup").is_none());
    }

    #[test]
    fn test_try_add_at_occupied_below_start() {
        let mut tree = SitemapTree::new();
        let guide = tree.add(resource("guide.md", "/guide/", ""));
        tree.add(resource("setup.md", "/guide/setup/", ""));

        let err = tree
            .try_add_at(guide, resource("other.md", "/setup/", ""))
            .unwrap_err();

        assert_eq!(
            err,
            TreeError::Occupied {
                url: "guide/setup".to_owned()
            }
        );
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_try_add_at_unknown_node() {
        let mut tree = SitemapTree::new();
        let other = {
            let mut other = SitemapTree::new();
            other.add(resource("x", "/x/y/", ""))
        };

        let err = tree.try_add_at(other, resource("a", "/a/", "")).unwrap_err();

        assert_eq!(err, TreeError::UnknownNode(other));
        assert!(tree.is_empty());
        assert!(tree.all_urls().is_empty());
    }

    // from_url

    #[test]
    fn test_from_url_returns_subtree() {
        let tree = sample_tree();
        let node = tree.from_url("path/first").unwrap();
        assert_eq!(node.resource().unwrap().source(), "path/first.txt");
    }

    #[test]
    fn test_from_url_miss() {
        let tree = sample_tree();
        assert!(tree.from_url("path/third").is_none());
        assert!(tree.from_url("").is_none());
    }

    #[test]
    fn test_from_url_no_prefix_matching() {
        let tree = sample_tree();
        assert!(tree.from_url("pa").is_none());
        assert!(tree.from_url("path/first/extra").is_none());
        assert!(tree.from_url("/path/first/").is_none());
    }

    #[test]
    fn test_from_url_round_trip_every_node() {
        let mut tree = SitemapTree::new();
        for destination in ["/a/b/c/", "/a/d/", "/e/", "/a/b/f/g/"] {
            tree.add(resource(destination, destination, ""));
        }

        for node in tree.walk().skip(1) {
            let url = node.url().unwrap();
            assert_eq!(tree.from_url(url), Some(node));
        }
    }

    // from_resource

    #[test]
    fn test_from_resource_returns_subtree() {
        let mut tree = SitemapTree::new();
        let r = resource("path/first.txt", "/path/first/", "Some content.");
        tree.add(Arc::clone(&r));

        let node = tree.from_resource(&r).unwrap();
        assert_eq!(node.resource().unwrap().source(), "path/first.txt");
        assert_eq!(node.url(), Some("path/first"));
    }

    #[test]
    fn test_from_resource_uses_identity() {
        let mut tree = SitemapTree::new();
        tree.add(resource("a", "/a/", "same"));

        let lookalike = resource("a", "/a/", "same");
        assert!(tree.from_resource(&lookalike).is_none());
    }

    #[test]
    fn test_from_resource_at_root() {
        let mut tree = SitemapTree::new();
        let r = resource("index.md", "/", "");
        tree.add(Arc::clone(&r));

        assert!(tree.from_resource(&r).unwrap().is_root());
    }

    // siblings

    #[test]
    fn test_siblings_same_level() {
        let tree = sample_tree();
        let child = tree.from_url("path/first").unwrap();

        let siblings = child.siblings();
        assert_eq!(siblings.len(), 2);
        assert!(siblings.contains(&child));
    }

    #[test]
    fn test_siblings_of_root_is_root() {
        let tree = sample_tree();
        assert_eq!(tree.root().siblings(), vec![tree.root()]);
    }

    #[test]
    fn test_siblings_only_child() {
        let tree = sample_tree();
        let path = tree.from_url("path").unwrap();
        assert_eq!(path.siblings(), vec![path]);
    }

    // all_urls

    #[test]
    fn test_all_urls() {
        let tree = sample_tree();

        let mut urls: Vec<_> = tree.all_urls().keys().map(String::as_str).collect();
        urls.sort_unstable();
        assert_eq!(urls, vec!["path", "path/first", "path/second"]);
    }

    #[test]
    fn test_all_urls_same_instance_from_every_node() {
        let tree = sample_tree();
        let sub = tree.from_url("path/first").unwrap();

        assert!(std::ptr::eq(tree.all_urls(), sub.all_urls()));
        assert!(std::ptr::eq(tree.root().all_urls(), sub.all_urls()));
    }

    #[test]
    fn test_all_urls_exact_after_mixed_adds() {
        let mut tree = SitemapTree::new();
        for destination in ["/a/b/c/", "/a/b/", "/x/", "", "/a/y/z/", "/a/b/c/"] {
            tree.add(resource(destination, destination, ""));
        }

        let nodes = reachable(&tree);
        let non_root: Vec<_> = nodes.iter().filter(|n| !n.is_root()).collect();
        assert_eq!(tree.all_urls().len(), non_root.len());
        for node in non_root {
            assert_eq!(tree.all_urls().get(node.url().unwrap()), Some(&node.id()));
        }
    }

    #[test]
    fn test_url_is_parent_url_plus_part() {
        let mut tree = SitemapTree::new();
        tree.add(resource("x", "/a/b/c/d/", ""));
        tree.add(resource("y", "/a/e/", ""));

        for node in tree.walk().skip(1) {
            let parent = node.parent().unwrap();
            let part = node.url_part().unwrap();
            let expected = match parent.url() {
                Some(prefix) => format!("{prefix}/{part}"),
                None => part.to_owned(),
            };
            assert_eq!(node.url(), Some(expected.as_str()));
            assert_eq!(parent.children().filter(|c| *c == node).count(), 1);
        }
    }

    // resources

    #[test]
    fn test_resources_in_walk_order() {
        let mut tree = SitemapTree::new();
        tree.add(resource("index", "/", ""));
        tree.add(resource("b", "/a/b/", ""));
        tree.add(resource("c", "/c/", ""));

        let listed: Vec<_> = tree
            .resources()
            .map(|(url, r)| (url, r.source()))
            .collect();
        assert_eq!(listed, vec![("", "index"), ("a/b", "b"), ("c", "c")]);
    }
}

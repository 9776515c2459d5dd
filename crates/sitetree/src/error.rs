use crate::tree::NodeId;

/// Error returned by the strict insertion methods.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeError {
    /// The destination node already has a resource attached.
    #[error("Resource already attached at '{url}'")]
    Occupied {
        /// URL of the occupied node (empty for the root).
        url: String,
    },
    /// The node id does not belong to this tree.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
}

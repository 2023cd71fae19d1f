//! Cache Record Module
//!
//! Per-key state held in the store's index.

use crate::cache::list::NodeId;

// == Record ==
/// A stored value and its position in the recency list.
#[derive(Debug, Clone)]
pub(crate) struct Record {
    /// The stored value
    pub value: String,
    /// Handle of this key's node in the recency list
    pub position: NodeId,
}

impl Record {
    pub(crate) fn new(value: String, position: NodeId) -> Self {
        Self { value, position }
    }
}

//! Recency List Module
//!
//! Doubly linked list of keys stored in a slot arena and linked by `NodeId`.
//!
//! - Front = Most recently used
//! - Back = Least recently used
//!
//! Handles stay valid until their node is removed, so the store can keep one
//! per record and relocate or unlink entries in O(1) without scanning.

// == Node Handle ==
/// Opaque position of a key inside a [`RecencyList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug)]
struct Node {
    key: String,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

// == Recency List ==
/// Keys ordered from most to least recently used.
#[derive(Debug, Default)]
pub(crate) struct RecencyList {
    /// Node storage; `None` marks a free slot
    slots: Vec<Option<Node>>,
    /// Indices of free slots, reused before the arena grows
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl RecencyList {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[allow(dead_code)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the key at the front (most recently used).
    pub(crate) fn front(&self) -> Option<&str> {
        self.head.and_then(|id| self.key(id))
    }

    /// Returns the key at the back (least recently used).
    pub(crate) fn back(&self) -> Option<&str> {
        self.tail.and_then(|id| self.key(id))
    }

    /// Returns the key stored at `id`, if the node is live.
    pub(crate) fn key(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|node| node.key.as_str())
    }

    // == Push Front ==
    /// Inserts `key` at the front and returns its handle.
    pub(crate) fn push_front(&mut self, key: String) -> NodeId {
        let node = Node {
            key,
            prev: None,
            next: self.head,
        };
        let id = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                NodeId(idx)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        };

        match self.head {
            Some(old_head) => {
                if let Some(head_node) = self.node_mut(old_head) {
                    head_node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    // == Move To Front ==
    /// Relocates an existing node to the front.
    ///
    /// Returns false if `id` does not refer to a live node.
    pub(crate) fn move_to_front(&mut self, id: NodeId) -> bool {
        if self.node(id).is_none() {
            return false;
        }
        if self.head == Some(id) {
            return true;
        }
        self.detach(id);

        let old_head = self.head;
        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(old_head) => {
                if let Some(head_node) = self.node_mut(old_head) {
                    head_node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        true
    }

    // == Remove ==
    /// Unlinks the node `id`, frees its slot and returns its key.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<String> {
        self.detach(id)?;
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.key)
    }

    /// Removes and returns the front key.
    pub(crate) fn pop_front(&mut self) -> Option<String> {
        let id = self.head?;
        self.remove(id)
    }

    /// Removes and returns the back key.
    pub(crate) fn pop_back(&mut self) -> Option<String> {
        let id = self.tail?;
        self.remove(id)
    }

    // == Iteration ==
    /// Iterates keys from front to back.
    pub(crate) fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Drops every node. Allocated slot storage is kept for reuse.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    /// Splices `id` out of the chain, leaving it allocated with no links.
    fn detach(&mut self, id: NodeId) -> Option<()> {
        let (prev, next) = {
            let node = self.node(id)?;
            (node.prev, node.next)
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.node_mut(prev_id) {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_id) => {
                if let Some(next_node) = self.node_mut(next_id) {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = None;
        }
        Some(())
    }

    #[cfg(any(test, debug_assertions))]
    pub(crate) fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len, 0);
            return;
        }

        let mut count = 0usize;
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.node(id).expect("linked node missing from arena");
            assert_eq!(node.prev, prev, "broken back link");
            if node.next.is_none() {
                assert_eq!(self.tail, Some(id), "tail does not match last node");
            }
            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len, "cycle in recency list");
        }

        assert_eq!(count, self.len);
        assert_eq!(self.slots.len() - self.free.len(), self.len);
    }
}

// == Iterator ==
pub(crate) struct Iter<'a> {
    list: &'a RecencyList,
    current: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.current?)?;
        self.current = node.next;
        Some(node.key.as_str())
    }
}

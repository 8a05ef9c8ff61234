use std::fmt::Debug;

use crate::{Error, Result};

/// Stable reference to an entry of a [`PairingHeap`]
///
/// Valid from `insert` until the entry leaves the heap through `delete_min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapHandle(usize);

impl HeapHandle {
    /// Position of the entry in the heap arena
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A node of the multiway tree, linked through arena indices
#[derive(Debug, Clone)]
struct Node<K, T> {
    key: K,
    payload: T,
    /// Parent when this node is the first child, previous sibling otherwise
    prev: Option<usize>,
    /// Leftmost child
    child: Option<usize>,
    /// Next sibling to the right
    sibling: Option<usize>,
    alive: bool,
}

/// Min pairing heap over `(key, payload)` pairs with decrease-key support
///
/// Nodes live in a slot arena and are never moved, so a [`HeapHandle`] is just
/// the slot index. Slots of extracted nodes are not reused: a heap is meant to
/// be built for one shortest-path query and then dropped.
///
/// - Insert: O(1)
/// - Find-min: O(1)
/// - Delete-min: O(log n) amortized (two-pass pairing)
/// - Decrease-key: o(log n) amortized (cut and meld with the root)
#[derive(Debug, Clone)]
pub struct PairingHeap<K, T>
where
    K: Ord + Copy + Debug,
    T: Copy + Debug,
{
    /// Arena of every node ever inserted
    nodes: Vec<Node<K, T>>,

    /// Index of the root, which holds the minimum key
    root: Option<usize>,

    /// Number of live nodes
    len: usize,
}

impl<K, T> Default for PairingHeap<K, T>
where
    K: Ord + Copy + Debug,
    T: Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> PairingHeap<K, T>
where
    K: Ord + Copy + Debug,
    T: Copy + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        PairingHeap {
            nodes: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates an empty heap with room for `capacity` insertions
    pub fn with_capacity(capacity: usize) -> Self {
        PairingHeap {
            nodes: Vec::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of live entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true while the handle's entry is still in the heap
    pub fn contains(&self, handle: HeapHandle) -> bool {
        self.nodes.get(handle.0).map_or(false, |node| node.alive)
    }

    /// Inserts a payload with the given key, returning its handle
    pub fn insert(&mut self, key: K, payload: T) -> HeapHandle {
        let index = self.nodes.len();
        self.nodes.push(Node {
            key,
            payload,
            prev: None,
            child: None,
            sibling: None,
            alive: true,
        });

        self.root = Some(match self.root {
            Some(root) => self.link(root, index),
            None => index,
        });
        self.len += 1;
        HeapHandle(index)
    }

    /// Returns the handle of the entry with the smallest key
    pub fn find_min(&self) -> Result<HeapHandle> {
        self.root.map(HeapHandle).ok_or(Error::EmptyHeap)
    }

    /// Returns the minimum key and its payload without removing them
    pub fn peek(&self) -> Option<(&K, &T)> {
        self.root.map(|root| {
            let node = &self.nodes[root];
            (&node.key, &node.payload)
        })
    }

    /// Current key of a live entry
    pub fn key(&self, handle: HeapHandle) -> Result<K> {
        self.live_node(handle).map(|node| node.key)
    }

    /// Payload of a live entry
    pub fn payload(&self, handle: HeapHandle) -> Result<T> {
        self.live_node(handle).map(|node| node.payload)
    }

    /// Removes and returns the entry with the smallest key.
    ///
    /// The root's children are melded pairwise left to right, then the pairs
    /// are folded right to left into the new root.
    pub fn delete_min(&mut self) -> Result<(K, T)> {
        let root = self.root.ok_or(Error::EmptyHeap)?;

        let mut subtrees = Vec::new();
        let mut next = self.nodes[root].child.take();
        while let Some(index) = next {
            next = self.nodes[index].sibling.take();
            self.nodes[index].prev = None;
            subtrees.push(index);
        }

        let mut pairs = Vec::with_capacity((subtrees.len() + 1) / 2);
        for chunk in subtrees.chunks(2) {
            match *chunk {
                [first, second] => pairs.push(self.link(first, second)),
                [single] => pairs.push(single),
                _ => {}
            }
        }

        let mut new_root = pairs.pop();
        while let Some(tree) = pairs.pop() {
            new_root = new_root.map(|acc| self.link(tree, acc));
        }

        self.root = new_root;
        self.len -= 1;

        let node = &mut self.nodes[root];
        node.alive = false;
        Ok((node.key, node.payload))
    }

    /// Lowers the key of an entry.
    ///
    /// Fails if the handle is stale or if `new_key` is larger than the
    /// current key. An equal key is accepted and leaves the heap unchanged.
    pub fn decrease_key(&mut self, handle: HeapHandle, new_key: K) -> Result<()> {
        let current = self.key(handle)?;
        if new_key > current {
            return Err(Error::KeyNotDecreased(handle.0));
        }

        let index = handle.0;
        self.nodes[index].key = new_key;
        let root = match self.root {
            Some(root) if root != index => root,
            _ => return Ok(()),
        };

        self.cut(index);
        self.root = Some(self.link(root, index));
        Ok(())
    }

    fn live_node(&self, handle: HeapHandle) -> Result<&Node<K, T>> {
        self.nodes
            .get(handle.0)
            .filter(|node| node.alive)
            .ok_or(Error::InvalidHandle(handle.0))
    }

    /// Detaches the subtree rooted at `index` from its parent and siblings
    fn cut(&mut self, index: usize) {
        let sibling = self.nodes[index].sibling.take();
        let prev = self.nodes[index].prev.take();
        if let Some(prev) = prev {
            if self.nodes[prev].child == Some(index) {
                self.nodes[prev].child = sibling;
            } else {
                self.nodes[prev].sibling = sibling;
            }
        }
        if let Some(sibling) = sibling {
            self.nodes[sibling].prev = prev;
        }
    }

    /// Melds two detached trees; returns the index of the resulting root.
    /// On equal keys `first` stays on top.
    fn link(&mut self, first: usize, second: usize) -> usize {
        let (parent, child) = if self.nodes[second].key < self.nodes[first].key {
            (second, first)
        } else {
            (first, second)
        };

        let old_child = self.nodes[parent].child;
        if let Some(old_child) = old_child {
            self.nodes[old_child].prev = Some(child);
        }
        self.nodes[child].sibling = old_child;
        self.nodes[child].prev = Some(parent);
        self.nodes[parent].child = Some(child);
        parent
    }
}

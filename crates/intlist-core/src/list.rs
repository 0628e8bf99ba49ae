//! Owned singly linked list of integers
//!
//! Every node owns its successor through a `Box`, so a chain is always
//! finite and acyclic. `None` in `next` marks the end of the chain.

use std::fmt;

/// One element of the chain
pub struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

impl Node {
    /// Create a terminal node
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self { value, next: None }
    }

    /// Create a node that takes ownership of `next`
    #[must_use]
    pub fn with_next(value: i32, next: Option<Box<Node>>) -> Self {
        Self { value, next }
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    #[must_use]
    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }
}

// Unlink iteratively so long chains don't recurse once per node.
impl Drop for Node {
    fn drop(&mut self) {
        let mut link = self.next.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// Handle owning the first node of a chain
#[derive(Default)]
pub struct IntList {
    head: Option<Box<Node>>,
}

impl IntList {
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Adopt a chain that was linked by hand
    #[must_use]
    pub fn from_head(head: Option<Box<Node>>) -> Self {
        Self { head }
    }

    #[must_use]
    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    pub fn push_front(&mut self, value: i32) {
        let next = self.head.take();
        self.head = Some(Box::new(Node::with_next(value, next)));
    }

    /// Append after the last node. Walks the whole chain.
    pub fn push_back(&mut self, value: i32) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node::new(value)));
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        values(self.head())
    }

    /// Number of nodes, counted by walking the chain
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

/// Left-to-right iterator over the values of a chain
#[derive(Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next();
            node.value
        })
    }
}

impl std::iter::FusedIterator for Iter<'_> {}

/// Iterate the values reachable from `front`
#[must_use]
pub const fn values(front: Option<&Node>) -> Iter<'_> {
    Iter { next: front }
}

impl<'a> IntoIterator for &'a IntList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<i32> for IntList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut head = None;
        let mut tail = &mut head;
        for value in iter {
            tail = &mut tail.insert(Box::new(Node::new(value))).next;
        }
        Self { head }
    }
}

impl From<Vec<i32>> for IntList {
    fn from(values: Vec<i32>) -> Self {
        values.into_iter().collect()
    }
}

impl From<&[i32]> for IntList {
    fn from(values: &[i32]) -> Self {
        values.iter().copied().collect()
    }
}

impl Clone for IntList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for IntList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for IntList {}

impl fmt::Debug for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

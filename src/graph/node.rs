// src/graph/node.rs
//! A single page with its outbound links and current rank.

use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Stable identifier of a node, unique within the allocator that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static NEXT_ALLOCATOR: AtomicU32 = AtomicU32::new(1);

/// Hands out monotonically increasing identifiers starting at 1.
///
/// Each [`crate::graph::Graph`] owns one, so identifiers never leak
/// between graphs. Every allocator also carries a process-unique tag that
/// is stamped on the nodes it creates. Allocation only needs `&self`.
#[derive(Debug)]
pub struct IdAllocator {
    tag: u32,
    last: AtomicU32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            tag: NEXT_ALLOCATOR.fetch_add(1, Ordering::Relaxed),
            last: AtomicU32::new(0),
        }
    }
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> NodeId {
        NodeId(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub(crate) fn tag(&self) -> u32 {
        self.tag
    }

    pub(crate) fn issue(&self) -> Node {
        Node::new(self.next_id(), self.tag)
    }
}

/// A page in the web.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    origin: u32,
    label: Option<String>,
    links: Vec<NodeId>,
    rank: f64,
}

impl Node {
    pub(crate) fn new(id: NodeId, origin: u32) -> Self {
        Self {
            id,
            origin,
            label: None,
            links: Vec::new(),
            rank: 0.0,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Links this node to `target`.
    ///
    /// Returns `false` if the link already existed or `target` was created
    /// by a different graph.
    pub fn link(&mut self, target: &Node) -> bool {
        if !self.shares_origin(target) {
            return false;
        }
        self.link_id(target.id)
    }

    /// Whether both nodes were created by the same graph.
    #[must_use]
    pub fn shares_origin(&self, other: &Node) -> bool {
        self.origin == other.origin
    }

    pub(crate) fn origin(&self) -> u32 {
        self.origin
    }

    pub(crate) fn link_id(&mut self, target: NodeId) -> bool {
        if self.links.contains(&target) {
            return false;
        }
        self.links.push(target);
        true
    }

    /// Outbound links in insertion order.
    #[must_use]
    pub fn links(&self) -> &[NodeId] {
        &self.links
    }

    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.links.len()
    }

    /// Whether this node links to the node with identifier `id`.
    #[must_use]
    pub fn is_linked_to_id(&self, id: NodeId) -> bool {
        self.links.iter().any(|l| *l == id)
    }

    #[must_use]
    pub fn rank(&self) -> f64 {
        self.rank
    }

    pub(crate) fn set_rank(&mut self, rank: f64) {
        self.rank = rank;
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let links: Vec<String> = self.links.iter().map(ToString::to_string).collect();
        write!(f, "Node {{ id: {}", self.id)?;
        if let Some(label) = &self.label {
            write!(f, ", label: {label}")?;
        }
        write!(f, ", links: {{{}}}, rank: {} }}", links.join(", "), self.rank)
    }
}

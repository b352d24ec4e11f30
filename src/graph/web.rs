// src/graph/web.rs
//! The web of pages handed to the rank engine.

use super::node::{IdAllocator, Node, NodeId};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// An ordered collection of pages that owns its nodes and their identifiers.
#[derive(Debug, Default)]
pub struct Graph {
    ids: IdAllocator,
    nodes: Vec<Node>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached node with a fresh identifier.
    ///
    /// The node is not a member until passed to [`Graph::add_node`].
    #[must_use]
    pub fn create_node(&self) -> Node {
        self.ids.issue()
    }

    #[must_use]
    pub fn create_labeled(&self, label: impl Into<String>) -> Node {
        self.create_node().with_label(label)
    }

    /// Appends `node` unless a node with the same identity is already present.
    ///
    /// `None` is ignored, and so are nodes created by another graph.
    pub fn add_node<N: Into<Option<Node>>>(&mut self, node: N) -> bool {
        let Some(node) = node.into() else {
            return false;
        };
        if node.origin() != self.ids.tag() {
            debug!(id = %node.id(), "refusing node created by another graph");
            return false;
        }
        if self.contains(node.id()) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    pub fn add_nodes<I>(&mut self, nodes: I)
    where
        I: IntoIterator,
        I::Item: Into<Option<Node>>,
    {
        for node in nodes {
            self.add_node(node);
        }
    }

    /// Links member `from` to `to`. The target need not be a member.
    ///
    /// Returns `false` if `from` is not a member or the link already existed.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        self.nodes
            .iter_mut()
            .find(|n| n.id() == from)
            .is_some_and(|n| n.link_id(to))
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id() == id)
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id() == id)
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Maps each member identifier to its position.
    #[must_use]
    pub fn index(&self) -> HashMap<NodeId, usize> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(pos, n)| (n.id(), pos))
            .collect()
    }

    /// True when member identifiers are exactly `1..=len` in insertion order.
    #[must_use]
    pub fn has_sequential_ids(&self) -> bool {
        self.nodes
            .iter()
            .zip(1u32..)
            .all(|(n, expected)| n.id().get() == expected)
    }

    pub(crate) fn commit_ranks(&mut self, ranks: &[f64]) {
        for (node, rank) in self.nodes.iter_mut().zip(ranks) {
            node.set_rank(*rank);
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph {{")?;
        for node in &self.nodes {
            writeln!(f, "    {node}")?;
        }
        write!(f, "}}")
    }
}

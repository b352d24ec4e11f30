// src/rank/queries.rs
use crate::graph::{Graph, Node};
use std::cmp::Ordering;

/// Pairs each node with its entry in `values` and sorts by descending rank,
/// breaking ties by identifier.
#[must_use]
pub fn ranked_by<'a>(graph: &'a Graph, values: &[f64]) -> Vec<(&'a Node, f64)> {
    let mut ranked: Vec<_> = graph.nodes().iter().zip(values.iter().copied()).collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.id().cmp(&b.0.id()))
    });
    ranked
}

/// Nodes sorted by their committed rank.
#[must_use]
pub fn ranked(graph: &Graph) -> Vec<(&Node, f64)> {
    let values: Vec<f64> = graph.nodes().iter().map(Node::rank).collect();
    ranked_by(graph, &values)
}

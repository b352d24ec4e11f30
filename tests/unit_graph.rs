// tests/unit_graph.rs
//! Tests for node creation, linking, and graph membership.

use pagerank_core::graph::{Graph, Node, NodeId};
use std::collections::HashSet;
use std::thread;

#[test]
fn test_ids_start_at_one_in_creation_order() {
    let graph = Graph::new();
    let ids: Vec<u32> = (0..4).map(|_| graph.create_node().id().get()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_ids_are_scoped_per_graph() {
    let first = Graph::new();
    let _ = first.create_node();
    let _ = first.create_node();

    let second = Graph::new();
    assert_eq!(second.create_node().id().get(), 1, "allocators must not share state");
}

#[test]
fn test_concurrent_creation_yields_distinct_ids() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 1000;

    let graph = Graph::new();
    let ids: Vec<u32> = thread::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    (0..PER_THREAD)
                        .map(|_| graph.create_node().id().get())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        workers
            .into_iter()
            .flat_map(|w| w.join().unwrap())
            .collect()
    });

    let distinct: HashSet<u32> = ids.iter().copied().collect();
    assert_eq!(ids.len(), THREADS * PER_THREAD);
    assert_eq!(distinct.len(), THREADS * PER_THREAD);
    assert_eq!(distinct.iter().max(), Some(&((THREADS * PER_THREAD) as u32)));
}

#[test]
fn test_node_from_other_graph_is_refused() {
    let other = Graph::new();
    let foreign = other.create_node();

    let mut graph = Graph::new();
    let own = graph.create_node();
    assert_eq!(own.id(), foreign.id());

    assert!(graph.add_node(own));
    assert!(!graph.add_node(foreign.clone()), "nodes of another graph are never members");
    assert_eq!(graph.len(), 1);

    let mut empty = Graph::new();
    assert!(!empty.add_node(foreign));
    assert!(empty.is_empty());
}

#[test]
fn test_refused_node_does_not_shadow_later_ids() {
    let other = Graph::new();
    let _ = other.create_node();
    let foreign = other.create_node();

    let mut graph = Graph::new();
    let first = graph.create_node();
    assert!(graph.add_node(first));
    assert!(!graph.add_node(foreign));

    let second = graph.create_node();
    assert_eq!(second.id().get(), 2);
    assert!(graph.add_node(second), "own fresh node must still be accepted");
    assert_eq!(graph.len(), 2);
}

#[test]
fn test_link_to_other_graph_is_refused() {
    let other = Graph::new();
    let foreign = other.create_node();

    let graph = Graph::new();
    let mut a = graph.create_node();
    let b = graph.create_node();

    assert!(!a.link(&foreign));
    assert!(a.link(&b));
    assert!(!a.shares_origin(&foreign));
    assert_eq!(a.links(), &[b.id()]);
}

#[test]
fn test_link_ignores_duplicates() {
    let graph = Graph::new();
    let mut a = graph.create_node();
    let b = graph.create_node();

    assert!(a.link(&b));
    assert!(!a.link(&b), "re-adding an edge is a no-op");
    assert_eq!(a.links(), &[b.id()]);
}

#[test]
fn test_links_keep_insertion_order() {
    let graph = Graph::new();
    let mut a = graph.create_node();
    let b = graph.create_node();
    let c = graph.create_node();
    let d = graph.create_node();

    a.link(&c);
    a.link(&d);
    a.link(&b);

    let order: Vec<u32> = a.links().iter().map(|id| id.get()).collect();
    assert_eq!(order, vec![3, 4, 2]);
}

#[test]
fn test_is_linked_to_id() {
    let graph = Graph::new();
    let mut a = graph.create_node();
    let b = graph.create_node();
    a.link(&b);

    assert!(a.is_linked_to_id(NodeId::from(2)));
    assert!(!a.is_linked_to_id(NodeId::from(1)));
    assert!(!a.is_linked_to_id(NodeId::from(99)));
}

#[test]
fn test_add_node_ignores_duplicates_and_none() {
    let mut graph = Graph::new();
    let a = graph.create_node();
    let copy = a.clone();

    assert!(graph.add_node(a));
    assert!(!graph.add_node(copy), "same identity must not be added twice");
    let absent: Option<Node> = None;
    assert!(!graph.add_node(absent));
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_add_nodes_preserves_order() {
    let mut graph = Graph::new();
    let a = graph.create_node();
    let b = graph.create_node();
    let c = graph.create_node();

    graph.add_nodes([Some(c), None, Some(a), Some(b)]);

    let order: Vec<u32> = graph.nodes().iter().map(|n| n.id().get()).collect();
    assert_eq!(order, vec![3, 1, 2]);
    assert!(!graph.has_sequential_ids());
}

#[test]
fn test_add_edge_on_members() {
    let mut graph = Graph::new();
    let a = graph.create_node();
    let b = graph.create_node();
    let (a_id, b_id) = (a.id(), b.id());
    graph.add_nodes([a, b]);

    assert!(graph.add_edge(a_id, b_id));
    assert!(!graph.add_edge(a_id, b_id));
    assert!(graph.add_edge(b_id, b_id), "self-loops are allowed");
    assert!(!graph.add_edge(NodeId::from(42), a_id), "unknown source is rejected");

    assert!(graph.get(a_id).is_some_and(|n| n.is_linked_to_id(b_id)));
    assert_eq!(graph.position(b_id), Some(1));
}

#[test]
fn test_ranks_default_to_zero() {
    let mut graph = Graph::new();
    let node = graph.create_node();
    graph.add_node(node);
    assert!(graph.nodes().iter().all(|n| n.rank() == 0.0));
}

#[test]
fn test_display_renders_every_node() {
    let mut graph = Graph::new();
    let mut a = graph.create_node();
    let b = graph.create_node();
    a.link(&b);
    graph.add_nodes([a, b]);

    let text = graph.to_string();
    assert!(text.contains("Node { id: 1, links: {2}, rank: 0 }"), "{text}");
    assert!(text.contains("Node { id: 2, links: {}, rank: 0 }"), "{text}");
}

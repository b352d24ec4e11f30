// src/graph/mod.rs
//! The page graph: nodes, their outbound links, and identifier allocation.

pub mod builder;
pub mod node;
pub mod web;

pub use node::{IdAllocator, Node, NodeId};
pub use web::Graph;

// src/rank/mod.rs
pub mod engine;
pub mod matrix;
pub mod queries;

pub use engine::{transition_matrix, RankEngine, RankOutcome, RankStatus, EPSILON, MAX_ITERS};
pub use matrix::{approx_eq, is_equilibrium, multiply, Matrix};

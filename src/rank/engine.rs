// src/rank/engine.rs
//! Power iteration over the column-stochastic transition matrix.
//!
//! The engine starts from the uniform vector `1/n`, multiplies it by the
//! transition matrix until two consecutive vectors agree within epsilon,
//! and stops early at the iteration cap. There is no damping: sink pages
//! leak their mass instead of redistributing it.

use super::matrix::{is_equilibrium, multiply, Matrix};
use crate::config::EngineConfig;
use crate::error::{RankError, Result};
use crate::graph::Graph;
use serde::Serialize;
use tracing::{debug, info, trace, warn};

/// Default iteration cap.
pub const MAX_ITERS: usize = 1000;

/// Default equilibrium tolerance.
pub const EPSILON: f64 = 1e-7;

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankStatus {
    /// Two consecutive vectors agreed; ranks were committed to the nodes.
    Converged,
    /// The cap was hit first; ranks are only committed if `commit_on_cap` is set.
    CapReached,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankOutcome {
    pub status: RankStatus,
    /// Number of matrix-vector products performed.
    pub multiplies: usize,
    /// Final `n × 1` rank vector, in graph order.
    pub ranks: Matrix,
}

impl RankOutcome {
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == RankStatus::Converged
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.ranks.column_values()
    }
}

/// Computes `PageRank` for a [`Graph`].
#[derive(Debug, Clone, Default)]
pub struct RankEngine {
    config: EngineConfig,
}

impl RankEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs the engine and returns only the rank vector.
    ///
    /// # Errors
    /// See [`RankEngine::run`].
    pub fn compute(&self, graph: &mut Graph) -> Result<Matrix> {
        self.run(graph).map(|outcome| outcome.ranks)
    }

    /// Runs power iteration to equilibrium or the iteration cap.
    ///
    /// On equilibrium each node's rank is set from the final vector. On cap
    /// exhaustion the nodes keep their previous ranks unless
    /// `commit_on_cap` is enabled; the returned vector is final either way.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an empty graph or an unusable epsilon.
    pub fn run(&self, graph: &mut Graph) -> Result<RankOutcome> {
        let size = graph.len();
        if size == 0 {
            return Err(RankError::invalid("cannot rank an empty graph"));
        }
        let epsilon = self.config.epsilon;
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(RankError::invalid(format!("epsilon must be finite and >= 0, got {epsilon}")));
        }

        #[allow(clippy::cast_precision_loss)]
        let mut ranks = Matrix::filled_column(size, 1.0 / size as f64);

        // A lone page already holds all the mass.
        if size == 1 {
            graph.commit_ranks(&ranks.column_values());
            info!(multiplies = 0, "single page, rank is trivially 1");
            return Ok(RankOutcome {
                status: RankStatus::Converged,
                multiplies: 0,
                ranks,
            });
        }

        let matrix = transition_matrix(graph);
        let mut previous: Option<Matrix> = None;
        let mut multiplies = 0;
        let mut status = RankStatus::CapReached;

        for iteration in 0..self.config.max_iterations {
            if previous.is_some() && is_equilibrium(previous.as_ref(), Some(&ranks), epsilon)? {
                status = RankStatus::Converged;
                break;
            }
            let next = multiply(&matrix, &ranks)?;
            previous = Some(std::mem::replace(&mut ranks, next));
            multiplies += 1;
            trace!(iteration, mass = ranks.sum(), "power iteration step");
        }

        match status {
            RankStatus::Converged => {
                graph.commit_ranks(&ranks.column_values());
                info!(multiplies, "ranks converged");
            }
            RankStatus::CapReached => {
                if self.config.commit_on_cap {
                    graph.commit_ranks(&ranks.column_values());
                }
                warn!(
                    multiplies,
                    committed = self.config.commit_on_cap,
                    "iteration cap reached before equilibrium"
                );
            }
        }

        Ok(RankOutcome {
            status,
            multiplies,
            ranks,
        })
    }
}

/// Builds the `n × n` transition matrix: entry `[j][i]` is `1 / outdeg(i)`
/// when page `i` links to page `j`, else 0.
///
/// Targets are located through an identifier-to-position index. Links to
/// pages outside the graph add no entry but still count toward the
/// source's out-degree.
#[must_use]
pub fn transition_matrix(graph: &Graph) -> Matrix {
    let size = graph.len();
    let index = graph.index();
    let mut matrix = Matrix::zeros(size, size);

    if !graph.has_sequential_ids() {
        debug!("page identifiers are not 1..n in insertion order");
    }

    for (i, node) in graph.nodes().iter().enumerate() {
        let degree = node.out_degree();
        if degree == 0 {
            continue;
        }
        #[allow(clippy::cast_precision_loss)]
        let weight = 1.0 / degree as f64;
        for target in node.links() {
            if let Some(&j) = index.get(target) {
                matrix.set(j, i, weight);
            }
        }
    }

    debug!(size, "built transition matrix");
    matrix
}

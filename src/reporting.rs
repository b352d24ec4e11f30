//! Console and JSON output for rank results.

use crate::config::ReportConfig;
use crate::graph::{Graph, NodeId};
use crate::rank::queries::ranked_by;
use crate::rank::{RankOutcome, RankStatus};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// One page in a serialized report.
#[derive(Debug, Clone, Serialize)]
pub struct RankEntry {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub links: Vec<NodeId>,
    pub rank: f64,
}

/// Machine-readable summary of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub status: RankStatus,
    pub multiplies: usize,
    pub mass: f64,
    pub ranks: Vec<RankEntry>,
}

impl RankReport {
    /// Builds a report from the returned vector, sorted by descending rank.
    ///
    /// `top` limits the number of entries.
    #[must_use]
    pub fn new(graph: &Graph, outcome: &RankOutcome, top: Option<usize>) -> Self {
        let values = outcome.values();
        let limit = top.unwrap_or(usize::MAX);
        let ranks = ranked_by(graph, &values)
            .into_iter()
            .take(limit)
            .map(|(node, rank)| RankEntry {
                id: node.id(),
                label: node.label().map(str::to_string),
                links: node.links().to_vec(),
                rank,
            })
            .collect();

        Self {
            status: outcome.status,
            multiplies: outcome.multiplies,
            mass: values.iter().sum(),
            ranks,
        }
    }
}

/// Prints a formatted rank report to stdout.
pub fn print_report(report: &RankReport, config: &ReportConfig) {
    print_status(report);
    for (pos, entry) in report.ranks.iter().enumerate() {
        println!("{}", format_entry(pos + 1, entry, config));
    }
    println!(
        "{}",
        format!("total mass {:.*}", config.precision, report.mass).dimmed()
    );
}

fn print_status(report: &RankReport) {
    match report.status {
        RankStatus::Converged => println!(
            "{}",
            format!("✅ Converged after {} multiplies", report.multiplies)
                .green()
                .bold()
        ),
        RankStatus::CapReached => println!(
            "{}",
            format!(
                "⚠️  Iteration cap reached after {} multiplies",
                report.multiplies
            )
            .yellow()
            .bold()
        ),
    }
}

/// Renders one ranked line, e.g. `  #1  A (id 1)  0.387097  -> {3, 4, 2}`.
#[must_use]
pub fn format_entry(position: usize, entry: &RankEntry, config: &ReportConfig) -> String {
    let name = match &entry.label {
        Some(label) => format!("{label} (id {})", entry.id),
        None => format!("id {}", entry.id),
    };
    let mut line = format!(
        "  #{position:<3} {:<24} {:.*}",
        name,
        config.precision,
        entry.rank
    );
    if config.show_links {
        let links: Vec<String> = entry.links.iter().map(ToString::to_string).collect();
        line.push_str(&format!("  -> {{{}}}", links.join(", ")));
    }
    line
}

/// Prints any serializable value as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}

// src/graph/builder.rs
//! Builds graphs from link files and provides the sample web.
//!
//! A link file lists one source per line:
//!
//! ```text
//! # comment
//! A -> C, D, B
//! B -> C, D
//! E
//! ```
//!
//! Nodes are created in order of first appearance, so identifiers run
//! `1..=n` in insertion order.

use super::{Graph, NodeId};
use crate::error::{RankError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

const LABEL: &str = r"[A-Za-z0-9_.:/-]+";

#[allow(clippy::expect_used)]
fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"^\s*({LABEL})\s*(?:->\s*(.*))?$")).expect("valid line pattern")
    })
}

#[allow(clippy::expect_used)]
fn label_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!("^{LABEL}$")).expect("valid label pattern")
    })
}

/// Accumulates labelled nodes while keeping identifiers in insertion order.
struct LinkBuilder {
    graph: Graph,
    by_label: HashMap<String, NodeId>,
}

impl LinkBuilder {
    fn new() -> Self {
        Self {
            graph: Graph::new(),
            by_label: HashMap::new(),
        }
    }

    fn intern(&mut self, label: &str) -> NodeId {
        if let Some(id) = self.by_label.get(label) {
            return *id;
        }
        let node = self.graph.create_labeled(label);
        let id = node.id();
        self.graph.add_node(node);
        self.by_label.insert(label.to_string(), id);
        id
    }

    fn link(&mut self, from: &str, to: &str) {
        let from = self.intern(from);
        let to = self.intern(to);
        self.graph.add_edge(from, to);
    }
}

/// Parses link-file text into a graph.
///
/// # Errors
/// Returns `Parse` if a line is not `SOURCE [-> TARGET, ...]` or a target
/// label is malformed.
pub fn parse(content: &str) -> Result<Graph> {
    let mut builder = LinkBuilder::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        parse_line(&mut builder, line, idx + 1)?;
    }

    debug!(nodes = builder.graph.len(), "parsed link file");
    Ok(builder.graph)
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before)
}

fn parse_line(builder: &mut LinkBuilder, line: &str, line_no: usize) -> Result<()> {
    let caps = line_pattern().captures(line).ok_or_else(|| RankError::Parse {
        line: line_no,
        message: format!("expected `SOURCE -> TARGET, ...`, found `{line}`"),
    })?;

    let source = caps.get(1).map_or("", |m| m.as_str());
    builder.intern(source);

    let Some(targets) = caps.get(2) else {
        return Ok(());
    };

    for target in targets.as_str().split(',').map(str::trim) {
        if target.is_empty() {
            continue;
        }
        if !label_pattern().is_match(target) {
            return Err(RankError::Parse {
                line: line_no,
                message: format!("invalid target label `{target}`"),
            });
        }
        builder.link(source, target);
    }
    Ok(())
}

/// Reads and parses a link file.
///
/// # Errors
/// Returns `Io` if the file cannot be read, or `Parse` on malformed lines.
pub fn load(path: &Path) -> Result<Graph> {
    let content = fs::read_to_string(path).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse(&content)
}

/// The four-page sample web: A links to C, D, B; B to C, D; C to A; D to A, C.
#[must_use]
pub fn sample() -> Graph {
    let mut graph = Graph::new();
    let mut a = graph.create_labeled("A");
    let mut b = graph.create_labeled("B");
    let mut c = graph.create_labeled("C");
    let mut d = graph.create_labeled("D");

    a.link(&c);
    a.link(&d);
    a.link(&b);

    b.link(&c);
    b.link(&d);

    c.link(&a);

    d.link(&a);
    d.link(&c);

    graph.add_nodes([a, b, c, d]);
    graph
}

// src/graph/index.rs
//! Interned URL graph: dense node ids, out-adjacency and inlink counts.

use serde::Serialize;
use std::collections::HashMap;

/// Dense, zero-based node identity assigned in first-seen order.
pub type NodeId = usize;

/// The link graph built once while loading and read-only afterwards.
///
/// Every URL seen as either endpoint owns an adjacency entry, so a URL that
/// only ever appears as a target is still present as a dangling node.
#[derive(Debug, Default, Clone)]
pub struct GraphIndex {
    ids: HashMap<String, NodeId>,
    urls: Vec<String>,
    links: Vec<Vec<NodeId>>,
    /// Indexed by node id. Zero for URLs never seen as a target.
    inlinks: Vec<u64>,
    edges: usize,
}

/// Summary counts over a loaded graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub dangling: usize,
    pub distinct_targets: usize,
    pub self_loops: usize,
}

impl GraphIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `url`, allocating the next one on first sight.
    pub fn register(&mut self, url: &str) -> NodeId {
        if let Some(&id) = self.ids.get(url) {
            return id;
        }

        let id = self.urls.len();
        self.ids.insert(url.to_string(), id);
        self.urls.push(url.to_string());
        self.links.push(Vec::new());
        self.inlinks.push(0);
        id
    }

    /// Records one directed edge. Self-loops and repeats are kept as-is.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        let s = self.register(source);
        let t = self.register(target);
        self.push_edge(s, t);
    }

    /// Parses a `source \t target` line and records it.
    ///
    /// Returns `false` (and records nothing) unless the line holds exactly two
    /// non-empty tab-separated fields.
    pub fn add_line(&mut self, line: &str) -> bool {
        let Some((source, target)) = parse_edge(line) else {
            return false;
        };
        self.add_edge(source, target);
        true
    }

    #[allow(clippy::indexing_slicing)] // Both ids were just returned by register.
    fn push_edge(&mut self, source: NodeId, target: NodeId) {
        self.links[source].push(target);
        self.inlinks[target] += 1;
        self.edges += 1;
    }

    #[must_use]
    pub fn lookup(&self, url: &str) -> Option<NodeId> {
        self.ids.get(url).copied()
    }

    #[must_use]
    pub fn url(&self, id: NodeId) -> Option<&str> {
        self.urls.get(id).map(String::as_str)
    }

    /// URL registry, indexed by node id.
    #[must_use]
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Out-adjacency lists, indexed by node id.
    #[must_use]
    pub fn adjacency(&self) -> &[Vec<NodeId>] {
        &self.links
    }

    #[must_use]
    pub fn out_links(&self, id: NodeId) -> &[NodeId] {
        self.links.get(id).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Number of times `url` appeared as an edge target, duplicates included.
    #[must_use]
    pub fn inlink_count(&self, url: &str) -> Option<u64> {
        let id = self.lookup(url)?;
        self.inlinks.get(id).copied().filter(|&c| c > 0)
    }

    /// `(url, count)` for every URL seen as a target, in node-id order.
    pub fn inlink_counts(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.urls
            .iter()
            .zip(&self.inlinks)
            .filter(|&(_, &count)| count > 0)
            .map(|(url, &count)| (url.as_str(), count))
    }

    /// `(url, score)` pairs aligned to node ids.
    pub fn label<'a, 'b>(
        &'a self,
        scores: &'b [f64],
    ) -> impl Iterator<Item = (&'a str, f64)> + 'b
    where
        'a: 'b,
    {
        self.urls
            .iter()
            .zip(scores)
            .map(|(url, &score)| (url.as_str(), score))
    }

    #[must_use]
    pub fn dangling_count(&self) -> usize {
        self.links.iter().filter(|l| l.is_empty()).count()
    }

    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let self_loops = self
            .links
            .iter()
            .enumerate()
            .map(|(id, targets)| targets.iter().filter(|&&t| t == id).count())
            .sum();

        GraphStats {
            nodes: self.node_count(),
            edges: self.edges,
            dangling: self.dangling_count(),
            distinct_targets: self.inlinks.iter().filter(|&&c| c > 0).count(),
            self_loops,
        }
    }
}

/// Splits a raw edge line into `(source, target)`.
#[must_use]
pub fn parse_edge(line: &str) -> Option<(&str, &str)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.split('\t');
    let source = fields.next()?;
    let target = fields.next()?;

    if fields.next().is_some() || source.is_empty() || target.is_empty() {
        return None;
    }
    Some((source, target))
}

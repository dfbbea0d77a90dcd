//! Reference implementations for MST property verification.
//!
//! [`sequential_kruskal`] is a deliberately plain Kruskal that relies on the
//! standard library sort and a rank-free union-find. [`brute_force_forest`]
//! enumerates every edge subset of the right size and keeps the lightest
//! acyclic one, which is only feasible for small graphs.

use crate::{Edge, Weight};

use super::helpers::{count_components, find_root, is_acyclic};

/// Summary of a reference spanning-forest computation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: Weight,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components spanned by the forest.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with a straightforward Kruskal.
pub(super) fn sequential_kruskal(vertex_count: usize, edges: &[Edge]) -> OracleResult {
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(Edge::weight);

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut total_weight = 0;
    let mut edge_count = 0;
    for edge in &sorted {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.dest());
        if left != right {
            parent[right] = left;
            total_weight += edge.weight();
            edge_count += 1;
        }
    }

    OracleResult {
        total_weight,
        edge_count,
        component_count: vertex_count - edge_count,
    }
}

/// Finds the minimum spanning forest by exhaustive enumeration.
///
/// A graph with `k` connected components has spanning forests of exactly
/// `V - k` edges, and any acyclic subset of that size is one. The search
/// visits every such subset, so callers must keep `edges` small.
pub(super) fn brute_force_forest(vertex_count: usize, edges: &[Edge]) -> OracleResult {
    let component_count = count_components(vertex_count, edges);
    let target = vertex_count - component_count;

    let mut search = Search {
        vertex_count,
        edges,
        target,
        chosen: Vec::with_capacity(target),
        best: None,
    };
    search.visit(0, 0);

    OracleResult {
        total_weight: search.best.unwrap_or(0),
        edge_count: target,
        component_count,
    }
}

struct Search<'a> {
    vertex_count: usize,
    edges: &'a [Edge],
    target: usize,
    chosen: Vec<&'a Edge>,
    best: Option<Weight>,
}

impl<'a> Search<'a> {
    fn visit(&mut self, start: usize, weight: Weight) {
        if self.chosen.len() == self.target {
            if is_acyclic(self.vertex_count, &self.chosen) {
                self.best = Some(self.best.map_or(weight, |best| best.min(weight)));
            }
            return;
        }

        let remaining = self.target - self.chosen.len();
        let edges: &'a [Edge] = self.edges;
        for (index, edge) in edges.iter().enumerate().skip(start) {
            if edges.len() - index < remaining {
                break;
            }
            self.chosen.push(edge);
            self.visit(index + 1, weight + edge.weight());
            self.chosen.pop();
        }
    }
}

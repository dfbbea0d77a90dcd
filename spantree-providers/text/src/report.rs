use crate::errors::SkipReason;

/// An edge line that was not applied to the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line: usize,
    /// Why the line was skipped.
    pub reason: SkipReason,
}

/// Non-fatal findings from loading an edge list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadReport {
    declared_edges: usize,
    inserted_edges: usize,
    updated_edges: usize,
    skipped: Vec<SkippedLine>,
}

impl LoadReport {
    pub(crate) fn new(declared_edges: usize) -> Self {
        Self {
            declared_edges,
            ..Self::default()
        }
    }

    pub(crate) const fn record_inserted(&mut self) {
        self.inserted_edges += 1;
    }

    pub(crate) const fn record_updated(&mut self) {
        self.updated_edges += 1;
    }

    pub(crate) fn record_skipped(&mut self, line: usize, reason: SkipReason) {
        self.skipped.push(SkippedLine { line, reason });
    }

    /// Edge count declared by the header.
    #[must_use]
    #[rustfmt::skip]
    pub const fn declared_edges(&self) -> usize { self.declared_edges }

    /// Edge lines that added a new edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn inserted_edges(&self) -> usize { self.inserted_edges }

    /// Edge lines that reweighted an edge already read.
    #[must_use]
    #[rustfmt::skip]
    pub const fn updated_edges(&self) -> usize { self.updated_edges }

    /// Edge lines applied to the graph, whether inserted or updated.
    #[must_use]
    pub const fn accepted_edges(&self) -> usize {
        self.inserted_edges + self.updated_edges
    }

    /// Lines skipped in input order.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Returns `true` when the header's edge count equals the accepted count.
    #[must_use]
    pub const fn matches_declared(&self) -> bool {
        self.declared_edges == self.accepted_edges()
    }
}

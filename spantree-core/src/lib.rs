//! Minimum spanning trees over bounded, deduplicated edge stores.
//!
//! A [`Graph`] stores each unordered vertex pair at most once; inserting a
//! known pair again replaces its weight. [`KruskalEngine`] snapshots the
//! stored edges, orders them with [`EdgeHeapSorter`], and selects a minimum
//! spanning tree with a [`DisjointSet`], stopping as soon as `V - 1` edges
//! are chosen. Disconnected graphs produce a spanning forest.
//!
//! [`graph_from_points`] builds the complete Euclidean graph over planar
//! points for callers that start from coordinates rather than edges.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod edge;
mod error;
mod geometry;
mod graph;
mod heap_sort;
mod mst;

#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    edge::{Edge, VertexId, Weight},
    error::{GeometryError, GeometryErrorCode, GraphError, GraphErrorCode, Result},
    geometry::{Point, euclidean_weight, graph_from_points},
    graph::{EdgeInsertion, Graph},
    heap_sort::{EdgeHeapSorter, SortStats, heap_sort},
    mst::{KruskalEngine, MstObserver, MstResult, NoopObserver, TracingObserver},
};

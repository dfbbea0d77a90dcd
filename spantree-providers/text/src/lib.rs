//! Line-oriented text loaders producing spantree graphs.
//!
//! Two formats are understood, both whitespace separated with blank lines
//! ignored:
//!
//! - **Edge lists** ([`load_edge_list`]): a `V E` header declaring the vertex
//!   and edge counts, then one `u v w` line per edge. Bad edge lines are
//!   skipped and recorded in the returned [`LoadReport`].
//! - **Coordinates** ([`load_points`], [`load_point_graph`]): a `V` header,
//!   then `V` lines of `x y`. Every coordinate must parse, so any bad line is
//!   fatal.
//!
//! Header problems are always fatal and surface as [`TextProviderError`].

mod coordinates;
mod edge_list;
mod errors;
mod lines;
mod report;

pub use crate::{
    coordinates::{load_point_graph, load_points},
    edge_list::{EdgeListLoad, load_edge_list},
    errors::{SkipReason, TextProviderError},
    lines::MAX_VERTICES,
    report::{LoadReport, SkippedLine},
};

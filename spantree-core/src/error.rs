//! Error types for the spantree core library.
//!
//! Every rejection in the core is local and recoverable: a failed
//! [`crate::Graph::add_edge`] leaves the edge store untouched, and an
//! incomplete spanning tree is reported through [`crate::MstResult`] rather
//! than as an error.

use std::fmt;

use thiserror::Error;

use crate::edge::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing or mutating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// Graphs must contain at least one vertex.
    #[error("vertex count must be at least 1 (got {got})")]
    InvalidVertexCount {
        /// The vertex count supplied by the caller.
        got: usize,
    },
    /// An edge endpoint lies outside `[0, vertex_count)`.
    #[error("edge ({source_vertex}, {dest}) references a vertex outside 0..{vertex_count}")]
    VertexOutOfRange {
        /// Source endpoint as supplied.
        source_vertex: VertexId,
        /// Destination endpoint as supplied.
        dest: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// Both endpoints of an edge are the same vertex.
    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop {
        /// The repeated endpoint.
        vertex: VertexId,
    },
    /// The edge store already holds `V*(V-1)/2` distinct edges.
    #[error("edge store is full ({capacity} edges); cannot insert ({source_vertex}, {dest})")]
    CapacityExhausted {
        /// Canonical source endpoint of the rejected edge.
        source_vertex: VertexId,
        /// Canonical destination endpoint of the rejected edge.
        dest: VertexId,
        /// Maximum number of distinct edges the graph can hold.
        capacity: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Graphs must contain at least one vertex.
        InvalidVertexCount => InvalidVertexCount { .. } => "GRAPH_INVALID_VERTEX_COUNT",
        /// An edge endpoint lies outside the vertex range.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// Both endpoints of an edge are the same vertex.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// The edge store is at capacity.
        CapacityExhausted => CapacityExhausted { .. } => "GRAPH_CAPACITY_EXHAUSTED",
    }
}

/// Error type produced when deriving edge weights from point coordinates.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeometryError {
    /// A point carried a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input.
        index: usize,
    },
    /// The distance between two points could not be represented as a weight.
    #[error("distance {distance} cannot be represented as an integral weight")]
    NonFinite {
        /// The raw distance that overflowed or was not finite.
        distance: f64,
    },
    /// Building the graph over the points failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`GeometryError`] variants.
    enum GeometryErrorCode for GeometryError {
        /// A point carried a NaN or infinite coordinate.
        NonFiniteCoordinate => NonFiniteCoordinate { .. } => "GEOMETRY_NON_FINITE_COORDINATE",
        /// A distance could not be represented as a weight.
        NonFinite => NonFinite { .. } => "GEOMETRY_NON_FINITE_DISTANCE",
        /// Building the graph over the points failed.
        GraphFailure => Graph(..) => "GEOMETRY_GRAPH_FAILURE",
    }
}

impl GeometryError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated in a [`crate::Graph`].
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;

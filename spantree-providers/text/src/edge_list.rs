//! `V E` edge-list loader.

use std::io::BufRead;

use spantree_core::{EdgeInsertion, Graph, VertexId, Weight};
use tracing::{debug, instrument, warn};

use crate::{
    errors::{SkipReason, TextProviderError},
    lines::{NumberedLines, parse_vertex_count},
    report::LoadReport,
};

const HEADER: &str = "<vertices> <edges>";

/// A graph loaded from an edge list together with its [`LoadReport`].
#[derive(Clone, Debug)]
pub struct EdgeListLoad {
    /// The loaded graph.
    pub graph: Graph,
    /// Skipped lines and edge-count bookkeeping.
    pub report: LoadReport,
}

/// Loads an edge list from `reader`.
///
/// The first non-blank line must hold the vertex count (`1..=`
/// [`crate::MAX_VERTICES`]) and the declared edge count. Each later line is
/// read as `u v w`; fields past the third are ignored. A line that does not
/// decode as UTF-8 or parse, or whose edge the graph rejects, is skipped with a warning and
/// recorded in [`LoadReport::skipped`]. Repeating a vertex pair reweights the
/// stored edge.
///
/// # Errors
/// Returns [`TextProviderError`] when the input cannot be read or the header
/// is missing, malformed, or declares an unsupported vertex count.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use spantree_providers_text::load_edge_list;
///
/// let loaded = load_edge_list(Cursor::new("3 3\n0 1 4\n1 2 1\n2 2 9\n"))?;
/// assert_eq!(loaded.graph.edge_count(), 2);
/// assert_eq!(loaded.report.skipped()[0].line, 4);
/// assert!(!loaded.report.matches_declared());
/// # Ok::<(), spantree_providers_text::TextProviderError>(())
/// ```
#[instrument(name = "text.load_edge_list", level = "debug", skip(reader), err)]
pub fn load_edge_list<R: BufRead>(reader: R) -> Result<EdgeListLoad, TextProviderError> {
    let mut lines = NumberedLines::new(reader);
    let (header_line, header) = lines.header()?;
    let (vertex_count, declared) = parse_header(header_line, &header)?;

    let mut graph = Graph::new(vertex_count)?;
    if declared > graph.capacity() {
        warn!(
            declared,
            capacity = graph.capacity(),
            "declared edge count exceeds the number of distinct vertex pairs"
        );
    }

    let mut report = LoadReport::new(declared);
    for entry in lines {
        let raw = entry?;
        let line = raw.number;
        let outcome = raw
            .text()
            .map_err(|_| SkipReason::InvalidEncoding)
            .and_then(parse_edge)
            .and_then(|(u, v, weight)| graph.add_edge(u, v, weight).map_err(SkipReason::from));
        match outcome {
            Ok(EdgeInsertion::Inserted) => report.record_inserted(),
            Ok(EdgeInsertion::Updated { previous }) => {
                debug!(line, previous, "edge reweighted by a later line");
                report.record_updated();
            }
            Err(reason) => {
                warn!(line, %reason, "skipping edge line");
                report.record_skipped(line, reason);
            }
        }
    }

    if !report.matches_declared() {
        warn!(
            declared,
            accepted = report.accepted_edges(),
            "accepted edge count differs from header"
        );
    }
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        skipped = report.skipped().len(),
        "edge list loaded"
    );
    Ok(EdgeListLoad { graph, report })
}

fn parse_header(line: usize, header: &str) -> Result<(usize, usize), TextProviderError> {
    let malformed = || TextProviderError::MalformedHeader {
        line,
        expected: HEADER,
        found: header.to_owned(),
    };
    let mut fields = header.split_whitespace();
    let (Some(vertices), Some(edges)) = (fields.next(), fields.next()) else {
        return Err(malformed());
    };
    let vertex_count = parse_vertex_count(line, vertices, HEADER, header)?;
    let declared = edges.parse().map_err(|_| malformed())?;
    Ok((vertex_count, declared))
}

fn parse_edge(text: &str) -> Result<(VertexId, VertexId, Weight), SkipReason> {
    let fields: Vec<&str> = text.split_whitespace().take(3).collect();
    let [u, v, w] = fields.as_slice() else {
        return Err(SkipReason::MissingFields {
            found: fields.len(),
        });
    };
    Ok((
        parse_field(u, "vertex index")?,
        parse_field(v, "vertex index")?,
        parse_field(w, "weight")?,
    ))
}

fn parse_field<T: std::str::FromStr>(token: &str, field: &'static str) -> Result<T, SkipReason> {
    token.parse().map_err(|_| SkipReason::InvalidNumber {
        field,
        token: token.to_owned(),
    })
}

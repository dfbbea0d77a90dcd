//! `V` + `x y` coordinate loader.

use std::io::BufRead;

use spantree_core::{Graph, Point, graph_from_points};
use tracing::{debug, instrument};

use crate::{
    errors::TextProviderError,
    lines::{NumberedLines, parse_vertex_count},
};

const HEADER: &str = "<points>";

/// Reads the declared number of points from `reader`.
///
/// Lines after the last declared point are not read.
///
/// # Errors
/// Returns [`TextProviderError`] when the header is missing or out of range,
/// a coordinate line is malformed or non-finite, or the input ends early.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use spantree_core::Point;
/// use spantree_providers_text::load_points;
///
/// let points = load_points(Cursor::new("2\n0 0\n3.5 -1\n"))?;
/// assert_eq!(points, [Point::new(0.0, 0.0), Point::new(3.5, -1.0)]);
/// # Ok::<(), spantree_providers_text::TextProviderError>(())
/// ```
#[instrument(name = "text.load_points", level = "debug", skip(reader), err)]
pub fn load_points<R: BufRead>(reader: R) -> Result<Vec<Point>, TextProviderError> {
    let mut lines = NumberedLines::new(reader);
    let (header_line, header) = lines.header()?;
    let first = header.split_whitespace().next().unwrap_or_default();
    let expected = parse_vertex_count(header_line, first, HEADER, &header)?;

    let mut points = Vec::with_capacity(expected);
    for entry in lines.by_ref().take(expected) {
        let raw = entry?;
        let point = match raw.text() {
            Ok(text) => parse_point(raw.number, text)?,
            Err(_) => {
                return Err(TextProviderError::MalformedCoordinate {
                    line: raw.number,
                    found: raw.lossy().into_owned(),
                });
            }
        };
        points.push(point);
    }
    if points.len() < expected {
        return Err(TextProviderError::MissingCoordinates {
            expected,
            found: points.len(),
        });
    }

    debug!(points = points.len(), "coordinates loaded");
    Ok(points)
}

/// Reads points from `reader` and builds their complete Euclidean graph.
///
/// # Errors
/// Returns the errors of [`load_points`], plus
/// [`TextProviderError::Geometry`] when a pairwise distance cannot be
/// represented as a weight.
pub fn load_point_graph<R: BufRead>(reader: R) -> Result<Graph, TextProviderError> {
    let points = load_points(reader)?;
    Ok(graph_from_points(&points)?)
}

fn parse_point(line: usize, text: &str) -> Result<Point, TextProviderError> {
    let mut fields = text.split_whitespace().map(str::parse::<f64>);
    match (fields.next(), fields.next()) {
        (Some(Ok(x)), Some(Ok(y))) if x.is_finite() && y.is_finite() => Ok(Point::new(x, y)),
        _ => Err(TextProviderError::MalformedCoordinate {
            line,
            found: text.to_owned(),
        }),
    }
}

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use spantree_core::{Edge, Graph, KruskalEngine, MstObserver, MstResult, TracingObserver};
use spantree_providers_text::{SkippedLine, TextProviderError, load_edge_list, load_point_graph};
use thiserror::Error;
use tracing::{info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "spantree", about = "Compute minimum spanning trees with Kruskal's algorithm.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute a minimum spanning tree, or forest for disconnected input.
    Mst(MstCommand),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Print every stored edge in the order the engine examines them.
    #[arg(long = "show-order", global = true)]
    pub show_order: bool,

    /// Input format and location.
    #[command(subcommand)]
    pub source: MstSource,
}

/// Input formats understood by the `mst` command.
#[derive(Debug, Subcommand, Clone)]
pub enum MstSource {
    /// Read a `V E` header followed by `u v w` edge lines.
    Edges(InputArgs),
    /// Read a `V` header followed by `x y` lines; weights are rounded
    /// Euclidean distances.
    Points(InputArgs),
}

/// Path to an input file.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// File to read.
    pub path: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input could not be loaded.
    #[error("failed to load `{path}`: {source}")]
    Load {
        /// Path being loaded.
        path: PathBuf,
        /// Loader failure.
        #[source]
        source: TextProviderError,
    },
}

impl CliError {
    /// Returns the stable code of the core error behind this failure, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Load {
                source: TextProviderError::Graph(error),
                ..
            } => Some(error.code().as_str()),
            Self::Load {
                source: TextProviderError::Geometry(error),
                ..
            } => Some(error.code().as_str()),
            _ => None,
        }
    }
}

/// Outcome of one `mst` invocation.
#[derive(Debug, Clone)]
pub struct MstReport {
    /// Input name derived from the file path.
    pub source: String,
    /// Number of vertices in the loaded graph.
    pub vertex_count: usize,
    /// Number of distinct edges stored in the graph.
    pub stored_edges: usize,
    /// Edge lines the loader skipped; always empty for point input.
    pub skipped: Vec<SkippedLine>,
    /// Stored edges in ascending weight order, when requested.
    pub ordered: Option<Vec<Edge>>,
    /// Selected tree or forest.
    pub result: MstResult,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be opened or loaded.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spantree_cli::cli::{Cli, Command, InputArgs, MstCommand, MstSource, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 2\n0 1 4\n1 2 6\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstCommand {
///         show_order: false,
///         source: MstSource::Edges(InputArgs {
///             path: file.path().to_path_buf(),
///         }),
///     }),
/// };
/// let report = run_cli(cli)?;
/// assert_eq!(report.result.total_weight(), 10);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<MstReport, CliError> {
    match cli.command {
        Command::Mst(command) => run_mst(command),
    }
}

#[instrument(name = "cli.mst", skip(command), fields(show_order = command.show_order))]
fn run_mst(command: MstCommand) -> Result<MstReport, CliError> {
    let (path, graph, skipped) = match command.source {
        MstSource::Edges(InputArgs { path }) => {
            let reader = open_reader(&path)?;
            let loaded = load_edge_list(reader).map_err(|source| CliError::Load {
                path: path.clone(),
                source,
            })?;
            (path, loaded.graph, loaded.report.skipped().to_vec())
        }
        MstSource::Points(InputArgs { path }) => {
            let reader = open_reader(&path)?;
            let graph = load_point_graph(reader).map_err(|source| CliError::Load {
                path: path.clone(),
                source,
            })?;
            (path, graph, Vec::new())
        }
    };
    info!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    Ok(compute_report(
        derive_source_name(&path),
        &graph,
        skipped,
        command.show_order,
    ))
}

fn compute_report(
    source: String,
    graph: &Graph,
    skipped: Vec<SkippedLine>,
    show_order: bool,
) -> MstReport {
    let mut observer = ReportObserver::new(show_order);
    let result = KruskalEngine::new().compute_with(graph, &mut observer);
    MstReport {
        source,
        vertex_count: graph.vertex_count(),
        stored_edges: graph.edge_count(),
        skipped,
        ordered: observer.ordered,
        result,
    }
}

/// Forwards to [`TracingObserver`] and, when asked, keeps the ordered
/// snapshot the engine sorted so the report does not sort it again.
#[derive(Debug, Default)]
pub(crate) struct ReportObserver {
    pub(crate) ordered: Option<Vec<Edge>>,
}

impl ReportObserver {
    pub(crate) fn new(keep_order: bool) -> Self {
        Self {
            ordered: keep_order.then(Vec::new),
        }
    }
}

impl MstObserver for ReportObserver {
    fn on_ordered(&mut self, edges: &[Edge]) {
        TracingObserver.on_ordered(edges);
        if let Some(ordered) = self.ordered.as_mut() {
            ordered.extend_from_slice(edges);
        }
    }

    fn on_accepted(&mut self, edge: &Edge) {
        TracingObserver.on_accepted(edge);
    }

    fn on_rejected(&mut self, edge: &Edge) {
        TracingObserver.on_rejected(edge);
    }

    fn on_finished(&mut self, result: &MstResult) {
        TracingObserver.on_finished(result);
    }
}

fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn derive_source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|value| value.to_str())
        .map_or_else(|| "input".to_owned(), ToOwned::to_owned)
}

/// Renders `report` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spantree_cli::cli::{MstReport, render_report};
/// # use spantree_core::{Graph, KruskalEngine};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut graph = Graph::new(2)?;
/// graph.add_edge(0, 1, 7)?;
/// let report = MstReport {
///     source: "demo".into(),
///     vertex_count: 2,
///     stored_edges: 1,
///     skipped: Vec::new(),
///     ordered: None,
///     result: KruskalEngine::new().compute(&graph),
/// };
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.contains("total weight: 7"));
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &MstReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "source: {}", report.source)?;
    writeln!(writer, "vertices: {}", report.vertex_count)?;
    writeln!(writer, "stored edges: {}", report.stored_edges)?;
    if !report.skipped.is_empty() {
        writeln!(writer, "skipped lines: {}", report.skipped.len())?;
        for entry in &report.skipped {
            writeln!(writer, "  line {}: {}", entry.line, entry.reason)?;
        }
    }
    if let Some(ordered) = &report.ordered {
        writeln!(writer, "ordered edges:")?;
        for edge in ordered {
            writeln!(writer, "  {edge}")?;
        }
    }

    let result = &report.result;
    writeln!(writer, "mst edges:")?;
    for edge in result.edges() {
        writeln!(writer, "  {edge}")?;
    }
    if result.is_saturated() {
        writeln!(
            writer,
            "total weight: {} (clamped; the exact sum overflows)",
            result.total_weight()
        )?;
    } else {
        writeln!(writer, "total weight: {}", result.total_weight())?;
    }
    if result.is_complete() {
        writeln!(
            writer,
            "status: complete ({} of {} edges)",
            result.edge_count(),
            result.required_edges()
        )
    } else {
        writeln!(
            writer,
            "status: incomplete ({} of {} edges; graph is disconnected)",
            result.edge_count(),
            result.required_edges()
        )
    }
}

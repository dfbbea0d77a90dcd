//! Command-line interface for computing minimum spanning trees.
//!
//! `spantree mst edges <PATH>` loads a `V E` edge list and
//! `spantree mst points <PATH>` loads planar coordinates; both print the
//! selected tree and whether it spans the whole graph.

mod commands;

pub use commands::{
    Cli, CliError, Command, InputArgs, MstCommand, MstReport, MstSource, render_report, run_cli,
};

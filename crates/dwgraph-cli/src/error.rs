//! Error types for the dwgraph CLI.

use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// Graph library error (load, save, invalid edge).
    #[error(transparent)]
    Graph(#[from] dwgraph::GraphError),

    /// Node key given on the command line is not in the graph.
    #[error("Node {0} is not in the graph")]
    UnknownNode(i32),
}

//! Error types for the cinegraph shell.

use thiserror::Error;

use cinegraph_core::types::InvalidYear;
use cinegraph_core::CoreError;
use cinegraph_graph::GraphError;

/// Why an operation refused to run.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Precondition {
    #[error("No movie selected. Search and select a movie first")]
    NoSelection,

    #[error("Search term is empty")]
    EmptySearchTerm,

    #[error("Invalid menu choice: {0:?}")]
    InvalidMenuChoice(String),

    #[error(transparent)]
    InvalidYear(#[from] InvalidYear),
}

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("No database connection")]
    ConnectionUnavailable,

    #[error("{0}")]
    PreconditionFailed(#[from] Precondition),

    #[error("Movie not found: {title}")]
    NotFound { title: String },

    #[error("Store operation failed: {0}")]
    Store(#[from] GraphError),

    #[error("Export failed: {0}")]
    Export(#[from] CoreError),

    #[error("Console input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, ShellError>;

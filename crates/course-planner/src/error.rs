//! Error types for the course planner.
//!
//! All errors use thiserror for consistent error handling across the codebase.
//! Search misses and empty benchmark workloads are not errors and never appear here.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog ingestion errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be opened
    #[error("File could not be opened: {path}: {source}")]
    Open {
        /// Path to the CSV file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while reading a line
    #[error("Failed to read line {line}: {source}")]
    Read {
        /// 1-based line number
        line: usize,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Catalog file is required but missing
    #[error("Catalog file not found: {}", .0.display())]
    MissingCatalog(PathBuf),

    /// Iteration count given on the command line was zero
    #[error("Iterations per course ID must be at least 1")]
    InvalidIterations,
}

/// Driver errors.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// A query was issued before any catalog was loaded
    #[error("Please load courses first (option 1).")]
    NotLoaded,

    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Failed to write output
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// A structural invariant failed during an index self-check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    /// In-order keys are not strictly ascending
    #[error("Keys out of order: {previous} is followed by {next}")]
    Ordering {
        /// Key visited first
        previous: String,
        /// Key visited next
        next: String,
    },

    /// Stored height disagrees with the children
    #[error("Node {key} stores height {stored}, expected {expected}")]
    Height {
        /// Node key
        key: String,
        /// Height recorded on the node
        stored: usize,
        /// Height computed from the children
        expected: usize,
    },

    /// Balance factor outside {-1, 0, +1}
    #[error("Node {key} has balance factor {factor}")]
    Balance {
        /// Node key
        key: String,
        /// Left height minus right height
        factor: isize,
    },

    /// Reported size disagrees with reachable nodes
    #[error("Index reports {reported} entries but {reachable} nodes are reachable")]
    Cardinality {
        /// Value of `len()`
        reported: usize,
        /// Nodes counted by traversal
        reachable: usize,
    },
}

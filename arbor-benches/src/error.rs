//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` so the bench bodies never
//! call `.expect()`.

use arbor_core::{MstError, RedundantEdgeError, ShortestPathError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A warm-up spanning forest computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A warm-up shortest-path computation failed.
    #[error("shortest-path computation failed: {0}")]
    ShortestPath(#[from] ShortestPathError),
    /// A warm-up redundant-edge resolution failed.
    #[error("redundant-edge resolution failed: {0}")]
    RedundantEdge(#[from] RedundantEdgeError),
}

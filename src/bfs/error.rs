use thiserror::Error;

/// Input errors rejected by the BFS engine before any output is written.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BfsError {
    /// The input is not square, so it cannot be an adjacency matrix.
    #[error("not an adjacency matrix: {rows} x {cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// The source vertex does not exist.
    #[error("invalid source vertex {vertex}: graph has {vertices} vertices")]
    SourceOutOfRange { vertex: usize, vertices: usize },

    /// Edge multiplicities must be non-negative.
    #[error("negative edge multiplicity {value} at ({row}, {col})")]
    NegativeEntry { row: usize, col: usize, value: i64 },

    /// Caller-owned output arrays must have one slot per vertex.
    #[error("output arrays must have length {expected}, got color={color} distance={distance}")]
    BufferLength { expected: usize, color: usize, distance: usize },
}

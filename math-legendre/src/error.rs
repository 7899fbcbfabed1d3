//! Error types for Legendre tables and figure assembly.

use thiserror::Error;

/// Errors produced while building definitions, tables, or figures.
#[derive(Debug, Error)]
pub enum LegendreError {
    /// The order does not satisfy |m| <= n.
    #[error("order out of range: |m| = {abs} exceeds degree n = {n}", abs = .m.abs())]
    OrderOutOfRange {
        /// Degree
        n: u32,
        /// Order
        m: i32,
    },

    /// A subplot cell index is outside the grid.
    #[error("cell ({row}, {col}) outside a {rows}x{cols} subplot grid")]
    CellOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Grid row count
        rows: usize,
        /// Grid column count
        cols: usize,
    },

    /// The symbolic pipeline rejected an expression.
    #[error(transparent)]
    Symbolic(#[from] math_harmonics_symbolic::SymbolicError),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, LegendreError>;

impl LegendreError {
    /// Returns `true` if this error reports an invalid (n, m) pair.
    pub fn is_order_error(&self) -> bool {
        matches!(self, LegendreError::OrderOutOfRange { .. })
    }
}

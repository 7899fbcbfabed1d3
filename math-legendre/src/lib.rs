//! Associated Legendre functions and spherical harmonics
//!
//! This crate cross-validates published symbolic definitions of the
//! associated Legendre functions against a trusted numeric reference:
//!
//! - **ACN indexing**: the ambisonic channel number bijection between a
//!   linear index and the (degree, order) pair
//! - **Reference evaluator**: recurrence-based P_n(x) and P_n^m(x)
//! - **Symbolic definitions**: Williams/Rafaely, Zotter-Frank and AES69
//!   variants derived by repeated differentiation of Rodrigues' formula
//! - **Spherical harmonics**: complex and real (ambisonics) Y_n^m
//! - **Comparison figures**: a pyramid of subplots, one cell per (n, m),
//!   candidate curve against the dotted reference curve
//!
//! # Example
//!
//! ```
//! use math_harmonics_legendre::{Definition, comparison_figure, sample_grid};
//!
//! let grid = sample_grid(200);
//! let table = Definition::ZotterFrank.table(2).unwrap();
//! let evaluated = table.evaluate(&grid).unwrap();
//! let figure = comparison_figure(&evaluated).unwrap();
//! assert!(!figure.to_json().is_empty());
//! ```

pub mod acn;
pub mod definitions;
mod error;
pub mod grid;
pub mod plot;
pub mod reference;
pub mod spherical;

pub use definitions::{Definition, DefinitionTable, EvaluatedCell, EvaluatedTable};
pub use error::{LegendreError, Result};
pub use grid::{DEFAULT_RESOLUTION, sample_grid};
pub use plot::{Curve, SubplotGrid, comparison_figure};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

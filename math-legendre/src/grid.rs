//! Shared sample grid over the Legendre domain [-1, 1].

use ndarray::Array1;

/// Grid resolution used by the comparison figures.
pub const DEFAULT_RESOLUTION: usize = 1000;

/// Evenly spaced sample points over `[-1, 1]`, endpoints included.
///
/// Built once per run and shared read-only by every evaluation; the
/// endpoints deliberately stay in the grid so that singular behaviour of a
/// definition at `x = +-1` shows up in the plots.
pub fn sample_grid(resolution: usize) -> Array1<f64> {
    Array1::linspace(-1.0, 1.0, resolution)
}

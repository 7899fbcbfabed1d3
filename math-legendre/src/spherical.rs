//! Spherical harmonics built on the reference Legendre evaluator
//!
//! Orthonormal complex harmonics and the real-valued (ambisonics) form,
//! with channel vectors laid out in ACN order. Angles follow the physics
//! convention: `theta` is the polar angle measured from +z, `phi` the
//! azimuth.

use crate::acn::channels;
use crate::reference::{associated_legendre_nm, log_factorial_ratio, neg_one_pow};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Orthonormalization factor for Y_n^m:
/// ```text
/// N_n^m = sqrt((2n+1)/(4 pi) * (n-m)!/(n+m)!)
/// ```
/// Valid for signed m; the factorial ratio flips sign in the log domain for
/// negative orders.
pub fn normalization_factor(n: u32, m: i32) -> f64 {
    let m_abs = m.unsigned_abs();
    let log_ratio = if m >= 0 {
        log_factorial_ratio(n, m_abs)
    } else {
        -log_factorial_ratio(n, m_abs)
    };
    ((2 * n + 1) as f64 / (4.0 * PI) * log_ratio.exp()).sqrt()
}

/// Complex spherical harmonic Y_n^m(theta, phi).
///
/// Condon–Shortley phase included via the associated Legendre factor, so
/// the conjugation symmetry `Y_n^{-m} = (-1)^m conj(Y_n^m)` holds.
pub fn spherical_harmonic(n: u32, m: i32, theta: f64, phi: f64) -> Complex64 {
    let radial = normalization_factor(n, m) * associated_legendre_nm(n, m, theta.cos());
    Complex64::from_polar(1.0, m as f64 * phi) * radial
}

/// Real spherical harmonic in the ambisonics convention: cosine azimuth for
/// positive orders, sine azimuth for negative, no Condon–Shortley phase.
pub fn real_spherical_harmonic(n: u32, m: i32, theta: f64, phi: f64) -> f64 {
    let m_abs = m.unsigned_abs();
    let radial = normalization_factor(n, m_abs as i32)
        * associated_legendre_nm(n, m_abs as i32, theta.cos());
    let phase = neg_one_pow(m_abs as i32);
    match m {
        0 => radial,
        m if m > 0 => 2f64.sqrt() * phase * radial * (m_abs as f64 * phi).cos(),
        _ => 2f64.sqrt() * phase * radial * (m_abs as f64 * phi).sin(),
    }
}

/// All real harmonics of a direction up to `n_max`, in ACN order.
pub fn sh_channels(n_max: u32, theta: f64, phi: f64) -> Vec<f64> {
    channels(n_max)
        .map(|(n, m)| real_spherical_harmonic(n, m, theta, phi))
        .collect()
}

//! Trusted numeric reference for Legendre functions
//!
//! Recurrence-based evaluation of Legendre polynomials and associated
//! Legendre functions, used as the reference curve every symbolic
//! definition is compared against. The Condon–Shortley phase is included,
//! matching the convention of the usual scientific-library evaluators.
//!
//! All functions here are pure; out-of-range orders evaluate to the
//! mathematically correct value 0 rather than failing.

use ndarray::Array1;

/// Legendre polynomials P_0(x) ..= P_n_max(x).
///
/// Stable three-term recurrence:
/// ```text
/// n P_n(x) = (2n - 1) x P_{n-1}(x) - (n - 1) P_{n-2}(x)
/// ```
///
/// # Example
/// ```
/// use math_harmonics_legendre::reference::legendre_polynomials;
/// let p = legendre_polynomials(2, 0.5);
/// assert!((p[2] - (-0.125)).abs() < 1e-12);
/// ```
pub fn legendre_polynomials(n_max: u32, x: f64) -> Vec<f64> {
    let mut values = Vec::with_capacity(n_max as usize + 1);
    values.push(1.0);
    if n_max == 0 {
        return values;
    }
    values.push(x);
    for n in 2..=n_max as usize {
        let n_f = n as f64;
        let next = ((2.0 * n_f - 1.0) * x * values[n - 1] - (n_f - 1.0) * values[n - 2]) / n_f;
        values.push(next);
    }
    values
}

/// Single Legendre polynomial P_n(x).
pub fn legendre_p(n: u32, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => legendre_polynomials(n, x)[n as usize],
    }
}

/// Associated Legendre functions P_m^m(x) ..= P_n_max^m(x) for `m >= 0`.
///
/// Seeds with `P_m^m = (-1)^m (2m - 1)!! (1 - x^2)^{m/2}` (Condon–Shortley
/// phase included) and climbs degrees with
/// ```text
/// (n - m) P_n^m = (2n - 1) x P_{n-1}^m - (n + m - 1) P_{n-2}^m
/// ```
///
/// Returns an empty vector when `m > n_max`.
pub fn associated_legendre(n_max: u32, m: u32, x: f64) -> Vec<f64> {
    if m > n_max {
        return Vec::new();
    }

    let count = (n_max - m) as usize + 1;
    let mut values = Vec::with_capacity(count);

    let sin_theta = (1.0 - x * x).max(0.0).sqrt();
    let mut pmm = 1.0;
    for k in 1..=m as u64 {
        pmm *= -((2 * k - 1) as f64) * sin_theta;
    }
    values.push(pmm);

    if count == 1 {
        return values;
    }

    // P_{m+1}^m = (2m + 1) x P_m^m
    let mut prev = pmm;
    let mut curr = (2 * m + 1) as f64 * x * pmm;
    values.push(curr);

    for n in (m + 2)..=n_max {
        let n_f = n as f64;
        let m_f = m as f64;
        let next = ((2.0 * n_f - 1.0) * x * curr - (n_f + m_f - 1.0) * prev) / (n_f - m_f);
        values.push(next);
        prev = curr;
        curr = next;
    }

    values
}

/// Single associated Legendre function P_n^m(x) for signed order `m`.
///
/// Negative orders use
/// ```text
/// P_n^{-m} = (-1)^m (n - m)! / (n + m)! P_n^m
/// ```
/// `|m| > n` evaluates to 0.
pub fn associated_legendre_nm(n: u32, m: i32, x: f64) -> f64 {
    let m_abs = m.unsigned_abs();
    if m_abs > n {
        return 0.0;
    }

    let positive = associated_legendre(n, m_abs, x)[(n - m_abs) as usize];
    if m >= 0 {
        positive
    } else {
        neg_one_pow(m_abs as i32) * log_factorial_ratio(n, m_abs).exp() * positive
    }
}

/// P_n^m evaluated over a whole sample grid.
pub fn associated_legendre_grid(n: u32, m: i32, grid: &Array1<f64>) -> Array1<f64> {
    grid.mapv(|x| associated_legendre_nm(n, m, x))
}

/// `ln((n - m)! / (n + m)!)`, accumulated in the log domain so the ratio
/// stays representable at high degrees.
pub(crate) fn log_factorial_ratio(n: u32, m: u32) -> f64 {
    let mut log_ratio = 0.0;
    for k in (n - m + 1)..=(n + m) {
        log_ratio -= (k as f64).ln();
    }
    log_ratio
}

/// (-1)^m for signed m.
pub(crate) fn neg_one_pow(m: i32) -> f64 {
    if m.rem_euclid(2) == 0 { 1.0 } else { -1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_low_degree_closed_forms() {
        let x = 0.6;
        let p = legendre_polynomials(3, x);
        assert!((p[0] - 1.0).abs() < EPSILON);
        assert!((p[1] - x).abs() < EPSILON);
        assert!((p[2] - (3.0 * x * x - 1.0) / 2.0).abs() < EPSILON);
        assert!((p[3] - (5.0 * x * x * x - 3.0 * x) / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_endpoints() {
        // P_n(1) = 1, P_n(-1) = (-1)^n
        for n in 0..10u32 {
            assert!((legendre_p(n, 1.0) - 1.0).abs() < 1e-10);
            let expected = if n % 2 == 0 { 1.0 } else { -1.0 };
            assert!((legendre_p(n, -1.0) - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_zero_order_matches_polynomials() {
        let x = 0.3;
        let p = legendre_polynomials(5, x);
        let assoc = associated_legendre(5, 0, x);
        for n in 0..=5usize {
            assert!((p[n] - assoc[n]).abs() < EPSILON, "P_{}^0 mismatch", n);
        }
    }

    #[test]
    fn test_condon_shortley_phase() {
        // P_1^1 = -sqrt(1 - x^2)
        let x = 0.5;
        assert!(
            (associated_legendre_nm(1, 1, x) + (1.0 - x * x).sqrt()).abs() < EPSILON
        );
        // P_2^1 = -3 x sqrt(1 - x^2)
        assert!(
            (associated_legendre_nm(2, 1, x) + 3.0 * x * (1.0 - x * x).sqrt()).abs() < EPSILON
        );
        // P_2^2 = 3 (1 - x^2)
        assert!((associated_legendre_nm(2, 2, x) - 3.0 * (1.0 - x * x)).abs() < EPSILON);
    }

    #[test]
    fn test_negative_order_relation() {
        // P_1^{-1} = sqrt(1 - x^2) / 2
        let x = 0.25;
        assert!(
            (associated_legendre_nm(1, -1, x) - (1.0 - x * x).sqrt() / 2.0).abs() < EPSILON
        );

        for n in 1..6u32 {
            for m in 1..=n {
                let plus = associated_legendre_nm(n, m as i32, x);
                let minus = associated_legendre_nm(n, -(m as i32), x);
                let expected = neg_one_pow(m as i32) * log_factorial_ratio(n, m).exp() * plus;
                assert!(
                    (minus - expected).abs() < EPSILON,
                    "negative-order relation failed for ({}, {})",
                    n,
                    m
                );
            }
        }
    }

    #[test]
    fn test_order_above_degree_is_zero() {
        assert_eq!(associated_legendre_nm(1, 2, 0.5), 0.0);
        assert_eq!(associated_legendre_nm(0, -1, 0.5), 0.0);
        assert!(associated_legendre(1, 2, 0.5).is_empty());
    }

    #[test]
    fn test_grid_evaluation_matches_scalar() {
        let grid = Array1::linspace(-1.0, 1.0, 21);
        let values = associated_legendre_grid(3, 2, &grid);
        for (i, &x) in grid.iter().enumerate() {
            assert_eq!(values[i], associated_legendre_nm(3, 2, x));
        }
    }

    #[test]
    fn test_odd_order_vanishes_at_endpoints() {
        for n in 1..5u32 {
            for m in (1..=n).filter(|m| m % 2 == 1) {
                assert_eq!(associated_legendre_nm(n, m as i32, 1.0), 0.0);
                assert_eq!(associated_legendre_nm(n, m as i32, -1.0), 0.0);
            }
        }
    }
}

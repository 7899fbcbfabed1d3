//! Ambisonic channel number (ACN) indexing
//!
//! The ACN scheme linearizes the (degree, order) pairs of spherical
//! harmonics into a single channel index:
//!
//! ```text
//! acn = n^2 + n + m,    n >= 0,  |m| <= n
//! ```
//!
//! The mapping is a bijection between valid pairs with `n <= n_max` and the
//! indices `{0, 1, ..., (n_max + 1)^2 - 1}`.

use crate::error::{LegendreError, Result};

/// Linear channel index for degree `n` and order `m`.
///
/// Fails when `|m| > n`; inverting an inconsistent pair would silently alias
/// another channel.
///
/// # Example
/// ```
/// use math_harmonics_legendre::acn::nm2acn;
/// assert_eq!(nm2acn(1, -1).unwrap(), 1);
/// assert_eq!(nm2acn(2, 0).unwrap(), 6);
/// ```
pub fn nm2acn(n: u32, m: i32) -> Result<usize> {
    if m.unsigned_abs() > n {
        return Err(LegendreError::OrderOutOfRange { n, m });
    }
    let n = n as i64;
    Ok((n * n + n + m as i64) as usize)
}

/// Degree and order for a linear channel index.
///
/// `n = floor(sqrt(acn))`, `m = acn - n^2 - n`. Pure and total; the result
/// always satisfies `|m| <= n`.
///
/// # Example
/// ```
/// use math_harmonics_legendre::acn::acn2nm;
/// assert_eq!(acn2nm(6), (2, 0));
/// ```
pub fn acn2nm(acn: usize) -> (u32, i32) {
    let n = acn.isqrt();
    let m = acn as i64 - (n * n + n) as i64;
    (n as u32, m as i32)
}

/// Number of channels up to and including degree `n_max`.
pub fn channel_count(n_max: u32) -> usize {
    let side = n_max as usize + 1;
    side * side
}

/// All `(n, m)` pairs up to `n_max`, in ACN order.
pub fn channels(n_max: u32) -> impl Iterator<Item = (u32, i32)> {
    (0..=n_max).flat_map(|n| (-(n as i32)..=n as i32).map(move |m| (n, m)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_order_channels() {
        // W, Y, Z, X
        assert_eq!(nm2acn(0, 0).unwrap(), 0);
        assert_eq!(nm2acn(1, -1).unwrap(), 1);
        assert_eq!(nm2acn(1, 0).unwrap(), 2);
        assert_eq!(nm2acn(1, 1).unwrap(), 3);
    }

    #[test]
    fn test_roundtrip_from_pairs() {
        for n in 0..16u32 {
            for m in -(n as i32)..=n as i32 {
                let acn = nm2acn(n, m).unwrap();
                assert_eq!(acn2nm(acn), (n, m), "roundtrip failed for ({}, {})", n, m);
            }
        }
    }

    #[test]
    fn test_roundtrip_from_indices() {
        let n_max = 15;
        for acn in 0..channel_count(n_max) {
            let (n, m) = acn2nm(acn);
            assert!(m.unsigned_abs() <= n);
            assert!(n <= n_max);
            assert_eq!(nm2acn(n, m).unwrap(), acn);
        }
    }

    #[test]
    fn test_bijection_is_dense() {
        let n_max = 7;
        let mut seen = vec![false; channel_count(n_max)];
        for (n, m) in channels(n_max) {
            let acn = nm2acn(n, m).unwrap();
            assert!(!seen[acn], "acn {} hit twice", acn);
            seen[acn] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn test_channels_are_in_acn_order() {
        let pairs: Vec<_> = channels(2).collect();
        assert_eq!(
            pairs,
            vec![
                (0, 0),
                (1, -1),
                (1, 0),
                (1, 1),
                (2, -2),
                (2, -1),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
    }

    #[test]
    fn test_invalid_order_is_rejected() {
        let err = nm2acn(1, 2).unwrap_err();
        assert!(err.is_order_error());
        assert!(nm2acn(0, -1).is_err());
    }
}

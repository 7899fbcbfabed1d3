//! Published definitions of the associated Legendre functions
//!
//! Three textbook definitions, each derived symbolically from Rodrigues'
//! formula by repeated differentiation and compared against the numeric
//! reference in [`crate::reference`]:
//!
//! - **Williams/Rafaely**: `P_n^m = (-1)^m (1-x^2)^{m/2} d^m/dx^m P_n(x)`
//!   with an even/odd split of the envelope factor and the factorial-ratio
//!   recurrence for negative orders.
//! - **Zotter–Frank**: a single unified derivative order,
//!   `P_n^m = (-1)^m (1-x^2)^{m/2} / (2^n n!) d^{n+m}/dx^{n+m} (x^2-1)^n`,
//!   valid for all `m >= -n` without a negative-order special case.
//! - **AES69**: the Williams/Rafaely pipeline with the Condon–Shortley
//!   phase omitted, as in the AES69-2015 (SOFA) convention.
//!
//! The first two agree exactly with the reference evaluator; AES69 differs
//! by exactly `(-1)^m`.

use crate::acn::{channels, nm2acn};
use crate::error::{LegendreError, Result};
use crate::reference::{log_factorial_ratio, neg_one_pow};
use math_harmonics_symbolic::Expr;
use ndarray::Array1;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Variable name used by every generated expression.
const VAR: &str = "x";

/// A published definition of the associated Legendre functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Definition {
    /// Williams (1999) / Rafaely (2015), Condon–Shortley phase included.
    WilliamsRafaely,
    /// Zotter & Frank (2019), unified derivative order n + m.
    ZotterFrank,
    /// AES69-2015, Condon–Shortley phase omitted.
    Aes69,
}

impl Definition {
    /// All definitions, in presentation order.
    pub const ALL: [Definition; 3] = [
        Definition::WilliamsRafaely,
        Definition::ZotterFrank,
        Definition::Aes69,
    ];

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Definition::WilliamsRafaely => "Williams/Rafaely",
            Definition::ZotterFrank => "Zotter-Frank",
            Definition::Aes69 => "AES69-2015",
        }
    }

    /// File-name friendly identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            Definition::WilliamsRafaely => "williams_rafaely",
            Definition::ZotterFrank => "zotter_frank",
            Definition::Aes69 => "aes69",
        }
    }

    /// Whether the definition carries the Condon–Shortley phase.
    ///
    /// The comparison against the reference evaluator keys off this: a
    /// phase-free definition is expected to differ by `(-1)^m`.
    pub fn condon_shortley(&self) -> bool {
        !matches!(self, Definition::Aes69)
    }

    /// Closed-form expression for P_n^m under this definition.
    ///
    /// Fails when `|m| > n`.
    pub fn expression(&self, n: u32, m: i32) -> Result<Expr> {
        if m.unsigned_abs() > n {
            return Err(LegendreError::OrderOutOfRange { n, m });
        }
        let expr = match self {
            Definition::WilliamsRafaely => williams_rafaely(n, m, true),
            Definition::ZotterFrank => zotter_frank(n, m),
            Definition::Aes69 => williams_rafaely(n, m, false),
        };
        Ok(expr)
    }

    /// Expressions for every valid `(n, m)` up to `n_max`.
    pub fn table(&self, n_max: u32) -> Result<DefinitionTable> {
        let mut entries = BTreeMap::new();
        for (n, m) in channels(n_max) {
            entries.insert((n, m), self.expression(n, m)?);
        }
        log::info!(
            "derived {} {} expressions up to degree {}",
            entries.len(),
            self.label(),
            n_max
        );
        Ok(DefinitionTable {
            definition: *self,
            n_max,
            entries,
        })
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Definition {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "williams" | "williams-rafaely" | "williams_rafaely" | "rafaely" => {
                Ok(Definition::WilliamsRafaely)
            }
            "zotter" | "zotter-frank" | "zotter_frank" | "frank" => Ok(Definition::ZotterFrank),
            "aes69" | "aes" | "sofa" => Ok(Definition::Aes69),
            _ => Err(format!(
                "unknown definition '{}' (expected williams-rafaely, zotter-frank, or aes69)",
                s
            )),
        }
    }
}

/// n! as a float.
fn factorial(n: u32) -> f64 {
    (1..=n as u64).map(|k| k as f64).product()
}

/// (x^2 - 1)^n, the Rodrigues base polynomial.
fn rodrigues_base(n: u32) -> Expr {
    (Expr::var(VAR).powi(2) - Expr::constant(1.0)).powi(n as i32)
}

/// Legendre polynomial P_n(x) via Rodrigues' formula.
fn legendre_polynomial(n: u32) -> Expr {
    let scale = 1.0 / (2f64.powi(n as i32) * factorial(n));
    (Expr::constant(scale) * rodrigues_base(n).nth_derivative(VAR, n)).simplify()
}

/// (1 - x^2)^{m/2} with the even/odd-order split: an integer power for even
/// m, integer power times a square root for odd m. Integer division
/// truncates toward zero, which keeps the split exact for negative orders.
fn envelope(m: i32) -> Expr {
    let u = Expr::constant(1.0) - Expr::var(VAR).powi(2);
    if m.rem_euclid(2) == 0 {
        u.powi(m / 2)
    } else {
        u.clone().powi((m - 1) / 2) * u.sqrt()
    }
}

/// Williams/Rafaely definition; `phase` selects the Condon–Shortley factor.
///
/// Positive orders differentiate P_n(x) m times; negative orders apply
/// `P_n^{-m} = (-1)^m (n-m)!/(n+m)! P_n^m`.
fn williams_rafaely(n: u32, m: i32, phase: bool) -> Expr {
    let m_abs = m.unsigned_abs();
    let sign = if phase { neg_one_pow(m_abs as i32) } else { 1.0 };
    let derivative = legendre_polynomial(n).nth_derivative(VAR, m_abs);
    let positive =
        (Expr::constant(sign) * envelope(m_abs as i32) * derivative).simplify();
    if m >= 0 {
        positive
    } else {
        let ratio = neg_one_pow(m_abs as i32) * log_factorial_ratio(n, m_abs).exp();
        (Expr::constant(ratio) * positive).simplify()
    }
}

/// Zotter–Frank definition: one derivative of order n + m, no negative-order
/// special case.
fn zotter_frank(n: u32, m: i32) -> Expr {
    let order = (n as i32 + m) as u32;
    let scale = neg_one_pow(m) / (2f64.powi(n as i32) * factorial(n));
    let derivative = rodrigues_base(n).nth_derivative(VAR, order);
    (Expr::constant(scale) * envelope(m) * derivative).simplify()
}

/// Immutable map from `(n, m)` to a closed-form expression.
///
/// Built once per definition; iteration follows ACN order.
#[derive(Debug, Clone)]
pub struct DefinitionTable {
    definition: Definition,
    n_max: u32,
    entries: BTreeMap<(u32, i32), Expr>,
}

impl DefinitionTable {
    /// The definition the table was built from.
    pub fn definition(&self) -> Definition {
        self.definition
    }

    /// Maximum degree covered.
    pub fn n_max(&self) -> u32 {
        self.n_max
    }

    /// Number of `(n, m)` entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expression for a single `(n, m)`, if covered.
    pub fn get(&self, n: u32, m: i32) -> Option<&Expr> {
        self.entries.get(&(n, m))
    }

    /// All entries in ACN order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, i32, &Expr)> {
        self.entries.iter().map(|(&(n, m), expr)| (n, m, expr))
    }

    /// Evaluate every expression over the sample grid.
    ///
    /// Non-finite samples (the grid endpoints can hit a division by zero in
    /// the `(1-x^2)^{m/2}` factor for odd orders) are kept in the output and
    /// counted per cell, never treated as an error.
    pub fn evaluate(&self, grid: &Array1<f64>) -> Result<EvaluatedTable> {
        let mut cells = Vec::with_capacity(self.entries.len());
        for (&(n, m), expr) in &self.entries {
            let formula = expr.to_string();
            let eval = expr.clone().lambdify(VAR)?;
            let values: Vec<f64> = grid.iter().map(|&x| eval(x)).collect();
            let non_finite = values.iter().filter(|v| !v.is_finite()).count();
            if non_finite > 0 {
                log::debug!(
                    "{}: P_{}^{} has {} non-finite samples (suppressed)",
                    self.definition.label(),
                    n,
                    m,
                    non_finite
                );
            }
            cells.push(EvaluatedCell {
                n,
                m,
                acn: nm2acn(n, m)?,
                formula,
                values,
                non_finite,
            });
        }
        Ok(EvaluatedTable {
            definition: self.definition.label().to_string(),
            n_max: self.n_max,
            x: grid.to_vec(),
            cells,
        })
    }
}

/// One evaluated `(n, m)` cell.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluatedCell {
    /// Degree
    pub n: u32,
    /// Order
    pub m: i32,
    /// Linear channel index
    pub acn: usize,
    /// Rendered closed form
    pub formula: String,
    /// Samples over the grid; non-finite entries serialize as null
    pub values: Vec<f64>,
    /// Count of non-finite samples
    pub non_finite: usize,
}

/// A definition table evaluated over a sample grid.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluatedTable {
    /// Definition label
    pub definition: String,
    /// Maximum degree covered
    pub n_max: u32,
    /// The sample grid
    pub x: Vec<f64>,
    /// Evaluated cells in ACN order
    pub cells: Vec<EvaluatedCell>,
}

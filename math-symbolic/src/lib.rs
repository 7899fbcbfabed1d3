//! Symbolic expressions for closed-form function derivation
//!
//! A small tagged-variant expression type with the operations needed to
//! derive special functions in closed form:
//!
//! - Analytical differentiation (`diff`, `nth_derivative`)
//! - Algebraic simplification to a fixpoint (`simplify`)
//! - Substitution and numeric evaluation (`substitute`, `eval`)
//! - Conversion to a reusable closure (`lambdify`)
//! - Human-readable rendering via [`std::fmt::Display`]
//!
//! Expressions are immutable trees; every operation returns a new tree.
//! Numeric evaluation follows IEEE semantics: division by zero and
//! fractional powers of negative bases produce `inf`/`NaN` rather than
//! failing, so singularities of a formula surface as non-finite samples.
//!
//! # Example
//!
//! ```
//! use math_harmonics_symbolic::Expr;
//!
//! let x = Expr::var("x");
//! let p2 = (Expr::constant(3.0) * x.clone() * x.clone() - Expr::constant(1.0))
//!     / Expr::constant(2.0);
//! let dp2 = p2.diff("x").simplify();
//! assert_eq!(dp2.eval("x", 0.5).unwrap(), 1.5);
//! ```

mod diff;
mod display;
mod eval;
mod simplify;

use std::collections::BTreeSet;
use thiserror::Error;

/// Errors produced when evaluating or lambdifying an expression.
#[derive(Debug, Error)]
pub enum SymbolicError {
    /// The expression references a variable with no bound value.
    #[error("unbound variable '{name}' in expression")]
    UnboundVariable {
        /// Name of the free variable
        name: String,
    },
}

/// A specialized `Result` type for symbolic operations.
pub type Result<T> = std::result::Result<T, SymbolicError>;

/// Symbolic expression tree.
///
/// Operands are boxed; `Pow` carries its exponent as a full expression even
/// though every exponent built by this crate is a constant.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric constant
    Const(f64),
    /// Named variable
    Var(String),
    /// Sum of two expressions
    Add(Box<Expr>, Box<Expr>),
    /// Difference of two expressions
    Sub(Box<Expr>, Box<Expr>),
    /// Product of two expressions
    Mul(Box<Expr>, Box<Expr>),
    /// Quotient of two expressions
    Div(Box<Expr>, Box<Expr>),
    /// Base raised to an exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Natural exponential
    Exp(Box<Expr>),
    /// Natural logarithm
    Ln(Box<Expr>),
}

impl Expr {
    /// Numeric constant expression.
    pub fn constant(value: f64) -> Expr {
        Expr::Const(value)
    }

    /// Variable expression.
    pub fn var(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    /// `self` raised to a constant power.
    pub fn powf(self, exp: f64) -> Expr {
        Expr::Pow(Box::new(self), Box::new(Expr::Const(exp)))
    }

    /// `self` raised to an integer power.
    pub fn powi(self, exp: i32) -> Expr {
        self.powf(exp as f64)
    }

    /// Square root of `self`.
    pub fn sqrt(self) -> Expr {
        self.powf(0.5)
    }

    /// Natural exponential of `self`.
    pub fn exp(self) -> Expr {
        Expr::Exp(Box::new(self))
    }

    /// Natural logarithm of `self`.
    pub fn ln(self) -> Expr {
        Expr::Ln(Box::new(self))
    }

    /// Names of all free variables, sorted and deduplicated.
    pub fn free_variables(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<String>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(name) => {
                vars.insert(name.clone());
            }
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => {
                lhs.collect_variables(vars);
                rhs.collect_variables(vars);
            }
            Expr::Exp(inner) | Expr::Ln(inner) => inner.collect_variables(vars),
        }
    }

    /// Replace every occurrence of a variable with another expression.
    pub fn substitute(&self, var: &str, replacement: &Expr) -> Expr {
        match self {
            Expr::Const(_) => self.clone(),
            Expr::Var(name) => {
                if name == var {
                    replacement.clone()
                } else {
                    self.clone()
                }
            }
            Expr::Add(lhs, rhs) => Expr::Add(
                Box::new(lhs.substitute(var, replacement)),
                Box::new(rhs.substitute(var, replacement)),
            ),
            Expr::Sub(lhs, rhs) => Expr::Sub(
                Box::new(lhs.substitute(var, replacement)),
                Box::new(rhs.substitute(var, replacement)),
            ),
            Expr::Mul(lhs, rhs) => Expr::Mul(
                Box::new(lhs.substitute(var, replacement)),
                Box::new(rhs.substitute(var, replacement)),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(lhs.substitute(var, replacement)),
                Box::new(rhs.substitute(var, replacement)),
            ),
            Expr::Pow(base, exp) => Expr::Pow(
                Box::new(base.substitute(var, replacement)),
                Box::new(exp.substitute(var, replacement)),
            ),
            Expr::Exp(inner) => Expr::Exp(Box::new(inner.substitute(var, replacement))),
            Expr::Ln(inner) => Expr::Ln(Box::new(inner.substitute(var, replacement))),
        }
    }

    /// Replace every occurrence of a variable with a constant value.
    pub fn substitute_value(&self, var: &str, value: f64) -> Expr {
        self.substitute(var, &Expr::Const(value))
    }
}

impl std::ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::Add(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Sub(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::Mul(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::Div(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

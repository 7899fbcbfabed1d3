//! Numeric evaluation and lambdification

use crate::{Expr, Result, SymbolicError};

impl Expr {
    /// Evaluate with `var` bound to `x`.
    ///
    /// Fails if the expression references any other variable. Singular
    /// points follow IEEE semantics (`1/0 = inf`, `(-1)^0.5 = NaN`).
    pub fn eval(&self, var: &str, x: f64) -> Result<f64> {
        if let Some(name) = self
            .free_variables()
            .into_iter()
            .find(|name| name != var)
        {
            return Err(SymbolicError::UnboundVariable { name });
        }
        Ok(self.eval_unchecked(var, x))
    }

    /// Convert into a closure of the single variable `var`.
    ///
    /// The free-variable check runs once here, so the returned closure is
    /// infallible and cheap to call over a full sample grid.
    pub fn lambdify(self, var: &str) -> Result<Box<dyn Fn(f64) -> f64>> {
        if let Some(name) = self
            .free_variables()
            .into_iter()
            .find(|name| name != var)
        {
            return Err(SymbolicError::UnboundVariable { name });
        }
        let var = var.to_string();
        Ok(Box::new(move |x| self.eval_unchecked(&var, x)))
    }

    fn eval_unchecked(&self, var: &str, x: f64) -> f64 {
        match self {
            Expr::Const(c) => *c,
            // Free variables other than `var` are rejected by the callers
            Expr::Var(name) => {
                if name == var {
                    x
                } else {
                    f64::NAN
                }
            }
            Expr::Add(lhs, rhs) => lhs.eval_unchecked(var, x) + rhs.eval_unchecked(var, x),
            Expr::Sub(lhs, rhs) => lhs.eval_unchecked(var, x) - rhs.eval_unchecked(var, x),
            Expr::Mul(lhs, rhs) => lhs.eval_unchecked(var, x) * rhs.eval_unchecked(var, x),
            Expr::Div(lhs, rhs) => lhs.eval_unchecked(var, x) / rhs.eval_unchecked(var, x),
            Expr::Pow(base, exp) => base
                .eval_unchecked(var, x)
                .powf(exp.eval_unchecked(var, x)),
            Expr::Exp(inner) => inner.eval_unchecked(var, x).exp(),
            Expr::Ln(inner) => inner.eval_unchecked(var, x).ln(),
        }
    }
}

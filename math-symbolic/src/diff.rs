//! Analytical differentiation

use crate::Expr;

impl Expr {
    /// Analytical derivative with respect to `var`.
    ///
    /// Implements the sum, product, quotient and chain rules. Constant
    /// exponents use the power rule directly; a variable exponent falls back
    /// to the logarithmic form `d(f^g) = f^g (g' ln f + g f'/f)`.
    ///
    /// The result is not simplified; call [`Expr::simplify`] afterwards or
    /// use [`Expr::nth_derivative`] which interleaves both.
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            Expr::Pow(base, exp) => match exp.as_ref() {
                // Power rule: d(f^c) = c f^(c-1) f'
                Expr::Const(c) => Expr::Mul(
                    Box::new(Expr::Mul(
                        Box::new(Expr::Const(*c)),
                        Box::new(base.as_ref().clone().powf(c - 1.0)),
                    )),
                    Box::new(base.diff(var)),
                ),
                _ => {
                    let f = base.as_ref().clone();
                    let g = exp.as_ref().clone();
                    let inner = g.clone().diff(var) * f.clone().ln()
                        + g * (f.clone().diff(var) / f);
                    self.clone() * inner
                }
            },
            Expr::Exp(inner) => Expr::Mul(Box::new(self.clone()), Box::new(inner.diff(var))),
            Expr::Ln(inner) => Expr::Div(Box::new(inner.diff(var)), inner.clone()),
        }
    }

    /// `order`-fold derivative with a simplification pass between orders.
    ///
    /// `order = 0` returns the (simplified) expression itself.
    pub fn nth_derivative(&self, var: &str, order: u32) -> Expr {
        let mut expr = self.clone().simplify();
        for _ in 0..order {
            expr = expr.diff(var).simplify();
        }
        expr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_diff_constant_and_variable() {
        assert_eq!(Expr::constant(4.0).diff("x").simplify(), Expr::Const(0.0));
        assert_eq!(Expr::var("x").diff("x").simplify(), Expr::Const(1.0));
        assert_eq!(Expr::var("y").diff("x").simplify(), Expr::Const(0.0));
    }

    #[test]
    fn test_power_rule() {
        // d(x^3) = 3x^2
        let d = Expr::var("x").powi(3).diff("x").simplify();
        assert!((d.eval("x", 2.0).unwrap() - 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_product_rule() {
        // d(x * (x+1)) = 2x + 1
        let e = Expr::var("x") * (Expr::var("x") + Expr::constant(1.0));
        let d = e.diff("x").simplify();
        assert!((d.eval("x", 3.0).unwrap() - 7.0).abs() < EPSILON);
    }

    #[test]
    fn test_quotient_rule() {
        // d(1/x) = -1/x^2
        let e = Expr::constant(1.0) / Expr::var("x");
        let d = e.diff("x").simplify();
        assert!((d.eval("x", 2.0).unwrap() + 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_chain_rule_sqrt() {
        // d(sqrt(1 - x^2)) = -x / sqrt(1 - x^2)
        let u = Expr::constant(1.0) - Expr::var("x").powi(2);
        let d = u.sqrt().diff("x").simplify();
        let x = 0.6_f64;
        let expected = -x / (1.0 - x * x).sqrt();
        assert!((d.eval("x", x).unwrap() - expected).abs() < EPSILON);
    }

    #[test]
    fn test_exp_ln_rules() {
        // d(exp(2x)) = 2 exp(2x)
        let e = (Expr::constant(2.0) * Expr::var("x")).exp();
        let d = e.diff("x").simplify();
        let x = 0.3_f64;
        assert!((d.eval("x", x).unwrap() - 2.0 * (2.0 * x).exp()).abs() < 1e-10);

        // d(ln(x)) = 1/x
        let d = Expr::var("x").ln().diff("x").simplify();
        assert!((d.eval("x", 4.0).unwrap() - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_variable_exponent() {
        // d(x^x) = x^x (ln x + 1)
        let e = Expr::Pow(Box::new(Expr::var("x")), Box::new(Expr::var("x")));
        let d = e.diff("x").simplify();
        let x = 1.5_f64;
        let expected = x.powf(x) * (x.ln() + 1.0);
        assert!((d.eval("x", x).unwrap() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_nth_derivative() {
        // d^2(x^4) = 12 x^2
        let d2 = Expr::var("x").powi(4).nth_derivative("x", 2);
        assert!((d2.eval("x", 2.0).unwrap() - 48.0).abs() < EPSILON);

        // Order zero returns the function itself
        let d0 = Expr::var("x").powi(4).nth_derivative("x", 0);
        assert!((d0.eval("x", 2.0).unwrap() - 16.0).abs() < EPSILON);
    }
}

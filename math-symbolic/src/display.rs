//! Closed-form rendering

use crate::Expr;
use std::fmt;

impl Expr {
    /// Binding strength for parenthesization; higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Expr::Const(c) if *c < 0.0 => 1,
            Expr::Const(_) | Expr::Var(_) | Expr::Exp(_) | Expr::Ln(_) => 5,
            Expr::Add(_, _) | Expr::Sub(_, _) => 1,
            Expr::Mul(_, _) | Expr::Div(_, _) => 2,
            Expr::Pow(_, _) => 3,
        }
    }

    fn render(&self, min_prec: u8) -> String {
        let rendered = match self {
            Expr::Const(c) => format!("{}", c),
            Expr::Var(name) => name.clone(),
            Expr::Add(lhs, rhs) => format!("{} + {}", lhs.render(1), rhs.render(1)),
            Expr::Sub(lhs, rhs) => format!("{} - {}", lhs.render(1), rhs.render(2)),
            Expr::Mul(lhs, rhs) => match lhs.as_ref() {
                Expr::Const(c) if *c == -1.0 => format!("-{}", rhs.render(2)),
                _ => format!("{} * {}", lhs.render(2), rhs.render(2)),
            },
            Expr::Div(lhs, rhs) => format!("{} / {}", lhs.render(2), rhs.render(3)),
            Expr::Pow(base, exp) => format!("{}^{}", base.render(4), exp.render(4)),
            Expr::Exp(inner) => format!("exp({})", inner.render(0)),
            Expr::Ln(inner) => format!("ln({})", inner.render(0)),
        };
        if self.precedence() < min_prec {
            format!("({})", rendered)
        } else {
            rendered
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_constants_render_without_decimals() {
        let e = Expr::constant(3.0) * Expr::var("x").powi(2);
        assert_eq!(e.to_string(), "3 * x^2");
    }

    #[test]
    fn test_fractional_exponent() {
        let e = (Expr::constant(1.0) - Expr::var("x").powi(2)).sqrt();
        assert_eq!(e.to_string(), "(1 - x^2)^0.5");
    }

    #[test]
    fn test_negation_renders_compactly() {
        let e = -(Expr::var("x").sqrt());
        assert_eq!(e.to_string(), "-x^0.5");
    }

    #[test]
    fn test_subtraction_parenthesizes_rhs() {
        let e = Expr::var("x") - (Expr::var("y") + Expr::constant(1.0));
        assert_eq!(e.to_string(), "x - (y + 1)");
    }

    #[test]
    fn test_division_parenthesizes_rhs() {
        let e = Expr::var("x") / (Expr::var("y") * Expr::constant(2.0));
        assert_eq!(e.to_string(), "x / (y * 2)");
    }

    #[test]
    fn test_pow_base_parenthesized() {
        let e = (Expr::var("x") + Expr::constant(1.0)).powi(2);
        assert_eq!(e.to_string(), "(x + 1)^2");
    }

    #[test]
    fn test_function_rendering() {
        let e = Expr::var("x").ln().exp();
        assert_eq!(e.to_string(), "exp(ln(x))");
    }
}

//! Algebraic simplification
//!
//! A bottom-up rewrite pass (constant folding, identity elimination,
//! constant reassociation) iterated to a fixpoint. Constants are hoisted to
//! the left operand of commutative nodes so that neighbouring constants
//! merge across nesting levels.

use crate::Expr;

/// Rewrite passes stop after this many rounds even without a fixpoint.
const MAX_PASSES: usize = 64;

impl Expr {
    /// Simplify to a fixpoint of the rewrite rules.
    pub fn simplify(&self) -> Expr {
        let mut current = self.clone();
        for _ in 0..MAX_PASSES {
            let next = current.simplify_once();
            if next == current {
                return next;
            }
            current = next;
        }
        current
    }

    /// One bottom-up rewrite pass.
    fn simplify_once(&self) -> Expr {
        match self {
            Expr::Const(_) | Expr::Var(_) => self.clone(),
            Expr::Add(lhs, rhs) => simplify_add(lhs.simplify_once(), rhs.simplify_once()),
            Expr::Sub(lhs, rhs) => simplify_sub(lhs.simplify_once(), rhs.simplify_once()),
            Expr::Mul(lhs, rhs) => simplify_mul(lhs.simplify_once(), rhs.simplify_once()),
            Expr::Div(lhs, rhs) => simplify_div(lhs.simplify_once(), rhs.simplify_once()),
            Expr::Pow(base, exp) => simplify_pow(base.simplify_once(), exp.simplify_once()),
            Expr::Exp(inner) => match inner.simplify_once() {
                Expr::Const(c) => Expr::Const(c.exp()),
                other => Expr::Exp(Box::new(other)),
            },
            Expr::Ln(inner) => match inner.simplify_once() {
                // ln of a non-positive constant stays symbolic
                Expr::Const(c) if c > 0.0 => Expr::Const(c.ln()),
                other => Expr::Ln(Box::new(other)),
            },
        }
    }
}

fn simplify_add(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs, rhs) {
        (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
        (Expr::Const(z), e) if z == 0.0 => e,
        (e, Expr::Const(z)) if z == 0.0 => e,
        // Merge constants across one nesting level
        (Expr::Const(a), Expr::Add(inner_lhs, inner_rhs)) => match *inner_lhs {
            Expr::Const(b) => Expr::Add(Box::new(Expr::Const(a + b)), inner_rhs),
            other => Expr::Add(
                Box::new(Expr::Const(a)),
                Box::new(Expr::Add(Box::new(other), inner_rhs)),
            ),
        },
        // Constants to the left
        (e, Expr::Const(c)) => Expr::Add(Box::new(Expr::Const(c)), Box::new(e)),
        (lhs, rhs) => Expr::Add(Box::new(lhs), Box::new(rhs)),
    }
}

fn simplify_sub(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs, rhs) {
        (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
        (e, Expr::Const(z)) if z == 0.0 => e,
        (Expr::Const(z), e) if z == 0.0 => Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(e)),
        (lhs, rhs) if lhs == rhs => Expr::Const(0.0),
        (lhs, rhs) => Expr::Sub(Box::new(lhs), Box::new(rhs)),
    }
}

fn simplify_mul(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs, rhs) {
        (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
        (Expr::Const(z), _) | (_, Expr::Const(z)) if z == 0.0 => Expr::Const(0.0),
        (Expr::Const(one), e) if one == 1.0 => e,
        (e, Expr::Const(one)) if one == 1.0 => e,
        // Merge constants across one nesting level
        (Expr::Const(a), Expr::Mul(inner_lhs, inner_rhs)) => match *inner_lhs {
            Expr::Const(b) => Expr::Mul(Box::new(Expr::Const(a * b)), inner_rhs),
            other => Expr::Mul(
                Box::new(Expr::Const(a)),
                Box::new(Expr::Mul(Box::new(other), inner_rhs)),
            ),
        },
        // Constants to the left
        (e, Expr::Const(c)) => Expr::Mul(Box::new(Expr::Const(c)), Box::new(e)),
        (lhs, rhs) => Expr::Mul(Box::new(lhs), Box::new(rhs)),
    }
}

fn simplify_div(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs, rhs) {
        // Folding a zero denominator would hide the singularity until render
        // time; it stays symbolic and evaluates to inf/NaN.
        (Expr::Const(a), Expr::Const(b)) if b != 0.0 => Expr::Const(a / b),
        (Expr::Const(z), _) if z == 0.0 => Expr::Const(0.0),
        (e, Expr::Const(one)) if one == 1.0 => e,
        (lhs, rhs) => Expr::Div(Box::new(lhs), Box::new(rhs)),
    }
}

fn simplify_pow(base: Expr, exp: Expr) -> Expr {
    match (base, exp) {
        (Expr::Const(a), Expr::Const(b)) => Expr::Const(a.powf(b)),
        (_, Expr::Const(z)) if z == 0.0 => Expr::Const(1.0),
        (e, Expr::Const(one)) if one == 1.0 => e,
        (Expr::Const(one), _) if one == 1.0 => Expr::Const(1.0),
        // (b^a)^c = b^(a*c)
        (Expr::Pow(inner_base, inner_exp), Expr::Const(c)) => match *inner_exp {
            Expr::Const(a) => Expr::Pow(inner_base, Box::new(Expr::Const(a * c))),
            other => Expr::Pow(
                Box::new(Expr::Pow(inner_base, Box::new(other))),
                Box::new(Expr::Const(c)),
            ),
        },
        (base, exp) => Expr::Pow(Box::new(base), Box::new(exp)),
    }
}

//! Symbolic differentiation engine.
//!
//! Contains the `derive()` function implementing standard differentiation
//! rules: constant, sum, difference, product, quotient, power, log and exp.
//! The result is built structurally and never simplified; zero and unit
//! factors are folded away only when the tree is rendered.

use symdiff_ast::{Expr, Fraction};
use tracing::{debug, trace};

/// Differentiate `expr` with respect to `variable`.
///
/// Total and pure: every subtree reused in the output is a deep copy, and the
/// input is left untouched.
///
/// A power with a literal exponent `n` is emitted in the reduced form
/// `n*u^(n-1)*u'` on purpose; every other exponent gets the general rule.
pub fn derive(expr: &Expr, variable: &str) -> Expr {
    let derivative = differentiate(expr, variable);
    debug!(
        variable,
        input_nodes = expr.node_count(),
        output_nodes = derivative.node_count(),
        "derived expression"
    );
    derivative
}

fn differentiate(expr: &Expr, var: &str) -> Expr {
    match expr {
        // Constant Rule: diff(c, x) = 0
        Expr::Constant(_) | Expr::Parameter(_) => Expr::integer(0),
        Expr::Variable(name) => {
            if name == var {
                Expr::integer(1)
            } else {
                Expr::integer(0)
            }
        }
        Expr::Add(l, r) => Expr::add(differentiate(l, var), differentiate(r, var)),
        Expr::Sub(l, r) => Expr::sub(differentiate(l, var), differentiate(r, var)),
        Expr::Mul(l, r) => {
            // Product Rule: (uv)' = u'v + uv'
            let dl = differentiate(l, var);
            let dr = differentiate(r, var);
            let term1 = Expr::mul(dl, r.as_ref().clone());
            let term2 = Expr::mul(l.as_ref().clone(), dr);
            Expr::add(term1, term2)
        }
        Expr::Div(l, r) => {
            // Quotient Rule: (u/v)' = (u'v - uv') / (v*v)
            let dl = differentiate(l, var);
            let dr = differentiate(r, var);
            let term1 = Expr::mul(dl, r.as_ref().clone());
            let term2 = Expr::mul(l.as_ref().clone(), dr);
            let den = Expr::mul(r.as_ref().clone(), r.as_ref().clone());
            Expr::div(Expr::sub(term1, term2), den)
        }
        Expr::Pow(base, exp) => differentiate_pow(expr, base, exp, var),
        // u'/u
        Expr::Ln(arg) => Expr::div(differentiate(arg, var), arg.as_ref().clone()),
        // u' * exp(u)
        Expr::Exp(arg) => Expr::mul(differentiate(arg, var), expr.clone()),
    }
}

fn differentiate_pow(expr: &Expr, base: &Expr, exp: &Expr, var: &str) -> Expr {
    let db = differentiate(base, var);

    // Literal exponent n: (u^n)' = n*u^(n-1)*u'
    if let Expr::Constant(n) = exp {
        match n.checked_sub(&Fraction::one()) {
            Ok(n_minus_one) => {
                trace!(exponent = %n, "power rule with literal exponent");
                let pow_term = Expr::pow(base.clone(), Expr::constant(n_minus_one));
                let term = Expr::mul(Expr::constant(*n), pow_term);
                return Expr::mul(term, db);
            }
            Err(err) => trace!(exponent = %n, %err, "falling back to the general power rule"),
        }
    }

    // Full rule: u^v * (v'*ln(u) + v*u'/u)
    trace!("general power rule");
    let de = differentiate(exp, var);
    let term1 = Expr::mul(de, Expr::ln(base.clone()));
    let term2 = Expr::mul(exp.clone(), Expr::div(db, base.clone()));
    Expr::mul(expr.clone(), Expr::add(term1, term2))
}

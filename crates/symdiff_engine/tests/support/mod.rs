//! Test-only numeric evaluation.

use symdiff_ast::Expr;

/// Values substituted for symbolic parameters.
pub fn parameter_value(name: &str) -> f64 {
    match name {
        "a" => 1.3,
        "b" => 0.7,
        _ => 2.1,
    }
}

/// Evaluate `expr` in floating point with the variable bound to `at`.
///
/// No domain checks: out-of-domain inputs come back as NaN or infinity.
pub fn eval(expr: &Expr, variable: &str, at: f64) -> f64 {
    match expr {
        Expr::Constant(c) => c.to_f64(),
        Expr::Variable(name) if name == variable => at,
        Expr::Variable(name) | Expr::Parameter(name) => parameter_value(name),
        Expr::Add(l, r) => eval(l, variable, at) + eval(r, variable, at),
        Expr::Sub(l, r) => eval(l, variable, at) - eval(r, variable, at),
        Expr::Mul(l, r) => eval(l, variable, at) * eval(r, variable, at),
        Expr::Div(l, r) => eval(l, variable, at) / eval(r, variable, at),
        Expr::Pow(b, e) => eval(b, variable, at).powf(eval(e, variable, at)),
        Expr::Ln(arg) => eval(arg, variable, at).ln(),
        Expr::Exp(arg) => eval(arg, variable, at).exp(),
    }
}

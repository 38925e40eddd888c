//! Regression tests for plain-mode rendering
//!
//! These cover the grouping policy and the presentational folds on trees
//! shaped like the ones the differentiation rules produce.

use symdiff_ast::{render, Expr, RenderMode};

fn x() -> Expr {
    Expr::variable("x")
}

fn a() -> Expr {
    Expr::parameter("a")
}

fn plain(e: &Expr) -> String {
    render(e, RenderMode::Plain)
}

// ============================================================================
// Product rule output
// ============================================================================

#[test]
fn test_product_rule_shape_folds_unit_factors() {
    // d(a*x) = 0*x + a*1
    let e = Expr::add(
        Expr::mul(Expr::integer(0), x()),
        Expr::mul(a(), Expr::integer(1)),
    );
    assert_eq!(plain(&e), "a");
}

#[test]
fn test_quotient_rule_shape() {
    // d(x/a) = (1*a - x*0) / (a*a)
    let e = Expr::div(
        Expr::sub(
            Expr::mul(Expr::integer(1), a()),
            Expr::mul(x(), Expr::integer(0)),
        ),
        Expr::mul(a(), a()),
    );
    assert_eq!(plain(&e), "a/a^2");
}

#[test]
fn test_log_rule_shape() {
    // d(ln(x^2)) rendered with a literal exponent rule inside
    let e = Expr::div(
        Expr::mul(
            Expr::mul(Expr::integer(2), Expr::pow(x(), Expr::integer(1))),
            Expr::integer(1),
        ),
        Expr::pow(x(), Expr::integer(2)),
    );
    assert_eq!(plain(&e), "2*x/x^2");
}

#[test]
fn test_exp_rule_shape() {
    // d(e^(2*x)) = (0*x + 2*1) * e^(2*x)
    let arg = Expr::mul(Expr::integer(2), x());
    let e = Expr::mul(
        Expr::add(
            Expr::mul(Expr::integer(0), x()),
            Expr::mul(Expr::integer(2), Expr::integer(1)),
        ),
        Expr::exp(arg),
    );
    assert_eq!(plain(&e), "2*e^(2*x)");
}

// ============================================================================
// Grouping
// ============================================================================

#[test]
fn test_left_associative_chains_render_flat() {
    let e = Expr::sub(Expr::sub(x(), a()), Expr::integer(2));
    assert_eq!(plain(&e), "x-a-2");
    let e = Expr::div(Expr::mul(x(), Expr::integer(3)), Expr::integer(2));
    assert_eq!(plain(&e), "(x*3)/2");
    let e = Expr::div(Expr::mul(x(), a()), Expr::parameter("b"));
    assert_eq!(plain(&e), "x*a/b");
}

#[test]
fn test_nested_powers_are_grouped() {
    let e = Expr::pow(Expr::pow(x(), a()), Expr::integer(2));
    assert_eq!(plain(&e), "(x^a)^2");
    let e = Expr::pow(x(), Expr::pow(a(), Expr::integer(2)));
    assert_eq!(plain(&e), "x^(a^2)");
}

#[test]
fn test_negated_products() {
    let e = Expr::neg(Expr::mul(x(), a()));
    assert_eq!(plain(&e), "-x*a");
    let e = Expr::mul(Expr::parameter("b"), Expr::neg(Expr::mul(x(), a())));
    assert_eq!(plain(&e), "b*(-x*a)");
    let e = Expr::neg(Expr::neg(x()));
    assert_eq!(plain(&e), "-(-x)");
}

#[test]
fn test_render_leaves_tree_untouched() {
    let e = Expr::mul(Expr::integer(1), Expr::add(x(), Expr::integer(0)));
    let before = e.clone();
    assert_eq!(plain(&e), "x");
    assert_eq!(e, before);
}

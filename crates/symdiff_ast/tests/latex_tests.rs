use symdiff_ast::{render, to_latex, Expr, Fraction, RenderMode};

fn x() -> Expr {
    Expr::variable("x")
}

#[test]
fn test_number_times_number() {
    let five = Expr::integer(5);
    let expr = Expr::mul(five, Expr::integer(6));
    assert_eq!(to_latex(&expr), "5 \\cdot 6");
}

#[test]
fn test_number_times_variable() {
    let expr = Expr::mul(Expr::integer(2), x());
    assert_eq!(to_latex(&expr), "2 \\cdot x");
}

#[test]
fn test_complex_times_number() {
    let x_plus_1 = Expr::add(x(), Expr::integer(1));
    let expr = Expr::mul(x_plus_1, Expr::integer(2));
    // (x+1)*2 keeps its grouping
    assert_eq!(to_latex(&expr), "(x+1) \\cdot 2");
}

#[test]
fn test_fraction_literal() {
    let expr = Expr::constant(Fraction::new(3, 7).unwrap());
    assert_eq!(to_latex(&expr), "\\frac{3}{7}");
}

#[test]
fn test_power_of_sum() {
    let expr = Expr::pow(Expr::add(x(), Expr::parameter("a")), Expr::integer(3));
    assert_eq!(to_latex(&expr), "(x+a)^{3}");
}

#[test]
fn test_nested_quotient() {
    let expr = Expr::div(Expr::div(x(), Expr::integer(2)), Expr::parameter("b"));
    assert_eq!(to_latex(&expr), "\\frac{\\frac{x}{2}}{b}");
}

#[test]
fn test_ln_and_exp() {
    let expr = Expr::mul(Expr::ln(x()), Expr::exp(Expr::mul(Expr::integer(2), x())));
    assert_eq!(to_latex(&expr), "\\ln(x) \\cdot e^{2 \\cdot x}");
}

#[test]
fn test_folding_matches_plain_mode() {
    let expr = Expr::add(
        Expr::mul(Expr::integer(0), Expr::ln(x())),
        Expr::pow(x(), Expr::integer(1)),
    );
    assert_eq!(render(&expr, RenderMode::Plain), "x");
    assert_eq!(render(&expr, RenderMode::Typeset), "x");
}

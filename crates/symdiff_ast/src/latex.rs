//! LaTeX expression rendering
//!
//! Typeset mode reuses the traversal, folding and grouping decisions of
//! [`crate::display`]; only the glyphs differ. Quotients become `\frac`,
//! whose braces already group both operands, and exponents are braced.

use crate::display::{constant_prec, render_with, Notation, Rendered};
use crate::fraction::Fraction;
use crate::Expr;

pub(crate) struct TypesetNotation;

impl Notation for TypesetNotation {
    /// Negative fractions are rendered as -\frac{a}{b} instead of \frac{-a}{b}
    fn constant(&self, value: &Fraction) -> Rendered {
        // unsigned_abs keeps i64::MIN representable
        let numer = value.numer().unsigned_abs();
        let body = if value.is_integer() {
            numer.to_string()
        } else {
            format!("\\frac{{{}}}{{{}}}", numer, value.denom())
        };
        let text = if value.is_negative() {
            format!("-{}", body)
        } else {
            body
        };
        Rendered::new(text, constant_prec(value))
    }

    fn product(&self, lhs: &str, rhs: &str) -> String {
        format!("{} \\cdot {}", lhs, rhs)
    }

    fn quotient(&self, numer: &Rendered, _: bool, denom: &Rendered, _: bool) -> String {
        format!("\\frac{{{}}}{{{}}}", numer.text, denom.text)
    }

    fn power(&self, base: &str, exponent: &Rendered) -> String {
        format!("{}^{{{}}}", base, exponent.text)
    }

    fn delimits_quotients(&self) -> bool {
        true
    }
}

/// Converts an expression to LaTeX, e.g. for rendering with MathJax.
pub fn to_latex(expr: &Expr) -> String {
    render_with(expr, &TypesetNotation).text
}

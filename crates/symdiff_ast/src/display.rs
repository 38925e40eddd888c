//! Display formatting for expressions
//!
//! Rendering is a single bottom-up pass. Every child is rendered exactly once
//! into a [`Rendered`] (text plus the precedence class of that text) and the
//! parent decides grouping and folding from those results. Folding is purely
//! presentational: the tree itself is never rewritten.
//!
//! The traversal and the grouping policy are shared by both output modes; a
//! [`Notation`] only supplies glyphs for constants, products, quotients and
//! powers.

use std::fmt;
use std::str::FromStr;

use num_integer::Integer;

use crate::fraction::Fraction;
use crate::latex::TypesetNotation;
use crate::Expr;

/// Output notation selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// ASCII operators: `a*b`, `a/b`, `a^b`
    #[default]
    Plain,
    /// LaTeX-style: `a \cdot b`, `\frac{a}{b}`, `a^{b}`
    Typeset,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Plain => write!(f, "plain"),
            RenderMode::Typeset => write!(f, "typeset"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(RenderMode::Plain),
            "typeset" | "latex" => Ok(RenderMode::Typeset),
            other => Err(format!("unknown render mode '{}'", other)),
        }
    }
}

/// Render `expr` in the requested notation.
pub fn render(expr: &Expr, mode: RenderMode) -> String {
    match mode {
        RenderMode::Plain => render_with(expr, &PlainNotation).text,
        RenderMode::Typeset => render_with(expr, &TypesetNotation).text,
    }
}

/// Binding strength of a rendered string, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Prec {
    Sum,
    Product,
    /// Quotients and fraction literals
    Quotient,
    /// Leading minus: negations and negative literals
    Unary,
    Power,
    /// `\ln(...)`
    Call,
    Atom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rendered {
    pub text: String,
    pub prec: Prec,
}

impl Rendered {
    pub fn new(text: String, prec: Prec) -> Self {
        Rendered { text, prec }
    }

    pub fn atom(text: impl Into<String>) -> Self {
        Rendered::new(text.into(), Prec::Atom)
    }

    fn is(&self, text: &str) -> bool {
        self.text == text
    }

    fn starts_negative(&self) -> bool {
        self.text.starts_with('-')
    }

    /// An optionally negated run of digits.
    fn is_integer_literal(&self) -> bool {
        let digits = self.text.strip_prefix('-').unwrap_or(&self.text);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    }

    /// `n/d` spelled exactly as the lexer reads a fraction literal.
    fn is_fraction_literal(&self) -> bool {
        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        match self.text.split_once('/') {
            Some((numer, denom)) => all_digits(numer) && all_digits(denom),
            None => false,
        }
    }

    fn magnitude(&self) -> Option<u64> {
        self.text.strip_prefix('-').unwrap_or(&self.text).parse().ok()
    }

    pub fn grouped(&self, wrap: bool) -> String {
        if wrap {
            format!("({})", self.text)
        } else {
            self.text.clone()
        }
    }
}

/// Glyph set for one output mode.
pub(crate) trait Notation {
    fn constant(&self, value: &Fraction) -> Rendered;

    fn product(&self, lhs: &str, rhs: &str) -> String;

    /// `wrap_*` carry the shared grouping decision; a notation whose
    /// quotient already groups its operands may ignore them.
    fn quotient(&self, numer: &Rendered, wrap_numer: bool, denom: &Rendered, wrap_denom: bool)
        -> String;

    /// `base` arrives already grouped.
    fn power(&self, base: &str, exponent: &Rendered) -> String;

    /// True when a quotient is visibly delimited on its own, so it needs no
    /// parentheses as the right factor of a product.
    fn delimits_quotients(&self) -> bool {
        false
    }
}

/// A fraction literal binds like the quotient it spells, so `2/3` and
/// `Div(2, 3)` group the same way.
pub(crate) fn constant_prec(value: &Fraction) -> Prec {
    if !value.is_integer() {
        Prec::Quotient
    } else if value.is_negative() {
        Prec::Unary
    } else {
        Prec::Atom
    }
}

pub(crate) struct PlainNotation;

impl Notation for PlainNotation {
    fn constant(&self, value: &Fraction) -> Rendered {
        Rendered::new(value.to_string(), constant_prec(value))
    }

    fn product(&self, lhs: &str, rhs: &str) -> String {
        format!("{}*{}", lhs, rhs)
    }

    fn quotient(
        &self,
        numer: &Rendered,
        wrap_numer: bool,
        denom: &Rendered,
        wrap_denom: bool,
    ) -> String {
        format!("{}/{}", numer.grouped(wrap_numer), denom.grouped(wrap_denom))
    }

    fn power(&self, base: &str, exponent: &Rendered) -> String {
        format!("{}^{}", base, exponent.grouped(exponent.prec != Prec::Atom))
    }
}

pub(crate) fn render_with<N: Notation>(expr: &Expr, notation: &N) -> Rendered {
    match expr {
        Expr::Constant(c) => notation.constant(c),
        Expr::Variable(name) | Expr::Parameter(name) => Rendered::atom(name.clone()),
        Expr::Add(l, r) => render_add(render_with(l, notation), render_with(r, notation)),
        Expr::Sub(l, r) => render_sub(render_with(l, notation), render_with(r, notation)),
        Expr::Mul(l, r) => render_mul(
            render_with(l, notation),
            render_with(r, notation),
            notation,
        ),
        Expr::Div(l, r) => render_div(
            render_with(l, notation),
            render_with(r, notation),
            notation,
        ),
        Expr::Pow(b, e) => render_pow(
            render_with(b, notation),
            render_with(e, notation),
            notation,
        ),
        Expr::Ln(arg) => render_ln(render_with(arg, notation)),
        Expr::Exp(arg) => render_exp(render_with(arg, notation), notation),
    }
}

fn render_add(l: Rendered, r: Rendered) -> Rendered {
    if r.is("0") {
        return l;
    }
    if l.is("0") {
        return r;
    }
    // a+(-b) reads as a-b
    let text = if r.starts_negative() {
        format!("{}{}", l.text, r.text)
    } else {
        format!("{}+{}", l.text, r.text)
    };
    Rendered::new(text, Prec::Sum)
}

fn render_sub(l: Rendered, r: Rendered) -> Rendered {
    if r.is("0") {
        return l;
    }
    if l.is("0") {
        // Still a difference as far as the surrounding operators care.
        let mut negated = negate(r);
        negated.prec = Prec::Sum;
        return negated;
    }
    let wrap = r.prec == Prec::Sum || r.starts_negative();
    Rendered::new(format!("{}-{}", l.text, r.grouped(wrap)), Prec::Sum)
}

fn render_mul<N: Notation>(l: Rendered, r: Rendered, notation: &N) -> Rendered {
    if l.is("0") || r.is("0") {
        return Rendered::atom("0");
    }
    if l.is("1") {
        return r;
    }
    if r.is("1") {
        return l;
    }
    if l.is("-1") {
        return negate(r);
    }
    if r.is("-1") {
        return negate(l);
    }
    if l.text == r.text {
        return square(l, notation);
    }
    // `a*b*c` reads back as (a*b)*c, so a nested right factor keeps its group.
    let nested = match r.prec {
        Prec::Product => true,
        Prec::Quotient => !notation.delimits_quotients() && !r.is_fraction_literal(),
        _ => false,
    };
    let lhs = l.grouped(l.prec == Prec::Sum);
    let rhs = r.grouped(r.prec == Prec::Sum || r.starts_negative() || nested);
    Rendered::new(notation.product(&lhs, &rhs), Prec::Product)
}

fn render_div<N: Notation>(l: Rendered, r: Rendered, notation: &N) -> Rendered {
    if r.is("1") {
        return l;
    }
    if l.is("0") {
        return Rendered::atom("0");
    }
    // "...2" followed by "/3..." would lex as the literal 2/3.
    let fuses = l.text.ends_with(|c: char| c.is_ascii_digit())
        && r.text.starts_with(|c: char| c.is_ascii_digit());
    let wrap_numer = l.prec == Prec::Sum || (fuses && !l.is_integer_literal());
    let wrap_denom = r.prec <= Prec::Unary
        || (fuses && l.is_integer_literal() && !reads_as_literal(&l, &r));
    Rendered::new(
        notation.quotient(&l, wrap_numer, &r, wrap_denom),
        Prec::Quotient,
    )
}

/// Whether the integers `n` and `d` written as `n/d` lex back to the same
/// value. `6/4` would come back as 3/2 and `2/0` would not lex at all.
fn reads_as_literal(numer: &Rendered, denom: &Rendered) -> bool {
    if !denom.is_integer_literal() {
        return false;
    }
    match (numer.magnitude(), denom.magnitude()) {
        (Some(n), Some(d)) => d >= 2 && n.gcd(&d) == 1,
        _ => false,
    }
}

fn render_pow<N: Notation>(base: Rendered, exponent: Rendered, notation: &N) -> Rendered {
    if exponent.is("0") {
        return Rendered::atom("1");
    }
    if exponent.is("1") {
        return base;
    }
    let base = base.grouped(base.prec != Prec::Atom);
    Rendered::new(notation.power(&base, &exponent), Prec::Power)
}

fn render_ln(arg: Rendered) -> Rendered {
    if arg.is("1") {
        return Rendered::atom("0");
    }
    Rendered::new(format!("\\ln({})", arg.text), Prec::Call)
}

fn render_exp<N: Notation>(arg: Rendered, notation: &N) -> Rendered {
    if arg.is("0") {
        return Rendered::atom("1");
    }
    if arg.is("1") {
        return Rendered::atom("e");
    }
    Rendered::new(notation.power("e", &arg), Prec::Power)
}

/// Prefix minus, used for products with a literal -1.
fn negate(operand: Rendered) -> Rendered {
    let wrap = matches!(operand.prec, Prec::Sum | Prec::Power) || operand.starts_negative();
    let prec = if matches!(operand.prec, Prec::Product | Prec::Quotient) && !wrap {
        operand.prec
    } else {
        Prec::Unary
    };
    Rendered::new(format!("-{}", operand.grouped(wrap)), prec)
}

fn square<N: Notation>(base: Rendered, notation: &N) -> Rendered {
    let grouped = base.grouped(base.prec != Prec::Atom);
    Rendered::new(
        notation.power(&grouped, &Rendered::atom("2")),
        Prec::Power,
    )
}

use std::fmt;

use crate::display::{render, RenderMode};
use crate::fraction::Fraction;

/// A symbolic expression in one differentiation variable.
///
/// Children are exclusively owned, so a tree never shares subtrees and
/// `clone()` is always a deep copy. Nodes are never mutated after
/// construction: transformations build new trees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Constant(Fraction),
    /// The differentiation variable
    Variable(String),
    /// Any other symbol, constant with respect to differentiation
    Parameter(String),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    /// Base and exponent; the exponent is an arbitrary expression
    Pow(Box<Expr>, Box<Expr>),
    Ln(Box<Expr>),
    Exp(Box<Expr>),
}

impl Expr {
    // Helper constructors for cleaner code
    pub fn constant(value: Fraction) -> Self {
        Expr::Constant(value)
    }

    pub fn integer(n: i64) -> Self {
        Expr::Constant(Fraction::from_integer(n))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        Expr::Parameter(name.into())
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Expr::Add(Box::new(lhs), Box::new(rhs))
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Expr::Sub(Box::new(lhs), Box::new(rhs))
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Expr::Mul(Box::new(lhs), Box::new(rhs))
    }

    pub fn div(lhs: Expr, rhs: Expr) -> Self {
        Expr::Div(Box::new(lhs), Box::new(rhs))
    }

    pub fn pow(base: Expr, exp: Expr) -> Self {
        Expr::Pow(Box::new(base), Box::new(exp))
    }

    pub fn ln(arg: Expr) -> Self {
        Expr::Ln(Box::new(arg))
    }

    pub fn exp(arg: Expr) -> Self {
        Expr::Exp(Box::new(arg))
    }

    /// Unary minus, spelled as a product with the literal `-1`.
    pub fn neg(expr: Expr) -> Self {
        Expr::mul(Expr::integer(-1), expr)
    }
}

impl Expr {
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Expr::Constant(_) | Expr::Variable(_) | Expr::Parameter(_)
        )
    }

    pub fn as_constant(&self) -> Option<&Fraction> {
        match self {
            Expr::Constant(c) => Some(c),
            _ => None,
        }
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Constant(_) | Expr::Variable(_) | Expr::Parameter(_) => 1,
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Pow(l, r) => 1 + l.node_count() + r.node_count(),
            Expr::Ln(e) | Expr::Exp(e) => 1 + e.node_count(),
        }
    }

    /// Length of the longest root-to-leaf path; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Constant(_) | Expr::Variable(_) | Expr::Parameter(_) => 1,
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Pow(l, r) => 1 + l.depth().max(r.depth()),
            Expr::Ln(e) | Expr::Exp(e) => 1 + e.depth(),
        }
    }
}

impl From<Fraction> for Expr {
    fn from(value: Fraction) -> Self {
        Expr::Constant(value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, RenderMode::Plain))
    }
}

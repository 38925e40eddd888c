//! Stable entry points for front ends.
//!
//! A [`Derivation`] ties a parsed formula to its derivative; a [`Report`] is
//! the rendered two-line result.

use std::fmt;

use symdiff_ast::{render, Expr, RenderMode};
use symdiff_parser::{parse, ParseError};
use tracing::info;

use crate::differentiation::derive;

/// A formula together with its derivative.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    variable: String,
    original: Expr,
    derivative: Expr,
}

impl Derivation {
    /// Differentiate an already built tree.
    pub fn new(original: Expr, variable: impl Into<String>) -> Self {
        let variable = variable.into();
        let derivative = derive(&original, &variable);
        Derivation {
            variable,
            original,
            derivative,
        }
    }

    /// Parse `formula` and differentiate it with respect to `variable`.
    pub fn from_formula(formula: &str, variable: &str) -> Result<Self, ParseError> {
        let original = parse(formula, variable)?;
        info!(formula, variable, "differentiating");
        Ok(Derivation::new(original, variable))
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn original(&self) -> &Expr {
        &self.original
    }

    pub fn derivative(&self) -> &Expr {
        &self.derivative
    }

    pub fn report(&self, mode: RenderMode) -> Report {
        Report {
            function: render(&self.original, mode),
            derivative: render(&self.derivative, mode),
        }
    }
}

/// Rendered function and derivative.
///
/// `Display` gives the two output lines:
/// ```text
/// f : x^2-2^x
/// f': 2*x-2^x*\ln(2)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub function: String,
    pub derivative: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f : {}\nf': {}", self.function, self.derivative)
    }
}

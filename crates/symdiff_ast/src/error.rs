//! Error types for symdiff_ast crate.

use thiserror::Error;

/// Errors raised by exact fraction arithmetic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// A fraction was constructed with a zero denominator
    #[error("fraction with zero denominator")]
    ZeroDenominator,

    /// Division by the zero fraction
    #[error("division by zero")]
    DivisionByZero,

    /// Cross-multiplication left the 64-bit range
    #[error("fraction arithmetic overflowed")]
    Overflow,
}

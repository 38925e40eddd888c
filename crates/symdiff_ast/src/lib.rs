//! Expression tree, exact coefficients and rendering for symdiff.

pub mod display;
pub mod error;
pub mod expression;
pub mod fraction;
pub mod latex;

pub use display::{render, RenderMode};
pub use error::ArithmeticError;
pub use expression::Expr;
pub use fraction::Fraction;
pub use latex::to_latex;

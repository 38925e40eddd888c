//! Derivative engine for symdiff.
//!
//! ```
//! use symdiff_ast::RenderMode;
//! use symdiff_engine::Derivation;
//!
//! let d = Derivation::from_formula("x^2-2^x", "x").unwrap();
//! let report = d.report(RenderMode::Plain);
//! assert_eq!(report.derivative, "2*x-2^x*\\ln(2)");
//! ```

pub mod api;
pub mod differentiation;

pub use api::{Derivation, Report};
pub use differentiation::derive;

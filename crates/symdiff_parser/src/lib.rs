//! Formula text to expression tree.
//!
//! ```
//! use symdiff_ast::Expr;
//! use symdiff_parser::parse;
//!
//! let expr = parse("a*x", "x").unwrap();
//! assert_eq!(expr, Expr::mul(Expr::parameter("a"), Expr::variable("x")));
//! ```

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{ErrorKind, ParseError, Span};
pub use lexer::{lex, Lexeme, Token};
pub use parser::{parse, validate_variable, MAX_DEPTH};

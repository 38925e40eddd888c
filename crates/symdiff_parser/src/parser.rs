//! Recursive-descent parser.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := power (('*' | '/') power)*
//! power   := unary ('^' unary)*
//! unary   := '-' unary | primary
//! primary := NUMBER | WORD | ('ln' | 'exp') '(' expr ')' | '(' expr ')'
//! ```
//!
//! Every binary level is left-associative, so `2^3^2` reads as `(2^3)^2`.
//! A leading minus becomes `-1 * operand`.
//!
//! Both the recursion of the parser and the height of every tree it builds
//! stay within [`MAX_DEPTH`]; a long flat chain such as `x+x+...+x` is as
//! tall as its term count.

use symdiff_ast::Expr;
use tracing::debug;

use crate::error::{ParseError, Span};
use crate::lexer::{lex, Lexeme, Token};

/// Deepest nesting accepted before giving up, counted both as parser
/// recursion and as the height of the resulting tree.
pub const MAX_DEPTH: usize = 256;

/// Parse `input`, treating the word `variable` as the differentiation variable
/// and every other plain word as a symbolic parameter.
pub fn parse(input: &str, variable: &str) -> Result<Expr, ParseError> {
    validate_variable(variable)?;
    if input.trim().is_empty() {
        return Err(ParseError::EmptyFormula);
    }

    let tokens = lex(input)?;
    let mut parser = Parser::new(&tokens, variable);
    let expr = parser.parse_expr()?;
    parser.expect_end()?;

    debug!(nodes = expr.node_count(), depth = expr.depth(), "parsed formula");
    Ok(expr)
}

/// A differentiation variable must be a non-empty run of letters, the same
/// shape the lexer produces for a word.
pub fn validate_variable(variable: &str) -> Result<(), ParseError> {
    if variable.is_empty() || !variable.chars().all(char::is_alphabetic) {
        return Err(ParseError::InvalidVariable(variable.to_string()));
    }
    Ok(())
}

fn function(name: &str) -> Option<fn(Expr) -> Expr> {
    match name {
        "ln" => Some(Expr::ln),
        "exp" => Some(Expr::exp),
        _ => None,
    }
}

struct Parser<'a> {
    tokens: &'a [Lexeme],
    pos: usize,
    variable: &'a str,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Lexeme], variable: &'a str) -> Self {
        Parser {
            tokens,
            pos: 0,
            variable,
            depth: 0,
        }
    }

    // The lexer always terminates the stream with End, and advance never
    // steps past it.
    fn current(&self) -> &'a Lexeme {
        let tokens: &'a [Lexeme] = self.tokens;
        &tokens[self.pos.min(tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.current().token != Token::End {
            self.pos += 1;
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let lexeme = self.current();
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: lexeme.token.to_string(),
            span: lexeme.span,
        }
    }

    /// Rejects a freshly built node that is taller than [`MAX_DEPTH`].
    ///
    /// Children were checked when they were built, so `depth` never walks a
    /// tree more than one level over the limit.
    fn bounded(node: Expr, span: Span) -> Result<Expr, ParseError> {
        if node.depth() > MAX_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_DEPTH,
                span,
            });
        }
        Ok(node)
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_term()?;
        loop {
            let build: fn(Expr, Expr) -> Expr = match self.current().token {
                Token::Add => Expr::add,
                Token::Sub => Expr::sub,
                _ => return Ok(lhs),
            };
            let op = self.current().span;
            self.advance();
            let rhs = self.parse_term()?;
            lhs = Self::bounded(build(lhs, rhs), op)?;
        }
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_power()?;
        loop {
            let build: fn(Expr, Expr) -> Expr = match self.current().token {
                Token::Mul => Expr::mul,
                Token::Div => Expr::div,
                _ => return Ok(lhs),
            };
            let op = self.current().span;
            self.advance();
            let rhs = self.parse_power()?;
            lhs = Self::bounded(build(lhs, rhs), op)?;
        }
    }

    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let mut base = self.parse_unary()?;
        while self.current().token == Token::Pow {
            let op = self.current().span;
            self.advance();
            let exponent = self.parse_unary()?;
            base = Self::bounded(Expr::pow(base, exponent), op)?;
        }
        Ok(base)
    }

    /// Every recursive cycle of the grammar passes through here, so this is
    /// where nesting depth is counted.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_DEPTH,
                span: self.current().span,
            });
        }
        self.depth += 1;
        let result = if self.current().token == Token::Sub {
            let op = self.current().span;
            self.advance();
            self.parse_unary()
                .and_then(|operand| Self::bounded(Expr::neg(operand), op))
        } else {
            self.parse_primary()
        };
        self.depth -= 1;
        result
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let lexeme = self.current();
        match &lexeme.token {
            Token::Number(value) => {
                self.advance();
                Ok(Expr::constant(*value))
            }
            Token::Word(name) => {
                self.advance();
                if self.current().token == Token::LParen {
                    if let Some(apply) = function(name) {
                        let arg = self.parse_group()?;
                        return Self::bounded(apply(arg), lexeme.span);
                    }
                }
                if name == self.variable {
                    Ok(Expr::variable(name.as_str()))
                } else {
                    Ok(Expr::parameter(name.as_str()))
                }
            }
            Token::LParen => self.parse_group(),
            _ => Err(self.unexpected("an operand")),
        }
    }

    fn parse_group(&mut self) -> Result<Expr, ParseError> {
        let open: Span = self.current().span;
        self.advance();
        let inner = self.parse_expr()?;
        match self.current().token {
            Token::RParen => {
                self.advance();
                Ok(inner)
            }
            Token::End => Err(ParseError::UnmatchedParen { span: open }),
            _ => Err(self.unexpected("')'")),
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        match self.current().token {
            Token::End => Ok(()),
            _ => Err(self.unexpected("an operator or end of input")),
        }
    }
}

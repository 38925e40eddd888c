//! Tokenizer for formula text.
//!
//! Numbers are unsigned integers or `n/d` fraction literals written with no
//! spacing. Words are runs of alphabetic characters. A backslash command is
//! only accepted for `\ln`, which lexes the same as the bare word `ln`.

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit1},
    combinator::{map, opt, value},
    sequence::{pair, preceded},
    IResult,
};
use symdiff_ast::Fraction;
use tracing::debug;

use crate::error::{ParseError, Span};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(Fraction),
    Word(String),
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    LParen,
    RParen,
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "number {}", value),
            Token::Word(word) => write!(f, "'{}'", word),
            Token::Add => write!(f, "'+'"),
            Token::Sub => write!(f, "'-'"),
            Token::Mul => write!(f, "'*'"),
            Token::Div => write!(f, "'/'"),
            Token::Pow => write!(f, "'^'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::End => write!(f, "end of input"),
        }
    }
}

/// A token together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub span: Span,
}

enum Raw<'a> {
    Number(&'a str, Option<&'a str>),
    Word(&'a str),
    Command(&'a str),
    Symbol(Token),
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

fn number(input: &str) -> IResult<&str, Raw<'_>> {
    map(
        pair(digit1, opt(preceded(char('/'), digit1))),
        |(numer, denom)| Raw::Number(numer, denom),
    )(input)
}

fn word(input: &str) -> IResult<&str, Raw<'_>> {
    map(take_while1(is_letter), Raw::Word)(input)
}

fn command(input: &str) -> IResult<&str, Raw<'_>> {
    map(preceded(char('\\'), take_while1(is_letter)), Raw::Command)(input)
}

fn symbol(input: &str) -> IResult<&str, Raw<'_>> {
    map(
        alt((
            value(Token::Add, char('+')),
            value(Token::Sub, char('-')),
            value(Token::Mul, char('*')),
            value(Token::Div, char('/')),
            value(Token::Pow, char('^')),
            value(Token::LParen, char('(')),
            value(Token::RParen, char(')')),
        )),
        Raw::Symbol,
    )(input)
}

fn raw_token(input: &str) -> IResult<&str, Raw<'_>> {
    alt((number, word, command, symbol))(input)
}

/// Byte length of the leading run of characters matching `pred`.
fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.find(|c: char| !pred(c)).unwrap_or(s.len())
}

fn word_token(input: &str, span: Span, remaining: &str, name: &str) -> Result<Token, ParseError> {
    let digits = run_len(remaining, |c| c.is_ascii_digit());
    if digits > 0 {
        return Err(ParseError::MalformedIdentifier {
            text: input[span.start..span.end + digits].to_string(),
            span: Span::new(span.start, span.end + digits),
        });
    }
    Ok(Token::Word(name.to_string()))
}

fn malformed(literal: &str, span: Span) -> ParseError {
    ParseError::MalformedNumber {
        text: literal.to_string(),
        span,
    }
}

/// Split `input` into lexemes, always terminated by a single [`Token::End`].
pub fn lex(input: &str) -> Result<Vec<Lexeme>, ParseError> {
    let mut lexemes = Vec::new();
    let mut rest = input.trim_start();

    while let Some(first) = rest.chars().next() {
        let start = input.len() - rest.len();
        let (remaining, raw) = match raw_token(rest) {
            Ok(parsed) => parsed,
            Err(_) => {
                return Err(ParseError::UnrecognizedCharacter {
                    ch: first,
                    span: Span::new(start, start + first.len_utf8()),
                })
            }
        };
        let end = input.len() - remaining.len();
        let span = Span::new(start, end);

        let token = match raw {
            Raw::Number(numer, denom) => {
                // "2x" is never an implicit product
                let letters = run_len(remaining, is_letter);
                if letters > 0 {
                    return Err(ParseError::MalformedNumber {
                        text: input[start..end + letters].to_string(),
                        span: Span::new(start, end + letters),
                    });
                }
                let literal = &input[start..end];
                let numer: i64 = numer.parse().map_err(|_| malformed(literal, span))?;
                let denom: i64 = match denom {
                    Some(d) => d.parse().map_err(|_| malformed(literal, span))?,
                    None => 1,
                };
                let value = Fraction::new(numer, denom)
                    .map_err(|source| ParseError::Arithmetic { source, span })?;
                Token::Number(value)
            }
            Raw::Word(name) => word_token(input, span, remaining, name)?,
            Raw::Command(name) => {
                if name != "ln" {
                    return Err(ParseError::UnknownCommand {
                        name: name.to_string(),
                        span,
                    });
                }
                word_token(input, span, remaining, name)?
            }
            Raw::Symbol(token) => token,
        };

        lexemes.push(Lexeme { token, span });
        rest = remaining.trim_start();
    }

    lexemes.push(Lexeme {
        token: Token::End,
        span: Span::at(input.len()),
    });
    debug!(tokens = lexemes.len(), "lexed formula");
    Ok(lexemes)
}

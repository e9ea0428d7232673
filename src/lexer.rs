//! Tokenization for rpn
//!
//! Tokens represent the atomic elements of an RPN expression: numeric
//! literals and arithmetic operators. The input is split on runs of
//! whitespace and every resulting lexeme is classified; anything that is
//! neither an operator spelling nor a finite number fails the whole call.

use nom::{
    bytes::complete::take_while1,
    character::complete::multispace0,
    sequence::preceded,
    IResult,
};
use std::fmt;
use thiserror::Error;

/// A binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    /// Remainder (`%`)
    Rem,
}

impl Operator {
    /// Classify a lexeme as an operator. Each operator accepts its ASCII
    /// spelling; subtraction, multiplication and division also accept the
    /// typographic glyphs a calculator keypad produces.
    pub fn from_symbol(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(Operator::Add),
            "-" | "\u{2212}" => Some(Operator::Sub),
            "*" | "\u{00d7}" => Some(Operator::Mul),
            "/" | "\u{00f7}" => Some(Operator::Div),
            "%" => Some(Operator::Rem),
            _ => None,
        }
    }

    /// Canonical ASCII spelling, used in error messages and display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Rem => "%",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// An arithmetic operator
    Operator(Operator),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    /// A lexeme that is neither an operator nor a finite number.
    /// `position` is the 1-based index of the lexeme in the input.
    #[error("{lexeme} is not a valid token (position {position})")]
    InvalidToken { lexeme: String, position: usize },
}

/// Scan the next whitespace-delimited lexeme
fn lexeme(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, take_while1(|c: char| !c.is_whitespace()))(input)
}

/// Classify a single lexeme into a token
fn classify(lexeme: &str, position: usize) -> Result<Token, LexError> {
    if let Some(op) = Operator::from_symbol(lexeme) {
        return Ok(Token::Operator(op));
    }
    // `f64` parsing admits `inf`/`nan` spellings and overflowing exponents;
    // only finite literals are valid tokens.
    match lexeme.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Token::Number(n)),
        _ => Err(LexError::InvalidToken {
            lexeme: lexeme.to_string(),
            position,
        }),
    }
}

/// Tokenize a complete input string
///
/// Empty or all-whitespace input yields an empty token sequence; the
/// evaluator turns that into an error. The first unclassifiable lexeme
/// fails the whole call, so a partial token sequence never escapes.
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut rest = input;
    let mut position = 0;

    while let Ok((remaining, word)) = lexeme(rest) {
        position += 1;
        tokens.push(classify(word, position)?);
        rest = remaining;
    }

    Ok(tokens)
}

//! rpn - a stack-based RPN expression evaluator
//!
//! # Overview
//!
//! Evaluates flat Reverse Polish Notation expressions over floating-point
//! numbers: operands come first, operators follow, and a value stack does
//! the rest. No parentheses, no precedence rules.
//!
//! ```text
//! 3 4 +                # 7
//! 5 1 2 + 4 × + 3 −    # 5 + ((1 + 2) * 4) - 3 = 14
//! 10 4 /               # 2.5
//! ```
//!
//! Tokenization and evaluation are separate stages with separate error
//! types; every failure is an ordinary typed value, never a panic. Each
//! call owns its token sequence and stack outright, so concurrent callers
//! need no locking.
//!
//! # Example
//!
//! ```rust
//! use rpn::{evaluate, lex};
//!
//! let tokens = lex("3 4 +").unwrap();
//! let value = evaluate(&tokens).unwrap();
//! assert_eq!(value, 7.0);
//! ```

pub mod display;
pub mod eval;
pub mod lexer;

// Re-export commonly used items
pub use eval::{evaluate, EvalError};
pub use lexer::{lex, LexError, Operator, Token};

use thiserror::Error;

/// Any failure an expression can produce, from either stage
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Convenience function to tokenize and evaluate an expression
pub fn eval(input: &str) -> Result<f64, Error> {
    let tokens = lex(input)?;
    let value = evaluate(&tokens)?;
    Ok(value)
}

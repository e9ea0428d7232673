//! Common test utilities for rpn integration tests

pub use rpn::{evaluate, lex, Error};

/// Helper to evaluate an expression and return the formatted output
pub fn eval(input: &str) -> Result<String, String> {
    rpn::eval(input)
        .map(rpn::display::format_number)
        .map_err(|e| e.to_string())
}

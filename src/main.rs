//! rpn - a stack-based RPN expression calculator
//!
//! Usage:
//!   rpn               Start interactive REPL
//!   rpn -c "3 4 +"    Evaluate a single expression
//!   rpn script.rpn    Evaluate a file, one expression per line
//!   rpn -             Read expressions from standard input

mod cli;
mod repl;

use rpn::display;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = cli::parse_args(&args);

    if cli.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }
    if cli.version {
        println!("rpn {}", VERSION);
        return ExitCode::SUCCESS;
    }

    if let Some(expr) = cli.expression {
        return run_expression(&expr);
    }

    if let Some(path) = cli.script {
        return if path == "-" {
            run_lines(io::stdin().lock().lines(), "<stdin>")
        } else {
            run_script(&path)
        };
    }

    repl::run()
}

/// Evaluate a single expression and print the result
fn run_expression(expr: &str) -> ExitCode {
    match rpn::eval(expr) {
        Ok(value) => {
            println!("{}", display::format_number(value));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("rpn: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_script(path: &str) -> ExitCode {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("rpn: {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };
    run_lines(BufReader::new(file).lines(), path)
}

/// Evaluate expressions line by line, stopping at the first failure
fn run_lines<I>(lines: I, source: &str) -> ExitCode
where
    I: Iterator<Item = io::Result<String>>,
{
    for (index, line) in lines.enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("rpn: {}: {}", source, e);
                return ExitCode::FAILURE;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match rpn::eval(trimmed) {
            Ok(value) => println!("{}", display::format_number(value)),
            Err(e) => {
                eprintln!("rpn: {}:{}: {}", source, index + 1, e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

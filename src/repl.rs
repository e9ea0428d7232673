//! Interactive REPL for rpn
//!
//! Reads one expression per line, evaluates it, and prints the value or
//! the error. Every line is an independent evaluation; nothing carries
//! over between lines.

use rpn::display;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::print_help;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn history_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|h| PathBuf::from(h).join(".rpn_history"))
}

pub(crate) fn run() -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("rpn: failed to start line editor: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Try to load history
    let history_path = history_path();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    println!("rpn {} - type .help for help, exit to quit", VERSION);

    loop {
        match rl.readline("rpn> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match trimmed {
                    "exit" | "quit" => break,
                    ".help" | ".h" => {
                        print_help();
                        continue;
                    }
                    _ => {}
                }

                match rpn::eval(trimmed) {
                    Ok(value) => println!("{}", display::format_number(value)),
                    Err(e) => eprintln!("error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C discards the current line
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("rpn: readline error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    // Save history
    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }

    ExitCode::SUCCESS
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
pub(crate) struct CliArgs {
    pub(crate) expression: Option<String>,
    pub(crate) script: Option<String>,
    pub(crate) help: bool,
    pub(crate) version: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        expression: None,
        script: None,
        help: false,
        version: false,
    };

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "-c" => {
                // Everything after -c is the expression
                if i + 1 < args.len() {
                    cli.expression = Some(args[i + 1..].join(" "));
                    break;
                }
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            "-" => {
                // Read expressions from stdin
                cli.script = Some("-".to_string());
            }
            path => {
                // Assume it's a script file if not a flag
                if !path.starts_with('-') {
                    cli.script = Some(path.to_string());
                }
            }
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_help() {
    println!(
        r#"rpn-{} - A stack-based RPN expression evaluator

USAGE:
    rpn                     Start interactive REPL
    rpn -c <expression>     Evaluate a single expression
    rpn <script>            Evaluate a file, one expression per line
    rpn -                   Read expressions from standard input
    rpn --help              Show this help message
    rpn --version           Show version

EXPRESSIONS:
    Operands come first, operators follow (Reverse Polish Notation).
    Tokens are separated by whitespace.

    3 4 +                   # 7
    5 1 2 + 4 * + 3 -       # 5 + ((1 + 2) * 4) - 3 = 14
    10 4 /                  # 2.5

NUMBERS:
    Floating point, with optional sign, decimal point and exponent:
    42   -3.5   1e3   2.5E-2

OPERATORS:
    +                       Addition
    - or −                  Subtraction
    * or ×                  Multiplication
    / or ÷                  Division (divisor must be non-zero)
    %                       Remainder (divisor must be non-zero)

REPL COMMANDS:
    .help, .h               Show this help
    exit, quit              Exit the REPL

STARTUP:
    ~/.rpn_history          Readline history, loaded and saved by the REPL"#,
        VERSION
    );
}

use std::{
    fs,
    io::{self, BufRead},
};

use clap::Parser;
use scical::{
    EvalOptions, Evaluator,
    keypad::{Key, Keypad},
    render,
};
use tracing::{Level, info, warn};

/// scical evaluates scientific calculator expressions such as
/// `sqrt(16) + 2^3` or `sin(90)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a path and evaluate each non-empty line of that
    /// file.
    #[arg(short, long, conflicts_with = "keys")]
    file: bool,

    /// Treat the contents as whitespace separated keypad labels, for example
    /// `"2 + 3 ="`, and print the final display.
    #[arg(short, long)]
    keys: bool,

    /// Maximum nesting of groups, signs, function applications, and powers.
    #[arg(long, default_value_t = scical::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increase log verbosity. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression, file path, or key sequence. Reads expressions from
    /// standard input, one per line, when omitted. Expressions may start
    /// with a sign, as in `-2^2`.
    #[arg(allow_hyphen_values = true)]
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .init();

    let evaluator = Evaluator::new(EvalOptions { max_depth: args.max_depth });
    info!(max_depth = evaluator.options().max_depth, "evaluator ready");

    match args.contents {
        Some(contents) if args.keys => run_keys(evaluator, &contents),
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            info!(%path, "evaluating file");
            run_lines(&evaluator, script.lines());
        },
        Some(expression) => println!("{}", render(&evaluator.evaluate(&expression))),
        None => {
            let stdin = io::stdin();
            let lines = stdin.lock().lines().map_while(|line| {
                                                 line.inspect_err(|e| warn!(error = %e, "stopped reading input"))
                                                     .ok()
                                             });
            run_lines(&evaluator, lines);
        },
    }
}

/// Prints the rendered result of every non-empty line.
fn run_lines<S: AsRef<str>>(evaluator: &Evaluator, lines: impl Iterator<Item = S>) {
    for line in lines {
        let expression = line.as_ref();
        if expression.trim().is_empty() {
            continue;
        }
        println!("{}", render(&evaluator.evaluate(expression)));
    }
}

/// Feeds a key sequence to a fresh keypad and prints the final display.
fn run_keys(evaluator: Evaluator, sequence: &str) {
    let mut keypad = Keypad::with_evaluator(evaluator);
    for label in sequence.split_whitespace() {
        match Key::from_label(label) {
            Some(key) => keypad.press(key),
            None => {
                eprintln!("Unknown key '{label}'.");
                std::process::exit(1);
            },
        }
    }
    println!("{}", keypad.display());
}

use std::io::{self, BufRead, Write};

use clap::Parser;
use shunt::{
    evaluate_expression, interpreter::evaluator::function::BUILTIN_FUNCTIONS,
    util::num::format_result,
};

/// Builds the usage line shown by the banner and the `help` command.
fn usage() -> String {
    format!("Type an expression and press enter to evaluate it. \
             Supported: + - * / ^, functions: {}",
            BUILTIN_FUNCTIONS.join(" "))
}

/// shunt is an interactive console calculator for arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single expression and exits instead of starting the
    /// interactive session.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expr) = args.expression {
        match evaluate_expression(&expr) {
            Ok(value) => println!("{}", format_result(value)),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            },
        }
        return;
    }

    println!("=== Calculator ===");
    println!("{}", usage());
    println!("Example: 3+4*2/(1-5)^2  or  sin(3.14/2)  or  -2^2");
    println!("Commands: help, quit");

    repl();
}

/// Runs the interactive session: one expression per line, until an empty
/// line, `quit`, or end of input ends it.
fn repl() {
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = line.trim();
        if line.is_empty() || line == "quit" {
            break;
        }
        if line == "help" {
            println!("{}", usage());
            continue;
        }

        match evaluate_expression(line) {
            Ok(value) => println!("{}", format_result(value)),
            Err(e) => println!("Error: {e}"),
        }
    }
}

//! The Tally Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate::cli::args::{Command, TallyArgs};
use crate::cli::output::Printer;
use crate::{logging, numeric_calculate, numeric_string_calculate, StringCalculator};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() -> ExitCode {
    let args = TallyArgs::parse();
    logging::init(args.verbose);

    let printer = Printer::new(args.format, args.color, args.verbose);
    match dispatch(args.command, &printer) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            // Usually a closed pipe; nothing left to report it to but stderr.
            eprintln!("tally: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one subcommand. `Ok(false)` means a calculation error was printed.
fn dispatch(command: Command, printer: &Printer) -> io::Result<bool> {
    let calc = StringCalculator::new();
    match command {
        Command::Sum { expression, raw } => {
            let expression = decode(&expression, raw);
            report(printer, calc.calculate(&expression))
        }
        Command::Tokens { expression, raw } => {
            let expression = decode(&expression, raw);
            printer.tokens(&calc.tokens(&expression))?;
            Ok(true)
        }
        Command::Delimiter { expression, raw } => {
            let expression = decode(&expression, raw);
            printer.delimiter(calc.custom_delimiter(&expression))?;
            Ok(true)
        }
        Command::Numeric { op, x, y } => report(printer, numeric_calculate(op, x, y)),
        Command::NumericString { op, x, y } => {
            report(printer, numeric_string_calculate(op, &x, &y))
        }
        Command::Interactive => run_interactive(printer, &calc),
    }
}

fn report(printer: &Printer, result: crate::Result<i64>) -> io::Result<bool> {
    match result {
        Ok(value) => printer.result(value).map(|()| true),
        Err(e) => printer.error(&e).map(|()| false),
    }
}

/// Sums every non-blank stdin line. Keeps going after errors.
fn run_interactive(printer: &Printer, calc: &StringCalculator) -> io::Result<bool> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut all_ok = true;
    let mut line_number = 0usize;

    if prompt {
        eprintln!("Enter an expression per line, e.g. //;\\n1;2. Ctrl-D to quit.");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if prompt {
            eprint!("tally> ");
            io::stderr().flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line?;
        line_number += 1;

        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let expression = decode(line, false);
        debug!(line_number, "evaluating stdin line");
        all_ok &= report(printer, calc.calculate(&expression))?;
    }
    Ok(all_ok)
}

/// Decodes `\n`, `\t`, `\r` and `\\` so a declaration fits on one shell line.
/// Unknown escapes are left untouched.
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn decode(input: &str, raw: bool) -> String {
    if raw {
        input.to_string()
    } else {
        unescape(input)
    }
}

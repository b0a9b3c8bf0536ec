//! Defines the command-line arguments and subcommands for the Tally CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand, ValueEnum};

use crate::arith::Operation;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "tally",
    version,
    about = "Sums delimited number lists and does range-checked arithmetic."
)]
pub struct TallyArgs {
    #[command(subcommand)]
    pub command: Command,

    /// How results and errors are printed.
    #[arg(long, value_enum, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// When to color error output.
    #[arg(long, value_enum, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Log each pipeline stage and print full diagnostics on error.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sum a delimited expression, e.g. '//;\n1;2,3'.
    Sum {
        /// The expression. `\n`, `\t`, `\r` and `\\` are decoded unless --raw.
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Take the expression byte for byte.
        #[arg(long)]
        raw: bool,
    },
    /// Print the tokens an expression splits into, one per line.
    Tokens {
        #[arg(allow_hyphen_values = true)]
        expression: String,
        #[arg(long)]
        raw: bool,
    },
    /// Print the custom delimiter an expression declares, if any.
    Delimiter {
        #[arg(allow_hyphen_values = true)]
        expression: String,
        #[arg(long)]
        raw: bool,
    },
    /// Apply an operation to two numbers.
    Numeric {
        #[arg(value_enum)]
        op: Operation,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Apply an operation to two numeric strings.
    #[command(name = "string")]
    NumericString {
        #[arg(value_enum)]
        op: Operation,
        #[arg(allow_hyphen_values = true)]
        x: String,
        #[arg(allow_hyphen_values = true)]
        y: String,
    },
    /// Read expressions from stdin, one per line, and sum each.
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn argument_definitions_are_consistent() {
        TallyArgs::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let args =
            TallyArgs::try_parse_from(["tally", "sum", "1,2", "--format", "json", "-v"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.verbose);
        assert!(matches!(args.command, Command::Sum { ref expression, raw: false } if expression == "1,2"));
    }

    #[test]
    fn numeric_accepts_negative_operands_and_aliases() {
        let args = TallyArgs::try_parse_from(["tally", "numeric", "plus", "-1.5", "2"]).unwrap();
        match args.command {
            Command::Numeric { op, x, y } => {
                assert_eq!(op, Operation::Add);
                assert_eq!(x, -1.5);
                assert_eq!(y, 2.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn string_operands_keep_their_text() {
        let args = TallyArgs::try_parse_from(["tally", "string", "divide", "-5.5", "-1.1"]).unwrap();
        match args.command {
            Command::NumericString { op, x, y } => {
                assert_eq!(op, Operation::Divide);
                assert_eq!(x, "-5.5");
                assert_eq!(y, "-1.1");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

//! Handles all user-facing output for the CLI.
//!
//! Results go to stdout. Text-mode errors go to stderr as `[ERROR] <message>`,
//! optionally followed by the full `miette` report. JSON mode writes one
//! object per result or error to stdout.

use std::io::{self, IsTerminal, Write};

use serde_json::{json, Value as JsonValue};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::cli::args::{ColorMode, OutputFormat};
use crate::errors::CalcError;

const ERROR_PREFIX: &str = "[ERROR]";

/// Renders results and errors in the selected format.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
    color: ColorChoice,
    verbose: bool,
}

impl Printer {
    pub fn new(format: OutputFormat, color: ColorMode, verbose: bool) -> Self {
        Self {
            format,
            color: color_choice(color, io::stderr().is_terminal()),
            verbose,
        }
    }

    pub fn result(&self, value: i64) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        match self.format {
            OutputFormat::Text => writeln!(stdout, "{value}"),
            OutputFormat::Json => writeln!(stdout, "{}", json!({ "result": value })),
        }
    }

    pub fn tokens(&self, tokens: &[&str]) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        match self.format {
            OutputFormat::Text => tokens.iter().try_for_each(|t| writeln!(stdout, "{t}")),
            OutputFormat::Json => writeln!(stdout, "{}", json!({ "tokens": tokens })),
        }
    }

    pub fn delimiter(&self, delimiter: Option<&str>) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        match (self.format, delimiter) {
            (OutputFormat::Text, Some(d)) => writeln!(stdout, "{d}"),
            (OutputFormat::Text, None) => Ok(()),
            (OutputFormat::Json, d) => writeln!(stdout, "{}", json!({ "delimiter": d })),
        }
    }

    pub fn error(&self, err: &CalcError) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let mut stderr = StandardStream::stderr(self.color);
                write_error_colored(&mut stderr, err)?;
                if self.verbose {
                    let report = miette::Report::new(err.clone());
                    writeln!(stderr, "{report:?}")?;
                }
                Ok(())
            }
            OutputFormat::Json => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", error_json(err))
            }
        }
    }
}

/// Writes `[ERROR] <message>` with the prefix in bold red.
fn write_error_colored(writer: &mut impl WriteColor, err: &CalcError) -> io::Result<()> {
    writer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(writer, "{ERROR_PREFIX}")?;
    writer.reset()?;
    writeln!(writer, " {err}")
}

/// `{"error": {"kind": ..., <context>, "message": ...}}`
fn error_json(err: &CalcError) -> JsonValue {
    let mut body = serde_json::to_value(err).unwrap_or_else(|_| json!({ "kind": err.kind() }));
    if let JsonValue::Object(map) = &mut body {
        map.insert("message".to_string(), JsonValue::String(err.to_string()));
    }
    json!({ "error": body })
}

fn color_choice(mode: ColorMode, is_terminal: bool) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if is_terminal => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

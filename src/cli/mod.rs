use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, Write};

use crate::application::{Outcome, Register};
use crate::io::{export_receipt, parse_script, ExportFormat};

/// Tally - point-of-sale bill in dozen-based units
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Run a register session from a script of add/remove/get/checkout commands")]
#[command(version)]
pub struct Cli {
    /// Session script to run (stdin if omitted)
    #[arg(short, long)]
    pub script: Option<String>,

    /// Receipt format: text, json, csv
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Counts of what happened during a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub executed: usize,
    pub rejected: usize,
    pub receipts: usize,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let format = ExportFormat::from_str(&self.format).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid format '{}'. Valid formats: text, json, csv",
                self.format
            )
        })?;

        let summary = match &self.script {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open script '{}'", path))?;
                run_session(BufReader::new(file), stdout().lock(), format)?
            }
            None => run_session(stdin().lock(), stdout().lock(), format)?,
        };

        if summary.rejected > 0 {
            eprintln!(
                "{} of {} commands rejected",
                summary.rejected, summary.executed
            );
        }
        Ok(())
    }
}

/// Execute a whole script against a fresh register, writing results to `out`.
/// Rejected commands are reported and the session carries on; malformed lines abort it.
pub fn run_session<R: BufRead, W: Write>(
    reader: R,
    mut out: W,
    format: ExportFormat,
) -> Result<SessionSummary> {
    let commands = parse_script(reader)?;
    let mut register = Register::new();
    let mut summary = SessionSummary::default();

    for (line_num, command) in commands {
        summary.executed += 1;
        match register.execute(command) {
            Ok(outcome) => {
                if matches!(outcome, Outcome::CheckedOut(_)) {
                    summary.receipts += 1;
                }
                print_outcome(&mut out, outcome, format)?;
            }
            Err(e) if e.is_rejection() => {
                summary.rejected += 1;
                writeln!(out, "rejected (line {}): {}", line_num, e)?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    out.flush()?;
    Ok(summary)
}

fn print_outcome<W: Write>(out: &mut W, outcome: Outcome, format: ExportFormat) -> Result<()> {
    match outcome {
        Outcome::Updated { item, quantity } if quantity == 0 => {
            writeln!(out, "{}: removed from bill", item)?;
        }
        Outcome::Updated { item, quantity } => {
            writeln!(out, "{}: {}", item, quantity)?;
        }
        Outcome::Found {
            item,
            quantity: Some(quantity),
        } => {
            writeln!(out, "{}: {}", item, quantity)?;
        }
        Outcome::Found {
            item,
            quantity: None,
        } => {
            writeln!(out, "{}: not on bill", item)?;
        }
        Outcome::Lines(lines) => {
            if lines.is_empty() {
                writeln!(out, "Bill is empty.")?;
            } else {
                writeln!(out, "{:<24} {:>10}", "ITEM", "QTY")?;
                writeln!(out, "{}", "-".repeat(35))?;
                for (item, quantity) in lines {
                    writeln!(out, "{:<24} {:>10}", item, quantity)?;
                }
            }
        }
        Outcome::Units(units) => {
            for unit in units {
                writeln!(out, "{:<20} {:>6}", unit.as_str(), unit.quantity())?;
            }
        }
        Outcome::CheckedOut(receipt) => {
            export_receipt(&receipt, format, &mut *out)?;
        }
    }
    Ok(())
}

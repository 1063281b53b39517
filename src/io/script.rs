use std::io::BufRead;

use anyhow::Context;

use crate::application::{AppError, Command};

/// Parse a single script line. Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str, line_num: usize) -> Result<Option<Command>, AppError> {
    let content = match line.split_once('#') {
        Some((before, _)) => before,
        None => line,
    };
    let tokens: Vec<&str> = content.split_whitespace().collect();

    let Some((&verb, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let invalid = |reason: String| AppError::InvalidCommand {
        line: line_num,
        reason,
    };

    let command = match (verb, args) {
        ("add", [item, unit]) => Command::Add {
            item: item.to_string(),
            unit: unit.to_string(),
        },
        ("remove", [item, unit]) => Command::Remove {
            item: item.to_string(),
            unit: unit.to_string(),
        },
        ("get", [item]) => Command::Get {
            item: item.to_string(),
        },
        ("show", []) => Command::Show,
        ("units", []) => Command::Units,
        ("checkout", []) => Command::Checkout,
        ("add" | "remove", _) => {
            return Err(invalid(format!("usage: {} <item> <unit>", verb)));
        }
        ("get", _) => return Err(invalid("usage: get <item>".to_string())),
        ("show" | "units" | "checkout", _) => {
            return Err(invalid(format!("'{}' takes no arguments", verb)));
        }
        _ => return Err(invalid(format!("unknown command '{}'", verb))),
    };

    Ok(Some(command))
}

/// Read a whole script. Each command is paired with its 1-based line number.
pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<(usize, Command)>, AppError> {
    let mut commands = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.with_context(|| format!("Failed to read script line {}", line_num))?;
        if let Some(command) = parse_line(&line, line_num)? {
            commands.push((line_num, command));
        }
    }

    Ok(commands)
}

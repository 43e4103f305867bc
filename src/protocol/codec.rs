//! Protocol codec
//!
//! Parsing and formatting functions for the text protocol.

use std::io::{BufRead, Write};

use super::{Command, CommandType, Response, Status};
use crate::error::{KvError, Result};

/// Message written when ROLLBACK finds no open transaction
pub const INVALID_ROLLBACK_MESSAGE: &str = "INVALID ROLLBACK";

// =============================================================================
// Command Parsing/Formatting
// =============================================================================

/// Parse a single command line
///
/// The line must not be blank; callers skip blank lines.
pub fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();

    let keyword = words
        .next()
        .ok_or_else(|| KvError::Protocol("empty command".to_string()))?;

    let command_type = CommandType::from_keyword(keyword)
        .ok_or_else(|| KvError::UnknownCommand(keyword.to_ascii_uppercase()))?;

    let args: Vec<&str> = words.collect();
    if args.len() != command_type.arity() {
        return Err(KvError::Protocol(format!(
            "{} expects {} argument(s), got {}",
            command_type.name(),
            command_type.arity(),
            args.len()
        )));
    }

    let command = match command_type {
        CommandType::Get => Command::Get {
            key: args[0].to_string(),
        },
        CommandType::Set => Command::Set {
            key: args[0].to_string(),
            value: args[1].to_string(),
        },
        CommandType::Unset => Command::Unset {
            key: args[0].to_string(),
        },
        CommandType::Begin => Command::Begin,
        CommandType::Rollback => Command::Rollback,
        CommandType::Commit => Command::Commit,
        CommandType::End => Command::End,
    };

    Ok(command)
}

/// Format a command as its canonical text line (no trailing newline)
pub fn format_command(command: &Command) -> String {
    match command {
        Command::Get { key } => format!("GET {}", key),
        Command::Set { key, value } => format!("SET {} {}", key, value),
        Command::Unset { key } => format!("UNSET {}", key),
        other => other.name().to_string(),
    }
}

// =============================================================================
// Response Rendering
// =============================================================================

/// Render a response as the line to show the user, if any
pub fn render_response(response: &Response, null_display: &str) -> Option<String> {
    match response.status {
        Status::Ok => response.payload.clone(),
        Status::NotFound => Some(null_display.to_string()),
        Status::Error => Some(response.payload.clone().unwrap_or_default()),
    }
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read the next command from a stream
///
/// Blank lines are skipped. Returns `Ok(None)` at end of input.
pub fn read_command<R: BufRead>(reader: &mut R) -> Result<Option<Command>> {
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if !line.trim().is_empty() {
            return parse_command(&line).map(Some);
        }
    }
}

/// Write a rendered response to a stream
///
/// Responses that render to nothing write nothing.
pub fn write_response<W: Write>(
    writer: &mut W,
    response: &Response,
    null_display: &str,
) -> Result<()> {
    if let Some(line) = render_response(response, null_display) {
        writeln!(writer, "{}", line)?;
        writer.flush()?;
    }
    Ok(())
}

/**
 * Helper functions for input and output.
 *
 * Version: October 2026
 */
use colored::*;
use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::common::{FlashError, Result};

#[macro_export]
macro_rules! my_println {
    ($($arg:tt)*) => (
        writeln!(std::io::stdout(), $($arg)*).map_err($crate::common::FlashError::Io)
    );
}

#[macro_export]
macro_rules! my_print {
    ($($arg:tt)*) => (
        write!(std::io::stdout(), $($arg)*).map_err($crate::common::FlashError::Io)
    );
}

// Narrower terminals than this are treated as this wide.
const MIN_WIDTH: usize = 20;

/// Display a prompt and read a line from standard input continually until the user
/// enters a line with at least one non-whitespace character. If the user presses Ctrl+D
/// then `Ok(None)` is returned. If the user presses Ctrl+C then
/// `Err(FlashError::ReadlineInterrupted)` is returned. Otherwise, `Ok(Some(line))` is
/// returned where `line` is the last line of input the user entered without leading and
/// trailing whitespace.
pub fn prompt(message: &str) -> Result<Option<String>> {
    let mut rl = new_editor()?;
    loop {
        match rl.readline(message) {
            Ok(response) => {
                let response = response.trim();
                if !response.is_empty() {
                    return Ok(Some(response.to_string()));
                }
            }
            Err(ReadlineError::Interrupted) => {
                return Err(FlashError::ReadlineInterrupted);
            }
            Err(ReadlineError::Eof) => {
                return Ok(None);
            }
            Err(ReadlineError::Io(e)) => {
                return Err(FlashError::Io(e));
            }
            _ => {}
        }
    }
}

/// Display a prompt and wait for the user to press Enter. Return `false` if the user
/// pressed Ctrl+D instead.
pub fn pause(message: &str) -> Result<bool> {
    let mut rl = new_editor()?;
    match rl.readline(message) {
        Ok(_) => Ok(true),
        Err(ReadlineError::Interrupted) => Err(FlashError::ReadlineInterrupted),
        Err(ReadlineError::Eof) => Ok(false),
        Err(ReadlineError::Io(e)) => Err(FlashError::Io(e)),
        Err(_) => Ok(false),
    }
}

fn new_editor() -> Result<DefaultEditor> {
    DefaultEditor::new().map_err(|e| match e {
        ReadlineError::Io(e) => FlashError::Io(e),
        e => FlashError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())),
    })
}

/// Print `message` to standard output, breaking lines according to the current width
/// of the terminal. Prepend `prefix` to the first line and indent all subsequent lines
/// by its length.
pub fn prettyprint(message: &str, prefix: &str) -> Result<()> {
    prettyprint_colored(message, prefix, None, None)
}

pub fn prettyprint_colored(
    message: &str,
    prefix: &str,
    message_color: Option<Color>,
    prefix_color: Option<Color>,
) -> Result<()> {
    let width = textwrap::termwidth().saturating_sub(prefix.len()).max(MIN_WIDTH);
    let lines = textwrap::wrap(message, width);
    let mut lines = lines.iter();

    if let Some(first_line) = lines.next() {
        let colored_prefix = color_optional(prefix, prefix_color);
        let colored_line = color_optional(first_line, message_color);
        my_println!("{}{}", colored_prefix, colored_line)?;
    }

    let indent = " ".repeat(prefix.len());
    for line in lines {
        let colored_line = color_optional(line, message_color);
        my_println!("{}{}", indent, colored_line)?;
    }
    Ok(())
}

fn color_optional(text: &str, color: Option<Color>) -> ColoredString {
    if let Some(color) = color {
        text.color(color)
    } else {
        text.normal()
    }
}

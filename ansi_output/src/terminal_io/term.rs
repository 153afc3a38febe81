// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;

pub const DEFAULT_WIDTH: u16 = 80;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

impl TTYResult {
    #[must_use]
    pub fn is_interactive(self) -> bool { self == TTYResult::IsInteractive }
}

impl From<bool> for TTYResult {
    fn from(is_tty: bool) -> Self {
        if is_tty {
            TTYResult::IsInteractive
        } else {
            TTYResult::IsNotInteractive
        }
    }
}

/// Get the terminal width in columns.
///
/// # Errors
///
/// Returns an error if the terminal size cannot be determined, eg: when no terminal
/// is attached.
pub fn get_terminal_width_no_default() -> miette::Result<u16> {
    let (columns, _rows) = crossterm::terminal::size().into_diagnostic()?;
    Ok(columns)
}

/// Get the terminal width. If there is a problem, return the default width.
#[must_use]
pub fn get_terminal_width() -> u16 {
    match get_terminal_width_no_default() {
        Ok(columns) if columns > 0 => columns,
        _ => DEFAULT_WIDTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_never_zero() {
        assert!(get_terminal_width() > 0);
    }

    #[test]
    fn tty_result_from_bool() {
        assert!(TTYResult::from(true).is_interactive());
        assert!(!TTYResult::from(false).is_interactive());
    }
}

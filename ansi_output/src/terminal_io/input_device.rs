// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiOutputError, CommonResult};
use std::io::BufRead;

/// Options for [`read_line_with`] and [`read_line_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadLineOptions {
    /// Treat an empty or whitespace only line as "no value".
    pub strip_blank: bool,
}

impl Default for ReadLineOptions {
    fn default() -> Self { Self { strip_blank: true } }
}

/// Blocking read of one line from `reader`, without the trailing `\n` or `\r\n`.
///
/// Returns `Ok(None)` at end of input, and also for a blank line when
/// [`ReadLineOptions::strip_blank`] is set.
///
/// # Errors
///
/// Returns [`AnsiOutputError::Read`] if the read fails, or the line is not valid UTF-8.
pub fn read_line_from(
    reader: &mut impl BufRead,
    options: ReadLineOptions,
) -> CommonResult<Option<String>> {
    let mut line = String::new();
    let bytes_read = reader.read_line(&mut line).map_err(AnsiOutputError::Read)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    if options.strip_blank && line.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(line))
}

/// Read one line from stdin with the default [`ReadLineOptions`]. See
/// [`read_line_with`].
#[must_use]
pub fn read_line() -> Option<String> { read_line_with(ReadLineOptions::default()) }

/// Read one line from stdin. A read error is logged and reported as [None], the same
/// as end of input.
#[must_use]
pub fn read_line_with(options: ReadLineOptions) -> Option<String> {
    let stdin = std::io::stdin();
    match read_line_from(&mut stdin.lock(), options) {
        Ok(it) => it,
        Err(report) => {
            tracing::warn!(message = "Failed to read line from stdin", error = ?report);
            None
        }
    }
}

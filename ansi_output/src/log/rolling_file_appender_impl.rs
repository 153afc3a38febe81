// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::AnsiOutputError;
use std::path::PathBuf;

/// Create a file appender that never rolls over.
///
/// Note that if you wrap this up in a non blocking writer, as shown below, it doesn't
/// work:
///
/// ```ignore
/// tracing_appender::non_blocking(try_create_rolling_file_appender("foo")?);
/// ```
///
/// # Errors
///
/// Returns [`AnsiOutputError::LogFilePath`] if the path has no parent folder or no file
/// name.
pub fn try_create_rolling_file_appender(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = path.parent().ok_or_else(|| AnsiOutputError::LogFilePath {
        path: path.display().to_string(),
    })?;

    let file_stem = path.file_name().ok_or_else(|| AnsiOutputError::LogFilePath {
        path: path.display().to_string(),
    })?;

    Ok(tracing_appender::rolling::never(parent, file_stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_without_file_name_is_an_error() {
        let it = try_create_rolling_file_appender("/");
        assert!(it.is_err());
        let report = it.err().unwrap();
        assert!(report.to_string().contains("Can't access log file path"));
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`AnsiOutputError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Errors from the fallible parts of this crate. The fire and forget `output*` functions
/// never return these, they log them instead.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AnsiOutputError {
    /// Writing or flushing the output device failed.
    #[error("Failed to write to the output device")]
    #[diagnostic(
        code(ansi_output::io::write),
        help("The other end of a pipe may have been closed")
    )]
    Write(#[source] std::io::Error),

    /// Reading a line from the input device failed.
    #[error("Failed to read a line from the input device")]
    #[diagnostic(code(ansi_output::io::read))]
    Read(#[source] std::io::Error),

    #[error("Can't access log file path {path}")]
    #[diagnostic(
        code(ansi_output::log::file_path),
        help("It might not exist, or you don't have the required permissions")
    )]
    LogFilePath { path: String },
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # ansi_output
//!
//! Print an ordered list of text values to stdout or stderr, with per-value styling
//! (foreground & background color, bold / dim / underline / blink / invert / hidden),
//! and explicit line breaks. When the destination is not an interactive terminal (it is
//! piped, redirected to a file, or `NO_COLOR` is set) the same call degrades to plain
//! text, with no escape bytes at all.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Usage](#usage)
//! - [Dense vs sparse styling](#dense-vs-sparse-styling)
//! - [Line breaks](#line-breaks)
//! - [Testing with a fake terminal](#testing-with-a-fake-terminal)
//!
//! <!-- /TOC -->
//!
//! # Usage
//!
//! ```no_run
//! use ansi_output::{Destination, StyleDescriptor, TextFormat, output};
//!
//! // Label and value on one line, with a single trailing line break.
//! output(
//!     ["status: ", "OK"],
//!     vec![StyleDescriptor::gray(), StyleDescriptor::green_with(TextFormat::Bold)],
//!     Destination::Standard,
//! );
//!
//! // Sugar for the common cases.
//! ansi_output::output!("plain", " text");
//! ansi_output::output!(to: Destination::Error; "to stderr");
//! ```
//!
//! # Dense vs sparse styling
//!
//! A dense style ([`OutputStyle::Dense`]) is a positional list of [`StyleDescriptor`]s,
//! one per value. It is padded with the default descriptor when short and truncated
//! when long.
//!
//! A sparse style ([`OutputStyle::Sparse`]) is a list of [`AppliedDescriptor`]s that
//! each target some value indices. Everything not targeted stays default. Out of range
//! indices are dropped. When two applied descriptors target the same index, the one
//! that comes later in the list wins.
//!
//! # Line breaks
//!
//! A `\n` is written after every value whose descriptor has `ends_line` set, and the
//! whole block always ends with exactly one `\n`.
//!
//! # Testing with a fake terminal
//!
//! [`OutputDevice`] is the injectable seam. Use [`OutputDeviceExt::new_mock`] to get a
//! device with a fixed interactivity and a [`StdoutMock`] to inspect what was written.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod ansi;
pub mod common;
pub mod descriptor;
pub mod log;
pub mod output;
pub mod render;
pub mod terminal_io;
pub mod test_fixtures;

// Re-export flat public API.
pub use ansi::*;
pub use common::*;
pub use descriptor::*;
pub use log::*;
pub use output::*;
pub use render::*;
pub use terminal_io::*;
pub use test_fixtures::*;

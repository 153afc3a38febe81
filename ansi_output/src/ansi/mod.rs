// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The static catalog of colors and text formats, and the SGR (Select Graphic
//! Rendition) escape sequences they map to.
//!
//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>

// Attach sources.
mod ansi_color;
mod sgr_code;
mod text_format;

// Re-export.
pub use ansi_color::*;
pub use sgr_code::*;
pub use text_format::*;

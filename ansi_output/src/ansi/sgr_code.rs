// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

/// Control Sequence Introducer: `ESC [`.
pub const CSI: &str = "\x1b[";
/// Terminates every SGR sequence.
pub const SGR: &str = "m";
/// Erase the whole current line. The cursor does not move, so it is always followed
/// by [`CARRIAGE_RETURN`].
pub const CLEAR_LINE: &str = "\x1b[2K";
pub const CARRIAGE_RETURN: &str = "\r";
pub const LINE_FEED: &str = "\n";

/// SGR Reset sequence bytes.
///
/// Resets all text attributes (color, bold, underline, etc.) to default.
pub const SGR_RESET_BYTES: &[u8] = b"\x1b[0m";

/// One SGR escape sequence, `ESC [ <params> m`. Use the [Display] implementation to get
/// the bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Underline,
    SlowBlink,
    Invert,
    Hidden,
    /// Raw SGR parameter of one of the 16 named colors, or 39 for the default color.
    ForegroundBasic(u8),
    /// Raw SGR parameter of one of the 16 named colors, or 49 for the default color.
    BackgroundBasic(u8),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
}

impl Display for SgrCode {
    /// SGR: set graphics mode command.
    /// More info:
    /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
    /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
    /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            SgrCode::Reset                    => write!(f, "{CSI}0{SGR}"),
            SgrCode::Bold                     => write!(f, "{CSI}1{SGR}"),
            SgrCode::Dim                      => write!(f, "{CSI}2{SGR}"),
            SgrCode::Underline                => write!(f, "{CSI}4{SGR}"),
            SgrCode::SlowBlink                => write!(f, "{CSI}5{SGR}"),
            SgrCode::Invert                   => write!(f, "{CSI}7{SGR}"),
            SgrCode::Hidden                   => write!(f, "{CSI}8{SGR}"),
            SgrCode::ForegroundBasic(param)
            | SgrCode::BackgroundBasic(param) => write!(f, "{CSI}{param}{SGR}"),
            SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}38;5;{index}{SGR}"),
            SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}48;5;{index}{SGR}"),
        }
    }
}

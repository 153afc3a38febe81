// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://www.ditig.com/256-colors-cheat-sheet>

use crate::SgrCode;
use strum_macros::EnumString;

/// A terminal color. The same value can be used as a text (foreground) color or as a
/// background color, see [`AnsiColor::sgr_code`].
///
/// The named colors parse from their `snake_case` names, eg: `"light_blue"`.
/// [`AnsiColor::Ansi256`] can't be parsed from a string.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum AnsiColor {
    /// The terminal's default color. SGR 39 (foreground) or 49 (background).
    #[default]
    Normal,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    LightGray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
    /// Index into the 256-color palette.
    #[strum(disabled)]
    Ansi256(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Foreground,
    Background,
}

impl AnsiColor {
    /// The SGR parameter of the color when used as a foreground color. The background
    /// parameter is always 10 more. Returns [None] for [`AnsiColor::Ansi256`].
    #[rustfmt::skip]
    #[must_use]
    pub const fn basic_fg_param(self) -> Option<u8> {
        match self {
            AnsiColor::Normal       => Some(39),
            AnsiColor::Black        => Some(30),
            AnsiColor::Red          => Some(31),
            AnsiColor::Green        => Some(32),
            AnsiColor::Yellow       => Some(33),
            AnsiColor::Blue         => Some(34),
            AnsiColor::Magenta      => Some(35),
            AnsiColor::Cyan         => Some(36),
            AnsiColor::LightGray    => Some(37),
            AnsiColor::DarkGray     => Some(90),
            AnsiColor::LightRed     => Some(91),
            AnsiColor::LightGreen   => Some(92),
            AnsiColor::LightYellow  => Some(93),
            AnsiColor::LightBlue    => Some(94),
            AnsiColor::LightMagenta => Some(95),
            AnsiColor::LightCyan    => Some(96),
            AnsiColor::White        => Some(97),
            AnsiColor::Ansi256(_)   => None,
        }
    }

    #[must_use]
    pub const fn sgr_code(self, color_kind: ColorKind) -> SgrCode {
        match (self, self.basic_fg_param(), color_kind) {
            (AnsiColor::Ansi256(index), _, ColorKind::Foreground) => {
                SgrCode::ForegroundAnsi256(index)
            }
            (AnsiColor::Ansi256(index), _, ColorKind::Background) => {
                SgrCode::BackgroundAnsi256(index)
            }
            (_, Some(param), ColorKind::Foreground) => SgrCode::ForegroundBasic(param),
            (_, Some(param), ColorKind::Background) => {
                SgrCode::BackgroundBasic(param + 10)
            }
            // Only `Ansi256` has no basic param, and it is matched above.
            (_, None, ColorKind::Foreground) => SgrCode::ForegroundBasic(39),
            (_, None, ColorKind::Background) => SgrCode::BackgroundBasic(49),
        }
    }

    #[must_use]
    pub const fn fg_sgr_code(self) -> SgrCode { self.sgr_code(ColorKind::Foreground) }

    #[must_use]
    pub const fn bg_sgr_code(self) -> SgrCode { self.sgr_code(ColorKind::Background) }

    #[must_use]
    pub const fn is_normal(self) -> bool { matches!(self, AnsiColor::Normal) }
}

impl From<u8> for AnsiColor {
    fn from(index: u8) -> Self { AnsiColor::Ansi256(index) }
}

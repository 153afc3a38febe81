// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::SgrCode;
use std::{fmt::{self, Debug, Formatter},
          ops::{Add, AddAssign}};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// A text attribute. When several are applied to one value, their escape sequences are
/// emitted in the declaration order of this enum, no matter what order they were given
/// in.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount,
)]
#[strum(serialize_all = "snake_case")]
pub enum TextFormat {
    Bold,
    Dim,
    Underline,
    Blink,
    Invert,
    Hidden,
}

impl TextFormat {
    #[rustfmt::skip]
    #[must_use]
    pub const fn sgr_code(self) -> SgrCode {
        match self {
            TextFormat::Bold      => SgrCode::Bold,
            TextFormat::Dim       => SgrCode::Dim,
            TextFormat::Underline => SgrCode::Underline,
            TextFormat::Blink     => SgrCode::SlowBlink,
            TextFormat::Invert    => SgrCode::Invert,
            TextFormat::Hidden    => SgrCode::Hidden,
        }
    }

    const fn bit(self) -> u8 { 1 << self as u8 }
}

/// A set of [`TextFormat`]s. Adding the same format twice has no effect, and
/// [`TextFormats::iter`] always yields in declaration order.
///
/// ```
/// use ansi_output::{TextFormat, TextFormats};
///
/// let formats = TextFormat::Underline + TextFormat::Bold;
/// let ordered: Vec<_> = formats.iter().collect();
/// assert_eq!(ordered, vec![TextFormat::Bold, TextFormat::Underline]);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextFormats(u8);

impl TextFormats {
    #[must_use]
    pub const fn none() -> Self { Self(0) }

    #[must_use]
    pub const fn is_none(&self) -> bool { self.0 == 0 }

    #[must_use]
    pub const fn contains(&self, format: TextFormat) -> bool {
        self.0 & format.bit() != 0
    }

    pub fn insert(&mut self, format: TextFormat) { self.0 |= format.bit(); }

    #[must_use]
    pub fn len(&self) -> usize { self.0.count_ones() as usize }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.is_none() }

    pub fn iter(&self) -> impl Iterator<Item = TextFormat> + '_ {
        TextFormat::iter().filter(|format| self.contains(*format))
    }
}

impl Debug for TextFormats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "none");
        }
        let mut first = true;
        for format in self.iter() {
            if !first {
                write!(f, " + ")?;
            }
            write!(f, "{format:?}")?;
            first = false;
        }
        Ok(())
    }
}

impl From<TextFormat> for TextFormats {
    fn from(format: TextFormat) -> Self { Self(format.bit()) }
}

impl<const N: usize> From<[TextFormat; N]> for TextFormats {
    fn from(formats: [TextFormat; N]) -> Self { formats.into_iter().collect() }
}

impl From<&[TextFormat]> for TextFormats {
    fn from(formats: &[TextFormat]) -> Self { formats.iter().copied().collect() }
}

impl From<Vec<TextFormat>> for TextFormats {
    fn from(formats: Vec<TextFormat>) -> Self { formats.into_iter().collect() }
}

impl FromIterator<TextFormat> for TextFormats {
    fn from_iter<I: IntoIterator<Item = TextFormat>>(iter: I) -> Self {
        let mut it = Self::none();
        for format in iter {
            it.insert(format);
        }
        it
    }
}

impl Add<TextFormat> for TextFormat {
    type Output = TextFormats;
    fn add(self, rhs: TextFormat) -> Self::Output { TextFormats::from([self, rhs]) }
}

impl Add<TextFormat> for TextFormats {
    type Output = TextFormats;
    fn add(mut self, rhs: TextFormat) -> Self::Output {
        self.insert(rhs);
        self
    }
}

impl Add<TextFormats> for TextFormats {
    type Output = TextFormats;
    fn add(self, rhs: TextFormats) -> Self::Output { Self(self.0 | rhs.0) }
}

impl AddAssign<TextFormat> for TextFormats {
    fn add_assign(&mut self, rhs: TextFormat) { self.insert(rhs); }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiColor, AppliedDescriptor, TextFormat, TextFormats};

/// How one output value is styled: text color, background color, a set of text
/// formats, and whether a line break follows the value.
///
/// [`StyleDescriptor::new`] is the only constructor that does any work. The named
/// presets ([`StyleDescriptor::red`], [`StyleDescriptor::green_ends_line_with`], etc.)
/// and the `with_*` modifiers are sugar over it.
///
/// ```
/// use ansi_output::{AnsiColor, StyleDescriptor, TextFormat};
///
/// let a = StyleDescriptor::red_ends_line_with(TextFormat::Bold);
/// let b = StyleDescriptor::new(AnsiColor::Red, AnsiColor::Normal, TextFormat::Bold, true);
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleDescriptor {
    pub color: AnsiColor,
    pub background: AnsiColor,
    pub formats: TextFormats,
    pub ends_line: bool,
}

impl StyleDescriptor {
    #[must_use]
    pub fn new(
        color: AnsiColor,
        background: AnsiColor,
        formats: impl Into<TextFormats>,
        ends_line: bool,
    ) -> Self {
        Self {
            color,
            background,
            formats: formats.into(),
            ends_line,
        }
    }

    /// Normal colors, no formats, followed by a line break.
    #[must_use]
    pub fn ends_line() -> Self { Self::normal_ends_line() }

    #[must_use]
    pub fn custom(
        color: AnsiColor,
        background: AnsiColor,
        formats: impl Into<TextFormats>,
    ) -> Self {
        Self::new(color, background, formats, false)
    }

    #[must_use]
    pub fn custom_ends_line(
        color: AnsiColor,
        background: AnsiColor,
        formats: impl Into<TextFormats>,
    ) -> Self {
        Self::new(color, background, formats, true)
    }

    #[must_use]
    pub fn with_color(mut self, color: AnsiColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: AnsiColor) -> Self {
        self.background = background;
        self
    }

    /// Replaces the whole format set.
    #[must_use]
    pub fn with_formats(mut self, formats: impl Into<TextFormats>) -> Self {
        self.formats = formats.into();
        self
    }

    /// Adds one format to the existing set.
    #[must_use]
    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.formats += format;
        self
    }

    #[must_use]
    pub fn ending_line(mut self, ends_line: bool) -> Self {
        self.ends_line = ends_line;
        self
    }

    /// True when rendering this descriptor must not produce any escape bytes: both
    /// colors are [`AnsiColor::Normal`] and there are no formats. `ends_line` does not
    /// matter here.
    #[must_use]
    pub fn has_no_styling(&self) -> bool {
        self.color.is_normal() && self.background.is_normal() && self.formats.is_none()
    }

    /// Target this descriptor at the given value indices, for use in a sparse style.
    #[must_use]
    pub fn at(self, indices: impl IntoIterator<Item = isize>) -> AppliedDescriptor {
        AppliedDescriptor::new(self, indices)
    }
}

/// Generates the named presets for [`StyleDescriptor`] and [`AppliedDescriptor`]. For a
/// preset named `red` this generates:
/// - `StyleDescriptor::red()`, `red_ends_line()`, `red_with(formats)`,
///   `red_ends_line_with(formats)`.
/// - `AppliedDescriptor::red_at(indices)`, `red_ends_line_at(indices)`.
///
/// Paste docs: <https://github.com/dtolnay/paste>
macro_rules! generate_presets {
    ($($name:ident => $color:expr),* $(,)?) => {
        paste::paste! {
            impl StyleDescriptor {
                $(
                    #[must_use]
                    pub fn $name() -> Self {
                        Self::new($color, AnsiColor::Normal, TextFormats::none(), false)
                    }

                    #[must_use]
                    pub fn [<$name _ends_line>]() -> Self {
                        Self::new($color, AnsiColor::Normal, TextFormats::none(), true)
                    }

                    #[must_use]
                    pub fn [<$name _with>](formats: impl Into<TextFormats>) -> Self {
                        Self::new($color, AnsiColor::Normal, formats, false)
                    }

                    #[must_use]
                    pub fn [<$name _ends_line_with>](
                        formats: impl Into<TextFormats>,
                    ) -> Self {
                        Self::new($color, AnsiColor::Normal, formats, true)
                    }
                )*
            }

            impl AppliedDescriptor {
                $(
                    #[must_use]
                    pub fn [<$name _at>](indices: impl IntoIterator<Item = isize>) -> Self {
                        StyleDescriptor::$name().at(indices)
                    }

                    #[must_use]
                    pub fn [<$name _ends_line_at>](
                        indices: impl IntoIterator<Item = isize>,
                    ) -> Self {
                        StyleDescriptor::[<$name _ends_line>]().at(indices)
                    }
                )*
            }
        }
    };
}

generate_presets! {
    normal => AnsiColor::Normal,
    black => AnsiColor::Black,
    red => AnsiColor::Red,
    green => AnsiColor::Green,
    yellow => AnsiColor::Yellow,
    blue => AnsiColor::Blue,
    magenta => AnsiColor::Magenta,
    cyan => AnsiColor::Cyan,
    gray => AnsiColor::LightGray,
    white => AnsiColor::White,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normal_is_default() {
        assert_eq!(StyleDescriptor::normal(), StyleDescriptor::default());
        assert!(StyleDescriptor::default().has_no_styling());
        assert!(!StyleDescriptor::default().ends_line);
    }

    #[test]
    fn ends_line_only_changes_the_flag() {
        let it = StyleDescriptor::ends_line();
        assert!(it.ends_line);
        assert!(it.has_no_styling());
        assert_eq!(it, StyleDescriptor::default().ending_line(true));
    }

    #[test]
    fn presets_are_sugar_over_new() {
        assert_eq!(
            StyleDescriptor::gray_ends_line(),
            StyleDescriptor::new(
                AnsiColor::LightGray,
                AnsiColor::Normal,
                TextFormats::none(),
                true
            )
        );
        assert_eq!(
            StyleDescriptor::cyan_with(TextFormat::Underline + TextFormat::Dim),
            StyleDescriptor::new(
                AnsiColor::Cyan,
                AnsiColor::Normal,
                [TextFormat::Dim, TextFormat::Underline],
                false
            )
        );
    }

    #[test]
    fn builder_modifiers() {
        let it = StyleDescriptor::default()
            .with_color(AnsiColor::Ansi256(208))
            .with_background(AnsiColor::Blue)
            .with_format(TextFormat::Bold)
            .with_format(TextFormat::Invert);
        assert_eq!(it.color, AnsiColor::Ansi256(208));
        assert_eq!(it.background, AnsiColor::Blue);
        assert_eq!(it.formats, TextFormat::Bold + TextFormat::Invert);

        let it = it.with_formats(TextFormats::none());
        assert!(it.formats.is_none());
        assert!(!it.has_no_styling());
    }

    #[test]
    fn formats_alone_count_as_styling() {
        assert!(!StyleDescriptor::normal_with(TextFormat::Hidden).has_no_styling());
        assert!(
            !StyleDescriptor::custom(AnsiColor::Normal, AnsiColor::Red, TextFormats::none())
                .has_no_styling()
        );
    }

    #[test]
    fn applied_presets() {
        let it = AppliedDescriptor::red_at([0, 2]);
        assert_eq!(it.descriptor, StyleDescriptor::red());
        assert_eq!(it.target_indices.as_slice(), &[0, 2]);

        let it = AppliedDescriptor::white_ends_line_at([1]);
        assert_eq!(it.descriptor, StyleDescriptor::white_ends_line());
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SgrCode, StyleDescriptor};
use std::fmt::Write;

/// Render one value with its descriptor.
///
/// - Not interactive: the value is returned unchanged. Only `ends_line` of the
///   descriptor matters, and that is handled by [`crate::assemble`].
/// - Interactive, and the descriptor [has no
///   styling](StyleDescriptor::has_no_styling): the value is returned unchanged, so
///   normal output is byte for byte identical to plain output.
/// - Otherwise: foreground code, background code, one code per format (in
///   [`crate::TextFormat`] declaration order), the value, then [`SgrCode::Reset`].
#[must_use]
pub fn render(value: &str, descriptor: &StyleDescriptor, interactive: bool) -> String {
    let mut acc = String::with_capacity(value.len());
    render_into(&mut acc, value, descriptor, interactive);
    acc
}

/// Same as [`render`] but appends to `acc` instead of allocating.
pub fn render_into(
    acc: &mut String,
    value: &str,
    descriptor: &StyleDescriptor,
    interactive: bool,
) {
    if !interactive || descriptor.has_no_styling() {
        acc.push_str(value);
        return;
    }

    // Writing to a String can't fail.
    let _unused = write!(
        acc,
        "{}{}",
        descriptor.color.fg_sgr_code(),
        descriptor.background.bg_sgr_code()
    );
    for format in descriptor.formats.iter() {
        let _unused = write!(acc, "{}", format.sgr_code());
    }
    acc.push_str(value);
    let _unused = write!(acc, "{}", SgrCode::Reset);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnsiColor, TextFormat};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("hello")]
    #[test_case("")]
    #[test_case("multi\nline")]
    fn default_descriptor_is_passthrough(value: &str) {
        let descriptor = StyleDescriptor::default();
        assert_eq!(render(value, &descriptor, true), value);
        assert_eq!(render(value, &descriptor, false), value);
    }

    #[test]
    fn ends_line_alone_is_passthrough() {
        assert_eq!(render("x", &StyleDescriptor::ends_line(), true), "x");
    }

    #[test]
    fn non_interactive_ignores_styling() {
        let descriptor = StyleDescriptor::custom(
            AnsiColor::Red,
            AnsiColor::White,
            TextFormat::Bold + TextFormat::Blink,
        );
        assert_eq!(render("x", &descriptor, false), "x");
    }

    #[test]
    fn red_foreground() {
        assert_eq!(
            render("x", &StyleDescriptor::red(), true),
            "\x1b[31m\x1b[49mx\x1b[0m"
        );
    }

    #[test]
    fn full_descriptor_code_order() {
        let descriptor = StyleDescriptor::custom(
            AnsiColor::Ansi256(208),
            AnsiColor::DarkGray,
            TextFormat::Hidden + TextFormat::Bold + TextFormat::Underline,
        );
        assert_eq!(
            render("v", &descriptor, true),
            "\x1b[38;5;208m\x1b[100m\x1b[1m\x1b[4m\x1b[8mv\x1b[0m"
        );
    }

    #[test]
    fn format_only_emits_normal_colors() {
        let descriptor = StyleDescriptor::normal_with(TextFormat::Dim);
        assert_eq!(render("d", &descriptor, true), "\x1b[39m\x1b[49m\x1b[2md\x1b[0m");
    }

    #[test]
    fn render_into_appends() {
        let mut acc = String::from("> ");
        render_into(&mut acc, "a", &StyleDescriptor::default(), true);
        render_into(&mut acc, "b", &StyleDescriptor::green(), false);
        assert_eq!(acc, "> ab");
    }
}

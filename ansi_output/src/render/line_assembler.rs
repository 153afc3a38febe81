// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::LINE_FEED;

/// Join rendered values into one block of output. A [`LINE_FEED`] goes after every
/// value whose flag is set. If the last flag is not set, one more [`LINE_FEED`] is
/// added, so a non empty block always ends with exactly one line break.
///
/// Values and flags are paired by position. Extra entries in either slice are ignored.
/// No pairs produce an empty string.
///
/// ```
/// use ansi_output::assemble;
///
/// assert_eq!(assemble(&["A", "B", "C"], &[true, false, false]), "A\nBC\n");
/// assert_eq!(assemble(&["A", "B"], &[false, true]), "AB\n");
/// assert_eq!(assemble::<&str>(&[], &[]), "");
/// ```
#[must_use]
pub fn assemble<S: AsRef<str>>(rendered: &[S], ends_line_flags: &[bool]) -> String {
    let capacity = rendered.iter().map(|it| it.as_ref().len() + 1).sum::<usize>();
    let mut acc = String::with_capacity(capacity);
    let mut last_ends_line = None;

    for (value, &ends_line) in rendered.iter().zip(ends_line_flags) {
        acc.push_str(value.as_ref());
        if ends_line {
            acc.push_str(LINE_FEED);
        }
        last_ends_line = Some(ends_line);
    }

    if last_ends_line == Some(false) {
        acc.push_str(LINE_FEED);
    }

    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(&["OK"], &[false], "OK\n")]
    #[test_case(&["OK"], &[true], "OK\n")]
    #[test_case(&["A", "B", "C"], &[true, false, false], "A\nBC\n")]
    #[test_case(&["a", "b"], &[true, true], "a\nb\n")]
    #[test_case(&["", ""], &[false, false], "\n")]
    #[test_case(&["label: ", "value"], &[false, false], "label: value\n")]
    fn line_breaks(rendered: &[&str], flags: &[bool], expected: &str) {
        assert_eq!(assemble(rendered, flags), expected);
    }

    #[test]
    fn empty_is_empty() {
        assert_eq!(assemble::<String>(&[], &[]), "");
        assert_eq!(assemble(&["dangling"], &[]), "");
    }

    #[test]
    fn always_ends_with_line_feed() {
        let rendered = ["x", "y", "z"];
        for mask in 0..8_u8 {
            let flags = [mask & 1 != 0, mask & 2 != 0, mask & 4 != 0];
            let it = assemble(&rendered, &flags);
            assert!(it.ends_with('\n'), "{it:?}");
            assert!(!it.ends_with("\n\n"), "{it:?}");
        }
    }
}

// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::StdMutex;
use std::{io::{Result, Write},
          sync::{Arc, PoisonError,
                 atomic::{AtomicUsize, Ordering}}};
use strip_ansi_escapes::strip;

/// You can safely clone this struct, since it only contains [Arc]s. The inner `buffer`
/// will not be cloned, just the [Arc] will be cloned.
///
/// The main constructors are:
/// - [`StdoutMock::default`]
/// - [`StdoutMock::new`]
/// - [`super::OutputDeviceExt::new_mock()`]
#[derive(Clone, Default, Debug)]
pub struct StdoutMock {
    pub buffer: Arc<StdMutex<Vec<u8>>>,
    flush_count: Arc<AtomicUsize>,
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}

impl StdoutMock {
    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.get_copy_of_buffer()).into_owned()
    }

    /// The buffer with every escape sequence removed. Control bytes such as `\r` are
    /// removed too, including any that were part of a written value, so compare it only
    /// against plain output whose values contain no control bytes.
    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let buffer_data = strip(self.get_copy_of_buffer());
        String::from_utf8_lossy(&buffer_data).into_owned()
    }

    /// How many times [`Write::flush`] was called on this mock or any of its clones.
    #[must_use]
    pub fn flush_count(&self) -> usize { self.flush_count.load(Ordering::Acquire) }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_count.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_strip_ansi() {
        let mut stdout_mock = StdoutMock::default();
        // Points to the same inner value as `stdout_mock`.
        let stdout_mock_clone = stdout_mock.clone();

        let normal_text = "hello world";

        stdout_mock.write_all(normal_text.as_bytes()).unwrap();
        stdout_mock.flush().unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), normal_text);
        assert_eq!(stdout_mock_clone.get_copy_of_buffer_as_string(), normal_text);
        assert_eq!(stdout_mock_clone.flush_count(), 1);
    }

    #[test]
    fn strip_ansi() {
        let mut stdout_mock = StdoutMock::default();
        let stdout_mock_clone = stdout_mock.clone();

        let normal_text = "hello world";
        let red_text = format!("\x1b[31m\x1b[49m{normal_text}\x1b[0m");

        stdout_mock.write_all(red_text.as_bytes()).unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), red_text);
        assert_eq!(
            stdout_mock_clone.get_copy_of_buffer_as_string_strip_ansi(),
            normal_text
        );
        assert_eq!(stdout_mock.flush_count(), 0);
    }

    #[test]
    fn strip_removes_clear_line_and_carriage_return() {
        let mut stdout_mock = StdoutMock::new();
        stdout_mock.write_all(b"\x1b[2K\rabc\n").unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "abc\n");
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b[2K\rabc\n");
        assert!(!stdout_mock.is_empty());
    }
}

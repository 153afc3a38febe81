// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiOutputError, CARRIAGE_RETURN, CLEAR_LINE, CommonResult, DEFAULT_WIDTH,
            Destination, LINE_FEED, SafeRawTerminal, SendRawTerminal, StdMutex,
            TTYResult, detect_interactivity, get_terminal_width};
use std::{fmt::{Debug, Formatter},
          sync::{Arc, MutexGuard, PoisonError}};

pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// Macro to simplify locking and getting a mutable reference to the output device.
/// Don't call this again in the same scope, it will deadlock! A safe approach is
/// to use this macro in a separate block scope.
///
/// Usage example:
/// ```
/// use ansi_output::{lock_output_device_as_mut, OutputDevice, LockedOutputDevice};
/// let device = OutputDevice::new_stdout();
/// { // Start a new block scope to avoid deadlock.
///     let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = mut_ref.write_all(b"Hello, world!\n");
/// } // The lock is released here.
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// How an [`OutputDevice`] answers "is this an interactive terminal right now?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractivityProbe {
    /// Probe the real stdout on every call.
    Stdout,
    /// Probe the real stderr on every call.
    Stderr,
    /// Always give the same answer. Used by mocks.
    Fixed(TTYResult),
}

/// An output stream plus the way to find out whether it is interactive.
/// - It is safe to clone.
/// - To write to it, see [`Self::lock()`], the [`lock_output_device_as_mut`] macro, or
///   [`Self::try_write_and_flush()`].
#[derive(Clone)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub probe: InteractivityProbe,
    pub is_mock: bool,
}

impl Debug for OutputDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputDevice")
            .field("probe", &self.probe)
            .field("is_mock", &self.is_mock)
            .finish_non_exhaustive()
    }
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl From<Destination> for OutputDevice {
    fn from(destination: Destination) -> Self { destination.output_device() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            probe: InteractivityProbe::Stdout,
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stderr())),
            probe: InteractivityProbe::Stderr,
            is_mock: false,
        }
    }

    /// Runs the probe. This is not cached, a real stream is checked every time.
    #[must_use]
    pub fn is_interactive(&self) -> TTYResult {
        match self.probe {
            InteractivityProbe::Stdout => detect_interactivity(Destination::Standard),
            InteractivityProbe::Stderr => detect_interactivity(Destination::Error),
            InteractivityProbe::Fixed(it) => it,
        }
    }

    /// Mocks always report [`DEFAULT_WIDTH`] so that tests don't depend on the terminal
    /// they happen to run in.
    #[must_use]
    pub fn terminal_width(&self) -> u16 {
        if self.is_mock {
            DEFAULT_WIDTH
        } else {
            get_terminal_width()
        }
    }
}

impl OutputDevice {
    /// Locks the output device for writing. To use it, use the following code:
    ///
    /// ```
    /// use ansi_output::{OutputDevice, LockedOutputDevice};
    ///
    /// let device = OutputDevice::new_stdout();
    /// let mut_ref: LockedOutputDevice<'_> = &mut *device.lock();
    /// let _ = mut_ref.write_all(b"Hello, world!\n");
    /// ```
    ///
    /// A thread that panicked while holding the lock leaves the mutex poisoned. The
    /// stream itself is still usable, so the poison is ignored.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write all the bytes, then flush, while holding the lock once.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiOutputError::Write`] if the write or the flush fails.
    pub fn try_write_and_flush(&self, bytes: &[u8]) -> CommonResult<()> {
        let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(self);
        mut_ref.write_all(bytes).map_err(AnsiOutputError::Write)?;
        mut_ref.flush().map_err(AnsiOutputError::Write)?;
        Ok(())
    }

    /// Same as [`Self::try_write_and_flush`], except that the error is logged and
    /// dropped.
    pub fn write_and_flush(&self, bytes: &[u8]) {
        if let Err(report) = self.try_write_and_flush(bytes) {
            tracing::warn!(
                message = "Failed to write to output device",
                device = ?self,
                error = ?report
            );
        }
    }

    /// Erase the whole current line and move the cursor to column zero. This is written
    /// even when the device is not interactive.
    pub fn clear_line(&self) {
        self.write_and_flush(format!("{CLEAR_LINE}{CARRIAGE_RETURN}").as_bytes());
    }

    /// Write a bare line break.
    pub fn end_line(&self) { self.write_and_flush(LINE_FEED.as_bytes()); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputDeviceExt;
    use pretty_assertions::assert_eq;

    #[test]
    fn stdout_output_device() {
        let output_device = OutputDevice::new_stdout();
        let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(output_device);
        drop(mut_ref.write_all(b""));
        assert!(!output_device.is_mock);
        assert_eq!(output_device.probe, InteractivityProbe::Stdout);
    }

    #[test]
    fn stderr_output_device() {
        let device = OutputDevice::from(Destination::Error);
        assert!(!device.is_mock);
        assert_eq!(device.probe, InteractivityProbe::Stderr);
    }

    #[test]
    fn fixed_probe() {
        let (device, _) = OutputDevice::new_mock(TTYResult::IsInteractive);
        assert!(device.is_interactive().is_interactive());
        assert_eq!(device.terminal_width(), DEFAULT_WIDTH);
        let (device, _) = OutputDevice::new_mock(TTYResult::IsNotInteractive);
        assert!(!device.is_interactive().is_interactive());
    }

    #[test]
    fn clear_line_and_end_line_always_write() {
        let (device, stdout_mock) = OutputDevice::new_mock_non_interactive();
        device.clear_line();
        device.end_line();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b[2K\r\n");
        assert_eq!(stdout_mock.flush_count(), 2);
    }

    #[test]
    fn write_and_flush() {
        let (device, stdout_mock) = OutputDevice::new_mock_interactive();
        device.try_write_and_flush(b"abc").unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "abc");
        assert_eq!(stdout_mock.flush_count(), 1);
    }

    #[test]
    fn debug_does_not_show_resource() {
        let (device, _) = OutputDevice::new_mock_interactive();
        let it = format!("{device:?}");
        assert!(it.contains("Fixed(IsInteractive)"), "{it}");
        assert!(it.contains("is_mock: true"), "{it}");
    }
}

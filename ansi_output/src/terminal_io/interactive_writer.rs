// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, OutputDevice};

/// A writer for a device that was interactive when this writer was created. Only this
/// path is allowed to emit escape sequences.
#[derive(Debug, Clone)]
pub struct InteractiveWriter {
    device: OutputDevice,
    width: u16,
}

impl InteractiveWriter {
    /// Probes `device` now. Returns [None] if it is not interactive. Otherwise the
    /// terminal width is read once, falling back to [`crate::DEFAULT_WIDTH`].
    #[must_use]
    pub fn try_new(device: &OutputDevice) -> Option<Self> {
        if !device.is_interactive().is_interactive() {
            return None;
        }
        Some(Self {
            device: device.clone(),
            width: device.terminal_width(),
        })
    }

    /// Columns of the terminal at the time this writer was created. Nothing in the
    /// rendering path uses this, it is here for callers that lay out their own text.
    #[must_use]
    pub fn width(&self) -> u16 { self.width }

    #[must_use]
    pub fn device(&self) -> &OutputDevice { &self.device }
}

/// The outcome of probing a device for one call: either the interactive path, or the
/// plain text path that never emits escape bytes.
#[derive(Debug, Clone)]
pub enum SelectedWriter {
    Interactive(InteractiveWriter),
    Plain(OutputDevice),
}

/// Probe `device` and pick the path for this call.
#[must_use]
pub fn select_writer(device: &OutputDevice) -> SelectedWriter {
    match InteractiveWriter::try_new(device) {
        Some(writer) => SelectedWriter::Interactive(writer),
        None => SelectedWriter::Plain(device.clone()),
    }
}

impl SelectedWriter {
    #[must_use]
    pub fn is_interactive(&self) -> bool { matches!(self, SelectedWriter::Interactive(_)) }

    #[must_use]
    pub fn device(&self) -> &OutputDevice {
        match self {
            SelectedWriter::Interactive(writer) => writer.device(),
            SelectedWriter::Plain(device) => device,
        }
    }

    /// Write and flush in one go.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnsiOutputError::Write`] if the write or flush fails.
    pub fn try_write_and_flush(&self, bytes: &[u8]) -> CommonResult<()> {
        self.device().try_write_and_flush(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_WIDTH, Destination, OutputDeviceExt, StylingPolicy,
                global_styling_policy};
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    #[test]
    fn interactive_device_gets_interactive_writer() {
        let (device, _) = OutputDevice::new_mock_interactive();
        let writer = InteractiveWriter::try_new(&device).unwrap();
        assert_eq!(writer.width(), DEFAULT_WIDTH);
        assert!(select_writer(&device).is_interactive());
    }

    #[test]
    fn non_interactive_device_gets_plain_writer() {
        let (device, _) = OutputDevice::new_mock_non_interactive();
        assert!(InteractiveWriter::try_new(&device).is_none());
        assert!(!select_writer(&device).is_interactive());
    }

    #[test]
    fn selected_writer_writes_to_device() {
        let (device, stdout_mock) = OutputDevice::new_mock_non_interactive();
        select_writer(&device).try_write_and_flush(b"plain\n").unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "plain\n");
        assert_eq!(stdout_mock.flush_count(), 1);
    }

    /// A real device is checked again on every call, so flipping the policy between two
    /// calls on the same device flips the selected path.
    #[test]
    #[serial]
    fn real_device_follows_styling_policy_on_every_call() {
        for destination in [Destination::Standard, Destination::Error] {
            let device = destination.output_device();

            global_styling_policy::set_override(StylingPolicy::Never);
            assert!(!select_writer(&device).is_interactive());
            assert!(InteractiveWriter::try_new(&device).is_none());

            global_styling_policy::set_override(StylingPolicy::Always);
            assert!(select_writer(&device).is_interactive());
            assert!(select_writer(&destination.output_device()).is_interactive());

            global_styling_policy::set_override(StylingPolicy::Never);
            assert!(!select_writer(&device).is_interactive());
        }
        global_styling_policy::clear_override();
    }
}

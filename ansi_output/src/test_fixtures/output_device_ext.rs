// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InteractivityProbe, OutputDevice, StdMutex, StdoutMock, TTYResult};
use std::sync::Arc;

pub trait OutputDeviceExt {
    /// A device that writes into the returned [`StdoutMock`] and always reports the
    /// given interactivity.
    fn new_mock(tty_result: TTYResult) -> (OutputDevice, StdoutMock);

    fn new_mock_interactive() -> (OutputDevice, StdoutMock) {
        Self::new_mock(TTYResult::IsInteractive)
    }

    fn new_mock_non_interactive() -> (OutputDevice, StdoutMock) {
        Self::new_mock(TTYResult::IsNotInteractive)
    }
}

impl OutputDeviceExt for OutputDevice {
    fn new_mock(tty_result: TTYResult) -> (OutputDevice, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let this = OutputDevice {
            resource: Arc::new(StdMutex::new(stdout_mock.clone())),
            probe: InteractivityProbe::Fixed(tty_result),
            is_mock: true,
        };
        (this, stdout_mock)
    }
}

#[cfg(test)]
mod tests {
    use super::OutputDeviceExt;
    use crate::{InteractivityProbe, LockedOutputDevice, OutputDevice, TTYResult,
                lock_output_device_as_mut};
    use pretty_assertions::assert_eq;

    #[test]
    fn mock_output_device() {
        let (device, mock) = OutputDevice::new_mock_interactive();
        let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
        mut_ref.write_all(b"Hello, world!\n").ok();
        assert_eq!(
            mock.get_copy_of_buffer_as_string_strip_ansi(),
            "Hello, world!\n"
        );
    }

    #[test]
    fn mock_output_device_is_mock() {
        let (device, _) = OutputDevice::new_mock_non_interactive();
        assert!(device.is_mock);
        assert_eq!(
            device.probe,
            InteractivityProbe::Fixed(TTYResult::IsNotInteractive)
        );
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::OutputDevice;

/// Which process stream a request is written to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Destination {
    /// stdout.
    #[default]
    Standard,
    /// stderr.
    Error,
}

impl Destination {
    /// A fresh device for this stream. Its interactivity is probed on every write.
    #[must_use]
    pub fn output_device(self) -> OutputDevice {
        match self {
            Destination::Standard => OutputDevice::new_stdout(),
            Destination::Error => OutputDevice::new_stderr(),
        }
    }

    /// Erase the current line of this stream and move the cursor to column zero.
    pub fn clear_line(self) { self.output_device().clear_line(); }

    /// Write a bare line break to this stream.
    pub fn end_line(self) { self.output_device().end_line(); }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything that touches a real stream: destinations, the per call interactivity
//! probe, the writer selection, and the line input primitive.

// Attach sources.
mod destination;
mod input_device;
mod interactive_writer;
mod output_device;
mod styling_policy;
mod term;

// Re-export.
pub use destination::*;
pub use input_device::*;
pub use interactive_writer::*;
pub use output_device::*;
pub use styling_policy::*;
pub use term::*;

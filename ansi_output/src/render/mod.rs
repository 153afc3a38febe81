// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turn values plus resolved descriptors into the exact bytes to write.

// Attach sources.
mod line_assembler;
mod renderer;

// Re-export.
pub use line_assembler::*;
pub use renderer::*;

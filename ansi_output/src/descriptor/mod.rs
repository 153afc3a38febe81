// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Style metadata for output values, and the resolver that pairs a list of values with
//! exactly one [`StyleDescriptor`] each.

// Attach sources.
mod applied_descriptor;
mod descriptor_resolver;
mod style_descriptor;

// Re-export.
pub use applied_descriptor::*;
pub use descriptor_resolver::*;
pub use style_descriptor::*;

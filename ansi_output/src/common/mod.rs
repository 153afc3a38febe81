// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
mod common_result_and_error;
mod common_type_aliases;

// Re-export.
pub use common_result_and_error::*;
pub use common_type_aliases::*;

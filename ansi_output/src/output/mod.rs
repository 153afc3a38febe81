// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The public entry points. Every one of them funnels into [`try_output_to_device`].

// Attach sources.
mod output_api;
mod output_request;

// Re-export.
pub use output_api::*;
pub use output_request::*;

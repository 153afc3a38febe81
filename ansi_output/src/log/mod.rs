// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Optional tracing setup for applications built on this crate. The library itself
//! only emits events, it never installs a subscriber unless
//! [`try_initialize_logging_global`] is called.

// Attach sources.
mod rolling_file_appender_impl;
mod tracing_config;
mod tracing_init;

// Re-export.
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;

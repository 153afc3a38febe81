// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;
use std::sync::Arc;

/// Disambiguate `StdMutex` from other mutex types at the use site.
pub type StdMutex<T> = std::sync::Mutex<T>;

/// Type alias for a `Send`-able output device (stdout, stderr, [`crate::StdoutMock`]).
pub type SendRawTerminal = dyn std::io::Write + Send;
/// Type alias for a `Send`-able raw terminal wrapped in an `Arc<StdMutex>`.
pub type SafeRawTerminal = Arc<StdMutex<SendRawTerminal>>;

pub mod sizing {
    /// Applied descriptors rarely target more than a handful of values.
    pub const DEFAULT_VEC_STORAGE_SIZE: usize = 8;
}

/// Stack allocated vec that spills to the heap when it gets larger than
/// [`sizing::DEFAULT_VEC_STORAGE_SIZE`].
pub type InlineVec<T> = SmallVec<[T; sizing::DEFAULT_VEC_STORAGE_SIZE]>;

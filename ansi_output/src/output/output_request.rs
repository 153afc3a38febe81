// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AppliedDescriptor, OutputStyle, StyleDescriptor};

/// Values plus the style to print them with. Build it once, then pass it to
/// [`crate::output_request`] or [`crate::output_to_device`] as many times as needed.
///
/// ```
/// use ansi_output::{AppliedDescriptor, OutputRequest, render_request};
///
/// let request = OutputRequest::new(["x", "y"]).applying([AppliedDescriptor::red_at([0])]);
/// assert_eq!(render_request(&request, false), "xy\n");
/// assert_eq!(render_request(&request, true), "\x1b[31m\x1b[49mx\x1b[0my\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputRequest {
    pub values: Vec<String>,
    pub style: OutputStyle,
}

impl OutputRequest {
    /// All values styled as normal.
    #[must_use]
    pub fn new<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            style: OutputStyle::default(),
        }
    }

    /// Use a dense style: one descriptor per value, by position.
    #[must_use]
    pub fn described_by(
        mut self,
        descriptors: impl IntoIterator<Item = StyleDescriptor>,
    ) -> Self {
        self.style = OutputStyle::Dense(descriptors.into_iter().collect());
        self
    }

    /// Use a sparse style: descriptors targeted at value indices.
    #[must_use]
    pub fn applying(
        mut self,
        applied_descriptors: impl IntoIterator<Item = AppliedDescriptor>,
    ) -> Self {
        self.style = OutputStyle::Sparse(applied_descriptors.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: impl Into<OutputStyle>) -> Self {
        self.style = style.into();
        self
    }

    #[must_use]
    pub fn len(&self) -> usize { self.values.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Exactly one descriptor per value.
    #[must_use]
    pub fn resolved_descriptors(&self) -> Vec<StyleDescriptor> {
        self.style.resolve(self.values.len())
    }
}

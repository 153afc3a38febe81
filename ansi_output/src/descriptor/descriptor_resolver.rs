// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AppliedDescriptor, StyleDescriptor};

/// How a list of values is styled.
///
/// - [`OutputStyle::Dense`]: one descriptor per value, by position.
/// - [`OutputStyle::Sparse`]: descriptors that target specific value indices. Values
///   that aren't targeted keep the default descriptor.
///
/// The default is an empty dense list, which styles every value as normal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputStyle {
    Dense(Vec<StyleDescriptor>),
    Sparse(Vec<AppliedDescriptor>),
}

impl Default for OutputStyle {
    fn default() -> Self { OutputStyle::Dense(vec![]) }
}

impl OutputStyle {
    /// Produce exactly `value_count` descriptors, one per value. Malformed input is
    /// normalized, never rejected. See [`resolve_dense`] and [`resolve_sparse`].
    #[must_use]
    pub fn resolve(&self, value_count: usize) -> Vec<StyleDescriptor> {
        match self {
            OutputStyle::Dense(descriptors) => resolve_dense(descriptors, value_count),
            OutputStyle::Sparse(applied) => resolve_sparse(applied, value_count),
        }
    }

    #[must_use]
    pub fn is_sparse(&self) -> bool { matches!(self, OutputStyle::Sparse(_)) }

    /// True for a sparse style in which no applied descriptor targets any index in
    /// `0..value_count`. Always false for a dense style.
    #[must_use]
    pub fn is_sparse_without_valid_target(&self, value_count: usize) -> bool {
        match self {
            OutputStyle::Dense(_) => false,
            OutputStyle::Sparse(applied) => !applied
                .iter()
                .any(|applied_descriptor| applied_descriptor.has_valid_target(value_count)),
        }
    }
}

/// Pad with [`StyleDescriptor::default`] when `descriptors` is shorter than
/// `value_count`, truncate when it is longer.
#[must_use]
pub fn resolve_dense(
    descriptors: &[StyleDescriptor],
    value_count: usize,
) -> Vec<StyleDescriptor> {
    let mut acc = Vec::with_capacity(value_count);
    acc.extend(descriptors.iter().take(value_count).copied());
    acc.resize(value_count, StyleDescriptor::default());
    acc
}

/// Start with `value_count` default descriptors, then apply each
/// [`AppliedDescriptor`] in order to its valid target indices. When two applied
/// descriptors target the same index, the later one wins.
#[must_use]
pub fn resolve_sparse(
    applied: &[AppliedDescriptor],
    value_count: usize,
) -> Vec<StyleDescriptor> {
    let mut acc = vec![StyleDescriptor::default(); value_count];
    for applied_descriptor in applied {
        for index in applied_descriptor.valid_indices(value_count) {
            acc[index] = applied_descriptor.descriptor;
        }
    }
    acc
}

mod convert_to_output_style {
    use super::{AppliedDescriptor, OutputStyle, StyleDescriptor};

    impl From<Vec<StyleDescriptor>> for OutputStyle {
        fn from(descriptors: Vec<StyleDescriptor>) -> Self {
            OutputStyle::Dense(descriptors)
        }
    }

    impl<const N: usize> From<[StyleDescriptor; N]> for OutputStyle {
        fn from(descriptors: [StyleDescriptor; N]) -> Self {
            OutputStyle::Dense(descriptors.to_vec())
        }
    }

    impl From<StyleDescriptor> for OutputStyle {
        fn from(descriptor: StyleDescriptor) -> Self { OutputStyle::Dense(vec![descriptor]) }
    }

    impl From<Vec<AppliedDescriptor>> for OutputStyle {
        fn from(applied: Vec<AppliedDescriptor>) -> Self { OutputStyle::Sparse(applied) }
    }

    impl<const N: usize> From<[AppliedDescriptor; N]> for OutputStyle {
        fn from(applied: [AppliedDescriptor; N]) -> Self {
            OutputStyle::Sparse(applied.into_iter().collect())
        }
    }

    impl From<AppliedDescriptor> for OutputStyle {
        fn from(applied: AppliedDescriptor) -> Self { OutputStyle::Sparse(vec![applied]) }
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineVec, StyleDescriptor};

/// A [`StyleDescriptor`] targeted at some value indices. Used in a sparse style, where
/// every value that isn't targeted keeps the default descriptor.
///
/// Indices are signed so that any integer can be passed in. Negative indices, and
/// indices past the end of the value list, are ignored when the style is resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedDescriptor {
    pub descriptor: StyleDescriptor,
    pub target_indices: InlineVec<isize>,
}

impl AppliedDescriptor {
    #[must_use]
    pub fn new(
        descriptor: StyleDescriptor,
        indices: impl IntoIterator<Item = isize>,
    ) -> Self {
        Self {
            descriptor,
            target_indices: indices.into_iter().collect(),
        }
    }

    /// The target indices that fall inside `0..value_count`, in the order given.
    pub fn valid_indices(&self, value_count: usize) -> impl Iterator<Item = usize> + '_ {
        self.target_indices.iter().filter_map(move |&index| {
            usize::try_from(index)
                .ok()
                .filter(|&index| index < value_count)
        })
    }

    #[must_use]
    pub fn has_valid_target(&self, value_count: usize) -> bool {
        self.valid_indices(value_count).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_indices_are_skipped() {
        let it = StyleDescriptor::blue().at([-1, 0, 3, 2, 99, 2]);
        assert_eq!(it.valid_indices(3).collect::<Vec<_>>(), vec![0, 2, 2]);
        assert!(it.has_valid_target(3));
        assert!(it.has_valid_target(1));
        assert!(!it.has_valid_target(0));
    }

    #[test]
    fn no_indices() {
        let it = AppliedDescriptor::new(StyleDescriptor::green(), []);
        assert!(it.target_indices.is_empty());
        assert!(!it.has_valid_target(10));
    }

    #[test]
    fn only_negative_indices() {
        let it = AppliedDescriptor::yellow_at([-3, -1, isize::MIN]);
        assert_eq!(it.valid_indices(usize::MAX).count(), 0);
    }
}

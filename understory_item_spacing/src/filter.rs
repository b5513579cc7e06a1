// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sub-range of items that receives spacing and dividers.

use crate::SpacingConfig;

/// Inclusive range of positions left after the skip prefix and suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemRange {
    first: usize,
    last: usize,
}

impl ItemRange {
    /// Computes the range for `item_count` items, or `None` if the skips cover every item.
    #[must_use]
    pub fn new(config: &SpacingConfig, item_count: usize) -> Option<Self> {
        let last = item_count
            .checked_sub(1)?
            .checked_sub(config.skip_end())?;
        let first = config.skip_start();
        (first <= last).then_some(Self { first, last })
    }

    /// First position treated as the start of the list.
    #[must_use]
    pub const fn first(&self) -> usize {
        self.first
    }

    /// Last position treated as the end of the list.
    #[must_use]
    pub const fn last(&self) -> usize {
        self.last
    }

    /// Returns `true` if `position` lies inside the range.
    #[must_use]
    pub const fn contains(&self, position: usize) -> bool {
        self.first <= position && position <= self.last
    }

    /// Returns `true` if `position` is the range's first item.
    #[must_use]
    pub const fn is_first(&self, position: usize) -> bool {
        position == self.first
    }

    /// Returns `true` if `position` is the range's last item.
    #[must_use]
    pub const fn is_last(&self, position: usize) -> bool {
        position == self.last
    }
}

/// Returns the range `position` belongs to, or `None` if it is excluded.
///
/// A position is excluded when the configured predicate rejects it, when it falls in the
/// skip prefix or suffix, or when it is not a valid position at all.
pub(crate) fn included_range(
    config: &SpacingConfig,
    item_count: usize,
    position: usize,
) -> Option<ItemRange> {
    if config.excludes(position) {
        return None;
    }
    ItemRange::new(config, item_count).filter(|range| range.contains(position))
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-variant inset strategies.
//!
//! - `linear`: one item per row; the gap after an item belongs to that item.
//! - `grid`: row-level main-axis spacing plus slot interpolation on the cross axis.
//! - `staggered`: lane-based cross-axis split; rows are approximated by the first
//!   `span_count` items.
//!
//! Slot interpolation
//! ------------------
//! A row of `n` slots has `n - 1` interior gaps of `spacing` plus two outer edges. Every slot
//! gets the same share of that space, so cell content widths stay equal, but each cell owns
//! an asymmetric part of the gaps around it. We place slot boundary `k` at
//!
//! `b(k) = outer_leading + k * spacing - round(k * total / n)`
//!
//! and give a cell spanning slots `a..=z` a leading inset of `b(a)` and a trailing inset of
//! `spacing - b(z + 1)`. Adjacent cells therefore always sum to `spacing` exactly, and a complete
//! row telescopes to `outer_leading + outer_trailing + (items - 1) * spacing`.

mod grid;
mod linear;
mod staggered;

pub use grid::grid_inset;
pub use linear::linear_inset;
pub use staggered::staggered_inset;

use crate::{MainAxis, SpacingConfig};

/// Main-axis space for an item (or row) given whether it opens or closes the range.
///
/// Only the first item gets space before it; interior gaps belong to the item before them.
pub(crate) fn main_axis(
    config: &SpacingConfig,
    is_first: bool,
    is_last: bool,
    (outer_before, outer_after): (i32, i32),
    spacing: i32,
) -> MainAxis {
    let before = if is_first && !config.hidden_first() {
        outer_before
    } else {
        0
    };
    let after = match (is_last, config.hidden_last()) {
        (false, _) => spacing,
        (true, false) => outer_after,
        (true, true) => 0,
    };
    MainAxis { before, after }
}

/// Equal-share split of one row's cross-axis space across its slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SlotSplit {
    slots: i64,
    spacing: i64,
    total: i64,
    outer_leading: i64,
}

impl SlotSplit {
    /// Grid split: outer edges are a full gap when `outer` is set, otherwise they are the
    /// cross-axis paddings, folded into the shared interior space.
    pub(crate) fn grid(
        slots: usize,
        spacing: i32,
        outer: bool,
        (padding_leading, padding_trailing): (i32, i32),
    ) -> Self {
        let slots = to_i64(slots);
        let spacing = i64::from(spacing);
        let (gaps, folded, outer_leading) = if outer {
            (slots + 1, 0, spacing)
        } else {
            (
                slots - 1,
                i64::from(padding_leading) + i64::from(padding_trailing),
                i64::from(padding_leading),
            )
        };
        Self {
            slots,
            spacing,
            total: gaps * spacing + folded,
            outer_leading,
        }
    }

    /// Interior-only split with flush outer edges.
    pub(crate) fn interior(slots: usize, spacing: i32) -> Self {
        Self::grid(slots, spacing, false, (0, 0))
    }

    /// Per-slot share of the row's space before rounding: `total / slots`.
    #[cfg(test)]
    pub(crate) fn each_space(&self) -> f64 {
        self.total as f64 / self.slots as f64
    }

    fn boundary(&self, slot: usize) -> i64 {
        let k = to_i64(slot);
        // Round half up; `total` is never negative.
        let share = (2 * k * self.total + self.slots) / (2 * self.slots);
        self.outer_leading + k * self.spacing - share
    }

    /// Leading inset of a cell starting at `start_slot`.
    pub(crate) fn leading(&self, start_slot: usize) -> i32 {
        narrow(self.boundary(start_slot))
    }

    /// Trailing inset of a cell whose trailing edge lands in `end_slot`.
    pub(crate) fn trailing(&self, end_slot: usize) -> i32 {
        narrow(self.spacing - self.boundary(end_slot + 1))
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn narrow(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::{SlotSplit, main_axis};
    use crate::{MainAxis, SpacingConfig};

    #[test]
    fn split_matches_the_three_column_reference() {
        let split = SlotSplit::grid(3, 24, false, (0, 0));
        assert_eq!(split.each_space(), 16.0);
        assert_eq!((split.leading(0), split.trailing(0)), (0, 16));
        assert_eq!((split.leading(1), split.trailing(1)), (8, 8));
        assert_eq!((split.leading(2), split.trailing(2)), (16, 0));
    }

    #[test]
    fn outer_split_puts_a_full_gap_on_each_edge() {
        let split = SlotSplit::grid(4, 10, true, (99, 99));
        assert_eq!(split.leading(0), 10);
        assert_eq!(split.trailing(3), 10);
        for slot in 0..3 {
            assert_eq!(split.trailing(slot) + split.leading(slot + 1), 10);
        }
    }

    #[test]
    fn folded_padding_lands_on_the_outer_edges() {
        let split = SlotSplit::grid(3, 10, false, (7, 5));
        assert_eq!(split.leading(0), 7);
        assert_eq!(split.trailing(2), 5);
        // Uneven shares still pair up exactly.
        assert_eq!(split.trailing(0) + split.leading(1), 10);
        assert_eq!(split.trailing(1) + split.leading(2), 10);
    }

    #[test]
    fn interior_split_is_flush_at_the_edges() {
        let split = SlotSplit::interior(3, 10);
        assert_eq!(split.leading(0), 0);
        assert_eq!(split.trailing(2), 0);
        assert_eq!(split.trailing(0) + split.leading(1), 10);
    }

    #[test]
    fn main_axis_assigns_gaps_forward() {
        let config = SpacingConfig::default();
        let only = main_axis(&config, true, true, (3, 4), 9);
        assert_eq!(only, MainAxis { before: 3, after: 4 });
        let first = main_axis(&config, true, false, (3, 4), 9);
        assert_eq!(first, MainAxis { before: 3, after: 9 });
        let middle = main_axis(&config, false, false, (3, 4), 9);
        assert_eq!(middle, MainAxis { before: 0, after: 9 });
        let last = main_axis(&config, false, true, (3, 4), 9);
        assert_eq!(last, MainAxis { before: 0, after: 4 });

        let hidden = SpacingConfig::builder()
            .hidden_first(true)
            .hidden_last(true)
            .build()
            .unwrap();
        let only = main_axis(&hidden, true, true, (3, 4), 9);
        assert_eq!(only, MainAxis::default());
        let first = main_axis(&hidden, true, false, (3, 4), 9);
        assert_eq!(first, MainAxis { before: 0, after: 9 });
    }
}

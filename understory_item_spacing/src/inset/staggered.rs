// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::num::NonZeroUsize;

use super::{SlotSplit, main_axis};
use crate::{CrossAxis, Inset, ItemRange, Lane, Orientation, SpacingConfig};

/// Inset of `position` placed in `lane` of a staggered layout.
///
/// Lanes flow independently, so "rows" are approximated: the first `span_count` items of
/// `range` are treated as the first row and only `range.last()` as the last. The cross axis
/// splits the interior gaps evenly across lanes with flush outer edges; full-span items get
/// no cross-axis inset.
#[must_use]
pub fn staggered_inset(
    config: &SpacingConfig,
    orientation: Orientation,
    span_count: NonZeroUsize,
    range: &ItemRange,
    position: usize,
    lane: Lane,
) -> Inset {
    let vertical = orientation.is_vertical();
    let span_count = span_count.get();

    let is_first_row = position
        .checked_sub(range.first())
        .is_some_and(|offset| offset < span_count);
    let main = main_axis(
        config,
        is_first_row,
        range.is_last(position),
        config.main_padding(vertical),
        config.main_spacing(vertical),
    );

    let cross = if lane.full_span {
        CrossAxis::default()
    } else {
        let slot = lane.index % span_count;
        let split = SlotSplit::interior(span_count, config.cross_spacing(vertical));
        CrossAxis {
            leading: split.leading(slot),
            trailing: split.trailing(slot),
        }
    };

    Inset::from_axes(orientation, false, cross, main)
}

#[cfg(test)]
mod tests {
    use super::staggered_inset;
    use crate::{Inset, ItemRange, Lane, Orientation, SpacingConfig};
    use core::num::NonZeroUsize;

    const TWO: NonZeroUsize = NonZeroUsize::new(2).unwrap();
    const THREE: NonZeroUsize = NonZeroUsize::new(3).unwrap();

    fn config() -> SpacingConfig {
        SpacingConfig::builder()
            .spacing(8.0)
            .padding_top(4.0)
            .padding_bottom(5.0)
            .padding_start(6.0)
            .padding_end(7.0)
            .build()
            .unwrap()
    }

    #[test]
    fn two_lanes_split_one_gap() {
        let config = config();
        let range = ItemRange::new(&config, 6).unwrap();
        let inset = |p, lane| staggered_inset(&config, Orientation::Vertical, TWO, &range, p, lane);

        assert_eq!(inset(0, Lane::new(0)), Inset::new(0, 4, 4, 8));
        assert_eq!(inset(1, Lane::new(1)), Inset::new(4, 4, 0, 8));
        assert_eq!(inset(2, Lane::new(1)), Inset::new(4, 0, 0, 8));
        assert_eq!(inset(5, Lane::new(0)), Inset::new(0, 0, 4, 5));
    }

    #[test]
    fn three_lanes_pair_up_exactly() {
        let config = config();
        let range = ItemRange::new(&config, 9).unwrap();
        let inset = |lane| {
            staggered_inset(&config, Orientation::Vertical, THREE, &range, 4, Lane::new(lane))
        };
        assert_eq!(inset(0).right + inset(1).left, 8);
        assert_eq!(inset(1).right + inset(2).left, 8);
        assert_eq!(inset(0).left, 0);
        assert_eq!(inset(2).right, 0);
        // Lane indices wrap.
        assert_eq!(inset(4), inset(1));
    }

    #[test]
    fn full_span_items_have_no_cross_inset() {
        let config = config();
        let range = ItemRange::new(&config, 4).unwrap();
        let inset = staggered_inset(
            &config,
            Orientation::Vertical,
            TWO,
            &range,
            2,
            Lane::full_span(),
        );
        assert_eq!(inset, Inset::new(0, 0, 0, 8));
    }

    #[test]
    fn horizontal_lanes_use_start_and_end_padding() {
        let config = config();
        let range = ItemRange::new(&config, 4).unwrap();
        let inset = |p, lane| {
            staggered_inset(&config, Orientation::Horizontal, TWO, &range, p, Lane::new(lane))
        };
        assert_eq!(inset(0, 0), Inset::new(6, 0, 8, 4));
        assert_eq!(inset(3, 1), Inset::new(0, 4, 7, 0));
    }

    #[test]
    fn positions_before_the_range_are_not_first() {
        let config = SpacingConfig::builder()
            .spacing(8.0)
            .padding_top(4.0)
            .skip_start(3)
            .build()
            .unwrap();
        let range = ItemRange::new(&config, 8).unwrap();
        let inset = staggered_inset(&config, Orientation::Vertical, TWO, &range, 1, Lane::new(0));
        assert_eq!(inset, Inset::new(0, 0, 4, 8));
    }

    #[test]
    fn first_row_counts_from_the_skip() {
        let config = SpacingConfig::builder()
            .spacing(8.0)
            .padding_top(4.0)
            .skip_start(1)
            .build()
            .unwrap();
        let range = ItemRange::new(&config, 6).unwrap();
        let top = |p| {
            staggered_inset(&config, Orientation::Vertical, TWO, &range, p, Lane::new(0)).top
        };
        assert_eq!(top(1), 4);
        assert_eq!(top(2), 4);
        assert_eq!(top(3), 0);
    }
}

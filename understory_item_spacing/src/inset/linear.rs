// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::main_axis;
use crate::{CrossAxis, Inset, ItemRange, Orientation, SpacingConfig};

/// Inset of `position` in a linear list.
///
/// The first item of `range` gets the leading main-axis padding, the last one the
/// trailing padding, and every other item owns the gap after it. Cross-axis padding
/// applies to every item. `reverse` swaps the main-axis sides only.
#[must_use]
pub fn linear_inset(
    config: &SpacingConfig,
    orientation: Orientation,
    reverse: bool,
    range: &ItemRange,
    position: usize,
) -> Inset {
    let vertical = orientation.is_vertical();
    let (leading, trailing) = config.cross_padding(vertical);
    let main = main_axis(
        config,
        range.is_first(position),
        range.is_last(position),
        config.main_padding(vertical),
        config.main_spacing(vertical),
    );
    Inset::from_axes(orientation, reverse, CrossAxis { leading, trailing }, main)
}

#[cfg(test)]
mod tests {
    use super::linear_inset;
    use crate::{Inset, ItemRange, Orientation, SpacingConfig};

    fn config() -> SpacingConfig {
        SpacingConfig::builder()
            .vertical_spacing(10.0)
            .horizontal_spacing(6.0)
            .padding_start(1.0)
            .padding_end(2.0)
            .padding_top(3.0)
            .padding_bottom(4.0)
            .build()
            .unwrap()
    }

    #[test]
    fn vertical_list_owns_the_gap_after_each_item() {
        let config = config();
        let range = ItemRange::new(&config, 3).unwrap();
        let inset = |p| linear_inset(&config, Orientation::Vertical, false, &range, p);
        assert_eq!(inset(0), Inset::new(1, 3, 2, 10));
        assert_eq!(inset(1), Inset::new(1, 0, 2, 10));
        assert_eq!(inset(2), Inset::new(1, 0, 2, 4));
    }

    #[test]
    fn horizontal_list_uses_horizontal_spacing() {
        let config = config();
        let range = ItemRange::new(&config, 3).unwrap();
        let inset = |p| linear_inset(&config, Orientation::Horizontal, false, &range, p);
        assert_eq!(inset(0), Inset::new(1, 3, 6, 4));
        assert_eq!(inset(1), Inset::new(0, 3, 6, 4));
        assert_eq!(inset(2), Inset::new(0, 3, 2, 4));
    }

    #[test]
    fn single_item_gets_both_paddings() {
        let config = config();
        let range = ItemRange::new(&config, 1).unwrap();
        let inset = linear_inset(&config, Orientation::Vertical, false, &range, 0);
        assert_eq!(inset, Inset::new(1, 3, 2, 4));
    }

    #[test]
    fn reverse_moves_the_gap_to_the_visual_top() {
        let config = config();
        let range = ItemRange::new(&config, 3).unwrap();
        let inset = |p| linear_inset(&config, Orientation::Vertical, true, &range, p);
        assert_eq!(inset(0), Inset::new(1, 10, 2, 3));
        assert_eq!(inset(2), Inset::new(1, 4, 2, 0));

        let horizontal = linear_inset(&config, Orientation::Horizontal, true, &range, 1);
        assert_eq!(horizontal, Inset::new(6, 3, 0, 4));
    }

    #[test]
    fn hidden_edges_drop_outer_padding() {
        let config = SpacingConfig::builder()
            .vertical_spacing(10.0)
            .padding(5.0)
            .hidden_first(true)
            .hidden_last(true)
            .build()
            .unwrap();
        let range = ItemRange::new(&config, 2).unwrap();
        let inset = |p| linear_inset(&config, Orientation::Vertical, false, &range, p);
        assert_eq!(inset(0), Inset::new(5, 0, 5, 10));
        assert_eq!(inset(1), Inset::new(5, 0, 5, 0));
    }

    #[test]
    fn divider_thickness_widens_the_gap() {
        let config = SpacingConfig::builder()
            .vertical_spacing(2.0)
            .divider_thickness(8.0)
            .build()
            .unwrap();
        let range = ItemRange::new(&config, 3).unwrap();
        let inset = linear_inset(&config, Orientation::Vertical, false, &range, 1);
        assert_eq!(inset.bottom, 8);
    }
}

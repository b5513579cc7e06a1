// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::{SlotSplit, main_axis};
use crate::{CrossAxis, Inset, ItemRange, Orientation, RowIndex, SpacingConfig};

/// Inset of `position` in a grid packed by `rows`.
///
/// Main-axis spacing follows the linear rules at row granularity: every item in the
/// row containing `range.first()` gets the leading outer space, and so on. Cross-axis
/// insets interpolate across the row's slots so all cells share the same content width
/// while adjacent cells sum to exactly one gap. Items spanning several slots take their
/// leading inset from their first slot and their trailing inset from the slot their
/// span ends in.
///
/// Without outer gaps the cross-axis paddings are folded into the shared space. When they
/// exceed the interior gaps the interpolated insets next to the outer edges go negative;
/// they are returned as computed so every cell still ends up the same width.
///
/// `position` must be indexed by `rows` and lie inside `range`.
#[must_use]
pub fn grid_inset(
    config: &SpacingConfig,
    orientation: Orientation,
    reverse: bool,
    rows: &RowIndex,
    range: &ItemRange,
    position: usize,
) -> Inset {
    let vertical = orientation.is_vertical();
    let row = rows.row_of(position);
    let is_first_row = row == rows.row_of(range.first());
    let is_last_row = row == rows.row_of(range.last());

    let main = main_axis(
        config,
        is_first_row,
        is_last_row,
        (
            config.outer_space(vertical, true),
            config.outer_space(vertical, false),
        ),
        config.main_spacing(vertical),
    );

    let cross_axis = !vertical;
    let span_count = rows.span_count();
    let start_slot = rows.start_slot(position);
    let end_slot = rows.offset_index(position);
    let cross = if start_slot == 0 && end_slot + 1 == span_count {
        CrossAxis {
            leading: config.outer_space(cross_axis, true),
            trailing: config.outer_space(cross_axis, false),
        }
    } else {
        let split = SlotSplit::grid(
            span_count,
            config.cross_spacing(vertical),
            config.outer(cross_axis),
            config.cross_padding(vertical),
        );
        CrossAxis {
            leading: split.leading(start_slot),
            trailing: split.trailing(end_slot),
        }
    };

    Inset::from_axes(orientation, reverse, cross, main)
}

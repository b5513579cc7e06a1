// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row membership for grids whose items may span several slots.
//!
//! A [`RowIndex`] replays first-fit packing over a flat sequence of items: span sizes
//! accumulate into the current row until they reach `span_count`, and an item that
//! would overshoot starts the next row instead. The index is rebuilt from scratch
//! whenever item count or span assignment changes, since a single reassignment can
//! move every later row boundary.

use alloc::vec::Vec;
use core::num::NonZeroUsize;
use core::ops::Range;

bitflags::bitflags! {
    /// Position flags within a row.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RowFlags: u8 {
        /// The first item registered into its row.
        const FIRST_IN_ROW = 0b0000_0001;
        /// The item that closed its row.
        const LAST_IN_ROW  = 0b0000_0010;
    }
}

/// Where a single item landed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Row containing the item.
    pub row: usize,
    /// Slot at which the item's leading edge starts.
    pub start_slot: usize,
    /// Slot at which the item's trailing edge lands.
    pub offset_index: usize,
    /// First/last-in-row markers.
    pub flags: RowFlags,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Row {
    start: usize,
    end: usize,
    span_total: usize,
}

/// Row-membership index over `0..item_count` for a grid of `span_count` slots.
///
/// ## Example
///
/// ```rust
/// use core::num::NonZeroUsize;
/// use understory_item_spacing::RowIndex;
///
/// // Three columns; item 1 is two slots wide.
/// let spans = [1, 2, 3, 1];
/// let index = RowIndex::build(spans.len(), NonZeroUsize::new(3).unwrap(), |i| spans[i]);
///
/// assert_eq!(index.row_count(), 3);
/// assert_eq!(index.positions_in_row(0), 0..2);
/// assert_eq!(index.offset_index(1), 2);
/// assert!(index.is_first_in_row(3) && index.is_last_in_row(3));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowIndex {
    span_count: usize,
    placements: Vec<Placement>,
    rows: Vec<Row>,
}

impl RowIndex {
    /// Packs `item_count` items into rows of `span_count` slots.
    ///
    /// `span_size_of` is called exactly once per position, in order. A span size of zero
    /// is treated as one. An item wider than `span_count` occupies a row of its own.
    pub fn build<F>(item_count: usize, span_count: NonZeroUsize, mut span_size_of: F) -> Self
    where
        F: FnMut(usize) -> usize,
    {
        let span_count = span_count.get();
        let mut placements = Vec::with_capacity(item_count);
        let mut rows = Vec::new();

        let mut row_start = 0;
        let mut row_total = 0;
        let mut oversized = 0_usize;
        let mut zero_spans = 0_usize;

        for position in 0..item_count {
            let span = match span_size_of(position) {
                0 => {
                    zero_spans += 1;
                    1
                }
                span => span,
            };
            if span > span_count {
                oversized += 1;
            }

            if row_total > 0 && row_total + span > span_count {
                close_row(&mut rows, &mut placements, row_start, position, row_total);
                row_start = position;
                row_total = 0;
            }

            let mut flags = RowFlags::empty();
            if row_total == 0 {
                flags |= RowFlags::FIRST_IN_ROW;
            }
            let start_slot = row_total;
            row_total += span;
            placements.push(Placement {
                row: rows.len(),
                start_slot,
                offset_index: row_total.min(span_count) - 1,
                flags,
            });

            if row_total >= span_count {
                close_row(&mut rows, &mut placements, row_start, position + 1, row_total);
                row_start = position + 1;
                row_total = 0;
            }
        }
        if row_total > 0 {
            close_row(&mut rows, &mut placements, row_start, item_count, row_total);
        }

        if oversized > 0 {
            tracing::warn!(
                target: "understory_item_spacing::row_index",
                oversized,
                span_count,
                "items wider than the grid were placed on rows of their own"
            );
        }
        if zero_spans > 0 {
            tracing::warn!(
                target: "understory_item_spacing::row_index",
                zero_spans,
                "items reported a span size of zero and were given one slot"
            );
        }

        Self {
            span_count,
            placements,
            rows,
        }
    }

    /// Number of slots per row.
    #[must_use]
    pub const fn span_count(&self) -> usize {
        self.span_count
    }

    /// Number of indexed items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.placements.len()
    }

    /// Number of rows, including a trailing partial row.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no items are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns the full placement record of `position`.
    #[must_use]
    pub fn placement(&self, position: usize) -> Option<Placement> {
        self.placements.get(position).copied()
    }

    /// Row containing `position`.
    ///
    /// `position` must be less than [`item_count`](Self::item_count).
    #[must_use]
    pub fn row_of(&self, position: usize) -> usize {
        self.placements[position].row
    }

    /// Returns `true` if `position` belongs to `row`.
    #[must_use]
    pub fn is_in_row(&self, position: usize, row: usize) -> bool {
        self.placements.get(position).is_some_and(|p| p.row == row)
    }

    /// Positions of `row`, in order. Rows are always contiguous runs.
    #[must_use]
    pub fn positions_in_row(&self, row: usize) -> Range<usize> {
        self.rows.get(row).map_or(0..0, |r| r.start..r.end)
    }

    /// Sum of the span sizes of `row`.
    #[must_use]
    pub fn row_span_total(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, |r| r.span_total)
    }

    /// Number of items sharing a row with `position`.
    #[must_use]
    pub fn items_in_row(&self, position: usize) -> usize {
        self.positions_in_row(self.row_of(position)).len()
    }

    /// Index of `position` within its row's item list.
    ///
    /// This counts items, not slots; see [`start_slot`](Self::start_slot) for the latter.
    #[must_use]
    pub fn rank_in_row(&self, position: usize) -> usize {
        position - self.positions_in_row(self.row_of(position)).start
    }

    /// Slot at which `position` starts.
    #[must_use]
    pub fn start_slot(&self, position: usize) -> usize {
        self.placements[position].start_slot
    }

    /// Slot at which `position`'s trailing edge lands.
    #[must_use]
    pub fn offset_index(&self, position: usize) -> usize {
        self.placements[position].offset_index
    }

    /// Returns `true` if `position` opened its row.
    #[must_use]
    pub fn is_first_in_row(&self, position: usize) -> bool {
        self.flags(position).contains(RowFlags::FIRST_IN_ROW)
    }

    /// Returns `true` if `position` closed its row.
    #[must_use]
    pub fn is_last_in_row(&self, position: usize) -> bool {
        self.flags(position).contains(RowFlags::LAST_IN_ROW)
    }

    fn flags(&self, position: usize) -> RowFlags {
        self.placements
            .get(position)
            .map_or(RowFlags::empty(), |p| p.flags)
    }
}

fn close_row(
    rows: &mut Vec<Row>,
    placements: &mut [Placement],
    start: usize,
    end: usize,
    span_total: usize,
) {
    debug_assert!(start < end, "closing an empty row at {start}");
    placements[end - 1].flags |= RowFlags::LAST_IN_ROW;
    rows.push(Row {
        start,
        end,
        span_total,
    });
}

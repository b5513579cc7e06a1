// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Divider line geometry for linear and grid layouts.
//!
//! Lines are centered in the gap reserved by the inset rules: half of
//! `max(divider_thickness, spacing)` away from the item edge they follow.
//! Staggered layouts have no divider geometry; hosts fill the container background
//! and let the insets show it through.

use kurbo::Rect;
use smallvec::SmallVec;

use crate::{DividerSegment, Edge, ItemRange, Orientation, RowIndex, SpacingConfig};

/// Segments framing a single item. Grids produce at most four.
pub type DividerSegments = SmallVec<[DividerSegment; 4]>;

/// The divider after `position` in a linear list, if one is drawn.
///
/// The line runs along the item's bottom edge (vertical lists) or right edge (horizontal
/// lists) across the whole `container`, trimmed by the cross-axis padding when
/// [`SpacingConfig::divider_padding`] is set. Reversed lists need no special handling since
/// `bounds` are already in visual order. The first item has no divider when
/// [`SpacingConfig::hidden_first`] is set, likewise the last with
/// [`SpacingConfig::hidden_last`].
#[must_use]
pub fn linear_divider(
    config: &SpacingConfig,
    orientation: Orientation,
    range: &ItemRange,
    position: usize,
    bounds: Rect,
    container: Rect,
) -> Option<DividerSegment> {
    if (range.is_first(position) && config.hidden_first())
        || (range.is_last(position) && config.hidden_last())
    {
        return None;
    }

    let trim = config.divider_padding();
    let segment = match orientation {
        Orientation::Vertical => {
            let y = bounds.y1 + half(config.effective_vertical_spacing());
            let (mut x0, mut x1) = (container.x0, container.x1);
            if trim {
                x0 += f64::from(config.padding_start());
                x1 -= f64::from(config.padding_end());
            }
            DividerSegment::new(Edge::Bottom, (x0, y), (x1, y))
        }
        Orientation::Horizontal => {
            let x = bounds.x1 + half(config.effective_horizontal_spacing());
            let (mut y0, mut y1) = (container.y0, container.y1);
            if trim {
                y0 += f64::from(config.padding_top());
                y1 -= f64::from(config.padding_bottom());
            }
            DividerSegment::new(Edge::Right, (x, y0), (x, y1))
        }
    };
    Some(segment)
}

/// The frame of segments around `position` in a grid.
///
/// All four sides are produced, so neighbouring cells draw overlapping lines; with a
/// divider color matching the background this reads as a single gap. Horizontal segments
/// are extended by half a divider on the leading side and vertical segments on the top so
/// corners close. With [`SpacingConfig::hidden_first`] the outer side of the first row is
/// dropped, and with [`SpacingConfig::hidden_last`] the outer side of the last row.
#[must_use]
pub fn grid_dividers(
    config: &SpacingConfig,
    orientation: Orientation,
    reverse: bool,
    rows: &RowIndex,
    range: &ItemRange,
    position: usize,
    bounds: Rect,
) -> DividerSegments {
    let thickness = config.divider_thickness();
    let divider_half = f64::from((thickness + 1) / 2);
    let v_half = half(config.effective_vertical_spacing());
    let h_half = half(config.effective_horizontal_spacing());

    let left = bounds.x0 - h_half;
    let right = bounds.x1 + h_half;
    let top = bounds.y0 - v_half;
    let bottom = bounds.y1 + v_half;

    let row = rows.row_of(position);
    let hide_before = config.hidden_first() && row == rows.row_of(range.first());
    let hide_after = config.hidden_last() && row == rows.row_of(range.last());
    let (before, after) = main_edges(orientation, reverse);

    let candidates = [
        DividerSegment::new(Edge::Top, (left - divider_half, top), (right, top)),
        DividerSegment::new(Edge::Bottom, (left - divider_half, bottom), (right, bottom)),
        DividerSegment::new(Edge::Left, (left, top - divider_half), (left, bottom)),
        DividerSegment::new(Edge::Right, (right, top - divider_half), (right, bottom)),
    ];
    candidates
        .into_iter()
        .filter(|segment| {
            !((hide_before && segment.edge == before) || (hide_after && segment.edge == after))
        })
        .collect()
}

/// Visual edges `(before, after)` of a row along the main axis.
const fn main_edges(orientation: Orientation, reverse: bool) -> (Edge, Edge) {
    match (orientation, reverse) {
        (Orientation::Vertical, false) => (Edge::Top, Edge::Bottom),
        (Orientation::Vertical, true) => (Edge::Bottom, Edge::Top),
        (Orientation::Horizontal, false) => (Edge::Left, Edge::Right),
        (Orientation::Horizontal, true) => (Edge::Right, Edge::Left),
    }
}

/// Half of a gap in whole pixels, rounded down.
fn half(gap: i32) -> f64 {
    f64::from(gap / 2)
}

#[cfg(test)]
mod tests {
    use super::{grid_dividers, linear_divider};
    use crate::{Edge, ItemRange, Orientation, RowIndex, SpacingConfig};
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;
    use kurbo::{Line, Rect};

    const CONTAINER: Rect = Rect::new(0.0, 0.0, 300.0, 600.0);

    #[test]
    fn vertical_divider_sits_in_the_gap_below() {
        let config = SpacingConfig::builder()
            .vertical_spacing(10.0)
            .divider_thickness(2.0)
            .build()
            .unwrap();
        let range = ItemRange::new(&config, 5).unwrap();
        let bounds = Rect::new(0.0, 100.0, 300.0, 150.0);
        let segment =
            linear_divider(&config, Orientation::Vertical, &range, 2, bounds, CONTAINER).unwrap();
        assert_eq!(segment.edge, Edge::Bottom);
        assert_eq!(segment.line, Line::new((0.0, 155.0), (300.0, 155.0)));
    }

    #[test]
    fn divider_padding_trims_the_cross_axis() {
        let config = SpacingConfig::builder()
            .horizontal_spacing(4.0)
            .divider_thickness(7.0)
            .padding_top(10.0)
            .padding_bottom(20.0)
            .divider_padding(true)
            .build()
            .unwrap();
        let range = ItemRange::new(&config, 5).unwrap();
        let bounds = Rect::new(40.0, 0.0, 90.0, 600.0);
        let segment =
            linear_divider(&config, Orientation::Horizontal, &range, 1, bounds, CONTAINER)
                .unwrap();
        assert_eq!(segment.edge, Edge::Right);
        // Spacing widens to the 7px divider; half of that is 3.
        assert_eq!(segment.line, Line::new((93.0, 10.0), (93.0, 580.0)));
    }

    #[test]
    fn hidden_edges_drop_linear_dividers() {
        let config = SpacingConfig::builder()
            .vertical_spacing(10.0)
            .hidden_first(true)
            .hidden_last(true)
            .skip_start(1)
            .build()
            .unwrap();
        let range = ItemRange::new(&config, 4).unwrap();
        let bounds = Rect::new(0.0, 0.0, 300.0, 50.0);
        let divider =
            |p| linear_divider(&config, Orientation::Vertical, &range, p, bounds, CONTAINER);
        assert!(divider(1).is_none());
        assert!(divider(2).is_some());
        assert!(divider(3).is_none());
    }

    fn grid_rows(count: usize, span_count: usize) -> RowIndex {
        RowIndex::build(count, NonZeroUsize::new(span_count).unwrap(), |_| 1)
    }

    #[test]
    fn grid_frames_each_cell() {
        let config = SpacingConfig::builder()
            .vertical_spacing(10.0)
            .horizontal_spacing(6.0)
            .divider_thickness(3.0)
            .build()
            .unwrap();
        let rows = grid_rows(6, 3);
        let range = ItemRange::new(&config, 6).unwrap();
        let bounds = Rect::new(100.0, 100.0, 200.0, 200.0);
        let segments = grid_dividers(
            &config,
            Orientation::Vertical,
            false,
            &rows,
            &range,
            4,
            bounds,
        );
        let edges: Vec<_> = segments.iter().map(|s| s.edge).collect();
        assert_eq!(edges, [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right]);
        assert_eq!(segments[0].line, Line::new((95.0, 95.0), (203.0, 95.0)));
        assert_eq!(segments[1].line, Line::new((95.0, 205.0), (203.0, 205.0)));
        assert_eq!(segments[2].line, Line::new((97.0, 93.0), (97.0, 205.0)));
        assert_eq!(segments[3].line, Line::new((203.0, 93.0), (203.0, 205.0)));
    }

    #[test]
    fn hidden_rows_lose_their_outer_side() {
        let config = SpacingConfig::builder()
            .spacing(8.0)
            .hidden_first(true)
            .build()
            .unwrap();
        let rows = grid_rows(6, 3);
        let range = ItemRange::new(&config, 6).unwrap();
        let bounds = Rect::new(0.0, 0.0, 50.0, 50.0);
        let edges = |orientation, reverse, p| -> Vec<Edge> {
            grid_dividers(&config, orientation, reverse, &rows, &range, p, bounds)
                .iter()
                .map(|s| s.edge)
                .collect()
        };
        assert_eq!(
            edges(Orientation::Vertical, false, 1),
            [Edge::Bottom, Edge::Left, Edge::Right]
        );
        assert_eq!(
            edges(Orientation::Vertical, true, 1),
            [Edge::Top, Edge::Left, Edge::Right]
        );
        assert_eq!(
            edges(Orientation::Horizontal, false, 0),
            [Edge::Top, Edge::Bottom, Edge::Right]
        );
        // The last row keeps every side unless `hidden_last` is also set.
        assert_eq!(edges(Orientation::Vertical, false, 4).len(), 4);
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: layout description, insets, and divider segments.

use core::num::NonZeroUsize;

use kurbo::{Insets, Line, Rect};

/// Direction of the main (scroll) axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items flow top to bottom; the cross axis is horizontal.
    #[default]
    Vertical,
    /// Items flow left to right; the cross axis is vertical.
    Horizontal,
}

impl Orientation {
    /// Returns `true` for [`Orientation::Vertical`].
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

/// The layout variant that arranges the list, as reported by the host.
///
/// Each arm carries exactly the parameters its inset and divider rules consume.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListLayout {
    /// A single column (vertical) or row (horizontal).
    Linear {
        /// Main axis direction.
        orientation: Orientation,
        /// Whether the logically-first item is placed at the visual end.
        reverse: bool,
    },
    /// Rows (or columns) of `span_count` slots; items may span several slots.
    Grid {
        /// Main axis direction.
        orientation: Orientation,
        /// Number of slots per row.
        span_count: NonZeroUsize,
        /// Whether rows are stacked from the visual end.
        reverse: bool,
    },
    /// Independent lanes that are not row-synchronized.
    Staggered {
        /// Main axis direction.
        orientation: Orientation,
        /// Number of lanes.
        span_count: NonZeroUsize,
    },
}

impl ListLayout {
    /// A top-to-bottom linear list.
    #[must_use]
    pub const fn vertical_list() -> Self {
        Self::Linear {
            orientation: Orientation::Vertical,
            reverse: false,
        }
    }

    /// A vertical grid with `span_count` columns.
    #[must_use]
    pub const fn vertical_grid(span_count: NonZeroUsize) -> Self {
        Self::Grid {
            orientation: Orientation::Vertical,
            span_count,
            reverse: false,
        }
    }

    /// Returns the main axis direction.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        match *self {
            Self::Linear { orientation, .. }
            | Self::Grid { orientation, .. }
            | Self::Staggered { orientation, .. } => orientation,
        }
    }

    /// Returns the slot count, or `None` for linear layouts.
    #[must_use]
    pub const fn span_count(&self) -> Option<NonZeroUsize> {
        match *self {
            Self::Linear { .. } => None,
            Self::Grid { span_count, .. } | Self::Staggered { span_count, .. } => Some(span_count),
        }
    }

    /// Returns whether the layout places items from the visual end.
    ///
    /// Staggered layouts never report reversal.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        match *self {
            Self::Linear { reverse, .. } | Self::Grid { reverse, .. } => reverse,
            Self::Staggered { .. } => false,
        }
    }
}

/// The lane a staggered layout assigned to an item.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Lane {
    /// Zero-based lane index.
    pub index: usize,
    /// Whether the item spans every lane.
    pub full_span: bool,
}

impl Lane {
    /// A single-lane placement at `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            full_span: false,
        }
    }

    /// A placement spanning all lanes.
    #[must_use]
    pub const fn full_span() -> Self {
        Self {
            index: 0,
            full_span: true,
        }
    }
}

/// Space reserved around an item, in container pixels.
///
/// Values are integers so that adjacent cells always split a gap exactly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Inset {
    /// Space to the left of the item.
    pub left: i32,
    /// Space above the item.
    pub top: i32,
    /// Space to the right of the item.
    pub right: i32,
    /// Space below the item.
    pub bottom: i32,
}

impl Inset {
    /// No reserved space.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates an inset from its four container-space sides.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Assembles an inset from axis-relative magnitudes.
    ///
    /// `before`/`after` run along the main axis in logical order; `reverse` maps the
    /// logical before side onto the visual end.
    #[must_use]
    pub const fn from_axes(
        orientation: Orientation,
        reverse: bool,
        cross: CrossAxis,
        main: MainAxis,
    ) -> Self {
        let (start, end) = if reverse {
            (main.after, main.before)
        } else {
            (main.before, main.after)
        };
        match orientation {
            Orientation::Vertical => Self::new(cross.leading, start, cross.trailing, end),
            Orientation::Horizontal => Self::new(start, cross.leading, end, cross.trailing),
        }
    }

    /// Space on the logical before side of the main axis.
    #[must_use]
    pub const fn before(&self, orientation: Orientation, reverse: bool) -> i32 {
        match (orientation, reverse) {
            (Orientation::Vertical, false) => self.top,
            (Orientation::Vertical, true) => self.bottom,
            (Orientation::Horizontal, false) => self.left,
            (Orientation::Horizontal, true) => self.right,
        }
    }

    /// Space on the logical after side of the main axis.
    #[must_use]
    pub const fn after(&self, orientation: Orientation, reverse: bool) -> i32 {
        self.before(orientation, !reverse)
    }

    /// Space on the leading side of the cross axis.
    #[must_use]
    pub const fn leading(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.left,
            Orientation::Horizontal => self.top,
        }
    }

    /// Space on the trailing side of the cross axis.
    #[must_use]
    pub const fn trailing(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.right,
            Orientation::Horizontal => self.bottom,
        }
    }

    /// Converts to [`kurbo::Insets`] for use with [`Rect`] arithmetic.
    #[must_use]
    pub fn to_kurbo(self) -> Insets {
        Insets::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }
}

/// Cross-axis part of an [`Inset`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CrossAxis {
    /// Left for vertical layouts, top for horizontal ones.
    pub leading: i32,
    /// Right for vertical layouts, bottom for horizontal ones.
    pub trailing: i32,
}

/// Main-axis part of an [`Inset`], in logical item order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MainAxis {
    /// Space before the item.
    pub before: i32,
    /// Space after the item.
    pub after: i32,
}

/// Which side of an item a divider segment runs along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Above the item.
    Top,
    /// Below the item.
    Bottom,
    /// Left of the item.
    Left,
    /// Right of the item.
    Right,
}

/// A divider line to paint, in container coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DividerSegment {
    /// The item edge this segment follows.
    pub edge: Edge,
    /// Centerline of the divider.
    pub line: Line,
}

impl DividerSegment {
    pub(crate) fn new(edge: Edge, p0: (f64, f64), p1: (f64, f64)) -> Self {
        Self {
            edge,
            line: Line::new(p0, p1),
        }
    }
}

/// A bound child seen by the paint pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisibleItem {
    /// Adapter position of the child.
    pub position: usize,
    /// The child's laid-out bounds in container coordinates, excluding insets.
    pub bounds: Rect,
}

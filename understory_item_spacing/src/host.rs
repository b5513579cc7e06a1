// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the host list supplies.

use crate::{DividerSegment, Lane};

/// Item data the decoration reads from the host's adapter.
pub trait ItemProvider {
    /// Number of items in the list.
    fn item_count(&self) -> usize;

    /// Number of grid slots occupied by `position`. Only consulted by grids.
    fn span_size_of(&self, position: usize) -> usize {
        let _ = position;
        1
    }

    /// Lane the layout assigned to `position`. Only consulted by staggered layouts.
    fn lane_of(&self, position: usize) -> Lane {
        let _ = position;
        Lane::default()
    }

    /// A counter that changes whenever the item count or span assignment changes.
    ///
    /// The decoration rebuilds its row index when this differs from the value seen at the
    /// last build; it need not be contiguous, only different.
    fn structural_version(&self) -> u64;
}

/// Paint target for divider segments.
///
/// Stroke color and style belong to the host; the stroke width is
/// [`SpacingConfig::divider_thickness`](crate::SpacingConfig::divider_thickness).
pub trait DividerCanvas {
    /// Draws one divider segment.
    fn draw_line(&mut self, segment: &DividerSegment);
}

impl<C: DividerCanvas + ?Sized> DividerCanvas for &mut C {
    fn draw_line(&mut self, segment: &DividerSegment) {
        (**self).draw_line(segment);
    }
}

impl DividerCanvas for alloc::vec::Vec<DividerSegment> {
    fn draw_line(&mut self, segment: &DividerSegment) {
        self.push(*segment);
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_item_spacing --heading-base-level=0

//! Understory Item Spacing: item insets and divider geometry for scrolling lists.
//!
//! Given a spacing configuration and a query about one item of a list, this crate
//! answers two questions:
//!
//! - How much space should the layout reserve around the item? See [`Inset`].
//! - Where do divider lines go between items? See [`DividerSegment`].
//!
//! Three layout families are supported, described by [`ListLayout`]:
//!
//! - **Linear** lists place one item per row. Each item owns the gap after it, the
//!   first item gets the leading padding and the last item the trailing padding.
//! - **Grids** pack items into rows of `span_count` slots, where an item may occupy
//!   several slots. Rows are tracked by a [`RowIndex`]. Cross-axis gaps are split so
//!   every slot keeps the same content width while adjacent cells always add up to
//!   exactly one gap.
//! - **Staggered** layouts assign items to independent lanes. Cross-axis gaps use the
//!   lane index; first and last rows are approximated.
//!
//! The core concepts are:
//!
//! - [`SpacingConfig`]: immutable distances and flags, built in display-independent
//!   units by [`SpacingConfigBuilder`] and converted to whole pixels once.
//! - [`ItemProvider`]: what the host reports about its items (count, span sizes, lanes,
//!   and a structural version).
//! - [`SpacingDecoration`]: the entry point. It filters skipped and excluded items,
//!   dispatches on the layout, and keeps the grid [`RowIndex`] current.
//! - [`DividerCanvas`]: where [`SpacingDecoration::paint_dividers`] sends segments.
//!
//! The per-layout functions ([`linear_inset`], [`grid_inset`], [`staggered_inset`],
//! [`linear_divider`], [`grid_dividers`]) are public for hosts that manage their own
//! row index.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_item_spacing::{
//!     DividerSegment, Inset, ItemProvider, ListLayout, SpacingConfig, SpacingDecoration,
//!     VisibleItem,
//! };
//!
//! struct Rows(usize);
//!
//! impl ItemProvider for Rows {
//!     fn item_count(&self) -> usize {
//!         self.0
//!     }
//!     fn structural_version(&self) -> u64 {
//!         0
//!     }
//! }
//!
//! // 12dp between rows at 2x density, edge padding of 8dp.
//! let config = SpacingConfig::builder()
//!     .density(2.0)
//!     .vertical_spacing(12.0)
//!     .padding(8.0)
//!     .divider_thickness(1.0)
//!     .build()
//!     .unwrap();
//! let mut decoration = SpacingDecoration::new(config);
//! let layout = ListLayout::vertical_list();
//! let rows = Rows(3);
//!
//! assert_eq!(decoration.compute_inset(&rows, &layout, 0), Inset::new(16, 16, 16, 24));
//! assert_eq!(decoration.compute_inset(&rows, &layout, 2), Inset::new(16, 0, 16, 16));
//!
//! let visible = (0..3).map(|position| {
//!     let y = 56.0 * position as f64;
//!     VisibleItem { position, bounds: Rect::new(16.0, y, 464.0, y + 32.0) }
//! });
//! let mut painted: Vec<DividerSegment> = Vec::new();
//! decoration.paint_dividers(
//!     &rows,
//!     &layout,
//!     Rect::new(0.0, 0.0, 480.0, 800.0),
//!     visible,
//!     &mut painted,
//! );
//! assert_eq!(painted.len(), 3);
//! assert_eq!(painted[0].line.p0.y, 44.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`, `tracing/std`, and `thiserror/std`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! Diagnostics are emitted through `tracing` under the `understory_item_spacing` target.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod decoration;
mod divider;
mod filter;
mod host;
mod inset;
mod row_index;
mod types;

pub use config::{ConfigError, ExcludeFn, SpacingConfig, SpacingConfigBuilder};
pub use decoration::SpacingDecoration;
pub use divider::{DividerSegments, grid_dividers, linear_divider};
pub use filter::ItemRange;
pub use host::{DividerCanvas, ItemProvider};
pub use inset::{grid_inset, linear_inset, staggered_inset};
pub use row_index::{Placement, RowFlags, RowIndex};
pub use types::{
    CrossAxis, DividerSegment, Edge, Inset, Lane, ListLayout, MainAxis, Orientation, VisibleItem,
};

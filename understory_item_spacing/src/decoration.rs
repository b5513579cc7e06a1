// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The decoration hosts talk to: range filtering, strategy dispatch, and the row cache.

use core::num::NonZeroUsize;

use kurbo::Rect;

use crate::divider::{DividerSegments, grid_dividers, linear_divider};
use crate::filter::included_range;
use crate::inset::{grid_inset, linear_inset, staggered_inset};
use crate::{DividerCanvas, Inset, ItemProvider, ListLayout, RowIndex, SpacingConfig, VisibleItem};

#[derive(Clone, Debug)]
struct CachedRows {
    version: u64,
    item_count: usize,
    span_count: NonZeroUsize,
    index: RowIndex,
}

/// Computes item insets and divider segments for a list.
///
/// The decoration owns an immutable [`SpacingConfig`] and, for grids, a cached
/// [`RowIndex`]. The cache is keyed on the provider's
/// [`structural_version`](ItemProvider::structural_version) and rebuilt before the first
/// query that observes a new version, so no change can be seen stale.
///
/// Items are excluded (zero inset, no dividers) when they fall in the skip prefix or
/// suffix, when the configured predicate rejects them, or when they are not valid
/// positions of the provider.
///
/// ## Example
///
/// ```rust
/// use core::num::NonZeroUsize;
/// use understory_item_spacing::{
///     Inset, ItemProvider, ListLayout, SpacingConfig, SpacingDecoration,
/// };
///
/// struct Items(usize);
///
/// impl ItemProvider for Items {
///     fn item_count(&self) -> usize {
///         self.0
///     }
///     fn structural_version(&self) -> u64 {
///         0
///     }
/// }
///
/// let config = SpacingConfig::builder().spacing(24.0).build().unwrap();
/// let mut decoration = SpacingDecoration::new(config);
/// let layout = ListLayout::vertical_grid(NonZeroUsize::new(3).unwrap());
///
/// let items = Items(7);
/// assert_eq!(decoration.compute_inset(&items, &layout, 0), Inset::new(0, 0, 16, 24));
/// assert_eq!(decoration.compute_inset(&items, &layout, 1), Inset::new(8, 0, 8, 24));
/// assert_eq!(decoration.compute_inset(&items, &layout, 6), Inset::new(0, 0, 16, 0));
/// ```
#[derive(Clone, Debug)]
pub struct SpacingDecoration {
    config: SpacingConfig,
    rows: Option<CachedRows>,
}

impl SpacingDecoration {
    /// Creates a decoration for `config`.
    #[must_use]
    pub fn new(config: SpacingConfig) -> Self {
        Self { config, rows: None }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SpacingConfig {
        &self.config
    }

    /// Drops the cached row index so the next grid query rebuilds it.
    ///
    /// Hosts whose providers expose a reliable
    /// [`structural_version`](ItemProvider::structural_version) never need this.
    pub fn invalidate(&mut self) {
        self.rows = None;
    }

    /// Returns `true` if `position` receives no inset and no dividers.
    #[must_use]
    pub fn is_excluded<P: ItemProvider + ?Sized>(&self, provider: &P, position: usize) -> bool {
        included_range(&self.config, provider.item_count(), position).is_none()
    }

    /// Returns the row index for a grid of `span_count` slots, rebuilding it if needed.
    pub fn row_index<P: ItemProvider + ?Sized>(
        &mut self,
        provider: &P,
        span_count: NonZeroUsize,
    ) -> &RowIndex {
        ensure_rows(&mut self.rows, provider, span_count)
    }

    /// Space to reserve around `position` under `layout`.
    pub fn compute_inset<P: ItemProvider + ?Sized>(
        &mut self,
        provider: &P,
        layout: &ListLayout,
        position: usize,
    ) -> Inset {
        let config = &self.config;
        let Some(range) = included_range(config, provider.item_count(), position) else {
            tracing::trace!(
                target: "understory_item_spacing::decoration",
                position,
                "excluded from spacing"
            );
            return Inset::ZERO;
        };
        match *layout {
            ListLayout::Linear {
                orientation,
                reverse,
            } => linear_inset(config, orientation, reverse, &range, position),
            ListLayout::Grid {
                orientation,
                span_count,
                reverse,
            } => {
                let rows = ensure_rows(&mut self.rows, provider, span_count);
                grid_inset(config, orientation, reverse, rows, &range, position)
            }
            ListLayout::Staggered {
                orientation,
                span_count,
            } => staggered_inset(
                config,
                orientation,
                span_count,
                &range,
                position,
                provider.lane_of(position),
            ),
        }
    }

    /// Divider segments for one visible item, in container coordinates.
    ///
    /// Staggered layouts produce none.
    pub fn divider_segments<P: ItemProvider + ?Sized>(
        &mut self,
        provider: &P,
        layout: &ListLayout,
        item: &VisibleItem,
        container: Rect,
    ) -> DividerSegments {
        let config = &self.config;
        let position = item.position;
        let Some(range) = included_range(config, provider.item_count(), position) else {
            return DividerSegments::new();
        };
        match *layout {
            ListLayout::Linear { orientation, .. } => {
                linear_divider(config, orientation, &range, position, item.bounds, container)
                    .into_iter()
                    .collect()
            }
            ListLayout::Grid {
                orientation,
                span_count,
                reverse,
            } => {
                let rows = ensure_rows(&mut self.rows, provider, span_count);
                grid_dividers(
                    config,
                    orientation,
                    reverse,
                    rows,
                    &range,
                    position,
                    item.bounds,
                )
            }
            ListLayout::Staggered { .. } => DividerSegments::new(),
        }
    }

    /// Paints the dividers of every visible item onto `canvas`.
    pub fn paint_dividers<P, I, C>(
        &mut self,
        provider: &P,
        layout: &ListLayout,
        container: Rect,
        items: I,
        canvas: &mut C,
    ) where
        P: ItemProvider + ?Sized,
        I: IntoIterator<Item = VisibleItem>,
        C: DividerCanvas + ?Sized,
    {
        if provider.item_count() == 0 {
            return;
        }
        for item in items {
            for segment in self.divider_segments(provider, layout, &item, container) {
                canvas.draw_line(&segment);
            }
        }
    }
}

fn ensure_rows<'a, P: ItemProvider + ?Sized>(
    cache: &'a mut Option<CachedRows>,
    provider: &P,
    span_count: NonZeroUsize,
) -> &'a RowIndex {
    let version = provider.structural_version();
    let item_count = provider.item_count();
    let current = cache.take().filter(|cached| {
        cached.version == version
            && cached.item_count == item_count
            && cached.span_count == span_count
    });
    let cached = current.unwrap_or_else(|| {
        let index = RowIndex::build(item_count, span_count, |p| provider.span_size_of(p));
        tracing::debug!(
            target: "understory_item_spacing::decoration",
            item_count,
            span_count = span_count.get(),
            rows = index.row_count(),
            version,
            "rebuilt row index"
        );
        CachedRows {
            version,
            item_count,
            span_count,
            index,
        }
    });
    &cache.insert(cached).index
}

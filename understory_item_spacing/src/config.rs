// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacing configuration and its validating builder.

use alloc::sync::Arc;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Predicate deciding whether an item position is excluded from spacing and dividers.
pub type ExcludeFn = dyn Fn(usize) -> bool + Send + Sync;

/// Errors reported by [`SpacingConfigBuilder::build`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The display density is not a finite, strictly positive number.
    #[error("density must be finite and greater than zero, got {0}")]
    InvalidDensity(f64),
    /// A distance is negative or not finite.
    #[error("`{field}` must be a finite, non-negative distance, got {value}")]
    InvalidDistance {
        /// Name of the offending setter.
        field: &'static str,
        /// The value in device-independent units.
        value: f64,
    },
    /// A distance does not fit the pixel range after density conversion.
    #[error("`{field}` converts to {value} px, which exceeds the pixel range")]
    OutOfRange {
        /// Name of the offending setter.
        field: &'static str,
        /// The converted value in pixels.
        value: f64,
    },
}

/// Immutable spacing and divider configuration, in device pixels.
///
/// Construct one with [`SpacingConfig::builder`]. The default value reserves no space
/// and draws zero-width dividers.
///
/// The stored spacing may be smaller than the divider thickness; queries use
/// [`effective_vertical_spacing`](Self::effective_vertical_spacing) and
/// [`effective_horizontal_spacing`](Self::effective_horizontal_spacing), which widen the
/// gap to fit the divider.
#[derive(Clone, Default)]
pub struct SpacingConfig {
    vertical_spacing: i32,
    horizontal_spacing: i32,
    vertical_outer: bool,
    horizontal_outer: bool,
    padding_start: i32,
    padding_end: i32,
    padding_top: i32,
    padding_bottom: i32,
    divider_thickness: i32,
    divider_padding: bool,
    hidden_first: bool,
    hidden_last: bool,
    skip_start: usize,
    skip_end: usize,
    exclude: Option<Arc<ExcludeFn>>,
}

impl fmt::Debug for SpacingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpacingConfig")
            .field("vertical_spacing", &self.vertical_spacing)
            .field("horizontal_spacing", &self.horizontal_spacing)
            .field("vertical_outer", &self.vertical_outer)
            .field("horizontal_outer", &self.horizontal_outer)
            .field("padding_start", &self.padding_start)
            .field("padding_end", &self.padding_end)
            .field("padding_top", &self.padding_top)
            .field("padding_bottom", &self.padding_bottom)
            .field("divider_thickness", &self.divider_thickness)
            .field("divider_padding", &self.divider_padding)
            .field("hidden_first", &self.hidden_first)
            .field("hidden_last", &self.hidden_last)
            .field("skip_start", &self.skip_start)
            .field("skip_end", &self.skip_end)
            .field("exclude", &self.exclude.is_some())
            .finish()
    }
}

impl SpacingConfig {
    /// Starts building a configuration at density `1.0`.
    #[must_use]
    pub fn builder() -> SpacingConfigBuilder {
        SpacingConfigBuilder::new()
    }

    /// Gap between items along the vertical axis, as configured.
    #[must_use]
    pub const fn vertical_spacing(&self) -> i32 {
        self.vertical_spacing
    }

    /// Gap between items along the horizontal axis, as configured.
    #[must_use]
    pub const fn horizontal_spacing(&self) -> i32 {
        self.horizontal_spacing
    }

    /// Vertical gap used by queries: never thinner than the divider.
    #[must_use]
    pub const fn effective_vertical_spacing(&self) -> i32 {
        max_i32(self.vertical_spacing, self.divider_thickness)
    }

    /// Horizontal gap used by queries: never thinner than the divider.
    #[must_use]
    pub const fn effective_horizontal_spacing(&self) -> i32 {
        max_i32(self.horizontal_spacing, self.divider_thickness)
    }

    /// Whether vertical outer edges of a grid get a full gap instead of padding.
    #[must_use]
    pub const fn vertical_outer(&self) -> bool {
        self.vertical_outer
    }

    /// Whether horizontal outer edges of a grid get a full gap instead of padding.
    #[must_use]
    pub const fn horizontal_outer(&self) -> bool {
        self.horizontal_outer
    }

    /// Padding on the left edge.
    #[must_use]
    pub const fn padding_start(&self) -> i32 {
        self.padding_start
    }

    /// Padding on the right edge.
    #[must_use]
    pub const fn padding_end(&self) -> i32 {
        self.padding_end
    }

    /// Padding on the top edge.
    #[must_use]
    pub const fn padding_top(&self) -> i32 {
        self.padding_top
    }

    /// Padding on the bottom edge.
    #[must_use]
    pub const fn padding_bottom(&self) -> i32 {
        self.padding_bottom
    }

    /// Stroke width of painted dividers.
    #[must_use]
    pub const fn divider_thickness(&self) -> i32 {
        self.divider_thickness
    }

    /// Whether linear dividers are trimmed by the cross-axis padding.
    #[must_use]
    pub const fn divider_padding(&self) -> bool {
        self.divider_padding
    }

    /// Whether the space before the first item (or row) is dropped.
    #[must_use]
    pub const fn hidden_first(&self) -> bool {
        self.hidden_first
    }

    /// Whether the space after the last item (or row) is dropped.
    #[must_use]
    pub const fn hidden_last(&self) -> bool {
        self.hidden_last
    }

    /// Number of leading items excluded from spacing.
    #[must_use]
    pub const fn skip_start(&self) -> usize {
        self.skip_start
    }

    /// Number of trailing items excluded from spacing.
    #[must_use]
    pub const fn skip_end(&self) -> usize {
        self.skip_end
    }

    /// Returns `true` if the custom predicate excludes `position`.
    #[must_use]
    pub fn excludes(&self, position: usize) -> bool {
        self.exclude.as_ref().is_some_and(|f| f(position))
    }

    /// Main-axis gap for an orientation: vertical lists separate items vertically.
    pub(crate) const fn main_spacing(&self, vertical: bool) -> i32 {
        if vertical {
            self.effective_vertical_spacing()
        } else {
            self.effective_horizontal_spacing()
        }
    }

    /// Cross-axis gap for an orientation.
    pub(crate) const fn cross_spacing(&self, vertical: bool) -> i32 {
        self.main_spacing(!vertical)
    }

    /// Main-axis paddings `(before, after)` for an orientation.
    pub(crate) const fn main_padding(&self, vertical: bool) -> (i32, i32) {
        if vertical {
            (self.padding_top, self.padding_bottom)
        } else {
            (self.padding_start, self.padding_end)
        }
    }

    /// Cross-axis paddings `(leading, trailing)` for an orientation.
    pub(crate) const fn cross_padding(&self, vertical: bool) -> (i32, i32) {
        self.main_padding(!vertical)
    }

    /// Outer flag of the vertical (`true`) or horizontal axis.
    pub(crate) const fn outer(&self, vertical_axis: bool) -> bool {
        if vertical_axis {
            self.vertical_outer
        } else {
            self.horizontal_outer
        }
    }

    /// Outer space of a grid edge on the given axis: a full gap when the outer flag
    /// is set, otherwise the padding of that edge.
    ///
    /// `start` selects the top or left edge.
    pub(crate) const fn outer_space(&self, vertical_axis: bool, start: bool) -> i32 {
        if self.outer(vertical_axis) {
            return self.main_spacing(vertical_axis);
        }
        let (before, after) = self.main_padding(vertical_axis);
        if start { before } else { after }
    }
}

const fn max_i32(a: i32, b: i32) -> i32 {
    if a > b { a } else { b }
}

/// Builder for [`SpacingConfig`].
///
/// Distances are given in device-independent units and converted to pixels with the
/// configured [`density`](Self::density) when [`build`](Self::build) runs.
#[derive(Clone)]
pub struct SpacingConfigBuilder {
    density: f64,
    vertical_spacing: f64,
    horizontal_spacing: f64,
    vertical_outer: bool,
    horizontal_outer: bool,
    padding_start: f64,
    padding_end: f64,
    padding_top: f64,
    padding_bottom: f64,
    divider_thickness: f64,
    divider_padding: bool,
    hidden_first: bool,
    hidden_last: bool,
    skip_start: usize,
    skip_end: usize,
    exclude: Option<Arc<ExcludeFn>>,
}

impl fmt::Debug for SpacingConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpacingConfigBuilder")
            .field("density", &self.density)
            .field("vertical_spacing", &self.vertical_spacing)
            .field("horizontal_spacing", &self.horizontal_spacing)
            .field("vertical_outer", &self.vertical_outer)
            .field("horizontal_outer", &self.horizontal_outer)
            .field("padding_start", &self.padding_start)
            .field("padding_end", &self.padding_end)
            .field("padding_top", &self.padding_top)
            .field("padding_bottom", &self.padding_bottom)
            .field("divider_thickness", &self.divider_thickness)
            .field("divider_padding", &self.divider_padding)
            .field("hidden_first", &self.hidden_first)
            .field("hidden_last", &self.hidden_last)
            .field("skip_start", &self.skip_start)
            .field("skip_end", &self.skip_end)
            .field("exclude", &self.exclude.is_some())
            .finish()
    }
}

impl Default for SpacingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpacingConfigBuilder {
    /// Creates a builder with zero spacing at density `1.0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            density: 1.0,
            vertical_spacing: 0.0,
            horizontal_spacing: 0.0,
            vertical_outer: false,
            horizontal_outer: false,
            padding_start: 0.0,
            padding_end: 0.0,
            padding_top: 0.0,
            padding_bottom: 0.0,
            divider_thickness: 0.0,
            divider_padding: false,
            hidden_first: false,
            hidden_last: false,
            skip_start: 0,
            skip_end: 0,
            exclude: None,
        }
    }

    /// Pixels per device-independent unit.
    #[must_use]
    pub fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Gap between items stacked vertically.
    #[must_use]
    pub fn vertical_spacing(mut self, dp: f64) -> Self {
        self.vertical_spacing = dp;
        self
    }

    /// Gap between items placed side by side.
    #[must_use]
    pub fn horizontal_spacing(mut self, dp: f64) -> Self {
        self.horizontal_spacing = dp;
        self
    }

    /// Sets both gaps.
    #[must_use]
    pub fn spacing(self, dp: f64) -> Self {
        self.vertical_spacing(dp).horizontal_spacing(dp)
    }

    /// Use a full vertical gap on the top and bottom edges of a horizontal grid.
    #[must_use]
    pub fn vertical_outer(mut self, outer: bool) -> Self {
        self.vertical_outer = outer;
        self
    }

    /// Use a full horizontal gap on the left and right edges of a vertical grid.
    #[must_use]
    pub fn horizontal_outer(mut self, outer: bool) -> Self {
        self.horizontal_outer = outer;
        self
    }

    /// Left padding.
    #[must_use]
    pub fn padding_start(mut self, dp: f64) -> Self {
        self.padding_start = dp;
        self
    }

    /// Right padding.
    #[must_use]
    pub fn padding_end(mut self, dp: f64) -> Self {
        self.padding_end = dp;
        self
    }

    /// Top padding.
    #[must_use]
    pub fn padding_top(mut self, dp: f64) -> Self {
        self.padding_top = dp;
        self
    }

    /// Bottom padding.
    #[must_use]
    pub fn padding_bottom(mut self, dp: f64) -> Self {
        self.padding_bottom = dp;
        self
    }

    /// Sets all four paddings.
    #[must_use]
    pub fn padding(self, dp: f64) -> Self {
        self.padding_start(dp)
            .padding_end(dp)
            .padding_top(dp)
            .padding_bottom(dp)
    }

    /// Divider stroke width.
    #[must_use]
    pub fn divider_thickness(mut self, dp: f64) -> Self {
        self.divider_thickness = dp;
        self
    }

    /// Trim linear dividers by the cross-axis padding.
    #[must_use]
    pub fn divider_padding(mut self, enabled: bool) -> Self {
        self.divider_padding = enabled;
        self
    }

    /// Drop the space before the first item (or row).
    #[must_use]
    pub fn hidden_first(mut self, hidden: bool) -> Self {
        self.hidden_first = hidden;
        self
    }

    /// Drop the space after the last item (or row).
    #[must_use]
    pub fn hidden_last(mut self, hidden: bool) -> Self {
        self.hidden_last = hidden;
        self
    }

    /// Exclude this many leading items.
    #[must_use]
    pub fn skip_start(mut self, count: usize) -> Self {
        self.skip_start = count;
        self
    }

    /// Exclude this many trailing items.
    #[must_use]
    pub fn skip_end(mut self, count: usize) -> Self {
        self.skip_end = count;
        self
    }

    /// Exclude every position for which `predicate` returns `true`.
    #[must_use]
    pub fn exclude_if<F>(mut self, predicate: F) -> Self
    where
        F: Fn(usize) -> bool + Send + Sync + 'static,
    {
        self.exclude = Some(Arc::new(predicate));
        self
    }

    /// Validates the builder and converts every distance to pixels.
    pub fn build(self) -> Result<SpacingConfig, ConfigError> {
        let density = self.density;
        if !density.is_finite() || density <= 0.0 {
            return Err(ConfigError::InvalidDensity(density));
        }
        let px = |field: &'static str, value: f64| to_px(field, value, density);
        Ok(SpacingConfig {
            vertical_spacing: px("vertical_spacing", self.vertical_spacing)?,
            horizontal_spacing: px("horizontal_spacing", self.horizontal_spacing)?,
            vertical_outer: self.vertical_outer,
            horizontal_outer: self.horizontal_outer,
            padding_start: px("padding_start", self.padding_start)?,
            padding_end: px("padding_end", self.padding_end)?,
            padding_top: px("padding_top", self.padding_top)?,
            padding_bottom: px("padding_bottom", self.padding_bottom)?,
            divider_thickness: px("divider_thickness", self.divider_thickness)?,
            divider_padding: self.divider_padding,
            hidden_first: self.hidden_first,
            hidden_last: self.hidden_last,
            skip_start: self.skip_start,
            skip_end: self.skip_end,
            exclude: self.exclude,
        })
    }
}

/// Rounds half up, matching the usual dp-to-px convention.
fn to_px(field: &'static str, dp: f64, density: f64) -> Result<i32, ConfigError> {
    if !dp.is_finite() || dp < 0.0 {
        return Err(ConfigError::InvalidDistance { field, value: dp });
    }
    let px = (dp * density + 0.5).floor();
    if px > f64::from(i32::MAX) {
        return Err(ConfigError::OutOfRange { field, value: px });
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Range checked above; the value is a non-negative integer"
    )]
    Ok(px as i32)
}

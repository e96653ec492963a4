// Copyright 2025 the Scrollspy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookahead-band geometry.
//!
//! ## Overview
//!
//! A heading is considered active when its offset falls inside a window
//! slightly ahead of the viewport top, so it highlights shortly before it
//! reaches the vertical center, matching natural reading position. The
//! window is `[position + lead·H, position + reach·H]` for viewport height
//! `H`; [`BandPolicy`] holds the two fractions and constructs [`Band`]s.

use crate::types::{Ratio, Scalar};

/// A closed 1D interval `[min, max]` of vertical offsets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Band<T> {
    /// Inclusive lower bound.
    pub min: T,
    /// Inclusive upper bound.
    pub max: T,
}

impl<T: Copy + PartialOrd> Band<T> {
    /// Create a band from inclusive bounds.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Whether the offset lies within the band.
    pub fn contains(&self, v: T) -> bool {
        self.min <= v && v <= self.max
    }

    /// Return true if the band is inverted (contains nothing). Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }
}

/// Fractions of the viewport height defining the lookahead band.
///
/// `lead` is how far below the viewport top the band begins; `reach` is how
/// far down it extends. Defaults are 1/6 and 1/2: a heading becomes active
/// once it rises above the vertical center and stays attributable until it
/// passes a sixth of the viewport from the top.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BandPolicy {
    /// Fraction of the viewport height at which the band starts.
    pub lead: Ratio,
    /// Fraction of the viewport height at which the band ends.
    pub reach: Ratio,
}

impl Default for BandPolicy {
    fn default() -> Self {
        Self {
            lead: Ratio::new(1, 6),
            reach: Ratio::new(1, 2),
        }
    }
}

impl BandPolicy {
    /// The lookahead band for a content scroll `position` and viewport height.
    pub fn band_at<T: Scalar>(&self, position: T, viewport: T) -> Band<T> {
        Band::new(
            T::add(position, self.lead.of(viewport)),
            T::add(position, self.reach.of(viewport)),
        )
    }

    /// The scroll position that places a heading at the band's leading edge.
    ///
    /// Used for jump navigation: scrolling the content here makes the target
    /// heading register as active on arrival. Clamped so the content never
    /// scrolls above its top.
    pub fn jump_target<T: Scalar>(&self, heading_offset: T, viewport: T) -> T {
        T::max_zero(T::sub(heading_offset, self.lead.of(viewport)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_contains_is_inclusive() {
        let b = Band::new(700.0, 1100.0);
        assert!(b.contains(700.0));
        assert!(b.contains(1100.0));
        assert!(!b.contains(699.9));
        assert!(!b.contains(1100.1));
    }

    #[test]
    fn inverted_band_is_empty() {
        let b = Band::new(10.0, 0.0);
        assert!(b.is_empty());
        assert!(!b.contains(5.0));
    }

    #[test]
    fn default_band_at_viewport_1200() {
        let b = BandPolicy::default().band_at(500.0_f64, 1200.0);
        assert_eq!(b, Band::new(700.0, 1100.0));
    }

    #[test]
    fn band_at_integer_scalars() {
        let b = BandPolicy::default().band_at(500_i64, 1200);
        assert_eq!(b, Band::new(700, 1100));
    }

    #[test]
    fn jump_target_lands_on_leading_edge() {
        let p = BandPolicy::default();
        // Arriving at the target position puts the heading exactly on the
        // band's lower bound, so it is detected as active.
        let target = p.jump_target(800.0_f64, 1200.0);
        assert_eq!(target, 600.0);
        assert!(p.band_at(target, 1200.0).contains(800.0));
    }

    #[test]
    fn jump_target_clamps_to_top() {
        assert_eq!(BandPolicy::default().jump_target(100.0_f64, 1200.0), 0.0);
    }
}

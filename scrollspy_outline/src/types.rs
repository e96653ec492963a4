// Copyright 2025 the Scrollspy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Heading descriptors, level filtering, and the scalar abstraction.

use core::fmt::Debug;

use alloc::string::String;

/// Default number of nesting levels admitted beyond the base level.
pub const DEFAULT_MAX_DEPTH: u8 = 4;

/// A navigable document section.
///
/// `slug` is the stable identifier used for activation tracking and URL
/// fragments. `offset` is the vertical distance from the top of the content
/// area to the heading's rendered position; it is `None` until the rendering
/// layer has measured the heading, and may be rewritten whenever content
/// reflows. Headings without an offset never participate in band scans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading<K, T> {
    /// Stable slug identifier.
    pub slug: K,
    /// Display title for sidebar entries.
    pub title: String,
    /// Nesting depth (1 = top-level section).
    pub level: u8,
    /// Vertical offset from the content top, once measured.
    pub offset: Option<T>,
}

impl<K, T> Heading<K, T> {
    /// Create an unmeasured heading.
    pub fn new(slug: K, title: impl Into<String>, level: u8) -> Self {
        Self {
            slug,
            title: title.into(),
            level,
            offset: None,
        }
    }

    /// Attach a measured vertical offset.
    pub fn with_offset(mut self, offset: T) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Display filter for sidebar entries.
///
/// Admits headings whose level does not exceed `base + max_depth`. The filter
/// affects only what a sidebar shows and links; the activation scan always
/// covers the full outline, so a filtered-out deep heading can still become
/// active with no corresponding visible entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LevelFilter {
    base: u8,
    max_depth: u8,
}

impl LevelFilter {
    /// Filter rooted at `base` with the default depth allowance.
    pub const fn new(base: u8) -> Self {
        Self {
            base,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Filter rooted at `base` admitting `max_depth` levels beyond it.
    pub const fn with_max_depth(base: u8, max_depth: u8) -> Self {
        Self { base, max_depth }
    }

    /// Whether a heading at `level` is shown.
    pub fn admits(&self, level: u8) -> bool {
        level <= self.base.saturating_add(self.max_depth)
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::new(1)
    }
}

/// An exact rational fraction applied to scalar lengths.
///
/// The band and follow thresholds (1/6, 1/2, 1/4, 3/4) are ratios rather
/// than floats so integer scalar types stay exact.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ratio {
    /// Numerator.
    pub num: u32,
    /// Denominator. Must be non-zero.
    pub den: u32,
}

impl Ratio {
    /// Create a ratio `num / den`.
    ///
    /// Panics (at compile time for const contexts) if `den` is zero.
    pub const fn new(num: u32, den: u32) -> Self {
        assert!(den != 0, "ratio denominator must be non-zero");
        Self { num, den }
    }

    /// Apply the ratio to a scalar length.
    pub fn of<T: Scalar>(self, v: T) -> T {
        T::mul_ratio(v, self)
    }
}

/// Numeric scalar abstraction for 1D scroll geometry.
///
/// Provides the minimal operations the band and follow computations need.
/// Integer implementations saturate rather than wrap.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Max of the scalar value and zero.
    fn max_zero(v: Self) -> Self;

    /// Multiply a scalar by an exact ratio.
    fn mul_ratio(v: Self, r: Ratio) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn max_zero(v: Self) -> Self {
        v.max(0.0)
    }

    #[inline]
    fn mul_ratio(v: Self, r: Ratio) -> Self {
        v * (r.num as Self) / (r.den as Self)
    }
}

impl Scalar for f64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn max_zero(v: Self) -> Self {
        v.max(0.0)
    }

    #[inline]
    fn mul_ratio(v: Self, r: Ratio) -> Self {
        v * Self::from(r.num) / Self::from(r.den)
    }
}

impl Scalar for i64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn max_zero(v: Self) -> Self {
        v.max(0)
    }

    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The i128 product is divided then clamped to the i64 range before narrowing."
    )]
    fn mul_ratio(v: Self, r: Ratio) -> Self {
        let wide = (v as i128 * r.num as i128) / (r.den as i128);
        wide.clamp(Self::MIN as i128, Self::MAX as i128) as Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_builder_sets_offset() {
        let h: Heading<&str, f64> = Heading::new("intro", "Introduction", 2);
        assert_eq!(h.offset, None);
        let h = h.with_offset(120.0);
        assert_eq!(h.offset, Some(120.0));
        assert_eq!(h.level, 2);
    }

    #[test]
    fn level_filter_admits_through_depth() {
        let f = LevelFilter::new(2);
        assert!(f.admits(2));
        assert!(f.admits(6));
        assert!(!f.admits(7));
    }

    #[test]
    fn level_filter_custom_depth() {
        let f = LevelFilter::with_max_depth(1, 1);
        assert!(f.admits(2));
        assert!(!f.admits(3));
    }

    #[test]
    fn level_filter_saturates_near_u8_max() {
        let f = LevelFilter::new(u8::MAX - 1);
        assert!(f.admits(u8::MAX));
    }

    #[test]
    fn ratio_of_floats() {
        assert_eq!(Ratio::new(1, 6).of(1200.0_f64), 200.0);
        assert_eq!(Ratio::new(1, 2).of(1200.0_f32), 600.0);
        assert_eq!(Ratio::new(3, 4).of(1200.0_f64), 900.0);
    }

    #[test]
    fn ratio_of_i64_is_exact_and_saturating() {
        assert_eq!(Ratio::new(1, 4).of(1200_i64), 300);
        // Truncates toward zero like integer division.
        assert_eq!(Ratio::new(1, 6).of(100_i64), 16);
        // A huge numerator cannot overflow; the product is widened then clamped.
        assert_eq!(Ratio::new(u32::MAX, 1).of(i64::MAX), i64::MAX);
    }

    #[test]
    fn i64_arithmetic_saturates() {
        assert_eq!(i64::add(i64::MAX, 1), i64::MAX);
        assert_eq!(i64::sub(i64::MIN, 1), i64::MIN);
        assert_eq!(i64::max_zero(-5), 0);
    }
}

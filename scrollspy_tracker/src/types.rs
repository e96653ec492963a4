// Copyright 2025 the Scrollspy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the tracker: state, events, capabilities, collaborator
//! traits, and the sidebar follow policy.
//!
//! ## Overview
//!
//! These types describe the tracker's protocol and its injected
//! collaborators. The tracker never reaches into a host imperatively; every
//! surface it touches is a trait implemented by the rendering layer and
//! passed in at attach time.

use scrollspy_outline::{Band, Ratio, Scalar};

/// How a programmatic scroll should be performed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScrollMode {
    /// Jump immediately. Used for passive sidebar follow-along.
    Instant,
    /// Animate toward the target. Used for user-initiated jumps.
    Animated,
}

/// Outcome of a heading-link activation.
///
/// Returned by [`Tracker::on_heading_activated`](crate::tracker::Tracker::on_heading_activated)
/// so the host knows whether to let its default navigation proceed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum JumpOutcome {
    /// Nothing was done; the host's default navigation (e.g. a plain anchor
    /// jump) should proceed.
    Fallback,
    /// The tracker issued an assisted jump; the host should suppress its
    /// default navigation.
    Assisted,
}

/// An observable tracker transition.
///
/// Returned by [`Tracker::on_content_scroll`](crate::tracker::Tracker::on_content_scroll).
/// At most one of each variant is emitted per call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackerEvent<K> {
    /// The active heading changed to the given slug.
    Activated(K),
    /// A pending jump's target was reached; its suspension is cleared.
    JumpCompleted(K),
}

bitflags::bitflags! {
    /// Host environment capabilities relevant to jump navigation.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Smooth programmatic scrolling is available and acceptable.
        /// Hosts honoring a reduced-motion preference leave this unset.
        const SMOOTH_SCROLL    = 0b0000_0001;
        /// The URL fragment can be replaced without a full navigation.
        const FRAGMENT_HISTORY = 0b0000_0010;
    }
}

impl Capabilities {
    /// Whether assisted jump navigation is supported.
    ///
    /// Both flags are required; otherwise the tracker degrades to default
    /// (non-animated) navigation rather than failing.
    pub fn supports_assisted_jump(self) -> bool {
        self.contains(Self::SMOOTH_SCROLL | Self::FRAGMENT_HISTORY)
    }
}

/// Tracker state: the active heading and any in-flight jump suspension.
///
/// Created when a tracker is attached and dropped when it detaches. Mutated
/// only by the tracker's operations, synchronously within a single event
/// handler invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerState<K> {
    pub(crate) active: Option<K>,
    pub(crate) suspended: Option<K>,
}

impl<K> Default for TrackerState<K> {
    fn default() -> Self {
        Self {
            active: None,
            suspended: None,
        }
    }
}

impl<K> TrackerState<K> {
    /// The currently highlighted heading, if any.
    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    /// The target of an in-flight jump, if one is pending.
    ///
    /// While set, automatic sidebar follow is suppressed. It is cleared only
    /// by scroll-position arrival detection, never by a timer.
    pub fn suspended(&self) -> Option<&K> {
        self.suspended.as_ref()
    }
}

/// A minimal scroll container: read and write a scalar scroll offset.
pub trait ScrollHandle<T> {
    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> T;

    /// Scroll to `offset`, instantly or animated.
    fn set_scroll_offset(&mut self, offset: T, mode: ScrollMode);
}

/// The sidebar's scroll container plus entry geometry.
pub trait SidebarHandle<K, T>: ScrollHandle<T> {
    /// Vertical position of the entry for `slug` within the sidebar content,
    /// or `None` when the entry is absent or not yet rendered.
    fn entry_offset(&self, slug: &K) -> Option<T>;
}

/// Ambient viewport and capability information supplied by the host.
pub trait Environment<T> {
    /// Current viewport height.
    fn viewport_height(&self) -> T;

    /// Capability probe for assisted jump navigation.
    fn capabilities(&self) -> Capabilities;
}

/// Persist a jumped-to slug as the URL fragment without a full navigation.
pub trait HistorySink<K> {
    /// Replace the current fragment with `#<slug>`.
    fn replace_fragment(&mut self, slug: &K);
}

/// A no-op history sink used by default when fragment persistence is not needed.
///
/// Used by [`Tracker::attach`](crate::tracker::Tracker::attach).
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHistory;

impl<K> HistorySink<K> for NoHistory {
    #[inline]
    fn replace_fragment(&mut self, _slug: &K) {}
}

/// An inert sidebar handle for hosts without a rendered sidebar.
///
/// Every entry lookup returns `None`, so the tracker's sidebar follow step
/// skips silently.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoSidebar;

impl<T: Scalar> ScrollHandle<T> for NoSidebar {
    #[inline]
    fn scroll_offset(&self) -> T {
        T::zero()
    }

    #[inline]
    fn set_scroll_offset(&mut self, _offset: T, _mode: ScrollMode) {}
}

impl<K, T: Scalar> SidebarHandle<K, T> for NoSidebar {
    #[inline]
    fn entry_offset(&self, _slug: &K) -> Option<T> {
        None
    }
}

/// Fractions of the viewport height bounding the sidebar comfort window.
///
/// The active entry is left alone while it sits inside
/// `[offset + upper·H, offset + lower·H]`; outside, the sidebar is scrolled
/// so the entry lands exactly on the violated threshold. Defaults are 1/4
/// and 3/4.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FollowPolicy {
    /// Fraction of the viewport height for the upper threshold.
    pub upper: Ratio,
    /// Fraction of the viewport height for the lower threshold.
    pub lower: Ratio,
}

impl Default for FollowPolicy {
    fn default() -> Self {
        Self {
            upper: Ratio::new(1, 4),
            lower: Ratio::new(3, 4),
        }
    }
}

impl FollowPolicy {
    /// The comfort window for a sidebar scroll `offset` and viewport height.
    pub fn comfort_band<T: Scalar>(&self, offset: T, viewport: T) -> Band<T> {
        Band::new(
            T::add(offset, self.upper.of(viewport)),
            T::add(offset, self.lower.of(viewport)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capabilities_require_both_flags() {
        assert!(!Capabilities::empty().supports_assisted_jump());
        assert!(!Capabilities::SMOOTH_SCROLL.supports_assisted_jump());
        assert!(!Capabilities::FRAGMENT_HISTORY.supports_assisted_jump());
        assert!(Capabilities::all().supports_assisted_jump());
    }

    #[test]
    fn comfort_band_default_thresholds() {
        let band = FollowPolicy::default().comfort_band(100.0_f64, 1200.0);
        assert_eq!(band, Band::new(400.0, 1000.0));
    }

    #[test]
    fn no_sidebar_is_inert() {
        let mut s = NoSidebar;
        assert_eq!(ScrollHandle::<f64>::scroll_offset(&s), 0.0);
        s.set_scroll_offset(50.0, ScrollMode::Instant);
        assert_eq!(ScrollHandle::<f64>::scroll_offset(&s), 0.0);
        assert_eq!(SidebarHandle::<&str, f64>::entry_offset(&s, &"x"), None);
    }

    #[test]
    fn tracker_state_starts_empty() {
        let s: TrackerState<&str> = TrackerState::default();
        assert_eq!(s.active(), None);
        assert_eq!(s.suspended(), None);
    }
}

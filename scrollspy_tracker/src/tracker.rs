// Copyright 2025 the Scrollspy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracker implementation.
//!
//! ## Overview
//!
//! Maps a scalar content scroll position to an active heading, keeps the
//! sidebar scrolled so the active entry stays visible, and handles explicit
//! jump-to-heading requests.
//!
//! ## Activation
//!
//! - Each scroll event computes the lookahead band from the live viewport
//!   height and scans the outline in document order.
//! - The first heading with a measured offset inside the band wins.
//! - An empty band changes nothing: once active, a heading stays active
//!   until another heading claims the band.
//!
//! ## Suspension
//!
//! - A jump sets the suspension before the animated scroll is issued.
//! - While suspended, sidebar follow is suppressed so the user's sidebar
//!   view is not fought over during the animation.
//! - The suspension clears only when a scroll event detects the target
//!   inside the band, never by a timer, so arrival detection is always
//!   consistent with actual scroll position.
//! - A second jump while one is in flight simply overwrites the suspension.
//!
//! ## See Also
//!
//! [`types`](crate::types) for the collaborator traits and policies.

use core::marker::PhantomData;

use alloc::vec::Vec;

use scrollspy_outline::{BandPolicy, Outline, Scalar};

use crate::types::{
    Environment, FollowPolicy, HistorySink, JumpOutcome, NoHistory, ScrollHandle, ScrollMode,
    SidebarHandle, TrackerEvent, TrackerState,
};

/// Scroll-synchronized table-of-contents tracker.
///
/// ## Usage
///
/// - Construct with [`Tracker::attach`] when URL-fragment persistence is not
///   needed, or [`Tracker::with_history`] to record jumped-to slugs.
/// - Optionally configure policies with [`Tracker::set_band_policy`] and
///   [`Tracker::set_follow_policy`].
/// - Call [`Tracker::on_content_scroll`] on every content scroll event with
///   the freshly read outline; wire sidebar links to
///   [`Tracker::on_heading_activated`].
/// - Call [`Tracker::detach`] to release the collaborators deterministically.
///
/// The tracker owns its collaborators for its whole attached lifetime; all
/// state transitions happen synchronously inside a single operation call, so
/// no locking is ever involved.
pub struct Tracker<K, T, C, S, E, H = NoHistory> {
    content: C,
    sidebar: S,
    env: E,
    history: H,
    state: TrackerState<K>,
    bands: BandPolicy,
    follow: FollowPolicy,
    _scalar: PhantomData<fn() -> T>,
}

impl<K: core::fmt::Debug, T, C, S, E, H> core::fmt::Debug for Tracker<K, T, C, S, E, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracker")
            .field("state", &self.state)
            .field("bands", &self.bands)
            .field("follow", &self.follow)
            .finish_non_exhaustive()
    }
}

impl<K, T, C, S, E> Tracker<K, T, C, S, E, NoHistory> {
    /// Attach to a content pane, sidebar, and environment, without fragment
    /// persistence.
    pub fn attach(content: C, sidebar: S, env: E) -> Self {
        Self::with_history(content, sidebar, env, NoHistory)
    }
}

impl<K, T, C, S, E, H> Tracker<K, T, C, S, E, H> {
    /// Attach with an explicit history sink for URL-fragment updates.
    pub fn with_history(content: C, sidebar: S, env: E, history: H) -> Self {
        Self {
            content,
            sidebar,
            env,
            history,
            state: TrackerState::default(),
            bands: BandPolicy::default(),
            follow: FollowPolicy::default(),
            _scalar: PhantomData,
        }
    }

    /// Replace the lookahead band policy.
    pub fn set_band_policy(&mut self, bands: BandPolicy) {
        self.bands = bands;
    }

    /// Replace the sidebar follow policy.
    pub fn set_follow_policy(&mut self, follow: FollowPolicy) {
        self.follow = follow;
    }

    /// Current tracker state.
    pub fn state(&self) -> &TrackerState<K> {
        &self.state
    }

    /// The currently highlighted heading, if any.
    pub fn active(&self) -> Option<&K> {
        self.state.active()
    }

    /// The target of an in-flight jump, if one is pending.
    pub fn suspended(&self) -> Option<&K> {
        self.state.suspended()
    }

    /// The content pane handle.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// The sidebar handle.
    pub fn sidebar(&self) -> &S {
        &self.sidebar
    }

    /// The history sink.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Forget the active heading and any pending suspension.
    ///
    /// Call when the tracked content is replaced wholesale and stale slugs
    /// must not linger.
    pub fn reset(&mut self) {
        self.state = TrackerState::default();
    }

    /// Detach, releasing the collaborators back to the host.
    ///
    /// Dropping the tracker state here is the whole teardown; there is no
    /// other resource to release.
    pub fn detach(self) -> (C, S, E, H) {
        (self.content, self.sidebar, self.env, self.history)
    }
}

impl<K, T, C, S, E, H> Tracker<K, T, C, S, E, H>
where
    K: Clone + Eq,
    T: Scalar,
    C: ScrollHandle<T>,
    S: SidebarHandle<K, T>,
    E: Environment<T>,
    H: HistorySink<K>,
{
    /// Handle a content scroll event.
    ///
    /// `outline` is re-read on every call, so offsets rewritten after a
    /// reflow take effect immediately. Returns the transitions this event
    /// caused: at most one [`TrackerEvent::JumpCompleted`] followed by at
    /// most one [`TrackerEvent::Activated`].
    ///
    /// When no heading falls inside the lookahead band the previous active
    /// heading is kept (sticky behavior) and nothing is returned.
    pub fn on_content_scroll(
        &mut self,
        outline: &Outline<K, T>,
        position: T,
    ) -> Vec<TrackerEvent<K>> {
        let viewport = self.env.viewport_height();
        let band = self.bands.band_at(position, viewport);
        let Some(hit) = outline.first_in_band(&band) else {
            return Vec::new();
        };

        let mut events = Vec::new();
        let arrived = self.state.suspended.as_ref() == Some(&hit.slug);
        if arrived {
            // The user's jump has reached its target.
            self.state.suspended = None;
            events.push(TrackerEvent::JumpCompleted(hit.slug.clone()));
        }
        let changed = self.state.active.as_ref() != Some(&hit.slug);
        if changed {
            self.state.active = Some(hit.slug.clone());
            events.push(TrackerEvent::Activated(hit.slug.clone()));
        }
        // Follow along unless a jump toward a different heading is still in
        // flight. Arrival re-enables follow within the same call.
        if (changed || arrived) && self.state.suspended.is_none() {
            self.sync_sidebar();
        }
        events
    }

    /// Keep the sidebar scrolled so the active entry stays comfortably
    /// visible.
    ///
    /// Skips silently when a jump suspension is active, when no heading is
    /// active, or when the active entry has no known position. Otherwise,
    /// if the entry sits outside the comfort window, the sidebar is scrolled
    /// instantly so the entry lands exactly on the violated threshold,
    /// clamped so the sidebar never scrolls above its top. This is a passive
    /// follow-along, hence never animated.
    pub fn sync_sidebar(&mut self) {
        if self.state.suspended.is_some() {
            return;
        }
        let Some(active) = self.state.active.as_ref() else {
            return;
        };
        let Some(entry) = self.sidebar.entry_offset(active) else {
            return;
        };
        let viewport = self.env.viewport_height();
        let offset = self.sidebar.scroll_offset();
        let comfort = self.follow.comfort_band(offset, viewport);
        if comfort.contains(entry) {
            return;
        }
        let threshold = if entry < comfort.min {
            self.follow.upper
        } else {
            self.follow.lower
        };
        let target = T::max_zero(T::sub(entry, threshold.of(viewport)));
        if target == offset {
            return;
        }
        self.sidebar.set_scroll_offset(target, ScrollMode::Instant);
    }

    /// Handle a user-activated heading link from the sidebar.
    ///
    /// In an environment without both [`Capabilities`](crate::types::Capabilities)
    /// flags, or when the target heading is unknown or unmeasured, nothing
    /// is mutated and [`JumpOutcome::Fallback`] tells the host to let its
    /// default navigation proceed.
    ///
    /// Otherwise the suspension is set *before* the animated scroll is
    /// issued, the content pane is scrolled so the target lands on the
    /// band's leading edge, and the slug is recorded in the history sink.
    pub fn on_heading_activated(&mut self, outline: &Outline<K, T>, slug: &K) -> JumpOutcome {
        if !self.env.capabilities().supports_assisted_jump() {
            return JumpOutcome::Fallback;
        }
        let Some(offset) = outline.get(slug).and_then(|h| h.offset) else {
            return JumpOutcome::Fallback;
        };
        let viewport = self.env.viewport_height();
        // Suspension must be in place before the scroll starts so no scroll
        // event can observe the animation without it.
        self.state.suspended = Some(slug.clone());
        let target = self.bands.jump_target(offset, viewport);
        self.content.set_scroll_offset(target, ScrollMode::Animated);
        self.history.replace_fragment(slug);
        JumpOutcome::Assisted
    }
}

// Copyright 2025 the Scrollspy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrollspy Tracker: scroll-synchronized table-of-contents tracking.
//!
//! ## Overview
//!
//! Given a stream of content scroll positions and an ordered outline of
//! headings, the [`Tracker`](crate::tracker::Tracker) decides which heading
//! is active, keeps a sidebar scrolled so the active entry stays visible,
//! and handles user-initiated jump-to-heading navigation that temporarily
//! suspends the automatic follow.
//!
//! The tracker performs no rendering and no hit testing. Everything it
//! touches in the host (the content pane, the sidebar, viewport metrics,
//! browsing history) is a trait implemented by the rendering layer and
//! injected at attach time; see [`types`](crate::types).
//!
//! ## Inputs
//!
//! - An [`Outline`](scrollspy_outline::Outline), re-read on every update so
//!   reflowed offsets take effect immediately.
//! - A scroll-position stream, fed to
//!   [`Tracker::on_content_scroll`](crate::tracker::Tracker::on_content_scroll).
//!   The call is O(outline length) with no allocation beyond the returned
//!   events, cheap enough for per-frame invocation.
//! - Sidebar link activations, fed to
//!   [`Tracker::on_heading_activated`](crate::tracker::Tracker::on_heading_activated).
//!
//! ## Degradation
//!
//! All absence is handled defensively (unmeasured headings are skipped,
//! a missing sidebar entry skips the follow step, an incapable environment
//! falls back to default navigation). There are no error types and no
//! fatal paths; every operation is idempotent for malformed input.
//!
//! ## Minimal example
//!
//! ```
//! use scrollspy_outline::{Heading, Outline};
//! use scrollspy_tracker::tracker::Tracker;
//! use scrollspy_tracker::types::{
//!     Capabilities, Environment, NoSidebar, ScrollHandle, ScrollMode, TrackerEvent,
//! };
//!
//! struct Pane(f64);
//! impl ScrollHandle<f64> for Pane {
//!     fn scroll_offset(&self) -> f64 { self.0 }
//!     fn set_scroll_offset(&mut self, offset: f64, _mode: ScrollMode) { self.0 = offset; }
//! }
//!
//! struct Fixed;
//! impl Environment<f64> for Fixed {
//!     fn viewport_height(&self) -> f64 { 1200.0 }
//!     fn capabilities(&self) -> Capabilities { Capabilities::empty() }
//! }
//!
//! let outline: Outline<&str, f64> = [
//!     Heading::new("intro", "Introduction", 1).with_offset(300.0),
//!     Heading::new("setup", "Setup", 2).with_offset(800.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut tracker = Tracker::attach(Pane(0.0), NoSidebar, Fixed);
//! let events = tracker.on_content_scroll(&outline, 400.0);
//! assert_eq!(events, vec![TrackerEvent::Activated("setup")]);
//! assert_eq!(tracker.active(), Some(&"setup"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod tracker;
pub mod types;

pub use tracker::Tracker;
pub use types::{
    Capabilities, Environment, FollowPolicy, HistorySink, JumpOutcome, NoHistory, NoSidebar,
    ScrollHandle, ScrollMode, SidebarHandle, TrackerEvent, TrackerState,
};

// Copyright 2025 the Scrollspy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assisted jump navigation: suspension, arrival, fragment history.
//!
//! A capable environment turns a sidebar click into an animated content
//! scroll. The suspension set by the jump keeps the sidebar still while the
//! content animates past intermediate headings, and arrival detection
//! clears it.
//!
//! Run:
//! - `cargo run -p scrollspy_demos --example tracker_jump`

use scrollspy_outline::{Heading, Outline};
use scrollspy_tracker::{
    Capabilities, Environment, HistorySink, JumpOutcome, ScrollHandle, ScrollMode, SidebarHandle,
    Tracker, TrackerEvent,
};

struct Pane(f64);

impl ScrollHandle<f64> for Pane {
    fn scroll_offset(&self) -> f64 {
        self.0
    }
    fn set_scroll_offset(&mut self, offset: f64, mode: ScrollMode) {
        println!("content scroll -> {offset} ({mode:?})");
        self.0 = offset;
    }
}

struct Sidebar {
    offset: f64,
    rows: Vec<(&'static str, f64)>,
}

impl ScrollHandle<f64> for Sidebar {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }
    fn set_scroll_offset(&mut self, offset: f64, _mode: ScrollMode) {
        println!("sidebar scroll -> {offset}");
        self.offset = offset;
    }
}

impl SidebarHandle<&'static str, f64> for Sidebar {
    fn entry_offset(&self, slug: &&'static str) -> Option<f64> {
        self.rows.iter().find(|(s, _)| s == slug).map(|(_, o)| *o)
    }
}

struct Browser;

impl Environment<f64> for Browser {
    fn viewport_height(&self) -> f64 {
        400.0
    }
    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }
}

#[derive(Default)]
struct Fragments(Vec<&'static str>);

impl HistorySink<&'static str> for Fragments {
    fn replace_fragment(&mut self, slug: &&'static str) {
        println!("history fragment -> #{slug}");
        self.0.push(slug);
    }
}

fn main() {
    let slugs = [
        "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11",
    ];
    let outline: Outline<&str, f64> = slugs
        .iter()
        .enumerate()
        .map(|(i, s)| Heading::new(*s, "Section", 1).with_offset(300.0 + i as f64 * 500.0))
        .collect();
    let sidebar = Sidebar {
        offset: 0.0,
        rows: slugs.iter().enumerate().map(|(i, s)| (*s, i as f64 * 40.0)).collect(),
    };

    let mut tracker =
        Tracker::with_history(Pane(0.0), sidebar, Browser, Fragments::default());

    // Click the deep link.
    let outcome = tracker.on_heading_activated(&outline, &"s10");
    assert_eq!(outcome, JumpOutcome::Assisted);
    assert_eq!(tracker.suspended(), Some(&"s10"));

    // Scroll events fire while the animation passes intermediate headings;
    // the sidebar stays put.
    for position in [700.0, 2200.0, 3700.0] {
        let events = tracker.on_content_scroll(&outline, position);
        println!("mid-flight events at {position}: {events:?}");
        assert_eq!(tracker.sidebar().offset, 0.0);
    }

    // Arrival clears the suspension and the sidebar follows again.
    let events = tracker.on_content_scroll(&outline, 5200.0);
    assert!(events.contains(&TrackerEvent::JumpCompleted("s10")));
    assert_eq!(tracker.suspended(), None);
    assert!(tracker.sidebar().offset > 0.0);

    let (_, _, _, fragments) = tracker.detach();
    assert_eq!(fragments.0, vec!["s10"]);
}

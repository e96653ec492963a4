// Copyright 2025 the Scrollspy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-heading tracking over a monotonic scroll sweep.
//!
//! This example feeds scroll positions through a tracker and prints each
//! transition, demonstrating lookahead-band activation and stickiness.
//!
//! Run:
//! - `cargo run -p scrollspy_demos --example tracker_basics`

use scrollspy_outline::{Heading, Outline};
use scrollspy_tracker::{
    Capabilities, Environment, NoSidebar, ScrollHandle, ScrollMode, Tracker, TrackerEvent,
};

struct Pane(f64);

impl ScrollHandle<f64> for Pane {
    fn scroll_offset(&self) -> f64 {
        self.0
    }
    fn set_scroll_offset(&mut self, offset: f64, _mode: ScrollMode) {
        self.0 = offset;
    }
}

struct Browser;

impl Environment<f64> for Browser {
    fn viewport_height(&self) -> f64 {
        1200.0
    }
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }
}

fn main() {
    let outline: Outline<&str, f64> = [
        Heading::new("intro", "Introduction", 1).with_offset(300.0),
        Heading::new("setup", "Setup", 2).with_offset(800.0),
        Heading::new("usage", "Usage", 2).with_offset(1600.0),
        Heading::new("faq", "FAQ", 1).with_offset(2900.0),
    ]
    .into_iter()
    .collect();

    let mut tracker = Tracker::attach(Pane(0.0), NoSidebar, Browser);

    let mut order = Vec::new();
    let mut position = 0.0;
    while position <= 3000.0 {
        for event in tracker.on_content_scroll(&outline, position) {
            if let TrackerEvent::Activated(slug) = event {
                println!("scroll {position:>6}  ->  #{slug}");
                order.push(slug);
            }
        }
        position += 50.0;
    }

    // Transitions follow document order, with sticky gaps in between.
    assert_eq!(order, vec!["intro", "setup", "usage", "faq"]);
    println!("final active: {:?}", tracker.active());
}

// Copyright 2025 the Scrollspy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Level filtering for sidebar display.
//!
//! The filter bounds what a sidebar shows; the band scan still covers the
//! full outline, so a deep heading can be active with no visible entry.
//!
//! Run:
//! - `cargo run -p scrollspy_demos --example outline_levels`

use scrollspy_outline::{Band, Heading, LevelFilter, Outline};

fn main() {
    let outline: Outline<&str, f64> = [
        Heading::new("guide", "Guide", 1).with_offset(0.0),
        Heading::new("install", "Install", 2).with_offset(400.0),
        Heading::new("linux", "Linux", 3).with_offset(700.0),
        Heading::new("apt-pin", "Pinning apt versions", 7).with_offset(950.0),
        Heading::new("macos", "macOS", 3).with_offset(1300.0),
    ]
    .into_iter()
    .collect();

    let filter = outline.level_filter();
    assert_eq!(filter, LevelFilter::new(1));

    println!("== Sidebar entries ==");
    for heading in outline.visible(filter) {
        let indent = (heading.level - 1) as usize * 2;
        println!("{:indent$}#{} {}", "", heading.slug, heading.title);
    }

    // The level-7 heading is not shown...
    assert!(outline.visible(filter).all(|h| h.slug != "apt-pin"));

    // ...but it can still win the band scan, leaving no entry highlighted.
    let active = outline.first_in_band(&Band::new(900.0, 1100.0)).unwrap();
    assert_eq!(active.slug, "apt-pin");
    println!("active (unlisted): #{}", active.slug);
}

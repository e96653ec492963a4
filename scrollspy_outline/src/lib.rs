// Copyright 2025 the Scrollspy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrollspy Outline: a document-outline model for scroll-synchronized
//! tables of contents.
//!
//! This crate is the data-model half of scrollspy. It owns no behavior
//! beyond queries: the event-driven tracking lives in `scrollspy_tracker`.
//!
//! - [`Heading`]: a navigable section with a slug, title, nesting level, and
//!   measured vertical offset.
//! - [`Outline`]: headings in document order, re-readable on every update.
//! - [`LevelFilter`]: which headings a sidebar shows (display only; the
//!   activation scan always covers the full outline).
//! - [`Band`] / [`BandPolicy`]: the lookahead window in which a heading
//!   counts as active, expressed as exact [`Ratio`] fractions of the
//!   viewport height.
//!
//! It is generic over the scalar type via [`Scalar`] (`f32`, `f64`, `i64`)
//! and over the slug key type, so hosts can track `String` slugs, interned
//! ids, or anything `Clone + Eq`.
//!
//! # Example
//!
//! ```rust
//! use scrollspy_outline::{BandPolicy, Heading, Outline};
//!
//! let outline: Outline<&str, f64> = [
//!     Heading::new("intro", "Introduction", 1).with_offset(0.0),
//!     Heading::new("setup", "Setup", 2).with_offset(800.0),
//!     Heading::new("usage", "Usage", 2).with_offset(1600.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! // With the default policy and a 1200px viewport, scrolling to 600 puts
//! // the band at [800, 1200]: "setup" is the active heading.
//! let band = BandPolicy::default().band_at(600.0, 1200.0);
//! let active = outline.first_in_band(&band).unwrap();
//! assert_eq!(active.slug, "setup");
//! ```
//!
//! ## Float semantics
//!
//! This crate assumes no NaNs for floating-point offsets. Band containment
//! on NaN inputs is simply false.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod band;
pub mod outline;
pub mod types;

pub use band::{Band, BandPolicy};
pub use outline::Outline;
pub use types::{DEFAULT_MAX_DEPTH, Heading, LevelFilter, Ratio, Scalar};

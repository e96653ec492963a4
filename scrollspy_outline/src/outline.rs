// Copyright 2025 the Scrollspy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered heading collection and the band scan.

use alloc::vec::Vec;

use crate::band::Band;
use crate::types::{Heading, LevelFilter};

/// An ordered sequence of headings in document order (top to bottom).
///
/// The outline is owned by the rendering layer; a tracker treats it as
/// read-only input and re-reads it on every update, so offsets rewritten by
/// [`Outline::set_offset`] after a reflow take effect on the next event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outline<K, T> {
    headings: Vec<Heading<K, T>>,
}

impl<K, T> Default for Outline<K, T> {
    fn default() -> Self {
        Self {
            headings: Vec::new(),
        }
    }
}

impl<K, T> Outline<K, T> {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a heading after all existing ones.
    pub fn push(&mut self, heading: Heading<K, T>) {
        self.headings.push(heading);
    }

    /// Number of headings.
    pub fn len(&self) -> usize {
        self.headings.len()
    }

    /// Whether the outline has no headings.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Iterate headings in document order.
    pub fn iter(&self) -> core::slice::Iter<'_, Heading<K, T>> {
        self.headings.iter()
    }

    /// The smallest nesting level present, if any.
    pub fn base_level(&self) -> Option<u8> {
        self.headings.iter().map(|h| h.level).min()
    }

    /// A display filter rooted at the outline's base level.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::new(self.base_level().unwrap_or(1))
    }

    /// Iterate the headings a sidebar shows under `filter`.
    pub fn visible(&self, filter: LevelFilter) -> impl Iterator<Item = &Heading<K, T>> {
        self.headings.iter().filter(move |h| filter.admits(h.level))
    }
}

impl<K: Eq, T> Outline<K, T> {
    /// Look up a heading by slug.
    pub fn get(&self, slug: &K) -> Option<&Heading<K, T>> {
        self.headings.iter().find(|h| &h.slug == slug)
    }

    /// Rewrite a heading's measured offset. Returns false for unknown slugs.
    pub fn set_offset(&mut self, slug: &K, offset: T) -> bool {
        match self.headings.iter_mut().find(|h| &h.slug == slug) {
            Some(h) => {
                h.offset = Some(offset);
                true
            }
            None => false,
        }
    }
}

impl<K, T: Copy + PartialOrd> Outline<K, T> {
    /// The first heading (document order) whose measured offset lies in the band.
    ///
    /// Unmeasured headings are skipped. The scan covers the full outline,
    /// not a level-filtered view, so deep headings can win.
    pub fn first_in_band(&self, band: &Band<T>) -> Option<&Heading<K, T>> {
        self.headings
            .iter()
            .find(|h| h.offset.is_some_and(|o| band.contains(o)))
    }
}

impl<K, T> FromIterator<Heading<K, T>> for Outline<K, T> {
    fn from_iter<I: IntoIterator<Item = Heading<K, T>>>(iter: I) -> Self {
        Self {
            headings: iter.into_iter().collect(),
        }
    }
}

impl<'a, K, T> IntoIterator for &'a Outline<K, T> {
    type Item = &'a Heading<K, T>;
    type IntoIter = core::slice::Iter<'a, Heading<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.headings.iter()
    }
}

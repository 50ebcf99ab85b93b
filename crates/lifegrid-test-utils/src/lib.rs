//! Test utilities for lifegrid development.
//!
//! Provides canonical pattern constructors ([`block`], [`blinker_horizontal`],
//! [`glider`], ...) and neighbourhood fixtures ([`surrounded`]) so tests
//! can describe configurations by name instead of coordinate lists.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod patterns;

pub use patterns::{
    beehive, blinker_horizontal, blinker_vertical, block, glider, live, surrounded,
};

use lifegrid_core::{Cell, LiveSet};

/// Sorted copy of a live set, for order-insensitive comparisons of
/// `Vec<Cell>` outputs.
pub fn sorted(cells: impl IntoIterator<Item = Cell>) -> Vec<Cell> {
    let mut v: Vec<Cell> = cells.into_iter().collect();
    v.sort();
    v
}

/// Shift every cell in `set` by `(dx, dy)`.
pub fn shifted(set: &LiveSet, dx: i64, dy: i64) -> LiveSet {
    set.iter().map(|c| c.offset(dx, dy)).collect()
}

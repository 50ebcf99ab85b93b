//! Canonical patterns, positioned by an anchor cell.

use lifegrid_core::{Cell, LiveSet, MOORE_OFFSETS};

/// Build a live set from coordinate pairs.
pub fn live(coords: &[(i64, i64)]) -> LiveSet {
    coords.iter().map(|&(x, y)| Cell::new(x, y)).collect()
}

fn anchored(origin: Cell, offsets: &[(i64, i64)]) -> LiveSet {
    offsets
        .iter()
        .map(|&(dx, dy)| origin.offset(dx, dy))
        .collect()
}

/// 2x2 still life with its top-left corner at `origin`.
pub fn block(origin: Cell) -> LiveSet {
    anchored(origin, &[(0, 0), (1, 0), (0, 1), (1, 1)])
}

/// Six-cell still life; `origin` is the top-left of its 4x3 bounding box.
pub fn beehive(origin: Cell) -> LiveSet {
    anchored(origin, &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)])
}

/// Three cells in a row starting at `origin`.
pub fn blinker_horizontal(origin: Cell) -> LiveSet {
    anchored(origin, &[(0, 0), (1, 0), (2, 0)])
}

/// Three cells in a column centred on `center`.
///
/// One generation of [`blinker_horizontal`] at `origin` yields
/// `blinker_vertical(origin.offset(1, 0))`.
pub fn blinker_vertical(center: Cell) -> LiveSet {
    anchored(center, &[(0, -1), (0, 0), (0, 1)])
}

/// South-east travelling glider; `origin` is the top-left of its 3x3
/// bounding box. Moves by `(+1, +1)` every four generations.
pub fn glider(origin: Cell) -> LiveSet {
    anchored(origin, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
}

/// The first `k` Moore neighbours of `center` (excluding `center`).
///
/// # Panics
///
/// Panics if `k > 8`.
pub fn surrounded(center: Cell, k: usize) -> Vec<Cell> {
    assert!(k <= MOORE_OFFSETS.len(), "a cell has only 8 neighbours");
    MOORE_OFFSETS[..k]
        .iter()
        .map(|&(dx, dy)| center.offset(dx, dy))
        .collect()
}

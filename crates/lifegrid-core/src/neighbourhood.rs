//! Moore (8-connected) neighbourhood on the unbounded lattice.

use crate::id::Cell;
use smallvec::SmallVec;

/// All 8 offsets `(dx, dy)`: W, E, N, S, NW, SW, NE, SE.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The 8 Moore neighbours of `cell`, excluding `cell` itself.
///
/// Computed with [`Cell::offset`], so a cell on an `i64` limit has
/// neighbours on the opposite limit.
pub fn moore(cell: Cell) -> SmallVec<[Cell; 8]> {
    MOORE_OFFSETS
        .iter()
        .map(|&(dx, dy)| cell.offset(dx, dy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn extremes_are_adjacent() {
        let edge = Cell::new(i64::MAX, 0);
        let n = moore(edge);
        assert!(n.contains(&Cell::new(i64::MIN, 0)));
        assert!(n.contains(&Cell::new(i64::MIN, 1)));
        assert!(moore(Cell::new(0, i64::MIN)).contains(&Cell::new(-1, i64::MAX)));
    }

    #[test]
    fn excludes_self_and_covers_ring() {
        let n = moore(Cell::ORIGIN);
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&Cell::ORIGIN));
        for dx in -1..=1 {
            for dy in -1..=1 {
                if (dx, dy) != (0, 0) {
                    assert!(n.contains(&Cell::new(dx, dy)));
                }
            }
        }
    }

    proptest! {
        #[test]
        fn neighbours_symmetric(x in -1000i64..1000, y in -1000i64..1000) {
            let c = Cell::new(x, y);
            for n in moore(c) {
                prop_assert!(moore(n).contains(&c));
            }
        }

        #[test]
        fn neighbours_distinct(x in any::<i64>(), y in any::<i64>()) {
            let n = moore(Cell::new(x, y));
            for (i, a) in n.iter().enumerate() {
                for b in &n[i + 1..] {
                    prop_assert_ne!(a, b);
                }
            }
        }
    }
}

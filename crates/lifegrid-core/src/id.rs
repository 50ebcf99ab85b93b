//! Lattice coordinates, the [`Generation`] counter, and [`Bounds`].

use std::fmt;

/// A cell position on the unbounded 2-D integer lattice.
///
/// Equality, ordering, and hashing are by coordinate. There is no bound
/// on magnitude other than the width of `i64`.
///
/// # Wrapping at the extremes
///
/// Offsets use two's-complement wrapping, so neighbour arithmetic is
/// total. The consequence is that the lattice closes into a torus at the
/// `i64` limits: `(i64::MAX, y)` and `(i64::MIN, y)` are horizontal
/// neighbours, and likewise for `y`. Patterns that never reach the
/// extremes see a plain unbounded plane.
///
/// # Examples
///
/// ```
/// use lifegrid_core::Cell;
///
/// let c = Cell::new(3, -2);
/// assert_eq!(c.offset(-1, 1), Cell::new(2, -1));
/// assert_eq!(c.to_string(), "3,-2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Horizontal coordinate (column).
    pub x: i64,
    /// Vertical coordinate (row).
    pub y: i64,
}

impl Cell {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    /// Create a cell at `(x, y)`.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`, wrapping at the `i64` limits.
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// The cell displaced by the coordinates of `by`.
    pub const fn translate(self, by: Cell) -> Self {
        self.offset(by.x, by.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (i64, i64) {
    fn from(c: Cell) -> Self {
        (c.x, c.y)
    }
}

/// Monotonically increasing generation counter.
///
/// Incremented each time the grid advances one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Inclusive axis-aligned bounding box of a non-empty set of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Smallest x and smallest y.
    pub min: Cell,
    /// Largest x and largest y.
    pub max: Cell,
}

impl Bounds {
    /// Bounding box of `cells`, or `None` if the iterator is empty.
    pub fn of<I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut iter = cells.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for c in iter {
            bounds.min.x = bounds.min.x.min(c.x);
            bounds.min.y = bounds.min.y.min(c.y);
            bounds.max.x = bounds.max.x.max(c.x);
            bounds.max.y = bounds.max.y.max(c.y);
        }
        Some(bounds)
    }

    /// Number of columns covered. Saturates at `u64::MAX`.
    pub fn width(&self) -> u64 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    /// Number of rows covered. Saturates at `u64::MAX`.
    pub fn height(&self) -> u64 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }

    /// Whether `cell` lies inside the box.
    pub fn contains(&self, cell: Cell) -> bool {
        (self.min.x..=self.max.x).contains(&cell.x) && (self.min.y..=self.max.y).contains(&cell.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_wraps_at_extremes() {
        let c = Cell::new(i64::MAX, i64::MIN);
        assert_eq!(c.offset(1, -1), Cell::new(i64::MIN, i64::MAX));
    }

    #[test]
    fn display_matches_save_line() {
        assert_eq!(Cell::new(-4, 17).to_string(), "-4,17");
    }

    #[test]
    fn bounds_of_empty_is_none() {
        assert!(Bounds::of(std::iter::empty()).is_none());
    }

    #[test]
    fn bounds_tracks_min_and_max_per_axis() {
        let b = Bounds::of([Cell::new(3, -1), Cell::new(-2, 5), Cell::new(0, 0)]).unwrap();
        assert_eq!(b.min, Cell::new(-2, -1));
        assert_eq!(b.max, Cell::new(3, 5));
        assert_eq!(b.width(), 6);
        assert_eq!(b.height(), 7);
        assert!(b.contains(Cell::new(0, 4)));
        assert!(!b.contains(Cell::new(4, 0)));
    }

    #[test]
    fn generation_next_increments() {
        assert_eq!(Generation::default().next(), Generation(1));
    }
}

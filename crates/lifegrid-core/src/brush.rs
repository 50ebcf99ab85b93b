//! Binary brush masks for stamping patterns onto the grid.

use crate::error::BrushError;
use crate::id::Cell;

/// A rectangular binary matrix: `true` stamps a live cell at that offset.
///
/// Row index maps to y, column index to x. Rotation returns a new mask,
/// so several brush selections may share one cached mask safely.
///
/// # Examples
///
/// ```
/// use lifegrid_core::{BrushMask, Cell};
///
/// let glider = BrushMask::from_rows(vec![
///     vec![false, true, false],
///     vec![false, false, true],
///     vec![true, true, true],
/// ]).unwrap();
/// let cells = glider.stamp(Cell::new(10, 10));
/// assert_eq!(cells.len(), 5);
/// assert!(cells.contains(&Cell::new(11, 10)));
///
/// let turned = glider.rotate_clockwise();
/// assert_eq!(turned.rotate_counterclockwise(), glider);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BrushMask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl BrushMask {
    /// Build a mask from rows of equal, non-zero width.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, BrushError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(BrushError::Empty);
        }
        let mut bits = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(BrushError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            bits.extend(values);
        }
        Ok(Self {
            width,
            height,
            bits,
        })
    }

    /// A single-cell brush.
    pub fn dot() -> Self {
        Self {
            width: 1,
            height: 1,
            bits: vec![true],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Value at `(row, col)`, or `false` outside the mask.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.bits[row * self.width + col]
    }

    /// Number of set entries.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Rotate 90° clockwise: transpose, then reverse each row.
    pub fn rotate_clockwise(&self) -> Self {
        let (w, h) = (self.height, self.width);
        let bits = (0..h)
            .flat_map(|r| (0..w).map(move |c| (r, c)))
            .map(|(r, c)| self.get(self.height - 1 - c, r))
            .collect();
        Self {
            width: w,
            height: h,
            bits,
        }
    }

    /// Rotate 90° counter-clockwise: transpose, then reverse the row order.
    pub fn rotate_counterclockwise(&self) -> Self {
        let (w, h) = (self.height, self.width);
        let bits = (0..h)
            .flat_map(|r| (0..w).map(move |c| (r, c)))
            .map(|(r, c)| self.get(c, self.width - 1 - r))
            .collect();
        Self {
            width: w,
            height: h,
            bits,
        }
    }

    /// Cells to add when the mask's top-left corner is placed at `at`.
    pub fn stamp(&self, at: Cell) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.count());
        for row in 0..self.height {
            for col in 0..self.width {
                if self.bits[row * self.width + col] {
                    cells.push(at.offset(col as i64, row as i64));
                }
            }
        }
        cells
    }
}

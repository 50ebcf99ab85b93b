//! Coordinate-list writer.
//!
//! [`CellWriter`] streams cells to any `Write` sink in the one-cell-per-line
//! format. [`save`] and [`save_to_path`] write a whole live set.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use lifegrid_core::Cell;

use crate::codec::encode_cell;
use crate::error::FormatError;

/// Writes cells to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use lifegrid_core::Cell;
/// use lifegrid_format::{CellReader, CellWriter};
///
/// let mut buf = Vec::new();
/// let mut writer = CellWriter::new(&mut buf);
/// writer.write_cell(Cell::new(1, 2)).unwrap();
/// writer.write_cell(Cell::new(-1, 0)).unwrap();
/// assert_eq!(writer.cells_written(), 2);
/// writer.finish().unwrap();
///
/// let cells: Vec<Cell> = CellReader::new(buf.as_slice())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(cells, vec![Cell::new(1, 2), Cell::new(-1, 0)]);
/// ```
pub struct CellWriter<W: Write> {
    writer: W,
    cells_written: u64,
}

impl<W: Write> CellWriter<W> {
    /// Wrap a sink. Nothing is written until the first cell.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            cells_written: 0,
        }
    }

    /// Append one cell.
    pub fn write_cell(&mut self, cell: Cell) -> Result<(), FormatError> {
        encode_cell(&mut self.writer, cell)?;
        self.cells_written += 1;
        Ok(())
    }

    /// Number of cells written so far.
    pub fn cells_written(&self) -> u64 {
        self.cells_written
    }

    /// Flush the sink and return it.
    pub fn finish(mut self) -> Result<W, FormatError> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Write every cell in `cells`, one per line, and flush.
pub fn save<W, I>(writer: W, cells: I) -> Result<u64, FormatError>
where
    W: Write,
    I: IntoIterator<Item = Cell>,
{
    let mut w = CellWriter::new(writer);
    for cell in cells {
        w.write_cell(cell)?;
    }
    let written = w.cells_written();
    w.finish()?;
    Ok(written)
}

/// Create (or truncate) the file at `path` and [`save`] into it.
pub fn save_to_path<P, I>(path: P, cells: I) -> Result<u64, FormatError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = Cell>,
{
    let path = path.as_ref();
    let file = File::create(path)?;
    let written = save(BufWriter::new(file), cells)?;
    tracing::debug!(path = %path.display(), cells = written, "saved live set");
    Ok(written)
}

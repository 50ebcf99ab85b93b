//! Coordinate-list reader and load recentering.
//!
//! [`CellReader`] yields cells line by line from any `BufRead` source.
//! [`load`] consumes the whole stream, failing on the first malformed
//! line, and recenters the result so the minimum x and y are zero.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use lifegrid_core::{Bounds, Cell};

use crate::codec::decode_line;
use crate::error::FormatError;

/// Reads cells from a byte stream, one per line.
///
/// Iteration stops after the first error.
pub struct CellReader<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
    done: bool,
}

impl<R: BufRead> CellReader<R> {
    /// Wrap a source.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
            done: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for CellReader<R> {
    type Item = Result<Cell, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line += 1;
                let bytes = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf[..]);
                let result = match std::str::from_utf8(bytes) {
                    Ok(text) => decode_line(self.line, text),
                    Err(e) => Err(FormatError::MalformedLine {
                        line: self.line,
                        content: String::from_utf8_lossy(bytes).into_owned(),
                        reason: format!("invalid UTF-8: {e}"),
                    }),
                };
                self.done = result.is_err();
                Some(result)
            }
            Err(e) => {
                self.done = true;
                Some(Err(e.into()))
            }
        }
    }
}

/// A recentered load result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loaded {
    /// Cells in file order, translated by `shift`.
    pub cells: Vec<Cell>,
    /// Offset added to every stored coordinate. [`Cell::ORIGIN`] for an
    /// empty file.
    pub shift: Cell,
}

/// Largest width or height whose recentered coordinates fit in `i64`.
pub const MAX_SPAN: u64 = i64::MAX as u64 + 1;

/// Translate `cells` so the minimum x and minimum y become zero.
///
/// Returns the applied shift alongside the moved cells. The shift is
/// applied with wrapping arithmetic, so when the minimum is `i64::MIN`
/// it reads as `i64::MIN` (equal to `+2^63` modulo `2^64`) and the
/// moved cells are still exact.
///
/// Fails with [`FormatError::SpanTooLarge`] if the cells span more than
/// [`MAX_SPAN`] columns or rows, since the far edge would not fit.
pub fn recenter(cells: Vec<Cell>) -> Result<Loaded, FormatError> {
    let Some(bounds) = Bounds::of(cells.iter().copied()) else {
        return Ok(Loaded {
            cells,
            shift: Cell::ORIGIN,
        });
    };
    let (width, height) = (bounds.width(), bounds.height());
    if width > MAX_SPAN || height > MAX_SPAN {
        return Err(FormatError::SpanTooLarge { width, height });
    }
    let shift = Cell::new(bounds.min.x.wrapping_neg(), bounds.min.y.wrapping_neg());
    Ok(Loaded {
        cells: cells.into_iter().map(|c| c.translate(shift)).collect(),
        shift,
    })
}

/// Read every line of `reader` and recenter the result.
///
/// Any malformed line aborts the load; nothing partial is returned.
pub fn load<R: BufRead>(reader: R) -> Result<Loaded, FormatError> {
    let cells = CellReader::new(reader).collect::<Result<Vec<_>, _>>()?;
    recenter(cells)
}

/// Open the file at `path` and [`load`] it.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Loaded, FormatError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let loaded = load(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        cells = loaded.cells.len(),
        shift = %loaded.shift,
        "loaded live set"
    );
    Ok(loaded)
}

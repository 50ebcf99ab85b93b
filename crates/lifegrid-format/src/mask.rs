//! Brush-mask text parsing.
//!
//! One row per line, `1` for a stamped cell and `0` for a gap. Whitespace
//! inside a row is ignored, so `"0 1 0"` and `"010"` are equivalent.
//! Trailing blank lines are dropped; interior blank lines are empty rows
//! and fail mask validation.

use lifegrid_core::BrushMask;

use crate::error::FormatError;

/// Parse a brush mask from rows of `0`/`1`.
///
/// # Examples
///
/// ```
/// use lifegrid_core::Cell;
/// use lifegrid_format::parse_mask;
///
/// let mask = parse_mask("010\n001\n111\n").unwrap();
/// assert_eq!((mask.width(), mask.height()), (3, 3));
/// assert_eq!(mask.stamp(Cell::ORIGIN).len(), 5);
/// ```
pub fn parse_mask(text: &str) -> Result<BrushMask, FormatError> {
    let lines: Vec<&str> = text.lines().collect();
    let used = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |i| i + 1);

    let mut rows = Vec::with_capacity(used);
    for (i, raw) in lines[..used].iter().enumerate() {
        let mut row = Vec::new();
        for ch in raw.chars().filter(|c| !c.is_whitespace()) {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                other => {
                    return Err(FormatError::MalformedLine {
                        line: i + 1,
                        content: raw.trim_end_matches('\r').to_string(),
                        reason: format!("unexpected character {other:?} in mask row"),
                    })
                }
            }
        }
        rows.push(row);
    }
    Ok(BrushMask::from_rows(rows)?)
}

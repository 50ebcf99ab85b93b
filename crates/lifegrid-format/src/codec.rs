//! Line encode/decode for the coordinate format.
//!
//! A line is two base-10 `i64` tokens separated by a single comma. Each
//! token may carry surrounding whitespace; a trailing `\r` is dropped.

use std::io::Write;

use lifegrid_core::Cell;

use crate::error::FormatError;

/// Write one cell as `"{x},{y}\n"`.
pub fn encode_cell(w: &mut dyn Write, cell: Cell) -> Result<(), FormatError> {
    writeln!(w, "{},{}", cell.x, cell.y)?;
    Ok(())
}

/// Decode one line. `line` is the 1-based line number used in errors.
pub fn decode_line(line: usize, text: &str) -> Result<Cell, FormatError> {
    let text = text.strip_suffix('\r').unwrap_or(text);
    let malformed = |reason: String| FormatError::MalformedLine {
        line,
        content: text.to_string(),
        reason,
    };

    if text.trim().is_empty() {
        return Err(malformed("blank line".into()));
    }
    let mut tokens = text.split(',');
    let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed("expected exactly two comma-separated tokens".into()));
    };
    let x = x
        .trim()
        .parse::<i64>()
        .map_err(|e| malformed(format!("x: {e}")))?;
    let y = y
        .trim()
        .parse::<i64>()
        .map_err(|e| malformed(format!("y: {e}")))?;
    Ok(Cell::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_of(result: Result<Cell, FormatError>) -> usize {
        match result {
            Err(FormatError::MalformedLine { line, .. }) => line,
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn encode_is_plain_csv() {
        let mut buf = Vec::new();
        encode_cell(&mut buf, Cell::new(-3, 12)).unwrap();
        assert_eq!(buf, b"-3,12\n");
    }

    #[test]
    fn decode_accepts_whitespace_and_crlf() {
        assert_eq!(decode_line(1, " 4 , -5 \r").unwrap(), Cell::new(4, -5));
        assert_eq!(decode_line(1, "0,0").unwrap(), Cell::ORIGIN);
    }

    #[test]
    fn decode_accepts_extreme_values() {
        let text = format!("{},{}", i64::MIN, i64::MAX);
        assert_eq!(
            decode_line(1, &text).unwrap(),
            Cell::new(i64::MIN, i64::MAX)
        );
    }

    #[test]
    fn decode_rejects_malformed_lines() {
        for bad in ["", "   ", "1", "1,2,3", "a,2", "1,b", "1.5,2", "1 2", ","] {
            assert_eq!(line_of(decode_line(9, bad)), 9, "input {bad:?}");
        }
    }

    #[test]
    fn decode_rejects_overflow() {
        assert_eq!(line_of(decode_line(2, "9223372036854775808,0")), 2);
    }
}

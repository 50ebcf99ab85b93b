//! Error types for save/load and mask parsing.

use std::fmt;
use std::io;

use lifegrid_core::BrushError;

/// Errors that can occur while reading or writing lifegrid text formats.
#[derive(Debug)]
pub enum FormatError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// A line could not be decoded. Aborts the whole load.
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The offending line, without its terminator.
        content: String,
        /// What was wrong with it.
        reason: String,
    },
    /// Mask rows were readable but do not form a valid mask.
    InvalidMask(BrushError),
    /// Loaded cells span more columns or rows than recentered `i64`
    /// coordinates can hold.
    SpanTooLarge {
        /// Columns covered, saturating at `u64::MAX`.
        width: u64,
        /// Rows covered, saturating at `u64::MAX`.
        height: u64,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MalformedLine {
                line,
                content,
                reason,
            } => write!(f, "line {line}: {reason}: {content:?}"),
            Self::InvalidMask(e) => write!(f, "invalid brush mask: {e}"),
            Self::SpanTooLarge { width, height } => {
                write!(f, "cells span {width}x{height}, too large to recenter")
            }
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidMask(e) => Some(e),
            Self::MalformedLine { .. } | Self::SpanTooLarge { .. } => None,
        }
    }
}

impl From<io::Error> for FormatError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<BrushError> for FormatError {
    fn from(e: BrushError) -> Self {
        Self::InvalidMask(e)
    }
}

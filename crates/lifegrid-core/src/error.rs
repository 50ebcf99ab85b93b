//! Error types for rule validation, rule text input, brush masks, and
//! intent application.

use std::error::Error;
use std::fmt;

/// Rule-parameter validation failure.
///
/// Returned before any mutation: the previously active rules remain in
/// effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// A parameter lies outside `[0, 8]`.
    OutOfRange {
        /// Which parameter (`"survival_min"`, `"survival_max"`, `"birth_count"`).
        name: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// `survival_min` is greater than `survival_max`.
    InvertedSurvivalBand {
        /// The requested lower bound.
        min: u8,
        /// The requested upper bound.
        max: u8,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { name, value } => {
                write!(f, "{name} must be in [0, 8], got {value}")
            }
            Self::InvertedSurvivalBand { min, max } => {
                write!(f, "survival_min {min} exceeds survival_max {max}")
            }
        }
    }
}

impl Error for RuleError {}

/// Failure turning user-entered rule text into [`RuleParameters`](crate::RuleParameters).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleInputError {
    /// A field did not contain an integer.
    NotAnInteger {
        /// Which field.
        field: &'static str,
        /// The text as entered.
        text: String,
    },
    /// The integers parsed but do not form a valid rule.
    Invalid(RuleError),
}

impl fmt::Display for RuleInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger { field, text } => {
                write!(f, "{field}: '{text}' is not an integer")
            }
            Self::Invalid(e) => write!(f, "invalid rule: {e}"),
        }
    }
}

impl Error for RuleInputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::NotAnInteger { .. } => None,
        }
    }
}

impl From<RuleError> for RuleInputError {
    fn from(e: RuleError) -> Self {
        Self::Invalid(e)
    }
}

/// Malformed brush mask matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushError {
    /// The matrix has no rows or no columns.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
}

impl fmt::Display for BrushError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "brush mask must have at least one row and column"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "brush mask row {row} has {found} columns, expected {expected}"
            ),
        }
    }
}

impl Error for BrushError {}

/// An intent that could not be applied.
///
/// Reported inside [`Outcome::Rejected`](crate::Outcome::Rejected); the
/// session state is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentError {
    /// The requested speed index is not in the configured speed list.
    SpeedOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of configured speeds.
        available: usize,
    },
}

impl fmt::Display for IntentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpeedOutOfRange { index, available } => {
                write!(f, "speed index {index} out of range (0..{available})")
            }
        }
    }
}

impl Error for IntentError {}

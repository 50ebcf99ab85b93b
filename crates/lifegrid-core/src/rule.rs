//! Birth/survival rule parameters.

use std::fmt;

use crate::error::{RuleError, RuleInputError};

/// Largest possible neighbour count in the Moore neighbourhood.
pub const MAX_NEIGHBOURS: u8 = 8;

/// Outer-totalistic rule: a live cell survives when its neighbour count
/// lies in `survival_min..=survival_max`; a dead cell is born when its
/// count equals `birth_count`.
///
/// Construction validates `0 <= survival_min <= survival_max <= 8` and
/// `0 <= birth_count <= 8`, so every value of this type is a valid rule.
///
/// # Examples
///
/// ```
/// use lifegrid_core::RuleParameters;
///
/// let conway = RuleParameters::default();
/// assert_eq!(conway.to_string(), "S2-3/B3");
/// assert!(conway.survives(2) && conway.survives(3) && !conway.survives(4));
/// assert!(conway.is_born(3) && !conway.is_born(2));
///
/// assert!(RuleParameters::new(4, 2, 3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleParameters {
    survival_min: u8,
    survival_max: u8,
    birth_count: u8,
}

impl RuleParameters {
    /// Standard Conway rules (S2-3/B3).
    pub const CONWAY: RuleParameters = RuleParameters {
        survival_min: 2,
        survival_max: 3,
        birth_count: 3,
    };

    /// Validate and build a rule.
    pub fn new(survival_min: i64, survival_max: i64, birth_count: i64) -> Result<Self, RuleError> {
        let survival_min = check_range("survival_min", survival_min)?;
        let survival_max = check_range("survival_max", survival_max)?;
        let birth_count = check_range("birth_count", birth_count)?;
        if survival_min > survival_max {
            return Err(RuleError::InvertedSurvivalBand {
                min: survival_min,
                max: survival_max,
            });
        }
        Ok(Self {
            survival_min,
            survival_max,
            birth_count,
        })
    }

    /// Parse three text fields as entered by a user.
    ///
    /// Surrounding whitespace is ignored. Non-integer text is reported as
    /// [`RuleInputError::NotAnInteger`]; integers that do not form a valid
    /// rule as [`RuleInputError::Invalid`].
    pub fn parse_fields(
        survival_min: &str,
        survival_max: &str,
        birth_count: &str,
    ) -> Result<Self, RuleInputError> {
        let min = parse_field("survival_min", survival_min)?;
        let max = parse_field("survival_max", survival_max)?;
        let birth = parse_field("birth_count", birth_count)?;
        Ok(Self::new(min, max, birth)?)
    }

    /// Lower bound of the survival band (inclusive).
    pub fn survival_min(&self) -> u8 {
        self.survival_min
    }

    /// Upper bound of the survival band (inclusive).
    pub fn survival_max(&self) -> u8 {
        self.survival_max
    }

    /// Exact neighbour count that brings a dead cell to life.
    pub fn birth_count(&self) -> u8 {
        self.birth_count
    }

    /// Whether a live cell with `count` live neighbours survives.
    pub fn survives(&self, count: u8) -> bool {
        (self.survival_min..=self.survival_max).contains(&count)
    }

    /// Whether a dead cell with `count` live neighbours is born.
    pub fn is_born(&self, count: u8) -> bool {
        count == self.birth_count
    }
}

impl Default for RuleParameters {
    fn default() -> Self {
        Self::CONWAY
    }
}

impl fmt::Display for RuleParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S{}-{}/B{}",
            self.survival_min, self.survival_max, self.birth_count
        )
    }
}

fn check_range(name: &'static str, value: i64) -> Result<u8, RuleError> {
    u8::try_from(value)
        .ok()
        .filter(|&v| v <= MAX_NEIGHBOURS)
        .ok_or(RuleError::OutOfRange { name, value })
}

fn parse_field(field: &'static str, text: &str) -> Result<i64, RuleInputError> {
    text.trim()
        .parse()
        .map_err(|_| RuleInputError::NotAnInteger {
            field,
            text: text.to_string(),
        })
}

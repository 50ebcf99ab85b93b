//! Session configuration, validation, and error types.
//!
//! [`SessionConfig`] is the builder-input for constructing a
//! [`Session`](crate::Session). [`validate()`](SessionConfig::validate)
//! checks structural invariants at startup so the constructors can rely
//! on them.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use lifegrid_core::RuleParameters;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SessionConfig::validate()`] or while
/// starting a background world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// History capacity is zero.
    HistoryCapacityZero,
    /// The speed list is empty.
    NoSpeeds,
    /// A speed entry has a zero tick interval.
    ZeroInterval {
        /// Index of the offending entry.
        index: usize,
    },
    /// Speed entries are not strictly decreasing in interval.
    SpeedsNotOrdered {
        /// Index of the first entry not faster than its predecessor.
        index: usize,
    },
    /// `initial_speed` does not index into `speeds`.
    InitialSpeedOutOfRange {
        /// The configured index.
        index: usize,
        /// Number of configured speeds.
        available: usize,
    },
    /// Intent queue capacity is zero.
    IntentQueueZero,
    /// The tick thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HistoryCapacityZero => write!(f, "history_capacity must be at least 1"),
            Self::NoSpeeds => write!(f, "at least one speed must be configured"),
            Self::ZeroInterval { index } => {
                write!(f, "speed {index} has a zero tick interval")
            }
            Self::SpeedsNotOrdered { index } => {
                write!(f, "speed {index} is not faster than speed {}", index - 1)
            }
            Self::InitialSpeedOutOfRange { index, available } => {
                write!(f, "initial_speed {index} out of range (0..{available})")
            }
            Self::IntentQueueZero => write!(f, "intent_queue_capacity must be at least 1"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SessionConfig ──────────────────────────────────────────────────

/// Configuration for a simulation session.
///
/// `speeds` is the ordered list of tick intervals a user can choose
/// from, slowest first; `initial_speed` indexes into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Rules installed at construction. Default: Conway (S2-3/B3).
    pub rules: RuleParameters,
    /// Maximum number of undo entries. Default: 1000.
    pub history_capacity: usize,
    /// Selectable tick intervals, strictly decreasing.
    /// Default: 1000, 500, 250, 100, 50, 20 ms.
    pub speeds: Vec<Duration>,
    /// Index of the interval in effect at start. Default: 1 (500 ms).
    pub initial_speed: usize,
    /// Bound on queued, not-yet-applied intents in background mode.
    /// Default: 1024.
    pub intent_queue_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rules: RuleParameters::default(),
            history_capacity: 1000,
            speeds: [1000, 500, 250, 100, 50, 20]
                .into_iter()
                .map(Duration::from_millis)
                .collect(),
            initial_speed: 1,
            intent_queue_capacity: 1024,
        }
    }
}

impl SessionConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::HistoryCapacityZero);
        }
        if self.speeds.is_empty() {
            return Err(ConfigError::NoSpeeds);
        }
        for (index, interval) in self.speeds.iter().enumerate() {
            if interval.is_zero() {
                return Err(ConfigError::ZeroInterval { index });
            }
            if index > 0 && *interval >= self.speeds[index - 1] {
                return Err(ConfigError::SpeedsNotOrdered { index });
            }
        }
        if self.initial_speed >= self.speeds.len() {
            return Err(ConfigError::InitialSpeedOutOfRange {
                index: self.initial_speed,
                available: self.speeds.len(),
            });
        }
        if self.intent_queue_capacity == 0 {
            return Err(ConfigError::IntentQueueZero);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = SessionConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.speeds[cfg.initial_speed], ms(500));
    }

    #[test]
    fn zero_history_fails() {
        let cfg = SessionConfig {
            history_capacity: 0,
            ..SessionConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::HistoryCapacityZero));
    }

    #[test]
    fn empty_speeds_fail() {
        let cfg = SessionConfig {
            speeds: vec![],
            initial_speed: 0,
            ..SessionConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoSpeeds));
    }

    #[test]
    fn zero_interval_fails() {
        let cfg = SessionConfig {
            speeds: vec![ms(100), Duration::ZERO],
            initial_speed: 0,
            ..SessionConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroInterval { index: 1 }));
    }

    #[test]
    fn unordered_speeds_fail() {
        let cfg = SessionConfig {
            speeds: vec![ms(100), ms(50), ms(50)],
            initial_speed: 0,
            ..SessionConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::SpeedsNotOrdered { index: 2 })
        );
    }

    #[test]
    fn initial_speed_out_of_range_fails() {
        let cfg = SessionConfig {
            speeds: vec![ms(100)],
            initial_speed: 1,
            ..SessionConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::InitialSpeedOutOfRange { index, available }) => {
                assert_eq!((index, available), (1, 1));
            }
            other => panic!("expected InitialSpeedOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn zero_queue_fails() {
        let cfg = SessionConfig {
            intent_queue_capacity: 0,
            ..SessionConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::IntentQueueZero));
    }

    #[test]
    fn thread_spawn_failed_error_display() {
        let err = ConfigError::ThreadSpawnFailed {
            reason: "resource limit".to_string(),
        };
        assert!(format!("{err}").contains("thread spawn failed"));
    }
}

//! Cooperative single-thread scheduling.
//!
//! [`LockstepDriver`] is for hosts that already own a periodic callback
//! (a UI timer, a game loop). Each [`poll()`](LockstepDriver::poll) call
//! advances at most one generation, and only if the session is running
//! and the selected tick interval has elapsed since the last tick.
//!
//! # Cadence
//!
//! The interval is a minimum gap, not a deadline: a slow tick or a late
//! poll simply delays the next tick. Ticks are never skipped to catch up
//! and never fired twice for one poll. No background threads are
//! involved; all methods take `&mut self`.

use std::time::{Duration, Instant};

use lifegrid_core::{Intent, Outcome, TickResult};

use crate::config::{ConfigError, SessionConfig};
use crate::session::Session;

/// Single-threaded driver pairing a [`Session`] with a tick clock.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use lifegrid_core::{Cell, Intent};
/// use lifegrid_engine::{LockstepDriver, SessionConfig};
///
/// let mut driver = LockstepDriver::new(SessionConfig::default()).unwrap();
/// driver.apply(Intent::Stamp(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]));
/// driver.apply(Intent::SetRunning(true));
///
/// let t0 = Instant::now();
/// assert!(driver.poll(t0).is_some());
/// assert!(driver.poll(t0 + Duration::from_millis(10)).is_none());
/// assert!(driver.poll(t0 + Duration::from_millis(500)).is_some());
/// ```
#[derive(Debug)]
pub struct LockstepDriver {
    session: Session,
    last_tick: Option<Instant>,
}

impl LockstepDriver {
    /// Build a driver around a fresh session.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_session(Session::new(config)?))
    }

    /// Wrap an existing session.
    pub fn from_session(session: Session) -> Self {
        Self {
            session,
            last_tick: None,
        }
    }

    /// Apply a UI intent between ticks.
    ///
    /// Resuming a paused session rearms the clock so the next poll ticks
    /// immediately.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        let was_running = self.session.is_running();
        let outcome = self.session.apply(intent);
        if !was_running && self.session.is_running() {
            self.last_tick = None;
        }
        outcome
    }

    /// Advance one generation if running and the interval has elapsed.
    ///
    /// The first poll after construction or resume ticks immediately.
    pub fn poll(&mut self, now: Instant) -> Option<TickResult> {
        if !self.is_due(now) {
            return None;
        }
        self.last_tick = Some(now);
        Some(self.session.step())
    }

    /// Whether a poll at `now` would tick.
    pub fn is_due(&self, now: Instant) -> bool {
        self.session.is_running()
            && self.last_tick.is_none_or(|last| {
                now.saturating_duration_since(last) >= self.session.tick_interval()
            })
    }

    /// Time remaining until the next tick is due at `now`, or `None` if
    /// the session is paused.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        if !self.session.is_running() {
            return None;
        }
        Some(match self.last_tick {
            Some(last) => self
                .session
                .tick_interval()
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        })
    }

    /// The driven session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access to the driven session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Consume the driver, returning its session.
    pub fn into_session(self) -> Session {
        self.session
    }
}

//! User-facing [`RealtimeWorld`] API and cooperative shutdown.
//!
//! The session runs on a dedicated background thread that ticks at the
//! selected speed while UI threads submit intents and consume outcomes.
//!
//! # Architecture
//!
//! ```text
//! UI Thread(s)                   Tick Thread ("lifegrid-tick")
//!     |                               |
//!     |--IntentSender::submit()------>| intent_rx.recv_timeout(until due)
//!     |   [intent_tx: bounded(N)]     | session.apply(intent)
//!     |                               | session.step() when due
//!     |<--events() -------------------| event_tx.send(outcome)
//!     |   [event_tx: unbounded]       |
//!     |                               |
//!     |--shutdown()------------------>| drain up to Shutdown marker
//!     |<--JoinHandle<Session>---------| return session
//! ```
//!
//! # Closing submission
//!
//! Every [`IntentSender`] shares one `RwLock<bool>`. A submit holds the
//! read guard across its closed check and `try_send`; shutdown takes the
//! write guard, marks the world closed and enqueues the marker before
//! releasing it. An intent that was accepted is therefore always queued
//! ahead of the marker and applied before the session is handed back.

use std::sync::{Arc, PoisonError, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, TrySendError};

use lifegrid_core::{Intent, Outcome};

use crate::config::{ConfigError, SessionConfig};
use crate::session::Session;
use crate::tick_thread::{Envelope, TickThreadState};

// ── Error types ──────────────────────────────────────────────────

/// Error submitting an intent to the tick thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The world is shutting down or has shut down.
    Shutdown,
    /// The intent queue is full (back-pressure).
    QueueFull,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shutdown => write!(f, "tick thread has shut down"),
            Self::QueueFull => write!(f, "intent queue full"),
        }
    }
}

impl std::error::Error for SubmitError {}

// ── ShutdownReport ───────────────────────────────────────────────

/// Report from [`RealtimeWorld::shutdown()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShutdownReport {
    /// Total time spent in the shutdown sequence.
    pub total_ms: u64,
    /// Intents still queued when shutdown was requested, all of which
    /// were applied before the session was handed back.
    pub drained: usize,
    /// Whether the tick thread was joined successfully.
    pub tick_joined: bool,
}

// ── IntentSender ─────────────────────────────────────────────────

/// Cloneable handle for submitting intents from any thread.
///
/// Submission never blocks. Intents from one handle are applied in
/// submission order.
#[derive(Clone, Debug)]
pub struct IntentSender {
    tx: Sender<Envelope>,
    closed: Arc<RwLock<bool>>,
}

impl IntentSender {
    /// Queue an intent for the tick thread.
    ///
    /// `Ok` means the intent will be applied, even if shutdown is
    /// requested concurrently.
    pub fn submit(&self, intent: Intent) -> Result<(), SubmitError> {
        // Held until try_send returns so shutdown cannot slip in between.
        let closed = self.closed.read().unwrap_or_else(PoisonError::into_inner);
        if *closed {
            return Err(SubmitError::Shutdown);
        }
        self.tx
            .try_send(Envelope::Intent(intent))
            .map_err(|e| match e {
                TrySendError::Full(_) => SubmitError::QueueFull,
                TrySendError::Disconnected(_) => SubmitError::Shutdown,
            })
    }
}

// ── RealtimeWorld ────────────────────────────────────────────────

/// Background-thread scheduler over a [`Session`].
///
/// # Example
///
/// ```
/// use lifegrid_core::{Cell, Intent, Outcome};
/// use lifegrid_engine::{RealtimeWorld, SessionConfig};
///
/// let mut world = RealtimeWorld::new(SessionConfig::default()).unwrap();
/// world.submit(Intent::AddCell(Cell::new(0, 0))).unwrap();
/// world.submit(Intent::Step).unwrap();
///
/// let first = world.events().recv().unwrap();
/// assert_eq!(first, Outcome::CellsAdded(vec![Cell::new(0, 0)]));
///
/// let report = world.shutdown();
/// assert!(report.tick_joined);
/// let session = world.take_session().unwrap();
/// assert!(session.grid().is_empty());
/// ```
#[derive(Debug)]
pub struct RealtimeWorld {
    sender: IntentSender,
    events: Receiver<Outcome>,
    tick_thread: Option<JoinHandle<Session>>,
    recovered: Option<Session>,
}

impl RealtimeWorld {
    /// Validate `config`, build a session and start the tick thread.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let capacity = config.intent_queue_capacity;
        let session = Session::new(config)?;
        Self::spawn(session, capacity)
    }

    /// Start a tick thread over an existing session.
    ///
    /// Returns [`ConfigError::IntentQueueZero`] if `intent_queue_capacity`
    /// is zero.
    pub fn from_session(
        session: Session,
        intent_queue_capacity: usize,
    ) -> Result<Self, ConfigError> {
        if intent_queue_capacity == 0 {
            return Err(ConfigError::IntentQueueZero);
        }
        Self::spawn(session, intent_queue_capacity)
    }

    fn spawn(session: Session, intent_queue_capacity: usize) -> Result<Self, ConfigError> {
        let (intent_tx, intent_rx) = crossbeam_channel::bounded(intent_queue_capacity);
        let (event_tx, event_rx) = crossbeam_channel::unbounded();

        let state = TickThreadState::new(session, intent_rx, event_tx);
        let tick_thread = thread::Builder::new()
            .name("lifegrid-tick".into())
            .spawn(move || state.run())
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;

        Ok(Self {
            sender: IntentSender {
                tx: intent_tx,
                closed: Arc::new(RwLock::new(false)),
            },
            events: event_rx,
            tick_thread: Some(tick_thread),
            recovered: None,
        })
    }

    /// A new handle for submitting intents from another thread.
    pub fn sender(&self) -> IntentSender {
        self.sender.clone()
    }

    /// Queue an intent for the tick thread.
    pub fn submit(&self, intent: Intent) -> Result<(), SubmitError> {
        self.sender.submit(intent)
    }

    /// Outcomes in the order the tick thread produced them, including
    /// automatic ticks.
    pub fn events(&self) -> &Receiver<Outcome> {
        &self.events
    }

    /// Whether the tick thread is still accepting intents.
    pub fn is_running(&self) -> bool {
        self.tick_thread.is_some()
    }

    /// Stop the tick thread after every intent queued so far.
    ///
    /// New submissions are refused from the moment this is called.
    /// Idempotent: later calls return an empty report.
    pub fn shutdown(&mut self) -> ShutdownReport {
        let Some(handle) = self.tick_thread.take() else {
            return ShutdownReport {
                total_ms: 0,
                drained: 0,
                tick_joined: true,
            };
        };

        let start = Instant::now();
        let drained = {
            let mut closed = self
                .sender
                .closed
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *closed = true;
            let drained = self.sender.tx.len();
            // Blocking send under the write guard: the marker lands behind
            // every accepted intent. The tick thread never takes the lock.
            // Fails only if the thread already exited.
            let _ = self.sender.tx.send(Envelope::Shutdown);
            drained
        };

        let tick_joined = match handle.join() {
            Ok(session) => {
                self.recovered = Some(session);
                true
            }
            Err(_) => false,
        };
        tracing::info!(drained, tick_joined, "realtime world shut down");

        ShutdownReport {
            total_ms: start.elapsed().as_millis() as u64,
            drained,
            tick_joined,
        }
    }

    /// The session recovered by [`shutdown()`](Self::shutdown).
    ///
    /// `None` before shutdown, if the tick thread panicked, or once taken.
    pub fn take_session(&mut self) -> Option<Session> {
        self.recovered.take()
    }
}

impl Drop for RealtimeWorld {
    fn drop(&mut self) {
        if self.tick_thread.is_some() {
            self.shutdown();
        }
    }
}

//! Tick loop for the background scheduler.
//!
//! The tick thread owns the [`Session`] exclusively (moved in via
//! `thread::Builder::spawn`). No locks on the session: intents arrive over
//! a bounded crossbeam channel, outcomes leave over an unbounded one, and
//! the session is handed back through the `JoinHandle` on exit.

use std::time::Instant;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use lifegrid_core::{Intent, Outcome};

use crate::lockstep::LockstepDriver;
use crate::session::Session;

/// Message on the intent channel.
pub(crate) enum Envelope {
    /// A UI intent to apply between ticks.
    Intent(Intent),
    /// Stop after everything queued ahead of this marker. Nothing is
    /// queued behind it: submission is closed before it is sent.
    Shutdown,
}

/// State held by the tick thread's main loop.
pub(crate) struct TickThreadState {
    driver: LockstepDriver,
    intent_rx: Receiver<Envelope>,
    event_tx: Sender<Outcome>,
    events_closed: bool,
    applied: u64,
}

impl TickThreadState {
    pub fn new(session: Session, intent_rx: Receiver<Envelope>, event_tx: Sender<Outcome>) -> Self {
        Self {
            driver: LockstepDriver::from_session(session),
            intent_rx,
            event_tx,
            events_closed: false,
            applied: 0,
        }
    }

    /// Main loop. Runs until the shutdown marker arrives or every
    /// sender is gone.
    ///
    /// Consumes self and returns the session so the caller can recover
    /// it via `JoinHandle<Session>`.
    pub fn run(mut self) -> Session {
        tracing::info!(
            population = self.driver.session().grid().population(),
            "tick thread started"
        );

        loop {
            // Block until an intent arrives or the next tick is due.
            let received = match self.driver.time_until_due(Instant::now()) {
                Some(wait) => self.intent_rx.recv_timeout(wait),
                None => self
                    .intent_rx
                    .recv()
                    .map_err(|_| RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(Envelope::Intent(intent)) => self.apply(intent),
                Ok(Envelope::Shutdown) => break,
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if let Some(result) = self.driver.poll(Instant::now()) {
                self.publish(Outcome::Stepped(result));
            }
        }

        tracing::info!(
            applied = self.applied,
            generation = self.driver.session().grid().generation().0,
            "tick thread stopped"
        );
        self.driver.into_session()
    }

    fn apply(&mut self, intent: Intent) {
        tracing::debug!(?intent, "applying intent");
        let outcome = self.driver.apply(intent);
        self.applied += 1;
        self.publish(outcome);
    }

    fn publish(&mut self, outcome: Outcome) {
        if self.events_closed {
            return;
        }
        if self.event_tx.send(outcome).is_err() {
            tracing::warn!("event receiver dropped; discarding further outcomes");
            self.events_closed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use lifegrid_core::Cell;

    fn spawn_state() -> (
        Sender<Envelope>,
        Receiver<Outcome>,
        std::thread::JoinHandle<Session>,
    ) {
        let session = Session::new(SessionConfig::default()).unwrap();
        let (intent_tx, intent_rx) = crossbeam_channel::bounded(16);
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        let state = TickThreadState::new(session, intent_rx, event_tx);
        let handle = std::thread::spawn(move || state.run());
        (intent_tx, event_rx, handle)
    }

    #[test]
    fn marker_stops_after_queued_intents() {
        let (tx, events, handle) = spawn_state();
        tx.send(Envelope::Intent(Intent::AddCell(Cell::new(1, 1))))
            .unwrap();
        tx.send(Envelope::Intent(Intent::AddCell(Cell::new(2, 2))))
            .unwrap();
        tx.send(Envelope::Shutdown).unwrap();

        let session = handle.join().unwrap();
        assert_eq!(session.grid().population(), 2);
        assert_eq!(events.try_iter().count(), 2);
    }

    #[test]
    fn disconnect_stops_loop() {
        let (tx, _events, handle) = spawn_state();
        drop(tx);
        let session = handle.join().unwrap();
        assert!(session.grid().is_empty());
    }

    #[test]
    fn dropped_event_receiver_does_not_stop_loop() {
        let (tx, events, handle) = spawn_state();
        drop(events);
        tx.send(Envelope::Intent(Intent::AddCell(Cell::new(0, 0))))
            .unwrap();
        tx.send(Envelope::Intent(Intent::AddCell(Cell::new(5, 5))))
            .unwrap();
        tx.send(Envelope::Shutdown).unwrap();
        let session = handle.join().unwrap();
        assert_eq!(session.grid().population(), 2);
    }
}

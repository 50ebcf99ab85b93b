//! Simulation engine for the lifegrid cellular automaton.
//!
//! Provides the [`LifeGrid`] kernel (sparse generation stepping over an
//! unbounded lattice), the undo [`HistoryStack`] and [`QuicksaveSlot`],
//! the owned [`Session`] that applies UI intents, and two schedulers:
//! the cooperative [`LockstepDriver`] and the background-thread
//! [`RealtimeWorld`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod grid;
pub mod history;
pub mod lockstep;
pub mod metrics;
pub mod quicksave;
pub mod realtime;
pub mod session;
pub mod tick;
mod tick_thread;

pub use config::{ConfigError, SessionConfig};
pub use grid::LifeGrid;
pub use history::HistoryStack;
pub use lockstep::LockstepDriver;
pub use metrics::TickMetrics;
pub use quicksave::QuicksaveSlot;
pub use realtime::{IntentSender, RealtimeWorld, ShutdownReport, SubmitError};
pub use session::Session;
pub use tick::{step, step_live, Transition};

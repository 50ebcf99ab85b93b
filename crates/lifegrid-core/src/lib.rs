//! Core types for the lifegrid cellular automaton kernel.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared across the workspace: cell coordinates, rule
//! parameters, live-set snapshots, tick results, UI intents, brush
//! masks, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod brush;
pub mod command;
pub mod error;
pub mod id;
pub mod live;
pub mod neighbourhood;
pub mod rule;

pub use brush::BrushMask;
pub use command::{Intent, NoOpReason, Outcome};
pub use error::{BrushError, IntentError, RuleError, RuleInputError};
pub use id::{Bounds, Cell, Generation};
pub use live::{LiveSet, Snapshot, TickResult};
pub use neighbourhood::{moore, MOORE_OFFSETS};
pub use rule::{RuleParameters, MAX_NEIGHBOURS};

//! UI intents delivered to a simulation session, and their outcomes.

use std::time::Duration;

use crate::error::IntentError;
use crate::id::Cell;
use crate::live::{Snapshot, TickResult};
use crate::rule::RuleParameters;

/// One user action, applied to a session strictly between ticks.
///
/// Each variant captures its arguments by value so intents can be
/// queued on a channel and applied later, in order.
///
/// # Examples
///
/// ```
/// use lifegrid_core::{Cell, Intent};
///
/// let queued = vec![
///     Intent::AddCell(Cell::new(0, 0)),
///     Intent::Stamp(vec![Cell::new(1, 0), Cell::new(2, 0)]),
///     Intent::ToggleRunning,
/// ];
/// assert_eq!(queued.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Bring one cell to life (left click / drag).
    AddCell(Cell),
    /// Kill one cell (right click / drag).
    RemoveCell(Cell),
    /// Bring several cells to life at once (brush stamp).
    Stamp(Vec<Cell>),
    /// Kill every cell and reset the generation counter.
    Clear,
    /// Replace the live set wholesale (file load).
    Load(Vec<Cell>),
    /// Install new birth/survival rules.
    SetRules(RuleParameters),
    /// Flip the running flag.
    ToggleRunning,
    /// Set the running flag.
    SetRunning(bool),
    /// Select a tick interval by index into the configured speed list.
    SetSpeed(usize),
    /// Advance one generation, pushing an undo entry first.
    Step,
    /// Restore the state before the most recent step.
    StepBack,
    /// Store the current live set in the quicksave slot.
    Quicksave,
    /// Restore the quicksave slot.
    Quickload,
}

/// Why an intent changed nothing.
///
/// These are expected, benign conditions, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoOpReason {
    /// Every targeted cell was already live.
    AlreadyAlive,
    /// The targeted cell was already dead.
    AlreadyDead,
    /// The undo history is empty.
    NothingToUndo,
    /// The quicksave slot is empty.
    NothingSaved,
}

/// Observable result of applying one [`Intent`].
///
/// A view reconciles itself from the stream of outcomes: cell-level
/// variants are incremental, [`Outcome::Replaced`] requires a full
/// redraw, and [`Outcome::Stepped`] carries the died/born sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// These cells became live.
    CellsAdded(Vec<Cell>),
    /// These cells died.
    CellsRemoved(Vec<Cell>),
    /// The live set was replaced wholesale.
    Replaced(Snapshot),
    /// One generation advanced.
    Stepped(TickResult),
    /// New rules are in effect.
    RulesChanged(RuleParameters),
    /// The running flag now has this value.
    RunningChanged(bool),
    /// A new tick interval is in effect.
    SpeedChanged {
        /// Index into the configured speed list.
        index: usize,
        /// The tick interval at that index.
        interval: Duration,
    },
    /// The quicksave slot was overwritten.
    Saved,
    /// Nothing changed.
    NoOp(NoOpReason),
    /// The intent was invalid; nothing changed.
    Rejected(IntentError),
}

impl Outcome {
    /// Whether the outcome changed any session state.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::NoOp(_) | Self::Rejected(_))
    }
}

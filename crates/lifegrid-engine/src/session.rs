//! The owned simulation state a scheduler drives.
//!
//! [`Session`] bundles a [`LifeGrid`] with its undo history, quicksave
//! slot, running flag, and speed selection. Every UI action is an
//! [`Intent`] applied through [`Session::apply`]; schedulers call it
//! strictly between ticks, so a tick never observes a partially applied
//! intent.

use std::time::Duration;

use lifegrid_core::{Intent, IntentError, NoOpReason, Outcome, Snapshot, TickResult};

use crate::config::{ConfigError, SessionConfig};
use crate::grid::LifeGrid;
use crate::history::HistoryStack;
use crate::quicksave::QuicksaveSlot;

/// Grid, undo history, quicksave slot, and run/speed state.
///
/// # Example
///
/// ```
/// use lifegrid_core::{Cell, Intent, Outcome};
/// use lifegrid_engine::{Session, SessionConfig};
///
/// let mut session = Session::new(SessionConfig::default()).unwrap();
/// session.apply(Intent::Stamp(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]));
/// let Outcome::Stepped(result) = session.apply(Intent::Step) else {
///     panic!("step should advance");
/// };
/// assert_eq!(result.born.len(), 2);
///
/// session.apply(Intent::StepBack);
/// assert!(session.grid().contains(Cell::new(0, 0)));
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    grid: LifeGrid,
    history: HistoryStack,
    quicksave: QuicksaveSlot,
    running: bool,
    speed: usize,
    speeds: Vec<Duration>,
}

impl Session {
    /// Validate `config` and build an empty, paused session.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            grid: LifeGrid::with_rules(config.rules),
            history: HistoryStack::new(config.history_capacity),
            quicksave: QuicksaveSlot::new(),
            running: false,
            speed: config.initial_speed,
            speeds: config.speeds,
        })
    }

    /// Apply one intent and report what changed.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::AddCell(cell) => {
                if self.grid.add_cell(cell) {
                    Outcome::CellsAdded(vec![cell])
                } else {
                    Outcome::NoOp(NoOpReason::AlreadyAlive)
                }
            }
            Intent::RemoveCell(cell) => {
                if self.grid.remove_cell(cell) {
                    Outcome::CellsRemoved(vec![cell])
                } else {
                    Outcome::NoOp(NoOpReason::AlreadyDead)
                }
            }
            Intent::Stamp(cells) => {
                let added = self.grid.add_cells(cells);
                if added.is_empty() {
                    Outcome::NoOp(NoOpReason::AlreadyAlive)
                } else {
                    Outcome::CellsAdded(added)
                }
            }
            Intent::Clear => {
                self.grid.clear();
                Outcome::Replaced(self.grid.snapshot())
            }
            Intent::Load(cells) => {
                self.grid.replace_all(cells);
                Outcome::Replaced(self.grid.snapshot())
            }
            Intent::SetRules(rules) => {
                self.grid.set_rule_parameters(rules);
                Outcome::RulesChanged(rules)
            }
            Intent::ToggleRunning => Outcome::RunningChanged(self.toggle_running()),
            Intent::SetRunning(running) => {
                self.set_running(running);
                Outcome::RunningChanged(running)
            }
            Intent::SetSpeed(index) => match self.set_speed(index) {
                Ok(interval) => Outcome::SpeedChanged { index, interval },
                Err(e) => Outcome::Rejected(e),
            },
            Intent::Step => Outcome::Stepped(self.step()),
            Intent::StepBack => match self.step_back() {
                Some(snapshot) => Outcome::Replaced(snapshot),
                None => Outcome::NoOp(NoOpReason::NothingToUndo),
            },
            Intent::Quicksave => {
                self.quicksave();
                Outcome::Saved
            }
            Intent::Quickload => match self.quickload() {
                Some(snapshot) => Outcome::Replaced(snapshot),
                None => Outcome::NoOp(NoOpReason::NothingSaved),
            },
        }
    }

    /// Push an undo entry, then advance one generation.
    pub fn step(&mut self) -> TickResult {
        if self.history.push(self.grid.snapshot()).is_some() {
            tracing::debug!(
                capacity = self.history.capacity(),
                "oldest undo entry evicted"
            );
        }
        self.grid.advance_generation()
    }

    /// Restore the state from before the most recent step.
    ///
    /// Returns the restored snapshot, or `None` if the history is empty.
    pub fn step_back(&mut self) -> Option<Snapshot> {
        let snapshot = self.history.pop()?;
        self.grid.restore(snapshot.clone());
        Some(snapshot)
    }

    /// Store the current live set in the quicksave slot.
    pub fn quicksave(&mut self) {
        self.quicksave.save(self.grid.snapshot());
    }

    /// Restore the quicksave slot, or `None` if nothing is saved.
    pub fn quickload(&mut self) -> Option<Snapshot> {
        let snapshot = self.quicksave.load()?;
        self.grid.restore(snapshot.clone());
        Some(snapshot)
    }

    /// Set the running flag.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Flip the running flag and return the new value.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Whether automatic ticking is enabled.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Select a speed by index, returning its tick interval.
    pub fn set_speed(&mut self, index: usize) -> Result<Duration, IntentError> {
        let interval = *self
            .speeds
            .get(index)
            .ok_or(IntentError::SpeedOutOfRange {
                index,
                available: self.speeds.len(),
            })?;
        self.speed = index;
        Ok(interval)
    }

    /// Index of the selected speed.
    pub fn speed(&self) -> usize {
        self.speed
    }

    /// Minimum time between automatic ticks at the selected speed.
    pub fn tick_interval(&self) -> Duration {
        self.speeds[self.speed]
    }

    /// The configured speed list.
    pub fn speeds(&self) -> &[Duration] {
        &self.speeds
    }

    /// The grid.
    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    /// Mutable access to the grid, bypassing intent bookkeeping.
    pub fn grid_mut(&mut self) -> &mut LifeGrid {
        &mut self.grid
    }

    /// The undo history.
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// The quicksave slot.
    pub fn quicksave_slot(&self) -> &QuicksaveSlot {
        &self.quicksave
    }
}

//! The [`LifeGrid`] kernel: live cells, rules, and generation advance.
//!
//! # Ownership model
//!
//! The live set is held behind an `Arc` and shared with every
//! [`Snapshot`] handed out. Taking a snapshot is `O(1)`; the grid copies
//! its set on the next mutation only if a snapshot still refers to it
//! (`Arc::make_mut`). A generation advance always builds a fresh set, so
//! pushing an undo entry before every tick costs no copy at all.

use std::sync::Arc;
use std::time::Instant;

use lifegrid_core::{
    Bounds, Cell, Generation, LiveSet, RuleError, RuleParameters, Snapshot, TickResult,
};

use crate::metrics::TickMetrics;
use crate::tick::step_live;

/// Sparse cellular-automaton grid on the unbounded lattice.
///
/// # Example
///
/// ```
/// use lifegrid_core::Cell;
/// use lifegrid_engine::LifeGrid;
///
/// let mut grid = LifeGrid::new();
/// for x in 0..3 {
///     grid.add_cell(Cell::new(x, 0));
/// }
/// let result = grid.advance_generation();
/// assert_eq!(result.born.len(), 2);
/// assert_eq!(result.died.len(), 2);
/// assert!(grid.contains(Cell::new(1, -1)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LifeGrid {
    live: Arc<LiveSet>,
    rules: RuleParameters,
    generation: Generation,
    last_metrics: TickMetrics,
}

impl LifeGrid {
    /// An empty grid with standard Conway rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty grid with the given rules.
    pub fn with_rules(rules: RuleParameters) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Bring `cell` to life. Returns `false` if it was already live.
    pub fn add_cell(&mut self, cell: Cell) -> bool {
        if self.live.contains(&cell) {
            return false;
        }
        Arc::make_mut(&mut self.live).insert(cell)
    }

    /// Kill `cell`. Returns `false` if it was already dead.
    pub fn remove_cell(&mut self, cell: Cell) -> bool {
        if !self.live.contains(&cell) {
            return false;
        }
        Arc::make_mut(&mut self.live).shift_remove(&cell)
    }

    /// Bring several cells to life, returning those that were not
    /// already live, in input order.
    pub fn add_cells<I>(&mut self, cells: I) -> Vec<Cell>
    where
        I: IntoIterator<Item = Cell>,
    {
        let fresh: Vec<Cell> = {
            let mut seen = LiveSet::new();
            cells
                .into_iter()
                .filter(|c| !self.live.contains(c) && seen.insert(*c))
                .collect()
        };
        if !fresh.is_empty() {
            Arc::make_mut(&mut self.live).extend(fresh.iter().copied());
        }
        fresh
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.live = Arc::default();
        self.generation = Generation::default();
    }

    /// Install `cells` as the new live set, collapsing duplicates.
    pub fn replace_all<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Cell>,
    {
        self.live = Arc::new(cells.into_iter().collect());
    }

    /// Install a snapshot as the live set without copying it.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.live = snapshot.into_shared();
    }

    /// Validate and install new rules.
    ///
    /// On error the previous rules remain in effect.
    pub fn set_rules(
        &mut self,
        survival_min: i64,
        survival_max: i64,
        birth_count: i64,
    ) -> Result<(), RuleError> {
        self.rules = RuleParameters::new(survival_min, survival_max, birth_count)?;
        Ok(())
    }

    /// Install already-validated rules.
    pub fn set_rule_parameters(&mut self, rules: RuleParameters) {
        self.rules = rules;
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Read-only view of the live set, in stable order.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_shared(Arc::clone(&self.live))
    }

    /// Whether `cell` is live.
    pub fn contains(&self, cell: Cell) -> bool {
        self.live.contains(&cell)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Whether no cell is live.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Iterate live cells in stable order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.live.iter().copied()
    }

    /// Bounding box of the live cells, or `None` if empty.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(self.cells())
    }

    /// The rules in effect.
    pub fn rules(&self) -> RuleParameters {
        self.rules
    }

    /// Number of generations advanced since construction or the last
    /// [`clear`](Self::clear).
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Metrics from the most recent advance.
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.last_metrics
    }

    // ── Generation advance ──────────────────────────────────────

    /// Advance one generation.
    ///
    /// Returns the new live set together with the cells that died and
    /// the cells that were born, so a view can update incrementally.
    pub fn advance_generation(&mut self) -> TickResult {
        let start = Instant::now();
        let rules = self.rules;
        let population_before = self.live.len();

        let transition = step_live(&self.live, rules);
        self.live = Arc::new(transition.next);
        self.generation = self.generation.next();

        self.last_metrics = TickMetrics {
            total_us: start.elapsed().as_micros() as u64,
            population_before,
            population_after: self.live.len(),
            candidates: transition.candidates,
            born: transition.born.len(),
            died: transition.died.len(),
        };
        tracing::trace!(
            generation = self.generation.0,
            population = self.last_metrics.population_after,
            born = self.last_metrics.born,
            died = self.last_metrics.died,
            us = self.last_metrics.total_us,
            "generation advanced"
        );

        TickResult {
            generation: self.generation,
            live: self.snapshot(),
            died: transition.died,
            born: transition.born,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_test_utils::{block, blinker_horizontal, live};

    fn grid_of(cells: &LiveSet) -> LifeGrid {
        let mut g = LifeGrid::new();
        g.replace_all(cells.iter().copied());
        g
    }

    #[test]
    fn add_is_idempotent() {
        let mut g = LifeGrid::new();
        assert!(g.add_cell(Cell::new(1, 1)));
        assert!(!g.add_cell(Cell::new(1, 1)));
        assert_eq!(g.population(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut g = LifeGrid::new();
        g.add_cell(Cell::new(1, 1));
        assert!(g.remove_cell(Cell::new(1, 1)));
        assert!(!g.remove_cell(Cell::new(1, 1)));
        assert!(g.is_empty());
    }

    #[test]
    fn remove_preserves_order_of_remaining_cells() {
        let mut g = LifeGrid::new();
        for x in 0..4 {
            g.add_cell(Cell::new(x, 0));
        }
        g.remove_cell(Cell::new(1, 0));
        assert_eq!(
            g.snapshot().to_vec(),
            vec![Cell::new(0, 0), Cell::new(2, 0), Cell::new(3, 0)]
        );
    }

    #[test]
    fn add_cells_reports_only_new_cells() {
        let mut g = LifeGrid::new();
        g.add_cell(Cell::new(0, 0));
        let added = g.add_cells([Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 0)]);
        assert_eq!(added, vec![Cell::new(1, 0)]);
        assert_eq!(g.population(), 2);
    }

    #[test]
    fn replace_all_deduplicates() {
        let mut g = LifeGrid::new();
        g.replace_all([Cell::new(3, 3), Cell::new(3, 3), Cell::new(4, 4)]);
        assert_eq!(g.population(), 2);
    }

    #[test]
    fn clear_resets_generation() {
        let mut g = grid_of(&block(Cell::ORIGIN));
        g.advance_generation();
        assert_eq!(g.generation(), Generation(1));
        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.generation(), Generation(0));
    }

    #[test]
    fn invalid_rules_leave_previous_rules_in_effect() {
        let mut g = LifeGrid::new();
        g.set_rules(1, 4, 2).unwrap();
        assert!(g.set_rules(5, 4, 3).is_err());
        assert!(g.set_rules(2, 3, 9).is_err());
        assert_eq!(g.rules(), RuleParameters::new(1, 4, 2).unwrap());
    }

    #[test]
    fn snapshot_is_unaffected_by_later_mutation() {
        let mut g = grid_of(&block(Cell::ORIGIN));
        let before = g.snapshot();
        g.add_cell(Cell::new(10, 10));
        g.remove_cell(Cell::ORIGIN);
        assert_eq!(before, Snapshot::from(block(Cell::ORIGIN)));
        assert_eq!(g.population(), 4);
    }

    #[test]
    fn advance_reports_result_and_metrics() {
        let mut g = grid_of(&blinker_horizontal(Cell::ORIGIN));
        let r = g.advance_generation();
        assert_eq!(r.generation, Generation(1));
        assert_eq!(r.live, Snapshot::from(live(&[(1, -1), (1, 0), (1, 1)])));
        assert_eq!(r.live, g.snapshot());
        let m = g.last_metrics();
        assert_eq!(m.population_before, 3);
        assert_eq!(m.population_after, 3);
        assert_eq!((m.born, m.died), (2, 2));
        assert!(m.candidates >= 2);
    }

    #[test]
    fn empty_grid_ticks_to_empty() {
        let mut g = LifeGrid::new();
        let r = g.advance_generation();
        assert!(r.live.is_empty());
        assert!(r.is_still());
        assert_eq!(g.generation(), Generation(1));
    }

    #[test]
    fn block_ticks_to_itself() {
        let mut g = grid_of(&live(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
        let r = g.advance_generation();
        assert!(r.is_still());
        assert_eq!(r.live, Snapshot::from(block(Cell::ORIGIN)));
    }

    #[test]
    fn restore_shares_snapshot_allocation() {
        let mut g = grid_of(&block(Cell::ORIGIN));
        let saved = g.snapshot();
        g.clear();
        g.restore(saved.clone());
        assert!(g.snapshot().ptr_eq(&saved));
    }

    #[test]
    fn bounds_cover_live_cells() {
        let g = grid_of(&live(&[(-3, 2), (4, -1)]));
        let b = g.bounds().unwrap();
        assert_eq!((b.min, b.max), (Cell::new(-3, -1), Cell::new(4, 2)));
        assert!(LifeGrid::new().bounds().is_none());
    }
}

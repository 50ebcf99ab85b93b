//! Live-cell sets, immutable snapshots, and per-tick results.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::id::{Bounds, Cell, Generation};

/// The set of live cells, unique by coordinate.
///
/// Iteration follows insertion order. The stepping algorithm never
/// depends on that order, but it gives snapshots and save files a stable
/// ordering for a given history of mutations.
pub type LiveSet = IndexSet<Cell>;

/// An immutable, cheaply clonable view of a [`LiveSet`].
///
/// Used for undo history entries, the quicksave slot, and the new live
/// set carried by a [`TickResult`]. Cloning bumps a reference count; the
/// grid copies its set only if it is mutated while a snapshot of it is
/// still held elsewhere.
#[derive(Clone, Debug, Default)]
pub struct Snapshot(Arc<LiveSet>);

impl Snapshot {
    /// Wrap a shared live set.
    pub fn from_shared(live: Arc<LiveSet>) -> Self {
        Self(live)
    }

    /// Number of live cells.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot has no live cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `cell` is live in this snapshot.
    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    /// Iterate cells in stable order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().copied()
    }

    /// Bounding box of the live cells, or `None` if empty.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(self.iter())
    }

    /// Copy the cells out in stable order.
    pub fn to_vec(&self) -> Vec<Cell> {
        self.iter().collect()
    }

    /// Borrow the underlying set.
    pub fn as_set(&self) -> &LiveSet {
        &self.0
    }

    /// The shared set backing this snapshot.
    pub fn into_shared(self) -> Arc<LiveSet> {
        self.0
    }

    /// Whether both snapshots share the same allocation.
    pub fn ptr_eq(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<LiveSet> for Snapshot {
    fn from(live: LiveSet) -> Self {
        Self(Arc::new(live))
    }
}

impl FromIterator<Cell> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<LiveSet>())
    }
}

/// Set equality: two snapshots are equal if they hold the same cells,
/// regardless of order.
impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0 == *other.0
    }
}

impl Eq for Snapshot {}

/// Output of one generation advance.
///
/// `died` holds cells that were live and are not in `live`; `born` holds
/// cells that were not live and are in `live`. Both are unique and
/// disjoint from each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickResult {
    /// The generation reached by this tick.
    pub generation: Generation,
    /// The new live set.
    pub live: Snapshot,
    /// Cells that died this tick.
    pub died: Vec<Cell>,
    /// Cells born this tick.
    pub born: Vec<Cell>,
}

impl TickResult {
    /// Whether the tick left the live set unchanged.
    pub fn is_still(&self) -> bool {
        self.died.is_empty() && self.born.is_empty()
    }
}

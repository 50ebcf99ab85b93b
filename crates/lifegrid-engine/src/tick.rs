//! Sparse generation stepping: the neighbour-broadcast counting pass.
//!
//! Neighbour counts are accumulated by broadcasting from every live cell
//! to its 8 Moore neighbours, never by querying each candidate's
//! neighbourhood. Cost is `O(live × 8)` regardless of how far apart the
//! live cells are.
//!
//! Two disjoint count domains are kept:
//!
//! - **live counts**: one counter per live cell, stored densely and
//!   indexed by the cell's position in the [`LiveSet`];
//! - **candidate counts**: dead cells adjacent to at least one live
//!   cell, inserted lazily on first touch.

use indexmap::IndexMap;
use lifegrid_core::{moore, Cell, LiveSet, RuleParameters};

/// The raw result of one counting pass.
///
/// `died` and `born` follow the iteration order of the input set and of
/// first candidate contact respectively, so a given input order always
/// yields the same output order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    /// Survivors followed by newborns.
    pub next: LiveSet,
    /// Live cells whose count fell outside the survival band.
    pub died: Vec<Cell>,
    /// Dead cells whose count equalled the birth count.
    pub born: Vec<Cell>,
    /// Number of distinct dead cells that were considered for birth.
    pub candidates: usize,
}

/// Advance an arbitrary sequence of live cells by one generation.
///
/// Duplicate coordinates are collapsed before counting, so a caller
/// that bypassed set semantics still gets a single-copy result.
pub fn step<I>(cells: I, rules: RuleParameters) -> Transition
where
    I: IntoIterator<Item = Cell>,
{
    let live: LiveSet = cells.into_iter().collect();
    step_live(&live, rules)
}

/// Advance a deduplicated live set by one generation.
///
/// Rules are taken by value, so the whole pass sees one consistent set
/// of parameters.
pub fn step_live(live: &LiveSet, rules: RuleParameters) -> Transition {
    let mut live_counts = vec![0u8; live.len()];
    let mut candidate_counts: IndexMap<Cell, u8> = IndexMap::new();

    for &cell in live {
        for neighbour in moore(cell) {
            match live.get_index_of(&neighbour) {
                Some(i) => live_counts[i] += 1,
                None => *candidate_counts.entry(neighbour).or_insert(0) += 1,
            }
        }
    }

    let mut next = LiveSet::with_capacity(live.len());
    let mut died = Vec::new();
    for (&cell, &count) in live.iter().zip(&live_counts) {
        if rules.survives(count) {
            next.insert(cell);
        } else {
            died.push(cell);
        }
    }

    let candidates = candidate_counts.len();
    let mut born = Vec::new();
    for (cell, count) in candidate_counts {
        if rules.is_born(count) {
            next.insert(cell);
            born.push(cell);
        }
    }

    Transition {
        next,
        died,
        born,
        candidates,
    }
}

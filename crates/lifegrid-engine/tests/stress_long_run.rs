//! Long-run consistency: drive a random soup through many generations
//! and check the per-tick bookkeeping never drifts.
//!
//! Pass criterion: for every tick, `after = before - died + born`, the
//! died/born lists agree with a set difference of consecutive snapshots,
//! and undo replays the exact sequence of prior states.

use std::collections::HashSet;

use lifegrid_bench::reference_profile;
use lifegrid_core::{Cell, Snapshot};

const TICKS: usize = 200;

fn as_set(s: &Snapshot) -> HashSet<Cell> {
    s.iter().collect()
}

#[test]
fn population_bookkeeping_is_exact() {
    let mut session = reference_profile(7).unwrap();
    for _ in 0..TICKS {
        let before = session.grid().snapshot();
        let result = session.step();

        let metrics = session.grid().last_metrics();
        assert_eq!(metrics.population_before, before.len());
        assert_eq!(metrics.population_after, result.live.len());
        assert_eq!(
            result.live.len() + result.died.len(),
            before.len() + result.born.len()
        );

        let prev = as_set(&before);
        let next = as_set(&result.live);
        let died: HashSet<Cell> = prev.difference(&next).copied().collect();
        let born: HashSet<Cell> = next.difference(&prev).copied().collect();
        assert_eq!(died, result.died.iter().copied().collect());
        assert_eq!(born, result.born.iter().copied().collect());
    }
}

#[test]
fn undo_replays_every_prior_state() {
    let mut session = reference_profile(11).unwrap();
    let mut states = vec![session.grid().snapshot()];
    for _ in 0..50 {
        session.step();
        states.push(session.grid().snapshot());
    }
    states.pop();
    while let Some(expected) = states.pop() {
        let restored = session.step_back().expect("history should cover 50 steps");
        assert_eq!(restored, expected);
        assert_eq!(session.grid().snapshot(), expected);
    }
    assert!(session.step_back().is_none());
}

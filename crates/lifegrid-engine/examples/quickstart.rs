//! Lifegrid Quickstart: a cooperative session driven from a host loop.
//!
//! Demonstrates:
//!   1. Building a Session from a SessionConfig
//!   2. Stamping a brush mask and running under a LockstepDriver
//!   3. Reading per-tick metrics
//!   4. Quicksave, undo, and quickload
//!
//! Run with:
//!   cargo run --example quickstart

use std::time::{Duration, Instant};

use lifegrid_core::{BrushMask, Cell, Intent, Outcome};
use lifegrid_engine::{LockstepDriver, SessionConfig};

// ─── Glider mask ────────────────────────────────────────────────

fn glider_mask() -> BrushMask {
    let rows: Vec<Vec<bool>> = [[0, 1, 0], [0, 0, 1], [1, 1, 1]]
        .iter()
        .map(|r| r.iter().map(|&v| v == 1).collect())
        .collect();
    BrushMask::from_rows(rows).expect("static mask is rectangular")
}

fn main() {
    let config = SessionConfig {
        speeds: vec![Duration::from_millis(50), Duration::from_millis(10)],
        initial_speed: 1,
        ..SessionConfig::default()
    };
    let mut driver = LockstepDriver::new(config).expect("valid config");

    // Two gliders, one rotated to travel south-west.
    let mask = glider_mask();
    driver.apply(Intent::Stamp(mask.stamp(Cell::ORIGIN)));
    driver.apply(Intent::Stamp(mask.rotate_clockwise().stamp(Cell::new(20, 0))));
    driver.apply(Intent::Quicksave);
    driver.apply(Intent::SetRunning(true));

    // ─── Host loop ──────────────────────────────────────────────
    let start = Instant::now();
    while driver.session().grid().generation().0 < 40 {
        let now = Instant::now();
        if let Some(result) = driver.poll(now) {
            let m = driver.session().grid().last_metrics();
            println!(
                "gen {:>3}  live {:>3}  +{} -{}  candidates {:>3}  {}us",
                result.generation, m.population_after, m.born, m.died, m.candidates, m.total_us
            );
        }
        if let Some(wait) = driver.time_until_due(Instant::now()) {
            std::thread::sleep(wait);
        }
    }
    println!("40 generations in {:?}", start.elapsed());

    // ─── Undo and quickload ─────────────────────────────────────
    driver.apply(Intent::SetRunning(false));
    if let Outcome::Replaced(snapshot) = driver.apply(Intent::StepBack) {
        println!("undo -> {} cells", snapshot.len());
    }
    if let Outcome::Replaced(snapshot) = driver.apply(Intent::Quickload) {
        println!("quickload -> {} cells, bounds {:?}", snapshot.len(), snapshot.bounds());
    }
}

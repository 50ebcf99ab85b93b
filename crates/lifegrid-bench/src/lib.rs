//! Benchmark profiles and utilities for the lifegrid cellular automaton.
//!
//! Provides seeded random soups and pre-built sessions for benchmarking:
//!
//! - [`reference_profile`]: 128x128 soup at 35% density (~5.7K live cells)
//! - [`stress_profile`]: 512x512 soup at 35% density (~92K live cells)
//! - [`soup`]: deterministic random fill via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lifegrid_core::{Cell, Intent};
use lifegrid_engine::{ConfigError, Session, SessionConfig};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Density used by the standard profiles, in percent.
pub const SOUP_DENSITY_PERCENT: u32 = 35;

/// Build a reference benchmark session: 128x128 soup, paused.
pub fn reference_profile(seed: u64) -> Result<Session, ConfigError> {
    seeded_session(seed, 128, 128)
}

/// Build a stress benchmark session: 512x512 soup, paused.
///
/// Same density as [`reference_profile`] at 16x the area.
pub fn stress_profile(seed: u64) -> Result<Session, ConfigError> {
    seeded_session(seed, 512, 512)
}

fn seeded_session(seed: u64, width: u32, height: u32) -> Result<Session, ConfigError> {
    let mut session = Session::new(SessionConfig::default())?;
    session.apply(Intent::Load(soup(seed, width, height, SOUP_DENSITY_PERCENT)));
    Ok(session)
}

/// Generate a deterministic random soup.
///
/// Each cell of the `width` x `height` box anchored at the origin is live
/// with probability `density_percent / 100`, drawn from a ChaCha8 stream
/// seeded with `seed`. Cells are returned in row-major order.
pub fn soup(seed: u64, width: u32, height: u32, density_percent: u32) -> Vec<Cell> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let threshold = density_percent.min(100);
    let mut cells = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if rng.next_u32() % 100 < threshold {
                cells.push(Cell::new(x.into(), y.into()));
            }
        }
    }
    cells
}

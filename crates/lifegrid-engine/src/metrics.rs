//! Per-tick metrics for the generation-advance pass.
//!
//! [`TickMetrics`] captures timing and population data for a single
//! tick. The grid records them after each advance; consumers (status
//! bars, profiling) read them from the most recent tick.

/// Timing and population figures collected during a single tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Wall-clock time for the counting pass, in microseconds.
    pub total_us: u64,
    /// Live cells before the tick.
    pub population_before: usize,
    /// Live cells after the tick.
    pub population_after: usize,
    /// Distinct dead cells considered for birth.
    pub candidates: usize,
    /// Cells born this tick.
    pub born: usize,
    /// Cells that died this tick.
    pub died: usize,
}

//! Deterministic sample generation for demo charts.
//!
//! Seeding is an explicit parameter on every entry point; nothing here
//! touches process-global RNG state, so identical seeds reproduce
//! identical charts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::ValueSeries;

/// Labels used by the demo series, one per row of the demo grid.
pub const DEMO_LABELS: [&str; 5] = ["a", "b", "c", "d", "e"];

/// Highlight label used by the demo chart.
pub const DEMO_HIGHLIGHT: &str = "d";

fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// One approximately standard-normal sample (sum of 12 uniforms, shifted).
fn standard_normal(rng: &mut StdRng) -> f64 {
    (0..12).map(|_| rng.random_range(0.0..1.0)).sum::<f64>() - 6.0
}

/// Row-major `rows x cols` grid of approximately standard-normal samples.
pub fn normal_grid(seed: u64, rows: usize, cols: usize) -> Vec<Vec<f64>> {
    let mut rng = seeded_rng(seed);
    (0..rows)
        .map(|_| (0..cols).map(|_| standard_normal(&mut rng)).collect())
        .collect()
}

/// The demo data: a 5x2 grid labeled `a`-`e`, column 0 as the primary
/// series and column 1 as the breakdown of the highlighted segment.
pub fn demo_pair(seed: u64) -> (ValueSeries, ValueSeries) {
    let grid = normal_grid(seed, DEMO_LABELS.len(), 2);
    let mut primary = ValueSeries::new("total");
    let mut exploded = ValueSeries::new("breakdown");
    for (label, row) in DEMO_LABELS.iter().zip(&grid) {
        primary.push(*label, row[0]);
        exploded.push(*label, row[1]);
    }
    (primary, exploded)
}

//! xbar-rs
//!
//! A lightweight Rust library for computing stacked bar layouts and rendering
//! "exploded" bar charts, where one segment of a primary stacked bar is
//! decomposed into a second stacked bar linked by dashed connectors.
//! Pairs with the `xbar` CLI.
//!
//! ### Features
//! - Stacked layout calculator: positives stack upward from zero, negatives
//!   downward, input order preserved
//! - Exploded charts with a two-pass highlight redraw and dashed connectors
//! - Generic single-stack bar chart helper
//! - Save/load series as CSV or JSON; quick per-series summaries
//! - Deterministic seeded demo data (explicit seed, no global RNG state)
//!
//! ### Example
//! ```no_run
//! use xbar_rs::ValueSeries;
//!
//! let primary = ValueSeries::from_pairs(
//!     "total",
//!     [("a", 1.0), ("b", -0.5), ("c", 2.0), ("d", -1.5)],
//! )?;
//! let breakdown = ValueSeries::from_pairs(
//!     "breakdown",
//!     [("d1", -0.9), ("d2", 0.2), ("d3", -0.8)],
//! )?;
//! xbar_rs::viz::plot_exploded(&primary, &breakdown, "d", "exploded.svg", 1000, 600)?;
//! let layout = xbar_rs::layout::compute_stack(&primary);
//! println!("{:#?}", layout);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod layout;
pub mod models;
pub mod sample;
pub mod stats;
pub mod storage;
pub mod viz;

pub use layout::{LayoutError, compute_connectors, compute_stack, highlight_segment, stack_extent};
pub use models::{BarGeometry, ConnectorEndpoints, SeriesEntry, StackExtent, StackedSegment, ValueSeries};

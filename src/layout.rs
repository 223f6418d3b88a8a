//! Stacked bar layout: place signed values end-to-end from a shared zero
//! baseline, positives growing upward and negatives downward, preserving
//! input order within each sign group.
//!
//! All functions here are pure coordinate arithmetic; drawing lives in
//! [`crate::viz`].

use thiserror::Error;

use crate::models::{
    BarGeometry, ConnectorEndpoints, StackExtent, StackedSegment, ValueSeries,
};

/// Errors from series construction and segment lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Requested label does not exist in the series.
    #[error("label '{label}' not found in series")]
    LabelNotFound { label: String },
    /// A series may not contain the same label twice.
    #[error("duplicate label '{label}' in series")]
    DuplicateLabel { label: String },
}

/// Compute the (bottom, top) placement of every value in a vertical stack.
///
/// Two running baselines are kept: the negative baseline starts at the sum
/// of all negative values (the most-negative reach) and is consumed toward
/// zero, so earlier negatives end up at the bottom; the positive baseline
/// starts at zero and grows upward. Each input entry maps to exactly one
/// output segment in the same position. An empty series yields an empty
/// layout.
pub fn compute_stack(series: &ValueSeries) -> Vec<StackedSegment> {
    let mut negative_baseline: f64 = series.values().filter(|v| *v < 0.0).sum();
    let mut positive_baseline = 0.0_f64;

    let mut segments = Vec::with_capacity(series.len());
    for entry in series.entries() {
        let v = entry.value;
        let bottom = if v < 0.0 {
            negative_baseline -= v;
            negative_baseline
        } else {
            let b = positive_baseline;
            positive_baseline += v;
            b
        };
        segments.push(StackedSegment {
            label: entry.label.clone(),
            value: v,
            bottom,
        });
    }
    segments
}

/// Overall reach of a stack: `top` is the sum of non-negative values,
/// `bottom` the sum of negative values.
pub fn stack_extent(series: &ValueSeries) -> StackExtent {
    let mut top = 0.0_f64;
    let mut bottom = 0.0_f64;
    for v in series.values() {
        if v < 0.0 {
            bottom += v;
        } else {
            top += v;
        }
    }
    StackExtent { top, bottom }
}

/// Compute the stack and return the segment for `label`.
pub fn highlight_segment(
    series: &ValueSeries,
    label: &str,
) -> Result<StackedSegment, LayoutError> {
    let idx = series.position_of(label)?;
    let mut segments = compute_stack(series);
    Ok(segments.swap_remove(idx))
}

/// Endpoints of the two dashed connector lines.
///
/// The upper line runs from the highlighted segment's top edge at the right
/// edge of the primary bar to the exploded stack's overall top at the left
/// edge of the exploded bar; the lower line likewise for bottom edges. The
/// y-coordinates are exactly the already-computed segment and extent values.
pub fn compute_connectors(
    highlight: &StackedSegment,
    primary: &BarGeometry,
    exploded_extent: StackExtent,
    exploded: &BarGeometry,
) -> ConnectorEndpoints {
    let x1 = primary.right();
    let x2 = exploded.left();
    ConnectorEndpoints {
        upper: ((x1, highlight.top()), (x2, exploded_extent.top)),
        lower: ((x1, highlight.bottom), (x2, exploded_extent.bottom)),
    }
}

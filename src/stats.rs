use crate::models::ValueSeries;
use serde::{Deserialize, Serialize};

/// Summary statistics for one series.
///
/// `positive_total` and `negative_total` are the signed sums that bound the
/// stacked bar, so a printed summary matches the rendered extent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StackSummary {
    pub name: String,
    pub count: usize,
    pub positive_total: f64,
    pub negative_total: f64,
    pub net: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Compute summary statistics for a series.
pub fn summarize(series: &ValueSeries) -> StackSummary {
    let mut positive_total = 0.0;
    let mut negative_total = 0.0;
    let mut min: Option<f64> = None;
    let mut max: Option<f64> = None;
    for v in series.values() {
        if v < 0.0 {
            negative_total += v;
        } else {
            positive_total += v;
        }
        min = Some(min.map_or(v, |m: f64| m.min(v)));
        max = Some(max.map_or(v, |m: f64| m.max(v)));
    }
    StackSummary {
        name: series.name().to_string(),
        count: series.len(),
        positive_total,
        negative_total,
        net: positive_total + negative_total,
        min,
        max,
    }
}

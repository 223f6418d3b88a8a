use serde::{Deserialize, Serialize};

use crate::layout::LayoutError;

/// One labeled observation in a series (one row = one bar segment).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesEntry {
    pub label: String,
    pub value: f64,
}

/// Ordered sequence of labeled values; order determines stacking order.
///
/// Labels must be unique within a series so that a highlight label
/// identifies exactly one segment. [`ValueSeries::from_pairs`] enforces
/// this; [`ValueSeries::push`] does not (use it for trusted construction).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ValueSeries {
    name: String,
    entries: Vec<SeriesEntry>,
}

impl ValueSeries {
    /// Create an empty series with a display name (used for axis annotation).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Build a series from (label, value) pairs, rejecting duplicate labels.
    pub fn from_pairs<L, I>(name: impl Into<String>, pairs: I) -> Result<Self, LayoutError>
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, f64)>,
    {
        let mut out = Self::new(name);
        let mut seen = std::collections::HashSet::new();
        for (label, value) in pairs {
            let label = label.into();
            if !seen.insert(label.clone()) {
                return Err(LayoutError::DuplicateLabel { label });
            }
            out.entries.push(SeriesEntry { label, value });
        }
        Ok(out)
    }

    /// Append an entry without checking label uniqueness.
    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.entries.push(SeriesEntry {
            label: label.into(),
            value,
        });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.value)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Position of `label` in stacking order; the "label not found" condition
    /// when absent.
    pub fn position_of(&self, label: &str) -> Result<usize, LayoutError> {
        self.entries
            .iter()
            .position(|e| e.label == label)
            .ok_or_else(|| LayoutError::LabelNotFound {
                label: label.to_string(),
            })
    }

    /// Value for `label`, if present.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value)
    }
}

/// One placed bar segment: the input value plus its computed baseline.
///
/// `bottom` and `top()` are both measured from the shared zero baseline;
/// for negative values `top()` lies below `bottom`.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedSegment {
    pub label: String,
    pub value: f64,
    pub bottom: f64,
}

impl StackedSegment {
    pub fn top(&self) -> f64 {
        self.bottom + self.value
    }
}

/// Overall vertical reach of a stack: `top` is the sum of non-negative
/// values, `bottom` the sum of negative values. `top >= 0 >= bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackExtent {
    pub top: f64,
    pub bottom: f64,
}

/// Horizontal placement of one bar in axis units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub center_x: f64,
    pub width: f64,
}

impl BarGeometry {
    pub fn new(center_x: f64, width: f64) -> Self {
        Self { center_x, width }
    }

    pub fn left(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center_x + self.width / 2.0
    }
}

/// A point in data coordinates.
pub type Point = (f64, f64);

/// Dashed-line anchors linking the highlighted segment's edges to the
/// exploded stack's overall extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorEndpoints {
    /// Highlight top edge -> exploded stack top.
    pub upper: (Point, Point),
    /// Highlight bottom edge -> exploded stack bottom.
    pub lower: (Point, Point),
}

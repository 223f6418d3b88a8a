//! Utility functions for visualization: segment palettes and axis ranges.

use plotters::prelude::*;

use super::types::BarPalette;
use crate::models::StackExtent;

/// Palette for the primary stack.
/// Order: Slate, Ochre, Green, Rose, Terracotta.
const PRIMARY5: [RGBColor; 5] = [
    RGBColor(127, 131, 146), // slate      (#7F8392)
    RGBColor(176, 139, 71),  // ochre      (#B08B47)
    RGBColor(82, 164, 121),  // green      (#52A479)
    RGBColor(198, 119, 138), // rose       (#C6778A)
    RGBColor(207, 123, 94),  // terracotta (#CF7B5E)
];

/// Palette for the breakdown stack.
/// Order: Olive, Clay, Lilac, Teal, Sky.
const BREAKDOWN5: [RGBColor; 5] = [
    RGBColor(130, 149, 84),  // olive (#829554)
    RGBColor(167, 128, 113), // clay  (#A78071)
    RGBColor(173, 138, 178), // lilac (#AD8AB2)
    RGBColor(103, 148, 134), // teal  (#679486)
    RGBColor(101, 161, 188), // sky   (#65A1BC)
];

/// Get a segment color, cycling when the series is longer than the palette.
#[inline]
pub fn palette_color(palette: BarPalette, idx: usize) -> RGBAColor {
    let colors = match palette {
        BarPalette::Primary => &PRIMARY5,
        BarPalette::Breakdown => &BREAKDOWN5,
    };
    colors[idx % colors.len()].to_rgba()
}

/// Y-axis range covering every stack extent, padded by 10% of the span.
/// A degenerate (all-zero) span widens to a unit range around zero.
pub fn padded_value_range(extents: &[StackExtent]) -> (f64, f64) {
    let mut min_val = 0.0_f64;
    let mut max_val = 0.0_f64;
    for e in extents {
        min_val = min_val.min(e.bottom);
        max_val = max_val.max(e.top);
    }
    if (max_val - min_val).abs() < f64::EPSILON {
        min_val -= 1.0;
        max_val += 1.0;
    }
    let pad = (max_val - min_val) * 0.10;
    (min_val - pad, max_val + pad)
}

//! Visualization utilities: render stacked and exploded bar charts to
//! **SVG** or **PNG**.
//!
//! - Exploded chart: a primary stacked bar whose highlighted segment is
//!   decomposed into a second stacked bar, linked by dashed connectors
//! - Two-pass segment rendering: all segments first, then an explicit
//!   redraw of the highlighted segment's border (no z-order reliance)
//! - Generic single-stack helper at an arbitrary tick position
//! - Fixed per-stack palettes, cycling for long series

pub mod types;
pub mod util;

// Re-export types for public API
pub use types::{BarPalette, DEFAULT_BAR_WIDTH};

use crate::layout::{compute_connectors, compute_stack, stack_extent};
use crate::models::{BarGeometry, StackedSegment, ValueSeries};
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use types::{HIGHLIGHT_REDRAW_STROKE, HIGHLIGHT_STROKE, SEGMENT_STROKE};
use util::{padded_value_range, palette_color};

/// One-time registration for a fallback "sans-serif" font when using the
/// `ab_glyph` text path. Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    // Safe to call many times; only runs once.
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

type Chart2d<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Convenience: exploded chart with default title and y-axis description.
pub fn plot_exploded<P: AsRef<Path>>(
    primary: &ValueSeries,
    exploded: &ValueSeries,
    highlight_label: &str,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    plot_exploded_chart(
        primary,
        exploded,
        highlight_label,
        out_path,
        width,
        height,
        "Exploded Bar Chart",
        "Value",
    )
}

/// Fully-configurable exploded chart: a primary stack at x=0 whose
/// `highlight_label` segment is decomposed into a second stack at x=1.
///
/// The output format is chosen by extension (`.svg` -> SVG, otherwise a
/// bitmap). Fails when either series is empty or the highlight label is
/// absent from the primary series.
#[allow(clippy::too_many_arguments)]
pub fn plot_exploded_chart<P: AsRef<Path>>(
    primary: &ValueSeries,
    exploded: &ValueSeries,
    highlight_label: &str,
    out_path: P,
    width: u32,
    height: u32,
    title: &str,
    y_desc: &str,
) -> Result<()> {
    if primary.is_empty() || exploded.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    // Fail on a bad highlight before creating the output file.
    let highlight_idx = primary.position_of(highlight_label)?;

    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_exploded(root, primary, exploded, highlight_idx, title, y_desc)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_exploded(root, primary, exploded, highlight_idx, title, y_desc)?;
    }
    Ok(())
}

/// Convenience: single stacked bar with default title, y-axis description,
/// and the primary palette.
pub fn plot_stacked<P: AsRef<Path>>(
    series: &ValueSeries,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    plot_stacked_chart(
        series,
        0.0,
        BarPalette::Primary,
        out_path,
        width,
        height,
        "Stacked Bar Chart",
        "Value",
    )
}

/// Fully-configurable single-stack chart: one stacked bar centered at
/// `tick`, no highlight, no connectors.
#[allow(clippy::too_many_arguments)]
pub fn plot_stacked_chart<P: AsRef<Path>>(
    series: &ValueSeries,
    tick: f64,
    palette: BarPalette,
    out_path: P,
    width: u32,
    height: u32,
    title: &str,
    y_desc: &str,
) -> Result<()> {
    if series.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_stacked(root, series, tick, palette, title, y_desc)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_stacked(root, series, tick, palette, title, y_desc)?;
    }
    Ok(())
}

fn draw_exploded<DB>(
    root: DrawingArea<DB, Shift>,
    primary: &ValueSeries,
    exploded: &ValueSeries,
    highlight_idx: usize,
    title: &str,
    y_desc: &str,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let primary_segments = compute_stack(primary);
    let exploded_segments = compute_stack(exploded);
    let primary_extent = stack_extent(primary);
    let exploded_extent = stack_extent(exploded);

    let primary_bar = BarGeometry::new(0.0, DEFAULT_BAR_WIDTH);
    let exploded_bar = BarGeometry::new(1.0, DEFAULT_BAR_WIDTH);

    let (y_min, y_max) = padded_value_range(&[primary_extent, exploded_extent]);
    let x_min = primary_bar.left() - DEFAULT_BAR_WIDTH;
    let x_max = exploded_bar.right() + DEFAULT_BAR_WIDTH;

    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .caption(title, (FontFamily::SansSerif, 24))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    // Bars are identified by the annotations below, not by tick labels.
    let no_x_labels = |_: &f64| String::new();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&no_x_labels)
        .y_desc(y_desc)
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    // Pass one: every segment of both stacks.
    draw_stack_segments(
        &mut chart,
        &primary_segments,
        &primary_bar,
        BarPalette::Primary,
        Some(highlight_idx),
    )?;
    draw_stack_segments(
        &mut chart,
        &exploded_segments,
        &exploded_bar,
        BarPalette::Breakdown,
        None,
    )?;

    // Pass two: redraw only the highlighted segment so neighbor borders
    // cannot overpaint its emphasis.
    let highlight = &primary_segments[highlight_idx];
    draw_segment(
        &mut chart,
        highlight,
        &primary_bar,
        palette_color(BarPalette::Primary, highlight_idx),
        HIGHLIGHT_REDRAW_STROKE,
    )?;

    // Dashed connectors from the highlighted segment's edges to the
    // exploded stack's overall extent.
    let connectors = compute_connectors(highlight, &primary_bar, exploded_extent, &exploded_bar);
    for (from, to) in [connectors.upper, connectors.lower] {
        chart
            .draw_series(DashedLineSeries::new(
                vec![from, to],
                5,
                4,
                BLACK.stroke_width(1),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    // Series names under the bars.
    annotate_bar(&mut chart, primary.name(), &primary_bar, y_min, y_max)?;
    annotate_bar(&mut chart, exploded.name(), &exploded_bar, y_min, y_max)?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_stacked<DB>(
    root: DrawingArea<DB, Shift>,
    series: &ValueSeries,
    tick: f64,
    palette: BarPalette,
    title: &str,
    y_desc: &str,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let segments = compute_stack(series);
    let extent = stack_extent(series);
    let bar = BarGeometry::new(tick, DEFAULT_BAR_WIDTH);

    let (y_min, y_max) = padded_value_range(&[extent]);
    let x_min = bar.left() - DEFAULT_BAR_WIDTH;
    let x_max = bar.right() + DEFAULT_BAR_WIDTH;

    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .caption(title, (FontFamily::SansSerif, 24))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    let no_x_labels = |_: &f64| String::new();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&no_x_labels)
        .y_desc(y_desc)
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    draw_stack_segments(&mut chart, &segments, &bar, palette, None)?;
    annotate_bar(&mut chart, series.name(), &bar, y_min, y_max)?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Draw every segment of one stack. When `highlight_idx` is given, that
/// segment gets a heavier border on this pass already (the caller still
/// redraws it afterwards).
fn draw_stack_segments<DB>(
    chart: &mut Chart2d<'_, DB>,
    segments: &[StackedSegment],
    bar: &BarGeometry,
    palette: BarPalette,
    highlight_idx: Option<usize>,
) -> Result<()>
where
    DB: DrawingBackend,
{
    for (idx, segment) in segments.iter().enumerate() {
        let stroke = if highlight_idx == Some(idx) {
            HIGHLIGHT_STROKE
        } else {
            SEGMENT_STROKE
        };
        draw_segment(chart, segment, bar, palette_color(palette, idx), stroke)?;
    }
    Ok(())
}

/// Draw one segment as a filled rectangle plus a black border.
fn draw_segment<DB>(
    chart: &mut Chart2d<'_, DB>,
    segment: &StackedSegment,
    bar: &BarGeometry,
    color: RGBAColor,
    stroke: u32,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let corners = [(bar.left(), segment.bottom), (bar.right(), segment.top())];
    chart
        .draw_series(std::iter::once(Rectangle::new(corners, color.filled())))
        .map_err(|e| anyhow!("{:?}", e))?;
    chart
        .draw_series(std::iter::once(Rectangle::new(
            corners,
            BLACK.stroke_width(stroke),
        )))
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Write the series name just above the lower chart edge, centered under
/// its bar.
fn annotate_bar<DB>(
    chart: &mut Chart2d<'_, DB>,
    name: &str,
    bar: &BarGeometry,
    y_min: f64,
    y_max: f64,
) -> Result<()>
where
    DB: DrawingBackend,
{
    if name.is_empty() {
        return Ok(());
    }
    let style = TextStyle::from((FontFamily::SansSerif, 14).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    let y = y_min + (y_max - y_min) * 0.02;
    chart
        .draw_series(std::iter::once(Text::new(
            name.to_string(),
            (bar.center_x, y),
            style,
        )))
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

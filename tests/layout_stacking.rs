use xbar_rs::layout::{self, LayoutError};
use xbar_rs::models::{BarGeometry, ValueSeries};

fn series(pairs: &[(&str, f64)]) -> ValueSeries {
    ValueSeries::from_pairs("s", pairs.iter().map(|(l, v)| (*l, *v))).unwrap()
}

#[test]
fn segment_heights_match_inputs() {
    let s = series(&[("a", 1.0), ("b", -0.5), ("c", 2.0), ("d", -1.5), ("e", 0.0)]);
    let segments = layout::compute_stack(&s);
    assert_eq!(segments.len(), s.len());
    for (segment, v) in segments.iter().zip(s.values()) {
        assert_eq!(segment.top() - segment.bottom, v);
    }
}

#[test]
fn documented_scenario() {
    // negativeBaseline starts at -2.0; for -0.5 it moves to -1.5 and the
    // segment spans (bottom=-1.5, top=-2.0); for -1.5 it reaches 0.0 and
    // the segment spans (0.0, -1.5). Positives: (0,1) then (1,3).
    let s = series(&[("a", 1.0), ("b", -0.5), ("c", 2.0), ("d", -1.5)]);
    let segments = layout::compute_stack(&s);
    let placed: Vec<(f64, f64)> = segments.iter().map(|g| (g.bottom, g.top())).collect();
    assert_eq!(placed, [(0.0, 1.0), (-1.5, -2.0), (1.0, 3.0), (0.0, -1.5)]);
}

#[test]
fn positive_segments_tile_without_gaps() {
    let s = series(&[("a", 0.5), ("b", 1.5), ("c", 0.25)]);
    let segments = layout::compute_stack(&s);
    assert_eq!(segments[0].bottom, 0.0);
    assert_eq!(segments[0].top(), segments[1].bottom);
    assert_eq!(segments[1].top(), segments[2].bottom);
    assert_eq!(segments[2].top(), 2.25);
}

#[test]
fn negative_segments_tile_without_gaps() {
    let s = series(&[("a", -0.5), ("b", -1.5), ("c", -0.25)]);
    let segments = layout::compute_stack(&s);
    // Earlier entries occupy deeper ranges; each top meets the previous
    // bottom on the way up to zero.
    assert_eq!(segments[0].top(), -2.25);
    assert_eq!(segments[0].bottom, segments[1].top());
    assert_eq!(segments[1].bottom, segments[2].top());
    assert_eq!(segments[2].bottom, 0.0);
}

#[test]
fn sign_groups_never_overlap() {
    let s = series(&[
        ("a", 0.7),
        ("b", -1.1),
        ("c", 0.0),
        ("d", 2.3),
        ("e", -0.2),
    ]);
    for segment in layout::compute_stack(&s) {
        let lo = segment.bottom.min(segment.top());
        let hi = segment.bottom.max(segment.top());
        if segment.value >= 0.0 {
            assert!(lo >= 0.0, "{}: non-negative segment below zero", segment.label);
        } else {
            assert!(hi <= 0.0, "{}: negative segment above zero", segment.label);
        }
    }
}

#[test]
fn empty_series_is_fine() {
    let s = ValueSeries::new("empty");
    assert!(layout::compute_stack(&s).is_empty());
}

#[test]
fn missing_highlight_label_is_an_error() {
    let s = series(&[("a", 1.0), ("b", 2.0)]);
    let err = layout::highlight_segment(&s, "nope").unwrap_err();
    assert!(matches!(err, LayoutError::LabelNotFound { .. }));
}

#[test]
fn connector_y_coordinates_are_exact() {
    let primary = series(&[("a", 1.0), ("b", -0.5), ("c", 2.0), ("d", -1.5)]);
    let exploded = series(&[("u", -0.4), ("v", -0.6), ("w", -0.5)]);

    let seg = layout::highlight_segment(&primary, "d").unwrap();
    let extent = layout::stack_extent(&exploded);
    let con = layout::compute_connectors(
        &seg,
        &BarGeometry::new(0.0, 0.5),
        extent,
        &BarGeometry::new(1.0, 0.5),
    );

    // Bitwise equality: endpoints reuse the computed values, they are not
    // re-accumulated.
    assert_eq!(con.upper.0.1, seg.top());
    assert_eq!(con.upper.1.1, extent.top);
    assert_eq!(con.lower.0.1, seg.bottom);
    assert_eq!(con.lower.1.1, extent.bottom);
    assert_eq!(extent.top, 0.0);
    assert_eq!(extent.bottom, -1.5);

    // X endpoints sit on the facing bar edges.
    assert_eq!(con.upper.0.0, 0.25);
    assert_eq!(con.upper.1.0, 0.75);
}

#[test]
fn repeated_runs_are_identical() {
    let s = series(&[("a", 0.1), ("b", -0.2), ("c", 0.3), ("d", -0.4)]);
    let first = layout::compute_stack(&s);
    for _ in 0..10 {
        assert_eq!(layout::compute_stack(&s), first);
    }
}

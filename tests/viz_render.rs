use std::fs;
use std::path::PathBuf;
use xbar_rs::models::ValueSeries;
use xbar_rs::viz::{self, BarPalette};

fn sample_primary() -> ValueSeries {
    ValueSeries::from_pairs(
        "total",
        [("a", 1.0), ("b", -0.5), ("c", 2.0), ("d", -1.5), ("e", 0.8)],
    )
    .unwrap()
}

fn sample_exploded() -> ValueSeries {
    ValueSeries::from_pairs("breakdown", [("d1", -0.9), ("d2", 0.2), ("d3", -0.8)]).unwrap()
}

fn write_and_check<F: Fn(&PathBuf)>(maker: F, name: &str, ext: &str) {
    let tmp = std::env::temp_dir();
    let path: PathBuf = tmp.join(format!("xbar_viz_{}.{}", name, ext));
    maker(&path);
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "output has content");
    fs::remove_file(&path).ok();
}

#[test]
fn exploded_chart_produces_svg() {
    write_and_check(
        |p| {
            viz::plot_exploded(&sample_primary(), &sample_exploded(), "d", p, 800, 480).unwrap();
        },
        "exploded",
        "svg",
    );
}

#[test]
fn exploded_chart_produces_png() {
    write_and_check(
        |p| {
            viz::plot_exploded(&sample_primary(), &sample_exploded(), "d", p, 800, 480).unwrap();
        },
        "exploded",
        "png",
    );
}

#[test]
fn exploded_chart_with_custom_labels() {
    write_and_check(
        |p| {
            viz::plot_exploded_chart(
                &sample_primary(),
                &sample_exploded(),
                "b",
                p,
                800,
                480,
                "Budget Breakdown",
                "EUR (millions)",
            )
            .unwrap();
        },
        "exploded_custom",
        "svg",
    );
}

#[test]
fn stacked_chart_produces_file() {
    write_and_check(
        |p| {
            viz::plot_stacked(&sample_primary(), p, 800, 480).unwrap();
        },
        "stacked",
        "svg",
    );
}

#[test]
fn stacked_chart_at_nonzero_tick() {
    write_and_check(
        |p| {
            viz::plot_stacked_chart(
                &sample_exploded(),
                3.0,
                BarPalette::Breakdown,
                p,
                640,
                400,
                "Offset Stack",
                "Value",
            )
            .unwrap();
        },
        "stacked_tick",
        "svg",
    );
}

#[test]
fn long_series_cycles_palette() {
    let mut series = ValueSeries::new("long");
    for i in 0..12 {
        let sign = if i % 3 == 0 { -1.0 } else { 0.5 };
        series.push(format!("s{i}"), sign * (i as f64 + 1.0));
    }
    write_and_check(
        |p| {
            viz::plot_stacked(&series, p, 800, 480).unwrap();
        },
        "long",
        "svg",
    );
}

#[test]
fn empty_series_is_error() {
    let empty = ValueSeries::new("empty");
    let tmp = std::env::temp_dir().join("xbar_viz_empty.svg");
    assert!(viz::plot_exploded(&empty, &sample_exploded(), "d", &tmp, 800, 480).is_err());
    assert!(viz::plot_exploded(&sample_primary(), &empty, "d", &tmp, 800, 480).is_err());
    assert!(viz::plot_stacked(&empty, &tmp, 800, 480).is_err());
    assert!(!tmp.exists(), "no output file for failed render");
}

#[test]
fn missing_highlight_is_error_and_creates_no_file() {
    let tmp = std::env::temp_dir().join("xbar_viz_missing_highlight.svg");
    let err =
        viz::plot_exploded(&sample_primary(), &sample_exploded(), "zz", &tmp, 800, 480).unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert!(!tmp.exists(), "no output file for failed render");
}

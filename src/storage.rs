use crate::models::{SeriesEntry, ValueSeries};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a series as CSV with a `label,value` header.
pub fn save_csv<P: AsRef<Path>>(series: &ValueSeries, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("label", "value"))?;
    for e in series.entries() {
        wtr.serialize((&e.label, e.value))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Load a series from a `label,value` CSV written by [`save_csv`].
///
/// The file name (without extension) becomes the series name. Duplicate
/// labels are rejected.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<ValueSeries> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    let mut pairs: Vec<(String, f64)> = Vec::new();
    for row in rdr.deserialize() {
        let entry: SeriesEntry = row?;
        pairs.push((entry.label, entry.value));
    }
    Ok(ValueSeries::from_pairs(series_name_from_path(path), pairs)?)
}

/// Save a series as a pretty JSON array of `{label, value}` entries.
pub fn save_json<P: AsRef<Path>>(series: &ValueSeries, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(series.entries())?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Load a series from a JSON array written by [`save_json`].
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<ValueSeries> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let entries: Vec<SeriesEntry> = serde_json::from_reader(f)?;
    Ok(ValueSeries::from_pairs(
        series_name_from_path(path),
        entries.into_iter().map(|e| (e.label, e.value)),
    )?)
}

/// Load a series, picking the format from the file extension
/// (`.json` -> JSON, anything else -> CSV).
pub fn load_series<P: AsRef<Path>>(path: P) -> Result<ValueSeries> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_csv(path),
    }
}

fn series_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("series")
        .to_string()
}

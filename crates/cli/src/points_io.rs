//! Point lists on disk: CSV or Parquet with `x`, `y` columns, or JSON `[[x, y], ...]`.

use anyhow::{anyhow, bail, Context, Result};
use hulltri::geom::Point;
use polars::prelude::*;
use std::fs;
use std::path::Path;

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    match extension(path).as_deref() {
        Some("csv") => {
            let df = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()?
                .collect()
                .with_context(|| format!("reading {}", path.display()))?;
            points_from_frame(&df)
        }
        Some("parquet") => {
            let df = LazyFrame::scan_parquet(path, ScanArgsParquet::default())?
                .collect()
                .with_context(|| format!("reading {}", path.display()))?;
            points_from_frame(&df)
        }
        Some("json") => {
            let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let pairs: Vec<[f64; 2]> = serde_json::from_slice(&raw)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect())
        }
        _ => bail!("unsupported input {} (expected .csv, .parquet or .json)", path.display()),
    }
}

fn points_from_frame(df: &DataFrame) -> Result<Vec<Point>> {
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;
    xs.f64()?
        .into_iter()
        .zip(ys.f64()?.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(anyhow!("missing coordinate in row {row}")),
        })
        .collect()
}

pub fn write_points_csv(path: &Path, points: &[Point]) -> Result<()> {
    ensure_parent(path)?;
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

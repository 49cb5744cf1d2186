//! Point-cloud files: CSV or Parquet with `x` and `y` columns.

use anyhow::{bail, Context, Result};
use hullstep::Point;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read points from `path` (`.parquet` by extension, CSV otherwise).
pub fn read_points(path: &str) -> Result<Vec<Point>> {
    let lf = if path.ends_with(".parquet") {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("scanning {path}"))?
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("scanning {path}"))?
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {path}"))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("{path}: row {row} has a missing coordinate"),
        }
    }
    Ok(out)
}

/// Write points as a two-column CSV with header `x,y`.
pub fn write_points_csv(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

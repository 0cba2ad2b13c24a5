//! Tabulate a parametrization over a regular parameter-space grid.
//!
//! One row per grid point. Geometry columns are null where the frame has nothing
//! to draw (segment misses the viewport, or no normal foot for the strategy).

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use lineviz::param::{evaluate, ParamKind, Physical};
use lineviz::prelude::Viewport;
use lineviz::sample::grid;
use polars::prelude::*;

/// Result of a sweep: the table and how many frames had no segment.
pub struct Sweep {
    pub table: DataFrame,
    pub degenerate: usize,
}

pub fn sweep(kind: ParamKind, steps: usize, vp: Viewport) -> Result<Sweep> {
    let n = (steps + 1) * (steps + 1);
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut theta = Vec::with_capacity(n);
    let mut second = Vec::with_capacity(n);
    let mut ax: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut ay: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut bx: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut by: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut foot_x: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut foot_y: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut degenerate = 0usize;

    for p in grid(steps) {
        let frame = evaluate(kind, p, vp);
        x.push(p.x());
        y.push(p.y());
        let (t, s) = match frame.physical {
            Physical::Hough { theta, rho } => (theta, rho),
            Physical::MidpointTheta { theta, midpoint_px } => (theta, midpoint_px),
        };
        theta.push(t);
        second.push(s);
        match frame.endpoints {
            Some(seg) => {
                ax.push(Some(seg.a.x));
                ay.push(Some(seg.a.y));
                bx.push(Some(seg.b.x));
                by.push(Some(seg.b.y));
            }
            None => {
                degenerate += 1;
                ax.push(None);
                ay.push(None);
                bx.push(None);
                by.push(None);
            }
        }
        foot_x.push(frame.normal_foot.map(|f| f.x));
        foot_y.push(frame.normal_foot.map(|f| f.y));
    }

    let table = df!(
        "x" => x,
        "y" => y,
        "theta" => theta,
        "second" => second,
        "ax" => ax,
        "ay" => ay,
        "bx" => bx,
        "by" => by,
        "foot_x" => foot_x,
        "foot_y" => foot_y
    )?;
    Ok(Sweep { table, degenerate })
}

/// Write the table as Parquet when `out` ends in `.parquet`, CSV otherwise.
pub fn write_table(table: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let parquet = out.extension().is_some_and(|ext| ext == "parquet");
    if parquet {
        ParquetWriter::new(file).finish(table)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(table)?;
    }
    Ok(())
}

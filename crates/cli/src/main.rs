use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lineviz::param::{evaluate, registry, ParamKind};
use lineviz::prelude::{NormalizedParam, Viewport};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod provenance;
mod sweep;

use output::{DescribeOut, EntryOut, FrameOut};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Evaluate and tabulate line parametrizations")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy, Debug)]
struct ViewportArgs {
    /// Image-space width in pixels
    #[arg(long, default_value_t = 640.0)]
    width: f64,
    /// Image-space height in pixels
    #[arg(long, default_value_t = 640.0)]
    height: f64,
}

impl ViewportArgs {
    fn viewport(&self) -> Result<Viewport> {
        Ok(Viewport::new(self.width, self.height)?)
    }
}

#[derive(Subcommand)]
enum Action {
    /// List registered parametrizations
    List,
    /// Print the description and axis metadata of a parametrization
    Describe {
        #[arg(long, default_value = "hough")]
        param: String,
    },
    /// Evaluate one parameter-space point
    Eval {
        #[arg(long, default_value = "hough")]
        param: String,
        #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
        y: f64,
        #[command(flatten)]
        viewport: ViewportArgs,
        /// Clamp x/y into [0, 1] instead of rejecting them
        #[arg(long)]
        clamp: bool,
    },
    /// Evaluate a regular grid and write a CSV/Parquet table plus provenance
    Sweep {
        #[arg(long, default_value = "hough")]
        param: String,
        #[arg(long, default_value_t = 32)]
        steps: usize,
        #[command(flatten)]
        viewport: ViewportArgs,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::List => list(),
        Action::Describe { param } => describe(&param),
        Action::Eval {
            param,
            x,
            y,
            viewport,
            clamp,
        } => eval(&param, x, y, viewport, clamp),
        Action::Sweep {
            param,
            steps,
            viewport,
            out,
        } => run_sweep(&param, steps, viewport, &out),
        Action::Report => report(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn list() -> Result<()> {
    let entries: Vec<EntryOut> = registry::list().into_iter().map(Into::into).collect();
    tracing::info!(count = entries.len(), "list");
    print_json(&entries)
}

fn describe(param: &str) -> Result<()> {
    let kind = registry::lookup(param)?;
    tracing::info!(param, "describe");
    print_json(&DescribeOut::from(kind))
}

fn eval(param: &str, x: f64, y: f64, vp: ViewportArgs, clamp: bool) -> Result<()> {
    let kind = registry::lookup(param)?;
    let viewport = vp.viewport()?;
    let p = if clamp {
        NormalizedParam::clamped(x, y)?
    } else {
        NormalizedParam::new(x, y).context("use --clamp to clamp into [0, 1]")?
    };
    tracing::info!(param, x, y, width = vp.width, height = vp.height, clamp, "eval");
    let frame = evaluate(kind, p, viewport);
    if frame.endpoints.is_none() {
        tracing::warn!(param, x = p.x(), y = p.y(), "line misses the viewport");
    }
    print_json(&FrameOut::from(frame))
}

fn run_sweep(param: &str, steps: usize, vp: ViewportArgs, out: &str) -> Result<()> {
    let kind: ParamKind = param.parse()?;
    let viewport = vp.viewport()?;
    tracing::info!(param, steps, width = vp.width, height = vp.height, out, "sweep");

    let mut result = sweep::sweep(kind, steps, viewport)?;
    if result.degenerate > 0 {
        tracing::warn!(
            degenerate = result.degenerate,
            rows = result.table.height(),
            "frames without a segment"
        );
    }
    let out_path = Path::new(out);
    sweep::write_table(&mut result.table, out_path)?;

    let payload = provenance::Payload::new(
        "sweep",
        serde_json::json!({
            "param": kind.to_string(),
            "steps": steps,
            "width": vp.width,
            "height": vp.height,
            "rows": result.table.height(),
            "degenerate": result.degenerate,
        }),
    );
    let prov = provenance::write_sidecar(out_path, payload)?;
    tracing::info!(out, provenance = %prov.display(), "sweep_written");
    Ok(())
}

fn report() -> Result<()> {
    print_json(&provenance::header())
}

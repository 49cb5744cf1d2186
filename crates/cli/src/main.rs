use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hullstep::scatter::{draw_points, ScatterCfg};
use std::path::Path;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;
mod report;

use provenance::{Artifact, Provenance};
use report::{run_report, RunOpts};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Step-observable gift-wrap runner")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    /// Log every tracer step
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file (CSV or Parquet, columns x,y) and write JSON
    Run {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Pause between steps, in milliseconds
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
        /// Include every intermediate state in the output
        #[arg(long)]
        trace: bool,
        /// Cancel after this many steps (partial hull)
        #[arg(long)]
        max_steps: Option<usize>,
    },
    /// Draw a reproducible random point cloud and write it as CSV
    Scatter {
        #[arg(long)]
        out: String,
        #[arg(long, default_value_t = 3)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        #[arg(long, default_value_t = 50.0)]
        margin: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run {
            input,
            out,
            delay_ms,
            trace,
            max_steps,
        } => {
            let opts = RunOpts {
                step_delay: Duration::from_millis(delay_ms),
                trace,
                max_steps,
            };
            run(input, out, opts, cmd.tag)
        }
        Action::Scatter {
            out,
            count,
            seed,
            width,
            height,
            margin,
        } => {
            let cfg = ScatterCfg {
                count,
                width,
                height,
                margin,
            };
            scatter(cfg, seed, out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn run(input: String, out: String, opts: RunOpts, tag: Option<String>) -> Result<()> {
    tracing::info!(input, out, tag = ?tag, "run");
    let points = points_io::read_points(&input)?;
    tracing::info!(points = points.len(), "input_loaded");

    let rep = run_report(&points, opts)?;
    tracing::info!(
        status = %rep.status,
        steps = rep.steps,
        hull = rep.hull.len(),
        "hull_done"
    );

    let out_path = Path::new(&out);
    ensure_parent(out_path)?;
    std::fs::write(out_path, serde_json::to_vec_pretty(&rep)?)
        .with_context(|| format!("writing {out}"))?;

    let params = serde_json::json!({
        "input": input,
        "points": points.len(),
        "delay_ms": opts.step_delay.as_millis() as u64,
        "trace": opts.trace,
        "max_steps": opts.max_steps
    });
    let summary = Artifact::Hull {
        status: rep.status.clone(),
        steps: rep.steps,
        vertices: rep.hull.len(),
    };
    let sidecar = Provenance::new(tag, params)
        .with_input(Path::new(&input), points.len())?
        .write_beside(out_path, summary)?;
    tracing::info!(sidecar = %sidecar.display(), "provenance_written");
    Ok(())
}

fn scatter(cfg: ScatterCfg, seed: u64, out: String, tag: Option<String>) -> Result<()> {
    tracing::info!(count = cfg.count, seed, out, tag = ?tag, "scatter");
    let points = draw_points(&cfg, seed)?;
    let out_path = Path::new(&out);
    ensure_parent(out_path)?;
    points_io::write_points_csv(out_path, &points)?;

    let params = serde_json::json!({
        "count": cfg.count,
        "seed": seed,
        "width": cfg.width,
        "height": cfg.height,
        "margin": cfg.margin
    });
    let summary = Artifact::Points {
        count: points.len(),
    };
    Provenance::new(tag, params).write_beside(out_path, summary)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "hullstep_version": hullstep::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

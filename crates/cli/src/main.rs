use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mergehull::rand::{sample_points, ReplayToken, SampleCfg, Shape};
use mergehull::{compute_hull_with, HullCfg};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use points::{read_points, to_pairs, write_json, HullDoc};
use provenance::{report_block, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "mergehull-cli")]
#[command(about = "Divide-and-conquer convex hull runner")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a JSON array of [x, y] pairs
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Reject inputs where two points share an x-coordinate
        #[arg(long)]
        strict_x: bool,
    },
    /// Write a reproducible random point set with distinct x-coordinates
    Sample {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = ShapeArg::Box)]
        shape: ShapeArg,
        /// Half-width (box) or radius (disk, circle)
        #[arg(long, default_value_t = 1.0)]
        size: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Box,
    Disk,
    Circle,
}

impl ShapeArg {
    fn with_size(self, size: f64) -> Shape {
        match self {
            ShapeArg::Box => Shape::Box { half_width: size },
            ShapeArg::Disk => Shape::Disk { radius: size },
            ShapeArg::Circle => Shape::Circle { radius: size },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            strict_x,
        } => hull(input, out, strict_x, cmd.tag),
        Action::Sample {
            n,
            seed,
            index,
            shape,
            size,
            out,
        } => sample(n, ReplayToken { seed, index }, shape.with_size(size), out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn hull(input: PathBuf, out: PathBuf, strict_x: bool, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), strict_x, tag = ?tag, "hull");
    let pts = read_points(&input)?;
    let cfg = HullCfg {
        reject_duplicate_x: strict_x,
        ..HullCfg::default()
    };
    let h = compute_hull_with(&pts, &cfg)
        .with_context(|| format!("computing hull of {}", input.display()))?;
    let doc = HullDoc::from(&h);
    tracing::info!(
        points = pts.len(),
        vertices = h.len(),
        area = doc.area,
        perimeter = doc.perimeter,
        "hull_done"
    );
    write_json(&out, &doc)?;
    let payload = Payload::new(
        "hull",
        serde_json::json!({
            "input": input.to_string_lossy(),
            "strict_x": strict_x,
            "points": pts.len(),
            "vertices": h.len()
        }),
    )
    .with_tag(tag);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn sample(n: usize, tok: ReplayToken, shape: Shape, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(n, seed = tok.seed, index = tok.index, shape = ?shape, out = %out.display(), "sample");
    let pts = sample_points(SampleCfg { n, shape }, tok);
    if pts.len() < n {
        tracing::warn!(requested = n, drawn = pts.len(), "sample_short");
    }
    write_json(&out, &to_pairs(&pts))?;
    let payload = Payload::new(
        "sample",
        serde_json::json!({
            "n": n,
            "seed": tok.seed,
            "index": tok.index,
            "shape": format!("{shape:?}")
        }),
    )
    .with_tag(tag);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&report_block(tag.as_deref()))?
    );
    Ok(())
}

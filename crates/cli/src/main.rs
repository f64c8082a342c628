use anyhow::Result;
use clap::{Parser, Subcommand};
use hulltri::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls and hull-driven triangulations of planar point sets")]
struct Cmd {
    /// Comparison tolerance for collinearity and point identity (default: exact)
    #[arg(long, global = true)]
    eps: Option<f64>,

    /// Log per-insertion details
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Ordered hull vertices of a point list
    Hull {
        #[arg(long)]
        input: PathBuf,
        /// JSON output; stdout if omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Triangles covering the hull of a point list
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        /// JSON output; stdout if omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a seeded random point cloud as CSV
    Sample {
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1.0)]
        half_extent: f64,
        /// Points on a circle instead of a box
        #[arg(long)]
        circle: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct HullReport {
    points: usize,
    hull: Vec<[f64; 2]>,
    area: f64,
}

#[derive(Serialize)]
struct TriangulationReport {
    points: usize,
    degenerate: bool,
    triangles: Vec<[[f64; 2]; 3]>,
    hull: Vec<[f64; 2]>,
    area: f64,
    hull_area: f64,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let cfg = cmd.eps.map(GeomCfg::tolerant).unwrap_or_default();
    match cmd.action {
        Action::Hull { input, out } => hull(&input, out.as_deref(), cfg, cmd.eps),
        Action::Triangulate { input, out } => triangulate(&input, out.as_deref(), cfg, cmd.eps),
        Action::Sample {
            count,
            seed,
            index,
            half_extent,
            circle,
            out,
        } => sample(count, seed, index, half_extent, circle, &out),
        Action::Report => report(),
    }
}

fn xy(p: &Point) -> [f64; 2] {
    [p.x, p.y]
}

fn hull(input: &Path, out: Option<&Path>, cfg: GeomCfg, eps: Option<f64>) -> Result<()> {
    let points = points_io::read_points(input)?;
    tracing::info!(input = %input.display(), points = points.len(), "hull");
    let hull = ConvexHull::with_cfg(&points, cfg)?;
    let doc = HullReport {
        points: points.len(),
        hull: hull.boundary().iter().map(xy).collect(),
        area: hull.area(),
    };
    let params = json!({ "input": input.to_string_lossy(), "eps": eps });
    emit(out, &doc, provenance::Payload::new("hull", params))
}

fn triangulate(input: &Path, out: Option<&Path>, cfg: GeomCfg, eps: Option<f64>) -> Result<()> {
    let points = points_io::read_points(input)?;
    tracing::info!(input = %input.display(), points = points.len(), "triangulate");
    let tri = Triangulation::with_cfg(&points, cfg)?;
    let doc = TriangulationReport {
        points: points.len(),
        degenerate: tri.is_degenerate(),
        triangles: tri
            .triangles()
            .iter()
            .map(|t| {
                let [a, b, c] = t.vertices();
                [xy(a), xy(b), xy(c)]
            })
            .collect(),
        hull: tri.hull().boundary().iter().map(xy).collect(),
        area: tri.area(),
        hull_area: tri.hull().area(),
    };
    tracing::info!(
        triangles = doc.triangles.len(),
        area = doc.area,
        hull_area = doc.hull_area,
        "triangulated"
    );
    let params = json!({ "input": input.to_string_lossy(), "eps": eps });
    emit(out, &doc, provenance::Payload::new("triangulate", params))
}

fn sample(
    count: usize,
    seed: u64,
    index: u64,
    half_extent: f64,
    circle: bool,
    out: &Path,
) -> Result<()> {
    let cfg = SampleCfg {
        count,
        half_extent,
        layout: if circle { Layout::Circle } else { Layout::Box },
    };
    let points = draw_points(cfg, ReplayToken { seed, index });
    tracing::info!(count, seed, index, out = %out.display(), "sample");
    points_io::write_points_csv(out, &points)?;
    let params = json!({
        "count": count,
        "seed": seed,
        "index": index,
        "half_extent": half_extent,
        "layout": format!("{:?}", cfg.layout),
    });
    provenance::write_sidecar(out, provenance::Payload::new("sample", params))?;
    Ok(())
}

fn emit<T: Serialize>(out: Option<&Path>, doc: &T, payload: provenance::Payload) -> Result<()> {
    match out {
        Some(path) => {
            points_io::ensure_parent(path)?;
            std::fs::write(path, serde_json::to_vec_pretty(doc)?)?;
            provenance::write_sidecar(path, payload)?;
        }
        None => println!("{}", serde_json::to_string_pretty(doc)?),
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "hulltri_version": hulltri::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

//! fuzzy-voxels: build density-grid voxel models and combine them.
//!
//! # Logging
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=fuzzy_voxels=debug`) or pass `-v`/`-vv`/`-vvv`.
//!
//! # Example
//!
//! ```bash
//! cargo build --release --features cli
//! fuzzy-voxels shape sphere --radius 5 --resolution 21 -o a.bvox
//! fuzzy-voxels combine a.bvox a.bvox --op union --offset 5,5,5 -o u.bvox
//! fuzzy-voxels combine a.bvox a.bvox --op a-minus-b --offset 5,5,5 -o s.py --script
//! fuzzy-voxels info u.bvox
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fuzzy_voxels::config::Subsampling;
use fuzzy_voxels::float_types::Real;
use fuzzy_voxels::shapes::{Cone, Cylinder, Shape, Sphere};
use fuzzy_voxels::{BooleanOp, DensityGrid, GridBuilder, Offset, compose};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// fuzzy-voxels - density-grid voxel models from implicit shapes.
#[derive(Parser)]
#[command(name = "fuzzy-voxels")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Voxelize a primitive shape centred at the origin
    Shape {
        kind: ShapeKind,

        /// Radius of the sphere, or of the cylinder/cone base
        #[arg(long, short)]
        radius: Real,

        /// Height of a cylinder or cone (defaults to twice the radius)
        #[arg(long)]
        height: Option<Real>,

        /// Cells per axis
        #[arg(long, short = 'n', default_value = "21")]
        resolution: u32,

        /// Sub-samples per axis used to estimate each cell's density (odd)
        #[arg(long)]
        subsamples: Option<u32>,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Write a Blender Python script instead of the binary format
        #[arg(long)]
        script: bool,
    },

    /// Combine two binary voxel models, the second translated by an offset
    Combine {
        /// First operand (stays at the origin)
        a: PathBuf,

        /// Second operand (translated by --offset)
        b: PathBuf,

        /// union, intersection, a-minus-b (difference) or b-minus-a
        #[arg(long, value_parser = parse_op)]
        op: BooleanOp,

        /// Translation of the second operand in cells, as dx,dy,dz
        #[arg(long, default_value = "0,0,0", value_parser = parse_offset)]
        offset: Offset,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Write a Blender Python script instead of the binary format
        #[arg(long)]
        script: bool,
    },

    /// Display extents and occupancy statistics of a binary voxel model
    Info {
        /// Input file
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ShapeKind {
    Sphere,
    Cylinder,
    Cone,
}

fn parse_op(s: &str) -> Result<BooleanOp, String> {
    s.parse().map_err(|e: fuzzy_voxels::errors::VoxelError| e.to_string())
}

fn parse_offset(s: &str) -> Result<Offset, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<i64>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts[..] {
        [dx, dy, dz] => Offset::new(dx, dy, dz).map_err(|e| e.to_string()),
        _ => Err(format!("expected dx,dy,dz, got {s:?}")),
    }
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8) {
    // Check RUST_LOG first, then fall back to -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "fuzzy_voxels=info",
            2 => "fuzzy_voxels=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn write_grid(grid: &DensityGrid, output: &Path, script: bool) -> Result<()> {
    let written = if script {
        grid.save_script(output)
    } else {
        grid.save(output)
    };
    written.with_context(|| format!("Failed to write {:?}", output))?;
    let kind = if script { "script" } else { "grid" };
    println!("{} {kind} -> {}", grid.extents(), output.display());
    Ok(())
}

fn run_shape(
    kind: ShapeKind,
    radius: Real,
    height: Option<Real>,
    resolution: u32,
    subsamples: Option<u32>,
    output: &Path,
    script: bool,
) -> Result<()> {
    let height = height.unwrap_or(2.0 * radius);
    let shape: Box<dyn Shape> = match kind {
        ShapeKind::Sphere => Box::new(Sphere::new(radius)?),
        ShapeKind::Cylinder => Box::new(Cylinder::new(radius, height)?),
        ShapeKind::Cone => Box::new(Cone::new(radius, height)?),
    };

    let mut builder = GridBuilder::new(shape.half_extent(), resolution);
    if let Some(n) = subsamples {
        builder = builder.subsampling(Subsampling::uniform(n)?);
    }
    let grid = builder.build(shape.as_ref())?;
    write_grid(&grid, output, script)
}

fn run_combine(
    a: &Path,
    b: &Path,
    op: BooleanOp,
    offset: Offset,
    output: &Path,
    script: bool,
) -> Result<()> {
    let ga = DensityGrid::load(a).with_context(|| format!("Failed to load {:?}", a))?;
    let gb = DensityGrid::load(b).with_context(|| format!("Failed to load {:?}", b))?;
    if ga.frame_count() > 1 || gb.frame_count() > 1 {
        tracing::warn!("only the first frame of each operand is combined");
    }
    let grid = compose(&ga, &gb, offset, op)?;
    write_grid(&grid, output, script)
}

fn run_info(input: &Path) -> Result<()> {
    let grid = DensityGrid::load(input).with_context(|| format!("Failed to load {:?}", input))?;
    let cells = grid.extents().cell_count().unwrap_or(1).max(1);
    println!("File:           {}", input.display());
    println!("Extents:        {}", grid.extents());
    println!("Frames:         {}", grid.frame_count());
    println!("Total density:  {:.3}", grid.total_density());
    println!("Full cells:     {}", grid.full_cell_count());
    println!("Boundary cells: {}", grid.boundary_cell_count());
    println!("Fill ratio:     {:.4}", grid.total_density() / cells as f64);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Shape {
            kind,
            radius,
            height,
            resolution,
            subsamples,
            output,
            script,
        } => run_shape(kind, radius, height, resolution, subsamples, &output, script),
        Commands::Combine {
            a,
            b,
            op,
            offset,
            output,
            script,
        } => run_combine(&a, &b, op, offset, &output, script),
        Commands::Info { input } => run_info(&input),
    }
}

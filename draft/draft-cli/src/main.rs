//! `draftgen` - generate a stylized engineering drawing from an STL mesh.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use draft_io::{load_centered_stl, IoError};
use draft_render::{render_drawing, DrawingInfo, SheetView};
use draft_section::{cross_section, dimensions, SlicePlane};

/// Generate a 2D engineering drawing (orthographic cross-section views,
/// dimensions, title block, and notes) from a 3D STL mesh.
#[derive(Debug, Parser)]
#[command(name = "draftgen", version, about)]
struct Args {
    /// Input STL file.
    input: PathBuf,

    /// Output PNG path.
    #[arg(short, long, default_value = "engineering_drawing.png")]
    output: PathBuf,

    /// JSON file overriding title block fields (partial files are fine).
    #[arg(long)]
    info: Option<PathBuf>,

    /// Which orthographic views to draw, in order.
    #[arg(long, value_delimiter = ',', default_values = ["front", "top", "right"])]
    views: Vec<ViewName>,

    /// Skip dimension annotations.
    #[arg(long)]
    no_dimensions: bool,

    /// Verbose logging (overridden by RUST_LOG when set).
    #[arg(short, long)]
    verbose: bool,
}

/// Standard orthographic views, named by the plane they cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ViewName {
    /// Section at y = 0, normal +Y.
    Front,
    /// Section at z = 0, normal +Z.
    Top,
    /// Section at x = 0, normal +X.
    Right,
}

impl ViewName {
    fn title(self) -> &'static str {
        match self {
            Self::Front => "FRONT VIEW",
            Self::Top => "TOP VIEW",
            Self::Right => "RIGHT VIEW",
        }
    }

    fn plane(self) -> SlicePlane {
        match self {
            Self::Front => SlicePlane::front(),
            Self::Top => SlicePlane::top(),
            Self::Right => SlicePlane::right(),
        }
    }
}

fn load_drawing_info(path: Option<&PathBuf>) -> Result<DrawingInfo> {
    let Some(path) = path else {
        return Ok(DrawingInfo::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read drawing info {}", path.display()))?;
    let info = serde_json::from_str(&text)
        .with_context(|| format!("invalid drawing info {}", path.display()))?;
    Ok(info)
}

fn run(args: &Args) -> Result<()> {
    let mesh = load_centered_stl(&args.input).map_err(|e| {
        let message = match &e {
            IoError::FileNotFound { path } => {
                format!("STL file not found: {}", path.display())
            }
            _ => format!("failed to load STL {}", args.input.display()),
        };
        anyhow::Error::new(e).context(message)
    })?;
    debug!(
        faces = mesh.face_count(),
        vertices = mesh.vertex_count(),
        "mesh loaded and centered"
    );

    let info = load_drawing_info(args.info.as_ref())?;

    let views: Vec<SheetView> = args
        .views
        .iter()
        .map(|name| SheetView {
            title: name.title().to_string(),
            section: cross_section(&mesh, &name.plane()),
        })
        .collect();

    render_drawing(&views, &info, !args.no_dimensions, &args.output)
        .context("failed to render drawing")?;

    let dims = dimensions(&mesh);
    println!("Engineering drawing created: {}", args.output.display());
    println!(
        "Part dimensions: {:.2} x {:.2} x {:.2} mm",
        dims.length, dims.width, dims.height
    );

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

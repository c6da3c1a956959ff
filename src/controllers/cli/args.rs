use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::presets::exploration_points::ExplorationPoint;
use crate::core::presets::quality::QualityPreset;
use crate::presenters::file::ImageFormat;

#[derive(Debug, Parser)]
#[command(
    name = "fractal-studio",
    about = "Render Mandelbrot and Julia fractals to image files",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Path to a TOML config; default: config/fractal_config.toml if present
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Overrides `output.base_dir` from the config
    #[arg(long = "output-dir", value_name = "DIR", global = true)]
    pub output_dir: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, action = ArgAction::SetTrue, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only warnings and errors
    #[arg(short, long, action = ArgAction::SetTrue, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the Mandelbrot set
    ///
    /// Examples:
    ///   fractal-studio mandelbrot --preset high
    ///   fractal-studio mandelbrot --explore seahorse_valley --zoom 50
    Mandelbrot(MandelbrotArgs),

    /// Render a Julia set
    ///
    /// Examples:
    ///   fractal-studio julia --julia-c dragon --zoom 2
    ///   fractal-studio julia --julia-c "0.3+0.5i" --preset high
    ///   fractal-studio julia --gallery
    Julia(JuliaArgs),

    /// Show presets, colour schemes, named constants and storage statistics
    Info,

    /// Write an HTML gallery of the stored images
    Gallery(GalleryArgs),
}

/// Flags shared by every render command. Unset flags fall back to the preset,
/// then to the config.
#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Maximum iterations per pixel
    #[arg(short = 'i', long)]
    pub iterations: Option<u32>,

    /// Magnification; the visible plane is 4 / zoom wide
    #[arg(short = 'z', long)]
    pub zoom: Option<f64>,

    #[arg(long = "center-x", allow_hyphen_values = true)]
    pub center_x: Option<f64>,

    #[arg(long = "center-y", allow_hyphen_values = true)]
    pub center_y: Option<f64>,

    /// Colour scheme (hot, plasma, viridis, ...)
    #[arg(short = 'c', long = "colormap", value_name = "SCHEME")]
    pub colour_scheme: Option<ColourSchemeKind>,

    /// Quality preset (preview, standard, high, ultra, print)
    #[arg(short = 'p', long)]
    pub preset: Option<QualityPreset>,

    #[arg(long = "escape-radius")]
    pub escape_radius: Option<f64>,

    /// Logarithmic normalization of escape values
    #[arg(long = "log-scale", action = ArgAction::SetTrue)]
    pub log_scale: bool,

    /// Colour by integer iteration counts
    #[arg(long = "no-smooth", action = ArgAction::SetTrue)]
    pub no_smooth: bool,

    /// Output file name, placed in the fractal's directory
    #[arg(short = 'o', long, value_name = "NAME")]
    pub output: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<ImageFormat>,
}

#[derive(Debug, Clone, Args)]
pub struct MandelbrotArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Centre on a named location (seahorse_valley, spiral, ...)
    #[arg(long, value_name = "POINT")]
    pub explore: Option<ExplorationPoint>,
}

#[derive(Debug, Clone, Args)]
pub struct JuliaArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Named constant (classic, dragon, ...) or a literal such as "0.3+0.5i"
    #[arg(long = "julia-c", default_value = "classic", allow_hyphen_values = true)]
    pub julia_c: String,

    /// Render every named constant and write a gallery page
    #[arg(long, action = ArgAction::SetTrue)]
    pub gallery: bool,
}

#[derive(Debug, Clone, Args)]
pub struct GalleryArgs {
    /// Gallery file name inside the gallery directory
    #[arg(short = 'o', long, default_value = "gallery")]
    pub output: String,

    /// Only include one fractal kind
    #[arg(long)]
    pub kind: Option<FractalKind>,
}

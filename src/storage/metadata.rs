use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::normalization::Normalization;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::escape_grid::IterationStats;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKind;

/// TOML sidecar written next to every saved image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractalMetadata {
    pub generation_info: GenerationInfo,
    pub fractal_parameters: FractalParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plane_bounds: Option<PlaneBounds>,
    pub iteration_stats: IterationStatsRecord,
    pub technical_info: TechnicalInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationInfo {
    pub timestamp: String,
    pub image_path: String,
    pub width: u32,
    pub height: u32,
    pub total_pixels: u64,
    pub render_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractalParameters {
    pub kind: FractalKind,
    pub center_real: f64,
    pub center_imag: f64,
    pub zoom: f64,
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub colour_scheme: ColourSchemeKind,
    pub normalization: Normalization,
    pub smooth_colouring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub julia_constant: Option<JuliaConstantRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JuliaConstantRecord {
    pub real: f64,
    pub imag: f64,
    pub formatted: String,
}

/// Region of the complex plane covered by the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneBounds {
    pub real_min: f64,
    pub real_max: f64,
    pub imag_min: f64,
    pub imag_max: f64,
}

impl PlaneBounds {
    /// Bounds of the view described by `request`, if its dimensions and zoom
    /// describe a non-empty window.
    #[must_use]
    pub fn of_request(request: &RenderRequest) -> Option<Self> {
        let pixel_rect = PixelRect::new(request.width, request.height).ok()?;
        let viewport = Viewport::new(request.center, request.zoom, pixel_rect);

        viewport.bounds().ok().map(Self::from)
    }
}

impl From<ComplexRect> for PlaneBounds {
    fn from(rect: ComplexRect) -> Self {
        Self {
            real_min: rect.min().real,
            real_max: rect.max().real,
            imag_min: rect.min().imag,
            imag_max: rect.max().imag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationStatsRecord {
    pub min: u32,
    pub max: u32,
    pub mean: f64,
    pub escaped_pixels: u64,
    pub interior_pixels: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalInfo {
    pub algorithm: String,
    pub precision: String,
    pub parallelism: String,
    pub generator: String,
}

impl Default for TechnicalInfo {
    fn default() -> Self {
        Self {
            algorithm: "escape_time".to_string(),
            precision: "f64".to_string(),
            parallelism: "rayon".to_string(),
            generator: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FractalMetadata {
    #[must_use]
    pub fn new(
        kind: FractalKind,
        request: &RenderRequest,
        preset: Option<&str>,
        image_path: &Path,
        stats: &IterationStats,
        render_time: Duration,
    ) -> Self {
        let julia_constant = request
            .julia_constant
            .filter(|_| kind == FractalKind::Julia)
            .map(|c| JuliaConstantRecord {
                real: c.real,
                imag: c.imag,
                formatted: c.to_string(),
            });

        Self {
            generation_info: GenerationInfo {
                timestamp: Local::now().to_rfc3339(),
                image_path: image_path.display().to_string(),
                width: request.width,
                height: request.height,
                total_pixels: u64::from(request.width) * u64::from(request.height),
                render_seconds: render_time.as_secs_f64(),
            },
            fractal_parameters: FractalParameters {
                kind,
                center_real: request.center.real,
                center_imag: request.center.imag,
                zoom: request.zoom,
                max_iterations: request.max_iterations,
                escape_radius: request.escape_radius,
                colour_scheme: request.colour_scheme,
                normalization: request.colouring.normalization,
                smooth_colouring: request.colouring.smooth,
                preset: preset.map(str::to_string),
                julia_constant,
            },
            plane_bounds: PlaneBounds::of_request(request),
            iteration_stats: IterationStatsRecord {
                min: stats.min_iterations,
                max: stats.max_iterations,
                mean: stats.mean_iterations,
                escaped_pixels: stats.escaped_count,
                interior_pixels: stats.interior_count,
            },
            technical_info: TechnicalInfo::default(),
        }
    }
}

pub fn write_metadata(path: &Path, metadata: &FractalMetadata) -> anyhow::Result<()> {
    let text = toml::to_string_pretty(metadata).context("serializing metadata")?;
    fs::write(path, text).with_context(|| format!("writing metadata {}", path.display()))
}

pub fn read_metadata(path: &Path) -> anyhow::Result<FractalMetadata> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading metadata {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing metadata {}", path.display()))
}

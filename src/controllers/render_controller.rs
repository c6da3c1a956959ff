use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::{info, warn};

use crate::config::settings::Settings;
use crate::core::colour_mapping::colouring::Colouring;
use crate::core::actions::render::render::render_with_raw;
use crate::core::data::complex::Complex;
use crate::core::data::escape_grid::IterationStats;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::presets::julia_constants::JuliaConstant;
use crate::presenters::file::ImageFormat;
use crate::storage::file_manager::FractalFileManager;
use crate::storage::gallery::{self, GalleryEntry};
use crate::storage::metadata::{FractalMetadata, write_metadata};
use crate::storage::stats::StorageStats;
use crate::storage::thumbnail::create_thumbnail;

pub const JULIA_GALLERY_WIDTH: u32 = 800;
pub const JULIA_GALLERY_HEIGHT: u32 = 600;
pub const JULIA_GALLERY_ITERATIONS: u32 = 150;

/// One image to render and store.
#[derive(Debug, Clone)]
pub struct RenderJob<'a> {
    pub kind: FractalKind,
    pub request: RenderRequest,
    /// Preset or named location, recorded in file names and metadata.
    pub preset: Option<&'a str>,
    pub format: ImageFormat,
    pub output_name: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct SavedRender {
    pub image_path: PathBuf,
    pub thumbnail_path: Option<PathBuf>,
    pub metadata_path: Option<PathBuf>,
    pub stats: IterationStats,
    pub render_time: Duration,
}

/// Drives the engine and hands its output to the storage collaborators.
pub struct RenderController {
    settings: Settings,
    files: FractalFileManager,
}

impl RenderController {
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let files = FractalFileManager::new(&settings.output)?;
        Ok(Self { settings, files })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn files(&self) -> &FractalFileManager {
        &self.files
    }

    pub fn render_and_save(&self, job: &RenderJob<'_>) -> anyhow::Result<SavedRender> {
        let request = &job.request;
        self.settings
            .validate_parameters(request.width, request.height, request.max_iterations)?;

        info!(
            kind = %job.kind,
            width = request.width,
            height = request.height,
            max_iterations = request.max_iterations,
            zoom = request.zoom,
            scheme = %request.colour_scheme,
            "rendering"
        );

        let started = Instant::now();
        let (image, grid) = render_with_raw(request, job.kind)
            .with_context(|| format!("rendering {} fractal", job.kind))?;
        let render_time = started.elapsed();
        let stats = grid.stats();
        drop(grid);

        let presenter = job.format.presenter();
        let image_path = self.files.image_path(
            job.kind,
            request,
            job.preset,
            presenter.extension(),
            job.output_name,
        )?;
        presenter.present(&image, &image_path)?;
        info!(path = %image_path.display(), elapsed_ms = render_time.as_millis() as u64, "saved image");

        let output = &self.settings.output;

        let thumbnail_path = if output.write_thumbnail {
            let path = self.files.thumbnail_path(&image_path);
            match create_thumbnail(&image, &path, output.thumbnail_width, output.thumbnail_height) {
                Ok(_) => Some(path),
                Err(err) => {
                    warn!(error = %format!("{err:#}"), "thumbnail skipped");
                    None
                }
            }
        } else {
            None
        };

        let metadata_path = if output.write_metadata {
            let path = self.files.metadata_path(&image_path);
            let metadata = FractalMetadata::new(
                job.kind,
                request,
                job.preset,
                &image_path,
                &stats,
                render_time,
            );
            write_metadata(&path, &metadata)?;
            Some(path)
        } else {
            None
        };

        Ok(SavedRender {
            image_path,
            thumbnail_path,
            metadata_path,
            stats,
            render_time,
        })
    }

    /// Renders every named Julia constant and links them in one gallery page.
    pub fn julia_gallery(&self, format: ImageFormat) -> anyhow::Result<PathBuf> {
        let rendering = &self.settings.rendering;
        let mut entries: Vec<GalleryEntry> = Vec::with_capacity(JuliaConstant::ALL.len());

        for &constant in JuliaConstant::ALL {
            let job = RenderJob {
                kind: FractalKind::Julia,
                request: RenderRequest {
                    width: JULIA_GALLERY_WIDTH,
                    height: JULIA_GALLERY_HEIGHT,
                    center: Complex::ZERO,
                    zoom: 1.0,
                    max_iterations: JULIA_GALLERY_ITERATIONS,
                    escape_radius: rendering.escape_radius,
                    julia_constant: Some(constant.value()),
                    colour_scheme: rendering.colour_scheme,
                    colouring: self.default_colouring(),
                },
                preset: Some(constant.name()),
                format,
                output_name: None,
            };

            let saved = self.render_and_save(&job)?;
            entries.push(gallery::entry_for(&self.files, &saved.image_path)?);
        }

        gallery::write_gallery(&self.files, "julia_gallery", "Julia Set Gallery", &entries)
    }

    /// Gallery of everything stored, optionally of one kind only.
    pub fn write_gallery(&self, name: &str, kind: Option<FractalKind>) -> anyhow::Result<PathBuf> {
        let entries = gallery::collect_entries(&self.files, kind)?;
        if entries.is_empty() {
            warn!("no images found, gallery will be empty");
        }

        let title = match kind {
            Some(kind) => format!("{} Gallery", kind.display_name()),
            None => "Fractal Gallery".to_string(),
        };
        gallery::write_gallery(&self.files, name, &title, &entries)
    }

    pub fn storage_stats(&self) -> anyhow::Result<StorageStats> {
        StorageStats::collect(&self.files)
    }

    /// Colouring options from the `[rendering]` config section.
    #[must_use]
    pub fn default_colouring(&self) -> Colouring {
        Colouring {
            normalization: self.settings.rendering.normalization,
            smooth: self.settings.rendering.smooth_colouring,
            ..Colouring::default()
        }
    }
}

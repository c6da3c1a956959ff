use std::ffi::OsStr;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use chrono::Local;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::settings::OutputSettings;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::fractal_kinds::FractalKind;

pub const THUMBNAIL_DIR: &str = "thumbnails";
pub const METADATA_DIR: &str = "metadata";
pub const GALLERY_DIR: &str = "gallery";

const IMAGE_EXTENSIONS: [&str; 2] = ["png", "ppm"];

/// Owns the output directory tree and decides where every artifact goes.
#[derive(Debug, Clone)]
pub struct FractalFileManager {
    base_dir: PathBuf,
    output: OutputSettings,
}

impl FractalFileManager {
    /// Creates the base directory and its fixed subdirectories.
    pub fn new(output: &OutputSettings) -> anyhow::Result<Self> {
        let manager = Self {
            base_dir: output.base_dir.clone(),
            output: output.clone(),
        };

        let kind_dirs = FractalKind::ALL.iter().map(|kind| kind.name());
        for dir in kind_dirs.chain([THUMBNAIL_DIR, METADATA_DIR, GALLERY_DIR]) {
            let path = manager.base_dir.join(dir);
            fs::create_dir_all(&path)
                .with_context(|| format!("creating directory {}", path.display()))?;
        }

        debug!(base_dir = %manager.base_dir.display(), "output directories ready");
        Ok(manager)
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory that receives new images of `kind`.
    #[must_use]
    pub fn image_dir(&self, kind: FractalKind) -> PathBuf {
        let mut dir = self.base_dir.clone();

        if self.output.organize_by_type {
            dir.push(kind.name());
        }
        if self.output.organize_by_date {
            dir.push(Local::now().format("%Y-%m-%d").to_string());
        }

        dir
    }

    /// Builds a file name from the configured template.
    ///
    /// `{type}`, `{preset}`, `{timestamp}` and `{hash}` are substituted; the
    /// hash is the first 8 hex digits of SHA-256 over the render parameters.
    #[must_use]
    pub fn render_filename(
        &self,
        kind: FractalKind,
        request: &RenderRequest,
        preset: Option<&str>,
        timestamp: &str,
        extension: &str,
    ) -> String {
        let stem = self
            .output
            .filename_template
            .replace("{type}", kind.name())
            .replace("{preset}", preset.unwrap_or("custom"))
            .replace("{timestamp}", timestamp)
            .replace("{hash}", &parameter_hash(kind, request));

        format!("{stem}.{extension}")
    }

    /// Picks the path for a new image, creating its directory.
    ///
    /// A custom name gets `extension` appended unless it already ends with it.
    pub fn image_path(
        &self,
        kind: FractalKind,
        request: &RenderRequest,
        preset: Option<&str>,
        extension: &str,
        custom_name: Option<&str>,
    ) -> anyhow::Result<PathBuf> {
        let dir = self.image_dir(kind);
        fs::create_dir_all(&dir).with_context(|| format!("creating directory {}", dir.display()))?;

        let file_name = match custom_name {
            Some(name) if Path::new(name).extension() == Some(OsStr::new(extension)) => {
                name.to_string()
            }
            Some(name) => format!("{name}.{extension}"),
            None => {
                let timestamp = self.timestamp()?;
                self.render_filename(kind, request, preset, &timestamp, extension)
            }
        };

        Ok(dir.join(file_name))
    }

    #[must_use]
    pub fn metadata_path(&self, image_path: &Path) -> PathBuf {
        self.base_dir
            .join(METADATA_DIR)
            .join(format!("{}_metadata.toml", file_stem(image_path)))
    }

    #[must_use]
    pub fn thumbnail_path(&self, image_path: &Path) -> PathBuf {
        self.base_dir
            .join(THUMBNAIL_DIR)
            .join(format!("{}_thumb.png", file_stem(image_path)))
    }

    #[must_use]
    pub fn gallery_path(&self, name: &str) -> PathBuf {
        let file_name = if name.ends_with(".html") {
            name.to_string()
        } else {
            format!("{name}.html")
        };

        self.base_dir.join(GALLERY_DIR).join(file_name)
    }

    /// Every stored image, optionally only those of `kind`, sorted by path.
    pub fn list_images(&self, kind: Option<FractalKind>) -> anyhow::Result<Vec<PathBuf>> {
        let mut images = Vec::new();

        for &candidate in FractalKind::ALL {
            if kind.is_some_and(|wanted| wanted != candidate) {
                continue;
            }

            let dir = self.base_dir.join(candidate.name());
            if dir.is_dir() {
                collect_images(&dir, &mut images)?;
            }

            // images written without per-type directories
            for entry in read_dir(&self.base_dir)? {
                let path = entry?;
                if is_image(&path) && file_stem(&path).starts_with(candidate.name()) {
                    images.push(path);
                }
            }
        }

        images.sort();
        Ok(images)
    }

    /// The kind an image belongs to, judged by its directory or file name.
    #[must_use]
    pub fn kind_of(&self, image_path: &Path) -> Option<FractalKind> {
        let relative = image_path.strip_prefix(&self.base_dir).unwrap_or(image_path);

        FractalKind::ALL.iter().copied().find(|kind| {
            relative
                .components()
                .next()
                .is_some_and(|first| first.as_os_str() == kind.name())
                || file_stem(image_path).starts_with(kind.name())
        })
    }

    fn timestamp(&self) -> anyhow::Result<String> {
        let mut stamp = String::new();
        write!(stamp, "{}", Local::now().format(&self.output.timestamp_format))
            .map_err(|_| anyhow!("invalid timestamp format '{}'", self.output.timestamp_format))?;
        Ok(stamp)
    }
}

/// First 8 hex digits of SHA-256 over the parameters that define an image.
#[must_use]
pub fn parameter_hash(kind: FractalKind, request: &RenderRequest) -> String {
    let julia = request
        .julia_constant
        .filter(|_| kind == FractalKind::Julia)
        .map(|c| c.to_string())
        .unwrap_or_default();

    let canonical = format!(
        "{}|{}x{}|{:?}|{:?}|{:?}|{}|{:?}|{}|{}|{:?}|{}",
        kind.name(),
        request.width,
        request.height,
        request.center.real,
        request.center.imag,
        request.zoom,
        request.max_iterations,
        request.escape_radius,
        request.colour_scheme,
        request.colouring.normalization,
        request.colouring.smooth,
        julia,
    );

    let digest = Sha256::digest(canonical.as_bytes());
    format!("{digest:x}")[..8].to_string()
}

pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub(crate) fn is_image(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

fn read_dir(dir: &Path) -> anyhow::Result<impl Iterator<Item = std::io::Result<PathBuf>>> {
    let entries = fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;
    Ok(entries.map(|entry| entry.map(|e| e.path())))
}

fn collect_images(dir: &Path, images: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    for entry in read_dir(dir)? {
        let path = entry?;
        if path.is_dir() {
            collect_images(&path, images)?;
        } else if is_image(&path) {
            images.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn manager(base: &Path) -> FractalFileManager {
        let output = OutputSettings {
            base_dir: base.to_path_buf(),
            ..OutputSettings::default()
        };
        FractalFileManager::new(&output).unwrap()
    }

    #[test]
    fn creates_the_directory_tree() {
        let dir = tempfile::tempdir().unwrap();

        manager(dir.path());

        for sub in ["mandelbrot", "julia", "thumbnails", "metadata", "gallery"] {
            assert!(dir.path().join(sub).is_dir(), "{sub} missing");
        }
    }

    #[test]
    fn filename_follows_template() {
        let dir = tempfile::tempdir().unwrap();
        let files = manager(dir.path());
        let request = RenderRequest::default();

        let name = files.render_filename(
            FractalKind::Mandelbrot,
            &request,
            None,
            "20240101_120000",
            "png",
        );

        assert!(name.starts_with("mandelbrot_20240101_120000_"));
        assert!(name.ends_with(".png"));
        assert_eq!(name.len(), "mandelbrot_20240101_120000_".len() + 8 + 4);
    }

    #[test]
    fn hash_depends_on_parameters() {
        let request = RenderRequest::default();
        let zoomed = RenderRequest {
            zoom: 2.0,
            ..RenderRequest::default()
        };

        let hash = parameter_hash(FractalKind::Mandelbrot, &request);

        assert_eq!(hash.len(), 8);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hash, parameter_hash(FractalKind::Mandelbrot, &request));
        assert_ne!(hash, parameter_hash(FractalKind::Mandelbrot, &zoomed));
        assert_ne!(hash, parameter_hash(FractalKind::Julia, &request));
    }

    #[test]
    fn julia_constant_only_counts_for_julia() {
        let plain = RenderRequest::default();
        let with_constant = RenderRequest {
            julia_constant: Some(Complex::new(-0.7, 0.27015)),
            ..RenderRequest::default()
        };

        assert_eq!(
            parameter_hash(FractalKind::Mandelbrot, &plain),
            parameter_hash(FractalKind::Mandelbrot, &with_constant)
        );
        assert_ne!(
            parameter_hash(FractalKind::Julia, &plain),
            parameter_hash(FractalKind::Julia, &with_constant)
        );
    }

    #[test]
    fn custom_names_get_an_extension() {
        let dir = tempfile::tempdir().unwrap();
        let files = manager(dir.path());
        let request = RenderRequest::default();

        let bare = files
            .image_path(FractalKind::Julia, &request, None, "png", Some("mine"))
            .unwrap();
        let suffixed = files
            .image_path(FractalKind::Julia, &request, None, "png", Some("mine.png"))
            .unwrap();

        assert_eq!(bare, dir.path().join("julia").join("mine.png"));
        assert_eq!(suffixed, bare);
    }

    #[test]
    fn sidecar_paths_share_the_image_stem() {
        let dir = tempfile::tempdir().unwrap();
        let files = manager(dir.path());
        let image = dir.path().join("mandelbrot").join("mandelbrot_x_1234abcd.png");

        assert_eq!(
            files.metadata_path(&image),
            dir.path().join("metadata").join("mandelbrot_x_1234abcd_metadata.toml")
        );
        assert_eq!(
            files.thumbnail_path(&image),
            dir.path().join("thumbnails").join("mandelbrot_x_1234abcd_thumb.png")
        );
        assert_eq!(
            files.gallery_path("all"),
            dir.path().join("gallery").join("all.html")
        );
    }

    #[test]
    fn lists_images_by_kind() {
        let dir = tempfile::tempdir().unwrap();
        let files = manager(dir.path());
        fs::write(dir.path().join("mandelbrot").join("a.png"), b"x").unwrap();
        fs::write(dir.path().join("julia").join("b.ppm"), b"x").unwrap();
        fs::write(dir.path().join("julia").join("notes.txt"), b"x").unwrap();

        assert_eq!(files.list_images(None).unwrap().len(), 2);
        assert_eq!(
            files.list_images(Some(FractalKind::Julia)).unwrap(),
            vec![dir.path().join("julia").join("b.ppm")]
        );
        assert_eq!(
            files.kind_of(&dir.path().join("mandelbrot").join("a.png")),
            Some(FractalKind::Mandelbrot)
        );
    }
}

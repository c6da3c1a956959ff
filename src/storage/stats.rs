use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::core::fractals::fractal_kinds::FractalKind;
use crate::storage::file_manager::{FractalFileManager, METADATA_DIR, THUMBNAIL_DIR};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StorageStats {
    pub total_images: usize,
    pub images_by_kind: BTreeMap<FractalKind, usize>,
    pub total_bytes: u64,
    pub thumbnails: usize,
    pub metadata_files: usize,
}

impl StorageStats {
    pub fn collect(files: &FractalFileManager) -> anyhow::Result<Self> {
        let mut stats = Self::default();

        for &kind in FractalKind::ALL {
            let images = files.list_images(Some(kind))?;
            for image in &images {
                stats.total_bytes += fs::metadata(image)
                    .with_context(|| format!("reading size of {}", image.display()))?
                    .len();
            }
            stats.total_images += images.len();
            stats.images_by_kind.insert(kind, images.len());
        }

        stats.thumbnails = count_files(&files.base_dir().join(THUMBNAIL_DIR))?;
        stats.metadata_files = count_files(&files.base_dir().join(METADATA_DIR))?;

        Ok(stats)
    }

    #[must_use]
    pub fn total_size_mb(&self) -> f64 {
        self.total_bytes as f64 / (1024.0 * 1024.0)
    }
}

impl fmt::Display for StorageStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total images: {}", self.total_images)?;
        for (kind, count) in &self.images_by_kind {
            writeln!(f, "  {}: {}", kind.display_name(), count)?;
        }
        writeln!(f, "Total size: {:.2} MB", self.total_size_mb())?;
        writeln!(f, "Thumbnails: {}", self.thumbnails)?;
        write!(f, "Metadata files: {}", self.metadata_files)
    }
}

fn count_files(dir: &Path) -> anyhow::Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }

    let mut count = 0;
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        if entry?.path().is_file() {
            count += 1;
        }
    }
    Ok(count)
}

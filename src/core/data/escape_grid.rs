use thiserror::Error;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Outcome of iterating one sample point.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct EscapeResult {
    pub iteration_count: u32,
    pub smoothed_value: f64,
    pub escaped: bool,
}

impl EscapeResult {
    /// Result for a point that stayed bounded for the whole budget.
    #[must_use]
    pub fn interior(max_iterations: u32) -> Self {
        Self {
            iteration_count: max_iterations,
            smoothed_value: f64::from(max_iterations),
            escaped: false,
        }
    }

    #[must_use]
    pub fn value(&self, smooth: bool) -> f64 {
        if smooth {
            self.smoothed_value
        } else {
            f64::from(self.iteration_count)
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum EscapeGridError {
    #[error("pixel rect holds {pixel_rect_size} cells but {cell_count} were supplied")]
    SizeMismatch {
        pixel_rect_size: usize,
        cell_count: usize,
    },
}

/// Summary of the raw iteration counts, used for diagnostics and metadata.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationStats {
    pub min_iterations: u32,
    pub max_iterations: u32,
    pub mean_iterations: f64,
    pub escaped_count: u64,
    pub interior_count: u64,
}

/// Row-major escape results; row 0 is the top of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeGrid {
    pixel_rect: PixelRect,
    max_iterations: u32,
    cells: Vec<EscapeResult>,
}

impl EscapeGrid {
    pub fn from_cells(
        pixel_rect: PixelRect,
        max_iterations: u32,
        cells: Vec<EscapeResult>,
    ) -> Result<Self, EscapeGridError> {
        let pixel_rect_size = pixel_rect.size() as usize;

        if pixel_rect_size != cells.len() {
            return Err(EscapeGridError::SizeMismatch {
                pixel_rect_size,
                cell_count: cells.len(),
            });
        }

        Ok(Self {
            pixel_rect,
            max_iterations,
            cells,
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn cells(&self) -> &[EscapeResult] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Option<&EscapeResult> {
        if !self.pixel_rect.contains_point(point) {
            return None;
        }

        self.cells.get(self.pixel_rect.index_of(point))
    }

    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[EscapeResult]> {
        if y >= self.height() {
            return None;
        }

        let width = self.width() as usize;
        let start = y as usize * width;
        Some(&self.cells[start..start + width])
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, EscapeResult> {
        self.cells.chunks_exact(self.width() as usize)
    }

    #[must_use]
    pub fn stats(&self) -> IterationStats {
        let (min, max, sum, escaped) = self.cells.iter().fold(
            (u32::MAX, 0_u32, 0_u64, 0_u64),
            |(min, max, sum, escaped), cell| {
                (
                    min.min(cell.iteration_count),
                    max.max(cell.iteration_count),
                    sum + u64::from(cell.iteration_count),
                    escaped + u64::from(cell.escaped),
                )
            },
        );
        let total = self.cells.len() as u64;

        IterationStats {
            min_iterations: min,
            max_iterations: max,
            mean_iterations: sum as f64 / total as f64,
            escaped_count: escaped,
            interior_count: total - escaped,
        }
    }
}

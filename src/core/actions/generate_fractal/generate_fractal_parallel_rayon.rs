use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Failure of a cancel-aware grid evaluation.
#[derive(Debug, PartialEq, Error)]
pub enum GenerateFractalError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("algorithm error")]
    Algorithm(#[source] E),
}

/// Evaluates every pixel on rayon's pool, one task per row, polling `cancel`
/// at the start of every row. Results come back row-major, identical to the
/// serial evaluator.
///
/// The output is allocated once up front and each row task fills its own
/// slice of it in place.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Default + Send,
    Alg::Failure: Send + 'static,
    C: CancelToken,
{
    let pixel_rect = algorithm.pixel_rect();
    let row_width = pixel_rect.width() as usize;

    let cell_count = row_width * pixel_rect.height() as usize;
    let mut cells = Vec::with_capacity(cell_count);
    cells.resize_with(cell_count, Alg::Success::default);

    cells
        .par_chunks_mut(row_width)
        .zip(0..pixel_rect.height())
        .try_for_each(|(row, y)| {
            if cancel.is_cancelled() {
                return Err(GenerateFractalError::Cancelled(Cancelled));
            }

            for (x, cell) in (0..pixel_rect.width()).zip(row.iter_mut()) {
                *cell = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateFractalError::Algorithm)?;
            }

            Ok(())
        })?;

    Ok(cells)
}

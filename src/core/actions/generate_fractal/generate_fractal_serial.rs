use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Evaluates every pixel on the calling thread, row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let pixel_rect = algorithm.pixel_rect();

    (0..pixel_rect.height())
        .flat_map(|y| (0..pixel_rect.width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;
    use thiserror::Error;

    #[derive(Debug, PartialEq, Error)]
    #[error("StubError")]
    struct StubError;

    struct StubAlgorithm {
        pixel_rect: PixelRect,
        fail_at: Option<Point>,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = (u32, u32);
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if self.fail_at == Some(pixel) {
                return Err(StubError);
            }
            Ok((pixel.x, pixel.y))
        }

        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }
    }

    #[test]
    fn test_serial_is_row_major() {
        let algorithm = StubAlgorithm {
            pixel_rect: PixelRect::new(3, 2).unwrap(),
            fail_at: None,
        };

        let results = generate_fractal_serial(&algorithm).unwrap();

        assert_eq!(
            results,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_serial_propagates_failure() {
        let algorithm = StubAlgorithm {
            pixel_rect: PixelRect::new(3, 2).unwrap(),
            fail_at: Some(Point { x: 1, y: 1 }),
        };

        assert_eq!(generate_fractal_serial(&algorithm), Err(StubError));
    }
}

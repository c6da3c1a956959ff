use rayon::prelude::*;

use crate::core::colour_mapping::colouring::Colouring;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::colour_mapping::normalization::NormalizationRange;
use crate::core::data::colour::Colour;
use crate::core::data::escape_grid::{EscapeGrid, EscapeResult};
use crate::core::data::pixel_image::PixelImage;

/// Turns an escape grid into RGB pixels.
///
/// Escaped values are normalized over the escaped pixels of this grid only,
/// so the smallest maps to `colour_map.map(0.0)` and the largest to
/// `colour_map.map(1.0)`. Interior pixels always get `colouring.interior`.
#[must_use]
pub fn colourize(grid: &EscapeGrid, colour_map: &dyn ColourMap, colouring: &Colouring) -> PixelImage {
    let range = NormalizationRange::from_values(
        grid.cells()
            .iter()
            .filter(|cell| cell.escaped)
            .map(|cell| cell.value(colouring.smooth)),
        colouring.normalization,
    );

    let width = grid.width() as usize;
    let mut image = PixelImage::new(grid.pixel_rect());

    image
        .buffer_mut()
        .par_chunks_mut(width * 3)
        .zip(grid.cells().par_chunks(width))
        .for_each(|(pixels, cells)| {
            for (rgb, cell) in pixels.chunks_exact_mut(3).zip(cells) {
                let Colour { r, g, b } = colour_for(cell, range.as_ref(), colour_map, colouring);
                rgb.copy_from_slice(&[r, g, b]);
            }
        });

    image
}

fn colour_for(
    cell: &EscapeResult,
    range: Option<&NormalizationRange>,
    colour_map: &dyn ColourMap,
    colouring: &Colouring,
) -> Colour {
    if !cell.escaped {
        return colouring.interior;
    }

    let t = range.map_or(0.0, |range| range.normalize(cell.value(colouring.smooth)));
    colour_map.map(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::factory::colour_map_factory;
    use crate::core::colour_mapping::kinds::ColourSchemeKind;
    use crate::core::colour_mapping::normalization::Normalization;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;

    #[derive(Debug)]
    struct StubColourMap;

    impl ColourMap for StubColourMap {
        fn map(&self, t: f64) -> Colour {
            let level = (t * 200.0).round() as u8;
            Colour::rgb(level, level, 255)
        }

        fn kind(&self) -> ColourSchemeKind {
            ColourSchemeKind::Gray
        }
    }

    fn escaped(n: u32, smoothed: f64) -> EscapeResult {
        EscapeResult {
            iteration_count: n,
            smoothed_value: smoothed,
            escaped: true,
        }
    }

    fn grid(cells: Vec<EscapeResult>, width: u32, height: u32) -> EscapeGrid {
        EscapeGrid::from_cells(PixelRect::new(width, height).unwrap(), 20, cells).unwrap()
    }

    fn mixed_grid() -> EscapeGrid {
        grid(
            vec![
                escaped(2, 2.5),
                escaped(10, 9.5),
                EscapeResult::interior(20),
                escaped(6, 6.0),
                EscapeResult::interior(20),
                escaped(4, 4.0),
            ],
            3,
            2,
        )
    }

    #[test]
    fn test_interior_uses_sentinel_for_every_scheme() {
        let colouring = Colouring {
            interior: Colour::rgb(1, 2, 3),
            ..Colouring::default()
        };

        for &kind in ColourSchemeKind::ALL {
            let image = colourize(&mixed_grid(), colour_map_factory(kind).as_ref(), &colouring);

            assert_eq!(image.pixel(Point { x: 2, y: 0 }), Ok(Colour::rgb(1, 2, 3)));
            assert_eq!(image.pixel(Point { x: 1, y: 1 }), Ok(Colour::rgb(1, 2, 3)));
        }
    }

    #[test]
    fn test_extremes_hit_both_ends_of_the_map() {
        for normalization in [Normalization::Linear, Normalization::Logarithmic] {
            let colouring = Colouring {
                normalization,
                ..Colouring::default()
            };

            let image = colourize(&mixed_grid(), &StubColourMap, &colouring);

            assert_eq!(image.pixel(Point { x: 0, y: 0 }), Ok(StubColourMap.map(0.0)));
            assert_eq!(image.pixel(Point { x: 1, y: 0 }), Ok(StubColourMap.map(1.0)));
        }
    }

    #[test]
    fn test_linear_middle_value() {
        let image = colourize(&mixed_grid(), &StubColourMap, &Colouring::default());

        // 6.0 sits at (6.0 - 2.5) / 7.0 = 0.5
        assert_eq!(image.pixel(Point { x: 0, y: 1 }), Ok(StubColourMap.map(0.5)));
    }

    #[test]
    fn test_integer_counts_when_not_smooth() {
        let colouring = Colouring {
            smooth: false,
            ..Colouring::default()
        };

        let image = colourize(&mixed_grid(), &StubColourMap, &colouring);

        // counts span 2..=10, so 6 is the midpoint
        assert_eq!(image.pixel(Point { x: 0, y: 1 }), Ok(StubColourMap.map(0.5)));
    }

    #[test]
    fn test_all_interior_grid() {
        let cells = vec![EscapeResult::interior(20); 4];

        let image = colourize(&grid(cells, 2, 2), &StubColourMap, &Colouring::default());

        assert!(image.colours().all(|colour| colour == Colour::BLACK));
    }

    #[test]
    fn test_uniform_escape_values_map_to_start_of_scheme() {
        let cells = vec![escaped(3, 3.0); 4];

        let image = colourize(&grid(cells, 2, 2), &StubColourMap, &Colouring::default());

        assert!(image.colours().all(|colour| colour == StubColourMap.map(0.0)));
    }
}

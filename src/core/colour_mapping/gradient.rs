use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::data::colour::Colour;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f64,
    pub colour: Colour,
}

impl GradientStop {
    #[must_use]
    pub const fn new(position: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            position,
            colour: Colour::rgb(r, g, b),
        }
    }
}

/// Piecewise-linear colormap. Stops are sorted, start at 0.0 and end at 1.0.
#[derive(Debug)]
pub struct GradientColourMap {
    kind: ColourSchemeKind,
    stops: &'static [GradientStop],
}

impl GradientColourMap {
    #[must_use]
    pub fn new(kind: ColourSchemeKind, stops: &'static [GradientStop]) -> Self {
        Self { kind, stops }
    }
}

impl ColourMap for GradientColourMap {
    fn map(&self, t: f64) -> Colour {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let upper = self
            .stops
            .iter()
            .position(|stop| stop.position >= t)
            .unwrap_or(self.stops.len() - 1);

        if upper == 0 {
            return self.stops[0].colour;
        }

        let low = self.stops[upper - 1];
        let high = self.stops[upper];
        let span = high.position - low.position;
        let local_t = if span > 0.0 { (t - low.position) / span } else { 0.0 };

        low.colour.lerp(high.colour, local_t)
    }

    fn kind(&self) -> ColourSchemeKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static BLACK_RED_WHITE: [GradientStop; 3] = [
        GradientStop::new(0.0, 0, 0, 0),
        GradientStop::new(0.5, 255, 0, 0),
        GradientStop::new(1.0, 255, 255, 255),
    ];

    fn mapper() -> GradientColourMap {
        GradientColourMap::new(ColourSchemeKind::Hot, &BLACK_RED_WHITE)
    }

    #[test]
    fn test_map_hits_stops_exactly() {
        assert_eq!(mapper().map(0.0), Colour::BLACK);
        assert_eq!(mapper().map(0.5), Colour::rgb(255, 0, 0));
        assert_eq!(mapper().map(1.0), Colour::WHITE);
    }

    #[test]
    fn test_map_interpolates_between_stops() {
        assert_eq!(mapper().map(0.25), Colour::rgb(128, 0, 0));
        assert_eq!(mapper().map(0.75), Colour::rgb(255, 128, 128));
    }

    #[test]
    fn test_map_clamps_and_handles_nan() {
        assert_eq!(mapper().map(-1.0), Colour::BLACK);
        assert_eq!(mapper().map(2.0), Colour::WHITE);
        assert_eq!(mapper().map(f64::NAN), Colour::BLACK);
    }
}

use std::fmt;

use crate::core::colour_mapping::colouring::Colouring;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;

/// A validated request: the per-pixel algorithm plus the resolved colour map.
pub struct RenderPlan {
    algorithm: EscapeTimeAlgorithm,
    colour_map: Box<dyn ColourMap>,
    colouring: Colouring,
}

impl RenderPlan {
    pub(crate) fn new(
        algorithm: EscapeTimeAlgorithm,
        colour_map: Box<dyn ColourMap>,
        colouring: Colouring,
    ) -> Self {
        Self {
            algorithm,
            colour_map,
            colouring,
        }
    }

    #[must_use]
    pub fn algorithm(&self) -> &EscapeTimeAlgorithm {
        &self.algorithm
    }

    #[must_use]
    pub fn colour_map(&self) -> &dyn ColourMap {
        self.colour_map.as_ref()
    }

    #[must_use]
    pub fn colouring(&self) -> &Colouring {
        &self.colouring
    }
}

impl fmt::Debug for RenderPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderPlan")
            .field("algorithm", &self.algorithm)
            .field("colour_map", &self.colour_map.kind())
            .field("colouring", &self.colouring)
            .finish()
    }
}

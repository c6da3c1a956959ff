use serde::{Deserialize, Serialize};

use crate::core::colour_mapping::normalization::Normalization;
use crate::core::data::colour::Colour;

/// Options for turning an escape grid into colours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colouring {
    pub normalization: Normalization,
    /// Use the fractional escape value instead of the integer count.
    pub smooth: bool,
    /// Colour of points that never escaped.
    pub interior: Colour,
}

impl Default for Colouring {
    fn default() -> Self {
        Self {
            normalization: Normalization::Linear,
            smooth: true,
            interior: Colour::BLACK,
        }
    }
}

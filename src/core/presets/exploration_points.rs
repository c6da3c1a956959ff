use std::fmt;
use std::str::FromStr;

use crate::core::data::complex::Complex;
use crate::core::errors::ConfigurationError;

/// Named Mandelbrot locations worth zooming into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplorationPoint {
    SeahorseValley,
    Spiral,
    MiniMandelbrot,
    ElephantValley,
}

impl ExplorationPoint {
    pub const ALL: &'static [Self] = &[
        Self::SeahorseValley,
        Self::Spiral,
        Self::MiniMandelbrot,
        Self::ElephantValley,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SeahorseValley => "seahorse_valley",
            Self::Spiral => "spiral",
            Self::MiniMandelbrot => "mini_mandelbrot",
            Self::ElephantValley => "elephant_valley",
        }
    }

    #[must_use]
    pub const fn center(self) -> Complex {
        match self {
            Self::SeahorseValley => Complex::new(-0.75, 0.1),
            Self::Spiral => Complex::new(-0.1, 0.651),
            Self::MiniMandelbrot => Complex::new(-0.2, 1.1),
            Self::ElephantValley => Complex::new(0.25, 0.0),
        }
    }
}

impl fmt::Display for ExplorationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).name())
    }
}

impl FromStr for ExplorationPoint {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|point| point.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ConfigurationError::UnknownExplorationPoint {
                name: name.to_string(),
                available: super::list_names(Self::ALL.iter().map(|p| p.name())),
            })
    }
}

use std::fmt;
use std::str::FromStr;

use crate::core::data::complex::Complex;
use crate::core::errors::ConfigurationError;

/// Well-known Julia set parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JuliaConstant {
    #[default]
    Classic,
    Dragon,
    Spiral,
    Lightning,
    Dendrite,
    Rabbit,
    Airplane,
    Galaxy,
    Flower,
    Seahorse,
}

impl JuliaConstant {
    pub const ALL: &'static [Self] = &[
        Self::Classic,
        Self::Dragon,
        Self::Spiral,
        Self::Lightning,
        Self::Dendrite,
        Self::Rabbit,
        Self::Airplane,
        Self::Galaxy,
        Self::Flower,
        Self::Seahorse,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Dragon => "dragon",
            Self::Spiral => "spiral",
            Self::Lightning => "lightning",
            Self::Dendrite => "dendrite",
            Self::Rabbit => "rabbit",
            Self::Airplane => "airplane",
            Self::Galaxy => "galaxy",
            Self::Flower => "flower",
            Self::Seahorse => "seahorse",
        }
    }

    #[must_use]
    pub const fn value(self) -> Complex {
        match self {
            Self::Classic => Complex::new(-0.7, 0.27015),
            Self::Dragon => Complex::new(-0.8, 0.156),
            Self::Spiral => Complex::new(-0.7, -0.3),
            Self::Lightning => Complex::new(-0.54, 0.54),
            Self::Dendrite => Complex::new(-0.235, 0.85),
            Self::Rabbit => Complex::new(-0.123, 0.745),
            Self::Airplane => Complex::new(-0.75, 0.1),
            Self::Galaxy => Complex::new(0.285, 0.01),
            Self::Flower => Complex::new(-0.4, 0.6),
            Self::Seahorse => Complex::new(-0.75, 0.11),
        }
    }
}

impl fmt::Display for JuliaConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).name())
    }
}

impl FromStr for JuliaConstant {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|constant| constant.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ConfigurationError::UnknownJuliaConstant {
                name: name.to_string(),
                available: super::list_names(Self::ALL.iter().map(|c| c.name())),
            })
    }
}

/// Accepts a named constant (any case) or a complex literal such as `-0.8+0.156i`.
pub fn parse_julia_constant(input: &str) -> Result<Complex, ConfigurationError> {
    if let Ok(named) = input.parse::<JuliaConstant>() {
        return Ok(named.value());
    }

    input.parse::<Complex>().map_err(|_| {
        ConfigurationError::UnknownJuliaConstant {
            name: input.to_string(),
            available: super::list_names(JuliaConstant::ALL.iter().map(|c| c.name())),
        }
    })
}

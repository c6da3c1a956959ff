use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::ConfigurationError;

/// Named colour schemes, mirroring the conventional scientific-plotting colormaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourSchemeKind {
    #[default]
    Hot,
    Plasma,
    Inferno,
    Magma,
    Viridis,
    Cool,
    Winter,
    Blues,
    Rainbow,
    Hsv,
    Spring,
    Summer,
    Gray,
    Bone,
    Copper,
    Seismic,
}

impl ColourSchemeKind {
    pub const ALL: &'static [Self] = &[
        Self::Hot,
        Self::Plasma,
        Self::Inferno,
        Self::Magma,
        Self::Viridis,
        Self::Cool,
        Self::Winter,
        Self::Blues,
        Self::Rainbow,
        Self::Hsv,
        Self::Spring,
        Self::Summer,
        Self::Gray,
        Self::Bone,
        Self::Copper,
        Self::Seismic,
    ];

    /// Identifier used on the command line, in config files and in metadata.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Plasma => "plasma",
            Self::Inferno => "inferno",
            Self::Magma => "magma",
            Self::Viridis => "viridis",
            Self::Cool => "cool",
            Self::Winter => "winter",
            Self::Blues => "blues",
            Self::Rainbow => "rainbow",
            Self::Hsv => "hsv",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Gray => "gray",
            Self::Bone => "bone",
            Self::Copper => "copper",
            Self::Seismic => "seismic",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::Plasma => "Plasma",
            Self::Inferno => "Inferno",
            Self::Magma => "Magma",
            Self::Viridis => "Viridis",
            Self::Cool => "Cool",
            Self::Winter => "Winter",
            Self::Blues => "Blues",
            Self::Rainbow => "Rainbow",
            Self::Hsv => "HSV",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Gray => "Gray",
            Self::Bone => "Bone",
            Self::Copper => "Copper",
            Self::Seismic => "Seismic",
        }
    }

    #[must_use]
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ColourSchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).name())
    }
}

impl FromStr for ColourSchemeKind {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let wanted = name.trim().to_ascii_lowercase();
        // matplotlib spells it both ways
        let wanted = if wanted == "grey" { "gray".to_string() } else { wanted };

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ConfigurationError::UnknownColourScheme {
                name: name.to_string(),
                available: Self::available(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            ColourSchemeKind::ALL.first(),
            Some(&ColourSchemeKind::default())
        );
    }

    #[test]
    fn sixteen_schemes_are_registered() {
        assert_eq!(ColourSchemeKind::ALL.len(), 16);
    }

    #[test]
    fn names_parse_back_to_their_kind() {
        for &kind in ColourSchemeKind::ALL {
            assert_eq!(kind.name().parse::<ColourSchemeKind>(), Ok(kind));
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("Viridis".parse(), Ok(ColourSchemeKind::Viridis));
        assert_eq!(" HSV ".parse(), Ok(ColourSchemeKind::Hsv));
        assert_eq!("grey".parse(), Ok(ColourSchemeKind::Gray));
    }

    #[test]
    fn unknown_scheme_is_a_configuration_error() {
        let result = "sepia".parse::<ColourSchemeKind>();

        assert!(matches!(
            result,
            Err(ConfigurationError::UnknownColourScheme { ref name, .. }) if name == "sepia"
        ));
    }

    #[test]
    fn names_are_unique() {
        let names: Vec<&str> = ColourSchemeKind::ALL.iter().map(|k| k.name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate scheme name: {}", name);
                }
            }
        }
    }
}

use std::fmt;
use std::str::FromStr;

use crate::core::errors::ConfigurationError;

/// Output resolution and iteration budget bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityPreset {
    Preview,
    Standard,
    High,
    Ultra,
    Print,
}

impl QualityPreset {
    pub const ALL: &'static [Self] = &[
        Self::Preview,
        Self::Standard,
        Self::High,
        Self::Ultra,
        Self::Print,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::Standard => "standard",
            Self::High => "high",
            Self::Ultra => "ultra",
            Self::Print => "print",
        }
    }

    #[must_use]
    pub const fn width(self) -> u32 {
        match self {
            Self::Preview => 400,
            Self::Standard => 800,
            Self::High => 1920,
            Self::Ultra => 3840,
            Self::Print => 3000,
        }
    }

    #[must_use]
    pub const fn height(self) -> u32 {
        match self {
            Self::Preview => 300,
            Self::Standard => 600,
            Self::High => 1080,
            Self::Ultra => 2160,
            Self::Print => 2000,
        }
    }

    #[must_use]
    pub const fn max_iterations(self) -> u32 {
        match self {
            Self::Preview => 50,
            Self::Standard => 100,
            Self::High => 200,
            Self::Ultra => 500,
            Self::Print => 300,
        }
    }
}

impl fmt::Display for QualityPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).name())
    }
}

impl FromStr for QualityPreset {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ConfigurationError::UnknownQualityPreset {
                name: name.to_string(),
                available: super::list_names(Self::ALL.iter().map(|p| p.name())),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_table() {
        let table: Vec<(u32, u32, u32)> = QualityPreset::ALL
            .iter()
            .map(|p| (p.width(), p.height(), p.max_iterations()))
            .collect();

        assert_eq!(
            table,
            vec![
                (400, 300, 50),
                (800, 600, 100),
                (1920, 1080, 200),
                (3840, 2160, 500),
                (3000, 2000, 300),
            ]
        );
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert_eq!("HIGH".parse(), Ok(QualityPreset::High));
        assert!(matches!(
            "extreme".parse::<QualityPreset>(),
            Err(ConfigurationError::UnknownQualityPreset { .. })
        ));
    }
}

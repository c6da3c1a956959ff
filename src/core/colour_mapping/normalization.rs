use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::ConfigurationError;

/// How escape values are squeezed into `[0, 1]` before colour lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    #[default]
    Linear,
    /// Spreads the low-count band, which holds most escaped pixels.
    Logarithmic,
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Logarithmic => f.write_str("logarithmic"),
        }
    }
}

impl FromStr for Normalization {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "log" | "logarithmic" => Ok(Self::Logarithmic),
            _ => Err(ConfigurationError::UnknownNormalization(name.to_string())),
        }
    }
}

/// Value range of the escaped pixels of one grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationRange {
    min: f64,
    max: f64,
    policy: Normalization,
}

impl NormalizationRange {
    /// `None` when no value is given, i.e. every pixel is interior.
    pub fn from_values<I>(values: I, policy: Normalization) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().fold(None, |range, value| {
            let (min, max) = match range {
                Some(Self { min, max, .. }) => (f64::min(min, value), f64::max(max, value)),
                None => (value, value),
            };
            Some(Self { min, max, policy })
        })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Maps `value` into `[0, 1]`. A degenerate range maps everything to 0.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        let spread = self.max - self.min;
        if spread <= 0.0 {
            return 0.0;
        }

        let offset = (value - self.min).max(0.0);
        let t = match self.policy {
            Normalization::Linear => offset / spread,
            Normalization::Logarithmic => offset.ln_1p() / spread.ln_1p(),
        };

        t.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_range() {
        assert_eq!(
            NormalizationRange::from_values(std::iter::empty(), Normalization::Linear),
            None
        );
    }

    #[test]
    fn linear_maps_extremes_to_unit_bounds() {
        let range =
            NormalizationRange::from_values([3.0, 7.0, 5.0], Normalization::Linear).unwrap();

        assert_eq!(range.min(), 3.0);
        assert_eq!(range.max(), 7.0);
        assert_eq!(range.normalize(3.0), 0.0);
        assert_eq!(range.normalize(5.0), 0.5);
        assert_eq!(range.normalize(7.0), 1.0);
    }

    #[test]
    fn logarithmic_keeps_extremes_and_lifts_the_middle() {
        let range =
            NormalizationRange::from_values([0.0, 100.0], Normalization::Logarithmic).unwrap();

        assert_eq!(range.normalize(0.0), 0.0);
        assert!((range.normalize(100.0) - 1.0).abs() < 1e-12);
        assert!(range.normalize(10.0) > 0.1 * 2.0);
    }

    #[test]
    fn degenerate_range_maps_to_zero() {
        let range = NormalizationRange::from_values([4.0, 4.0], Normalization::Linear).unwrap();

        assert_eq!(range.normalize(4.0), 0.0);
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!("linear".parse(), Ok(Normalization::Linear));
        assert_eq!("LOG".parse(), Ok(Normalization::Logarithmic));
        assert!("cubic".parse::<Normalization>().is_err());
    }
}

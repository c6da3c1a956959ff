//! Error taxonomy for a single render call.
//!
//! Every variant is raised before the grid is allocated, except
//! [`RenderError::Cancelled`], and none of them leave partial output behind.

use thiserror::Error;

use crate::core::data::escape_grid::EscapeGridError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("image dimensions must be positive: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("zoom must be a positive finite number, got {0}")]
    InvalidZoom(f64),
    #[error("escape radius must be a positive finite number, got {0}")]
    InvalidEscapeRadius(f64),
    #[error("centre must be finite, got ({real}, {imag})")]
    NonFiniteCenter { real: f64, imag: f64 },
    #[error("julia renders need a julia constant")]
    MissingJuliaConstant,
    #[error("unknown colour scheme '{name}', available: {available}")]
    UnknownColourScheme { name: String, available: String },
    #[error("unknown exploration point '{name}', available: {available}")]
    UnknownExplorationPoint { name: String, available: String },
    #[error("unknown julia constant '{name}', available: {available}")]
    UnknownJuliaConstant { name: String, available: String },
    #[error("unknown quality preset '{name}', available: {available}")]
    UnknownQualityPreset { name: String, available: String },
    #[error("unknown normalization '{0}', expected 'linear' or 'logarithmic'")]
    UnknownNormalization(String),
    #[error("malformed complex number '{0}', expected forms like '0.3+0.5i' or a named constant")]
    MalformedComplex(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("configuration error")]
    Configuration(#[from] ConfigurationError),
    #[error(
        "zoom {zoom:e} needs a pixel step of {pixel_step:e}, below what f64 can resolve around the centre"
    )]
    NumericPrecision { zoom: f64, pixel_step: f64 },
    #[error(
        "a {width}x{height} render needs about {required_bytes} bytes, over the {budget_bytes} byte budget"
    )]
    Resource {
        width: u32,
        height: u32,
        required_bytes: u64,
        budget_bytes: u64,
    },
    #[error("render cancelled")]
    Cancelled,
    #[error("pixel mapping failed")]
    PixelMapping(#[from] PixelToComplexCoordsError),
    #[error("escape grid assembly failed")]
    Grid(#[from] EscapeGridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_convert_into_render_errors() {
        let err: RenderError = ConfigurationError::ZeroMaxIterations.into();

        assert_eq!(
            err,
            RenderError::Configuration(ConfigurationError::ZeroMaxIterations)
        );
        assert_eq!(err.to_string(), "configuration error");
        assert_eq!(
            std::error::Error::source(&err).map(ToString::to_string),
            Some("maximum iterations must be greater than zero".to_string())
        );
    }

    #[test]
    fn error_chain_names_each_cause_once() {
        let err: RenderError = ConfigurationError::ZeroMaxIterations.into();
        let chained = format!("{:#}", anyhow::Error::new(err));

        assert_eq!(
            chained,
            "configuration error: maximum iterations must be greater than zero"
        );
    }

    #[test]
    fn grid_errors_keep_their_cause_as_source() {
        let cause = EscapeGridError::SizeMismatch {
            pixel_rect_size: 4,
            cell_count: 3,
        };
        let err: RenderError = cause.into();

        assert_eq!(err.to_string(), "escape grid assembly failed");
        assert_eq!(
            std::error::Error::source(&err).map(ToString::to_string),
            Some(cause.to_string())
        );
    }

    #[test]
    fn unknown_scheme_message_lists_alternatives() {
        let err = ConfigurationError::UnknownColourScheme {
            name: "sepia".to_string(),
            available: "hot, gray".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "unknown colour scheme 'sepia', available: hot, gray"
        );
    }

    #[test]
    fn cancelled_displays_plainly() {
        assert_eq!(RenderError::Cancelled.to_string(), "render cancelled");
    }
}

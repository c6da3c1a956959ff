use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::normalization::Normalization;
use crate::core::fractals::escape_time::DEFAULT_ESCAPE_RADIUS;
use crate::core::util::guards::estimated_render_bytes;
use crate::presenters::file::ImageFormat;

/// Looked up relative to the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/fractal_config.toml";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub rendering: RenderingSettings,
    pub exploration: ExplorationSettings,
    pub colour_schemes: BTreeMap<String, Vec<ColourSchemeKind>>,
    pub output: OutputSettings,
    pub limits: LimitSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderingSettings {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub colour_scheme: ColourSchemeKind,
    pub normalization: Normalization,
    pub smooth_colouring: bool,
    pub image_format: ImageFormat,
}

impl Default for RenderingSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            max_iterations: 100,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            colour_scheme: ColourSchemeKind::Hot,
            normalization: Normalization::Linear,
            smooth_colouring: true,
            image_format: ImageFormat::Png,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorationSettings {
    pub default_zoom: f64,
    pub max_zoom: f64,
}

impl Default for ExplorationSettings {
    fn default() -> Self {
        Self {
            default_zoom: 1.0,
            max_zoom: 1e12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub base_dir: PathBuf,
    /// Placeholders: `{type}`, `{preset}`, `{timestamp}`, `{hash}`.
    pub filename_template: String,
    pub timestamp_format: String,
    pub organize_by_date: bool,
    pub organize_by_type: bool,
    pub write_metadata: bool,
    pub write_thumbnail: bool,
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("output"),
            filename_template: "{type}_{timestamp}_{hash}".to_string(),
            timestamp_format: "%Y%m%d_%H%M%S".to_string(),
            organize_by_date: false,
            organize_by_type: true,
            write_metadata: true,
            write_thumbnail: true,
            thumbnail_width: 200,
            thumbnail_height: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitSettings {
    pub max_iterations: u32,
    pub max_resolution: u32,
    pub memory_warning_mb: u64,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            max_resolution: 8192,
            memory_warning_mb: 1024,
        }
    }
}

fn default_colour_schemes() -> BTreeMap<String, Vec<ColourSchemeKind>> {
    use ColourSchemeKind::*;

    BTreeMap::from([
        ("warm".to_string(), vec![Hot, Plasma, Inferno, Magma, Copper]),
        ("cool".to_string(), vec![Viridis, Cool, Winter, Blues]),
        ("artistic".to_string(), vec![Rainbow, Hsv, Spring, Summer, Seismic]),
        ("classic".to_string(), vec![Gray, Bone]),
    ])
}

impl Settings {
    /// `explicit` must exist; otherwise [`DEFAULT_CONFIG_PATH`] is tried and
    /// built-in defaults are used when it is missing.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_PATH);
        if fallback.is_file() {
            return Self::from_file(fallback);
        }

        info!(path = DEFAULT_CONFIG_PATH, "no config file found, using defaults");
        Ok(Self::with_defaults())
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let settings = Self::from_toml_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;

        info!(path = %path.display(), "loaded config");
        Ok(settings)
    }

    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let mut settings: Self = toml::from_str(text)?;
        if settings.colour_schemes.is_empty() {
            settings.colour_schemes = default_colour_schemes();
        }
        Ok(settings)
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            colour_schemes: default_colour_schemes(),
            ..Self::default()
        }
    }

    /// Applies the configured limits and warns about large memory estimates.
    pub fn validate_parameters(
        &self,
        width: u32,
        height: u32,
        max_iterations: u32,
    ) -> anyhow::Result<()> {
        let limits = &self.limits;

        if max_iterations > limits.max_iterations {
            bail!(
                "max iterations {max_iterations} exceeds the configured limit of {}",
                limits.max_iterations
            );
        }

        if width > limits.max_resolution || height > limits.max_resolution {
            bail!(
                "resolution {width}x{height} exceeds the configured limit of {} per side",
                limits.max_resolution
            );
        }

        let estimated_mb = estimated_render_bytes(width, height) / (1024 * 1024);
        if estimated_mb > limits.memory_warning_mb {
            warn!(
                estimated_mb,
                threshold_mb = limits.memory_warning_mb,
                "render needs a lot of memory"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_four_categories() {
        let settings = Settings::with_defaults();

        assert_eq!(
            settings.colour_schemes.keys().collect::<Vec<_>>(),
            vec!["artistic", "classic", "cool", "warm"]
        );
        assert_eq!(settings.rendering.width, 800);
        assert_eq!(settings.output.thumbnail_width, 200);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [rendering]
            width = 1024
            colour_scheme = "viridis"
            normalization = "logarithmic"

            [limits]
            max_iterations = 5000
            "#,
        )
        .unwrap();

        assert_eq!(settings.rendering.width, 1024);
        assert_eq!(settings.rendering.height, 600);
        assert_eq!(settings.rendering.colour_scheme, ColourSchemeKind::Viridis);
        assert_eq!(settings.rendering.normalization, Normalization::Logarithmic);
        assert_eq!(settings.limits.max_iterations, 5000);
        assert_eq!(settings.limits.max_resolution, 8192);
        assert!(!settings.colour_schemes.is_empty());
    }

    #[test]
    fn unknown_scheme_in_category_is_rejected() {
        let result = Settings::from_toml_str(
            r#"
            [colour_schemes]
            warm = ["hot", "sepia"]
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn shipped_config_parses() {
        let text = include_str!("../../config/fractal_config.toml");

        let settings = Settings::from_toml_str(text).unwrap();

        assert_eq!(settings.colour_schemes.len(), 4);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let result = Settings::load(Some(Path::new("/definitely/not/here.toml")));

        assert!(result.is_err());
    }

    #[test]
    fn limits_are_enforced() {
        let settings = Settings::with_defaults();

        assert!(settings.validate_parameters(800, 600, 100).is_ok());
        assert!(settings.validate_parameters(800, 600, 5000).is_err());
        assert!(settings.validate_parameters(10_000, 600, 100).is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let settings = Settings::with_defaults();

        let text = toml::to_string(&settings).unwrap();

        assert_eq!(Settings::from_toml_str(&text).unwrap(), settings);
    }
}

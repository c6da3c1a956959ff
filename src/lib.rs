mod config;
mod controllers;
mod core;
mod presenters;
mod storage;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::colourize::colourize::colourize;
pub use crate::core::actions::render::render::{
    render, render_cancelable, render_grid, render_grid_serial, render_with_raw,
};
pub use crate::core::colour_mapping::colouring::Colouring;
pub use crate::core::colour_mapping::factory::{colour_map_by_name, colour_map_factory};
pub use crate::core::colour_mapping::kinds::ColourSchemeKind;
pub use crate::core::colour_mapping::map::ColourMap;
pub use crate::core::colour_mapping::normalization::Normalization;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_grid::{EscapeGrid, EscapeResult, IterationStats};
pub use crate::core::data::pixel_image::PixelImage;
pub use crate::core::data::point::Point;
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::errors::{ConfigurationError, RenderError};
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::presets::exploration_points::ExplorationPoint;
pub use crate::core::presets::julia_constants::{JuliaConstant, parse_julia_constant};
pub use crate::core::presets::quality::QualityPreset;

pub use crate::config::settings::Settings;
pub use crate::controllers::cli::args::Cli;
pub use crate::controllers::cli::commands::run;
pub use crate::controllers::render_controller::{RenderController, RenderJob, SavedRender};
pub use crate::presenters::file::ImageFormat;

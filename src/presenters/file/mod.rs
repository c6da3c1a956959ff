pub mod png;
pub mod ppm;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use png::PngFilePresenter;
use ppm::PpmFilePresenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Ppm,
}

impl ImageFormat {
    #[must_use]
    pub fn presenter(self) -> Box<dyn FilePresenterPort> {
        match self {
            Self::Png => Box::new(PngFilePresenter::new()),
            Self::Ppm => Box::new(PpmFilePresenter::new()),
        }
    }

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Ppm => "ppm",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).extension())
    }
}

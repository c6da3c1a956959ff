use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_image::PixelImage;

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn extension(&self) -> &'static str {
        "ppm"
    }

    fn present(&self, image: &PixelImage, filepath: &Path) -> anyhow::Result<()> {
        let file = File::create(filepath)
            .with_context(|| format!("creating {}", filepath.display()))?;
        let mut writer = BufWriter::new(file);

        // P6: binary RGB, then width, height and max channel value
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", image.width(), image.height())?;
        writeln!(writer, "255")?;
        writer.write_all(image.buffer())?;
        writer
            .flush()
            .with_context(|| format!("writing {}", filepath.display()))?;

        Ok(())
    }
}

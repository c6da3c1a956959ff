use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::colour::Colour;

/// Continuous colormap over the normalized domain `[0, 1]`.
pub trait ColourMap: Send + Sync {
    /// Values outside `[0, 1]` are clamped, NaN maps like 0.
    fn map(&self, t: f64) -> Colour;

    fn kind(&self) -> ColourSchemeKind;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

//! Gradient tables for every [`ColourSchemeKind`].
//!
//! The perceptual maps (plasma, inferno, magma, viridis) are sampled at
//! quarter steps from their published tables; the analytic maps use their
//! defining anchor points.

use crate::core::colour_mapping::gradient::GradientStop;
use crate::core::colour_mapping::kinds::ColourSchemeKind;

static HOT: [GradientStop; 4] = [
    GradientStop::new(0.0, 11, 0, 0),
    GradientStop::new(0.365, 255, 0, 0),
    GradientStop::new(0.746, 255, 255, 0),
    GradientStop::new(1.0, 255, 255, 255),
];

static PLASMA: [GradientStop; 5] = [
    GradientStop::new(0.0, 13, 8, 135),
    GradientStop::new(0.25, 126, 3, 168),
    GradientStop::new(0.5, 204, 71, 120),
    GradientStop::new(0.75, 248, 149, 64),
    GradientStop::new(1.0, 240, 249, 33),
];

static INFERNO: [GradientStop; 5] = [
    GradientStop::new(0.0, 0, 0, 4),
    GradientStop::new(0.25, 87, 16, 110),
    GradientStop::new(0.5, 188, 55, 84),
    GradientStop::new(0.75, 249, 142, 9),
    GradientStop::new(1.0, 252, 255, 164),
];

static MAGMA: [GradientStop; 5] = [
    GradientStop::new(0.0, 0, 0, 4),
    GradientStop::new(0.25, 81, 18, 124),
    GradientStop::new(0.5, 183, 55, 121),
    GradientStop::new(0.75, 252, 137, 97),
    GradientStop::new(1.0, 252, 253, 191),
];

static VIRIDIS: [GradientStop; 5] = [
    GradientStop::new(0.0, 68, 1, 84),
    GradientStop::new(0.25, 59, 82, 139),
    GradientStop::new(0.5, 33, 145, 140),
    GradientStop::new(0.75, 94, 201, 98),
    GradientStop::new(1.0, 253, 231, 37),
];

static COOL: [GradientStop; 2] = [
    GradientStop::new(0.0, 0, 255, 255),
    GradientStop::new(1.0, 255, 0, 255),
];

static WINTER: [GradientStop; 2] = [
    GradientStop::new(0.0, 0, 0, 255),
    GradientStop::new(1.0, 0, 255, 128),
];

static BLUES: [GradientStop; 5] = [
    GradientStop::new(0.0, 247, 251, 255),
    GradientStop::new(0.25, 198, 219, 239),
    GradientStop::new(0.5, 107, 174, 214),
    GradientStop::new(0.75, 33, 113, 181),
    GradientStop::new(1.0, 8, 48, 107),
];

static RAINBOW: [GradientStop; 5] = [
    GradientStop::new(0.0, 128, 0, 255),
    GradientStop::new(0.25, 0, 180, 235),
    GradientStop::new(0.5, 128, 255, 180),
    GradientStop::new(0.75, 255, 180, 98),
    GradientStop::new(1.0, 255, 0, 0),
];

static HSV: [GradientStop; 7] = [
    GradientStop::new(0.0, 255, 0, 0),
    GradientStop::new(1.0 / 6.0, 255, 255, 0),
    GradientStop::new(2.0 / 6.0, 0, 255, 0),
    GradientStop::new(3.0 / 6.0, 0, 255, 255),
    GradientStop::new(4.0 / 6.0, 0, 0, 255),
    GradientStop::new(5.0 / 6.0, 255, 0, 255),
    GradientStop::new(1.0, 255, 0, 0),
];

static SPRING: [GradientStop; 2] = [
    GradientStop::new(0.0, 255, 0, 255),
    GradientStop::new(1.0, 255, 255, 0),
];

static SUMMER: [GradientStop; 2] = [
    GradientStop::new(0.0, 0, 128, 102),
    GradientStop::new(1.0, 255, 255, 102),
];

static GRAY: [GradientStop; 2] = [
    GradientStop::new(0.0, 0, 0, 0),
    GradientStop::new(1.0, 255, 255, 255),
];

static BONE: [GradientStop; 4] = [
    GradientStop::new(0.0, 0, 0, 0),
    GradientStop::new(0.375, 84, 84, 116),
    GradientStop::new(0.75, 166, 199, 199),
    GradientStop::new(1.0, 255, 255, 255),
];

static COPPER: [GradientStop; 3] = [
    GradientStop::new(0.0, 0, 0, 0),
    GradientStop::new(0.8, 255, 159, 101),
    GradientStop::new(1.0, 255, 199, 127),
];

static SEISMIC: [GradientStop; 5] = [
    GradientStop::new(0.0, 0, 0, 77),
    GradientStop::new(0.25, 0, 0, 255),
    GradientStop::new(0.5, 255, 255, 255),
    GradientStop::new(0.75, 255, 0, 0),
    GradientStop::new(1.0, 128, 0, 0),
];

#[must_use]
pub fn stops_for(kind: ColourSchemeKind) -> &'static [GradientStop] {
    match kind {
        ColourSchemeKind::Hot => &HOT,
        ColourSchemeKind::Plasma => &PLASMA,
        ColourSchemeKind::Inferno => &INFERNO,
        ColourSchemeKind::Magma => &MAGMA,
        ColourSchemeKind::Viridis => &VIRIDIS,
        ColourSchemeKind::Cool => &COOL,
        ColourSchemeKind::Winter => &WINTER,
        ColourSchemeKind::Blues => &BLUES,
        ColourSchemeKind::Rainbow => &RAINBOW,
        ColourSchemeKind::Hsv => &HSV,
        ColourSchemeKind::Spring => &SPRING,
        ColourSchemeKind::Summer => &SUMMER,
        ColourSchemeKind::Gray => &GRAY,
        ColourSchemeKind::Bone => &BONE,
        ColourSchemeKind::Copper => &COPPER,
        ColourSchemeKind::Seismic => &SEISMIC,
    }
}

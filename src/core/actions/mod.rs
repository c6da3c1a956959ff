pub mod cancellation;
pub mod colourize;
pub mod generate_fractal;
pub mod render;

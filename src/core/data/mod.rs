pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod escape_grid;
pub mod pixel_image;
pub mod pixel_rect;
pub mod point;
pub mod render_request;
pub mod viewport;

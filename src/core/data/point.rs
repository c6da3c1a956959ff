/// Pixel position: `x` is the column, `y` the row (row 0 is the top of the image).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

use std::fmt;

/// A labeled point in the plane.
///
/// Identity is carried by `id`; two points may share coordinates (or even ids) without
/// affecting distance computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Caller-assigned label.
    pub id: i64,
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub fn new(id: i64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// Formats as `id[x,y]`, the record layout of the output file.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{},{}]", self.id, self.x, self.y)
    }
}

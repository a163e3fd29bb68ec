use crate::coords::Point;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Closed line loop through `points`.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineCmd {
    pub points: Vec<Point>,
    /// Line width in pixels.
    pub width: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a closed outline.
    #[inline]
    pub fn push_outline(&mut self, points: Vec<Point>, width: f32, color: Color) {
        self.push(DrawCmd::Outline(OutlineCmd { points, width, color }));
    }
}

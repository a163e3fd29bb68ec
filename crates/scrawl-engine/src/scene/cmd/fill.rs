use crate::coords::Point;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled closed polygon, vertices in absolute pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub points: Vec<Point>,
    pub color: Color,
}

impl DrawList {
    /// Records a filled polygon.
    #[inline]
    pub fn push_fill(&mut self, points: Vec<Point>, color: Color) {
        self.push(DrawCmd::Fill(FillCmd { points, color }));
    }
}

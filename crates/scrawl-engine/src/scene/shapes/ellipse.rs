use std::f32::consts::TAU;

use crate::coords::Point;
use crate::paint::Color;
use crate::scene::DrawList;
use crate::text::TextMetrics;

use super::{push_index, Border, Drawable};

/// Segments used to approximate the curve.
pub const ELLIPSE_SEGMENTS: usize = 64;

/// Axis-aligned ellipse centered on its placement point.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseShape {
    dimension: Point,
}

impl EllipseShape {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { dimension: Point::new(width, height) }
    }

    /// `(width, height)` as given at construction.
    #[inline]
    pub fn dimension(&self) -> Point {
        self.dimension
    }

    /// Tessellated outline translated to `center`.
    pub fn points(&self, center: Point) -> Vec<Point> {
        let delta = TAU / ELLIPSE_SEGMENTS as f32;
        (0..ELLIPSE_SEGMENTS)
            .map(|k| {
                let theta = k as f32 * delta;
                Point::new(
                    self.dimension.x * theta.cos() + center.x,
                    self.dimension.y * theta.sin() + center.y,
                )
            })
            .collect()
    }
}

impl Drawable for EllipseShape {
    fn draw(&self, list: &mut DrawList, center: Point, color: Color, index: Option<usize>) {
        list.push_fill(self.points(center), color);
        push_index(list, center, color, index);
    }

    fn draw_border(
        &self,
        list: &mut DrawList,
        center: Point,
        border: &Border,
        _metrics: &dyn TextMetrics,
    ) {
        list.push_outline(self.points(center), border.width as f32, border.color);
    }

    fn describe_payload(&self) -> String {
        format!("{{{}}}", self.dimension)
    }
}

use crate::coords::Point;
use crate::paint::Color;
use crate::scene::DrawList;
use crate::text::TextMetrics;

use super::{push_index, Border, Drawable};

/// Closed polygon; vertices are relative to the placement point.
///
/// Invariant: at least one vertex. [`super::Shape::polygon`] enforces it for
/// user input, the derived constructors always supply three or four.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    vertices: Vec<Point>,
}

impl PolygonShape {
    #[inline]
    pub(crate) fn new(vertices: Vec<Point>) -> Self {
        debug_assert!(!vertices.is_empty(), "polygon needs at least one vertex");
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Vertex average, offset by `center`.
    pub fn centroid(&self, center: Point) -> Point {
        Point::centroid(&self.vertices).unwrap_or_default() + center
    }

    fn translated(&self, center: Point) -> Vec<Point> {
        self.vertices.iter().map(|&v| v + center).collect()
    }
}

impl Drawable for PolygonShape {
    fn draw(&self, list: &mut DrawList, center: Point, color: Color, index: Option<usize>) {
        list.push_fill(self.translated(center), color);
        push_index(list, self.centroid(center), color, index);
    }

    fn draw_border(
        &self,
        list: &mut DrawList,
        center: Point,
        border: &Border,
        _metrics: &dyn TextMetrics,
    ) {
        list.push_outline(self.translated(center), border.width as f32, border.color);
    }

    fn describe_payload(&self) -> String {
        let list: Vec<String> = self.vertices.iter().map(Point::to_string).collect();
        format!("{{{}}}", list.join(" "))
    }
}

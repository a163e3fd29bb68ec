//! Shape taxonomy.
//!
//! Three geometry families carry all the drawing logic: text labels,
//! ellipses and closed polygons. Every other shape type is a constructor that
//! derives one of those payloads (a square is a rectangle is a polygon, a
//! circle is an ellipse) and keeps its own [`ShapeTag`] for diagnostics.

pub(crate) mod ellipse;
pub(crate) mod polygon;
pub(crate) mod text;

use std::fmt;

use crate::coords::Point;
use crate::paint::Color;
use crate::scene::DrawList;
use crate::text::{FontId, TextMetrics};

pub use ellipse::EllipseShape;
pub use polygon::PolygonShape;
pub use text::TextShape;

/// Font used for index annotations.
pub const INDEX_FONT: FontId = FontId::Helvetica18;

/// Outline style shared by every object in a scene.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub color: Color,
    /// Line width in pixels. Always positive.
    pub width: u32,
}

impl Border {
    #[inline]
    pub const fn new(color: Color, width: u32) -> Self {
        Self { color, width }
    }
}

/// Draw and describe contract implemented by each geometry family.
pub trait Drawable {
    /// Records the filled shape anchored at `center`, plus an optional index
    /// annotation.
    fn draw(&self, list: &mut DrawList, center: Point, color: Color, index: Option<usize>);

    /// Records the outline using the scene-wide `border` style.
    fn draw_border(
        &self,
        list: &mut DrawList,
        center: Point,
        border: &Border,
        metrics: &dyn TextMetrics,
    );

    /// Geometry-specific part of [`Shape::describe`].
    fn describe_payload(&self) -> String;
}

/// Type keyword a shape was built from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeTag {
    Text,
    Ellipse,
    Circle,
    Polygon,
    Rectangle,
    Square,
    Triangle,
    Equilateral,
    Diamond,
}

impl ShapeTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            ShapeTag::Text => "text",
            ShapeTag::Ellipse => "ellipse",
            ShapeTag::Circle => "circle",
            ShapeTag::Polygon => "polygon",
            ShapeTag::Rectangle => "rectangle",
            ShapeTag::Square => "square",
            ShapeTag::Triangle => "triangle",
            ShapeTag::Equilateral => "equilateral",
            ShapeTag::Diamond => "diamond",
        }
    }
}

impl fmt::Display for ShapeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Geometry {
    Text(TextShape),
    Ellipse(EllipseShape),
    Polygon(PolygonShape),
}

impl Geometry {
    fn as_drawable(&self) -> &dyn Drawable {
        match self {
            Geometry::Text(t) => t,
            Geometry::Ellipse(e) => e,
            Geometry::Polygon(p) => p,
        }
    }
}

/// Immutable shape template.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    tag: ShapeTag,
    geometry: Geometry,
}

impl Shape {
    pub fn text(font: FontId, label: impl Into<String>) -> Self {
        Self {
            tag: ShapeTag::Text,
            geometry: Geometry::Text(TextShape::new(font, label)),
        }
    }

    pub fn ellipse(width: f32, height: f32) -> Self {
        Self::ellipse_family(ShapeTag::Ellipse, width, height)
    }

    pub fn circle(diameter: f32) -> Self {
        Self::ellipse_family(ShapeTag::Circle, diameter, diameter)
    }

    /// Closed polygon through `vertices`. Returns `None` when `vertices` is empty.
    pub fn polygon(vertices: Vec<Point>) -> Option<Self> {
        if vertices.is_empty() {
            return None;
        }
        Some(Self::polygon_family(ShapeTag::Polygon, vertices))
    }

    pub fn rectangle(width: f32, height: f32) -> Self {
        Self::polygon_family(ShapeTag::Rectangle, rectangle_vertices(width, height))
    }

    pub fn square(width: f32) -> Self {
        Self::polygon_family(ShapeTag::Square, rectangle_vertices(width, width))
    }

    pub fn triangle(vertices: [Point; 3]) -> Self {
        Self::polygon_family(ShapeTag::Triangle, vertices.to_vec())
    }

    pub fn equilateral(width: f32) -> Self {
        let vertices = [
            Point::new(0.0, 0.0),
            Point::new(width / 2.0, width),
            Point::new(width, 0.0),
        ];
        Self::polygon_family(ShapeTag::Equilateral, vertices.to_vec())
    }

    pub fn diamond(width: f32, height: f32) -> Self {
        let vertices = vec![
            Point::new(0.0, 0.0),
            Point::new(width / 2.0, height / 2.0),
            Point::new(width, 0.0),
            Point::new(width / 2.0, -height / 2.0),
        ];
        Self::polygon_family(ShapeTag::Diamond, vertices)
    }

    fn ellipse_family(tag: ShapeTag, width: f32, height: f32) -> Self {
        Self { tag, geometry: Geometry::Ellipse(EllipseShape::new(width, height)) }
    }

    fn polygon_family(tag: ShapeTag, vertices: Vec<Point>) -> Self {
        Self { tag, geometry: Geometry::Polygon(PolygonShape::new(vertices)) }
    }

    #[inline]
    pub fn tag(&self) -> ShapeTag {
        self.tag
    }

    /// Vertex list for polygon-family shapes.
    pub fn vertices(&self) -> Option<&[Point]> {
        match &self.geometry {
            Geometry::Polygon(p) => Some(p.vertices()),
            _ => None,
        }
    }

    /// `(width, height)` for ellipse-family shapes.
    pub fn dimension(&self) -> Option<Point> {
        match &self.geometry {
            Geometry::Ellipse(e) => Some(e.dimension()),
            _ => None,
        }
    }

    pub fn draw(&self, list: &mut DrawList, center: Point, color: Color, index: Option<usize>) {
        self.geometry.as_drawable().draw(list, center, color, index);
    }

    pub fn draw_border(
        &self,
        list: &mut DrawList,
        center: Point,
        border: &Border,
        metrics: &dyn TextMetrics,
    ) {
        self.geometry.as_drawable().draw_border(list, center, border, metrics);
    }

    /// Diagnostic line: `<identity>-><tag>: <payload>`.
    pub fn describe(&self, identity: impl fmt::Display) -> String {
        format!("{}->{}: {}", identity, self.tag, self.geometry.as_drawable().describe_payload())
    }
}

fn rectangle_vertices(width: f32, height: f32) -> Vec<Point> {
    vec![
        Point::new(width, height),
        Point::new(width, 0.0),
        Point::new(0.0, 0.0),
        Point::new(0.0, height),
    ]
}

/// Index annotation in the negative of the fill color.
pub(crate) fn push_index(list: &mut DrawList, at: Point, color: Color, index: Option<usize>) {
    if let Some(i) = index {
        list.push_text(i.to_string(), INDEX_FONT, color.negative(), at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── derived shapes ────────────────────────────────────────────────────

    #[test]
    fn square_matches_rectangle() {
        assert_eq!(Shape::square(5.0).vertices(), Shape::rectangle(5.0, 5.0).vertices());
        assert_eq!(Shape::square(5.0).tag(), ShapeTag::Square);
    }

    #[test]
    fn circle_matches_ellipse() {
        assert_eq!(Shape::circle(4.0).dimension(), Shape::ellipse(4.0, 4.0).dimension());
        assert_eq!(Shape::circle(4.0).dimension(), Some(Point::new(4.0, 4.0)));
    }

    #[test]
    fn rectangle_vertex_order() {
        let r = Shape::rectangle(3.0, 2.0);
        assert_eq!(
            r.vertices().unwrap(),
            &[
                Point::new(3.0, 2.0),
                Point::new(3.0, 0.0),
                Point::new(0.0, 0.0),
                Point::new(0.0, 2.0),
            ]
        );
    }

    #[test]
    fn equilateral_vertices() {
        let t = Shape::equilateral(10.0);
        assert_eq!(
            t.vertices().unwrap(),
            &[Point::new(0.0, 0.0), Point::new(5.0, 10.0), Point::new(10.0, 0.0)]
        );
        assert_eq!(t.tag(), ShapeTag::Equilateral);
    }

    #[test]
    fn diamond_vertices() {
        let d = Shape::diamond(4.0, 6.0);
        assert_eq!(
            d.vertices().unwrap(),
            &[
                Point::new(0.0, 0.0),
                Point::new(2.0, 3.0),
                Point::new(4.0, 0.0),
                Point::new(2.0, -3.0),
            ]
        );
    }

    #[test]
    fn empty_polygon_rejected() {
        assert!(Shape::polygon(Vec::new()).is_none());
        assert!(Shape::polygon(vec![Point::new(1.0, 1.0)]).is_some());
    }

    #[test]
    fn families_expose_only_their_geometry() {
        assert!(Shape::circle(1.0).vertices().is_none());
        assert!(Shape::square(1.0).dimension().is_none());
        let t = Shape::text(FontId::Fixed8x13, "hi");
        assert!(t.vertices().is_none() && t.dimension().is_none());
    }

    // ── describe ──────────────────────────────────────────────────────────

    #[test]
    fn describe_formats() {
        assert_eq!(
            Shape::text(FontId::Helvetica18, "hello world").describe("#0"),
            "#0->text: Helvetica-18 \"hello world\""
        );
        assert_eq!(Shape::circle(4.0).describe("#1"), "#1->circle: {(4,4)}");
        assert_eq!(
            Shape::triangle([Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(2.5, 0.0)])
                .describe("#2"),
            "#2->triangle: {(0,0) (1,2) (2.5,0)}"
        );
    }
}

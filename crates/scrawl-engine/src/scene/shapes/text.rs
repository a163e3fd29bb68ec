use crate::coords::Point;
use crate::paint::Color;
use crate::scene::DrawList;
use crate::text::{FontId, TextMetrics};

use super::{Border, Drawable};

/// Gap between a label and its border, in pixels.
const BORDER_PADDING: f32 = 5.0;

/// Text label. Has no geometric extent of its own; the border box comes from
/// the backend's reported label metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    font: FontId,
    label: String,
}

impl TextShape {
    #[inline]
    pub fn new(font: FontId, label: impl Into<String>) -> Self {
        Self { font, label: label.into() }
    }

    #[inline]
    pub fn font(&self) -> FontId {
        self.font
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Drawable for TextShape {
    fn draw(&self, list: &mut DrawList, center: Point, color: Color, _index: Option<usize>) {
        list.push_text(self.label.clone(), self.font, color, center);
    }

    fn draw_border(
        &self,
        list: &mut DrawList,
        center: Point,
        border: &Border,
        metrics: &dyn TextMetrics,
    ) {
        let size = metrics.measure_text(&self.label, self.font);
        let width = border.width as f32;
        let length = size.x + width;
        let height = size.y + width;
        // Whole pixels: the half-height box edge rounds down.
        let half = (height / 2.0).floor();
        let p = BORDER_PADDING;

        let corners = vec![
            Point::new(center.x - p, center.y - p),
            Point::new(center.x + length + p, center.y - p),
            Point::new(center.x + length + p, center.y + half + p),
            Point::new(center.x - p, center.y + half + p),
        ];
        list.push_outline(corners, width, border.color);
    }

    fn describe_payload(&self) -> String {
        format!("{} \"{}\"", self.font, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DrawCmd, OutlineCmd, TextCmd};
    use crate::text::FontSystem;

    #[test]
    fn draw_places_label_at_center_without_index() {
        let mut list = DrawList::new();
        let shape = TextShape::new(FontId::Fixed9x15, "abc");
        shape.draw(&mut list, Point::new(10.0, 20.0), Color::new(1, 2, 3), Some(7));

        assert_eq!(
            list.items(),
            &[DrawCmd::Text(TextCmd {
                text: "abc".into(),
                font: FontId::Fixed9x15,
                color: Color::new(1, 2, 3),
                origin: Point::new(10.0, 20.0),
            })]
        );
    }

    #[test]
    fn border_box_uses_metrics_and_padding() {
        // Fixed-8x13: "ab" measures 16 x 14.
        let mut list = DrawList::new();
        let shape = TextShape::new(FontId::Fixed8x13, "ab");
        let border = Border::new(Color::new(9, 9, 9), 2);
        shape.draw_border(&mut list, Point::new(100.0, 50.0), &border, &FontSystem::new());

        // length = 16 + 2, height = 14 + 2, padding 5
        let expected = OutlineCmd {
            points: vec![
                Point::new(95.0, 45.0),
                Point::new(123.0, 45.0),
                Point::new(123.0, 63.0),
                Point::new(95.0, 63.0),
            ],
            width: 2.0,
            color: Color::new(9, 9, 9),
        };
        assert_eq!(list.items(), &[DrawCmd::Outline(expected)]);
    }

    #[test]
    fn border_box_top_edge_rounds_down() {
        // height = 14 + 3 = 17, half rounds down to 8
        let mut list = DrawList::new();
        let shape = TextShape::new(FontId::Fixed8x13, "ab");
        let border = Border::new(Color::black(), 3);
        shape.draw_border(&mut list, Point::origin(), &border, &FontSystem::new());

        match &list.items()[0] {
            DrawCmd::Outline(o) => {
                assert_eq!(o.points[2], Point::new(24.0, 13.0));
                assert_eq!(o.points[3], Point::new(-5.0, 13.0));
            }
            other => panic!("expected outline, got {other:?}"),
        }
    }
}

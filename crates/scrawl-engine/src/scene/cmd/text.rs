use crate::coords::Point;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontId;

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    pub color: Color,
    /// Raster position of the first glyph's baseline origin.
    pub origin: Point,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, text: impl Into<String>, font: FontId, color: Color, origin: Point) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            color,
            origin,
        }));
    }
}

use crate::paint::Color;

use super::Border;

/// Scene-wide style read by every draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
    pub border: Border,
    /// Nudge distance, in pixels, for interactive moves of the selected object.
    pub move_by: i32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            border: Border::new(Color::new(255, 0, 0), 4),
            move_by: 4,
        }
    }
}

use std::fmt;

use crate::coords::Point;

/// Handle to one of the fixed bitmap fonts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FontId {
    Fixed8x13,
    Fixed9x15,
    Helvetica10,
    Helvetica12,
    Helvetica18,
    TimesRoman10,
    TimesRoman24,
}

impl FontId {
    pub const ALL: [FontId; 7] = [
        FontId::Fixed8x13,
        FontId::Fixed9x15,
        FontId::Helvetica10,
        FontId::Helvetica12,
        FontId::Helvetica18,
        FontId::TimesRoman10,
        FontId::TimesRoman24,
    ];

    /// Resolves a registry name such as `"Helvetica-18"`. Names are case-sensitive.
    pub fn lookup(name: &str) -> Option<FontId> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            FontId::Fixed8x13 => "Fixed-8x13",
            FontId::Fixed9x15 => "Fixed-9x15",
            FontId::Helvetica10 => "Helvetica-10",
            FontId::Helvetica12 => "Helvetica-12",
            FontId::Helvetica18 => "Helvetica-18",
            FontId::TimesRoman10 => "Times-Roman-10",
            FontId::TimesRoman24 => "Times-Roman-24",
        }
    }

    /// Line height in pixels.
    const fn height(self) -> f32 {
        match self {
            FontId::Fixed8x13 => 14.0,
            FontId::Fixed9x15 => 16.0,
            FontId::Helvetica10 => 14.0,
            FontId::Helvetica12 => 16.0,
            FontId::Helvetica18 => 23.0,
            FontId::TimesRoman10 => 14.0,
            FontId::TimesRoman24 => 29.0,
        }
    }

    /// Horizontal advance of `ch` in pixels.
    ///
    /// Fixed faces are monospaced. Proportional faces use three width classes
    /// (narrow, regular, wide), which is close enough for border layout.
    fn advance(self, ch: char) -> f32 {
        let (narrow, regular, wide) = match self {
            FontId::Fixed8x13 => return 8.0,
            FontId::Fixed9x15 => return 9.0,
            FontId::Helvetica10 => (2.0, 6.0, 8.0),
            FontId::Helvetica12 => (3.0, 7.0, 10.0),
            FontId::Helvetica18 => (4.0, 10.0, 15.0),
            FontId::TimesRoman10 => (3.0, 5.0, 8.0),
            FontId::TimesRoman24 => (7.0, 12.0, 20.0),
        };
        match ch {
            'i' | 'j' | 'l' | 'I' | '!' | '.' | ',' | '\'' | ':' | ';' | '|' | ' ' => narrow,
            'm' | 'w' | 'M' | 'W' | '@' => wide,
            _ => regular,
        }
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text measurement reported by a rendering backend.
pub trait TextMetrics {
    /// Returns `(pixel length, pixel height)` of `text` set in `font`.
    fn measure_text(&self, text: &str, font: FontId) -> Point;
}

/// Built-in metrics for the fixed bitmap fonts.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontSystem;

impl FontSystem {
    pub fn new() -> Self {
        Self
    }
}

impl TextMetrics for FontSystem {
    fn measure_text(&self, text: &str, font: FontId) -> Point {
        let length: f32 = text.chars().map(|c| font.advance(c)).sum();
        Point::new(length, font.height())
    }
}

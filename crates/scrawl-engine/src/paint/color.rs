use std::fmt;
use std::str::FromStr;

use super::names::lookup_name;

/// Error returned when a color token is neither a known name nor a hex literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color: {}", self.0)
    }
}

impl std::error::Error for ColorParseError {}

/// 8-bit RGB color.
///
/// Channels are `u8`, so the `[0, 255]` range holds by construction.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Looks up a color by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        lookup_name(name)
    }

    /// Parses `#rrggbb` or `0xrrggbb`.
    pub fn from_hex(token: &str) -> Option<Self> {
        let digits = token
            .strip_prefix('#')
            .or_else(|| token.strip_prefix("0x"))
            .or_else(|| token.strip_prefix("0X"))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Photographic negative: every channel becomes `255 - c`.
    #[inline]
    pub const fn negative(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_name(s)
            .or_else(|| Color::from_hex(s))
            .ok_or_else(|| ColorParseError(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parses_names() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::new(255, 0, 0));
        assert_eq!("Navy".parse::<Color>().unwrap(), Color::new(0, 0, 128));
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#102030".parse::<Color>().unwrap(), Color::new(0x10, 0x20, 0x30));
        assert_eq!("0xFFa500".parse::<Color>().unwrap(), Color::new(255, 165, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("mauve-ish".parse::<Color>().unwrap_err(), ColorParseError("mauve-ish".into()));
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    // ── negative ──────────────────────────────────────────────────────────

    #[test]
    fn negative_inverts_each_channel() {
        assert_eq!(Color::new(255, 0, 10).negative(), Color::new(0, 255, 245));
        assert_eq!(Color::white().negative(), Color::black());
    }

    #[test]
    fn display() {
        assert_eq!(Color::new(1, 2, 3).to_string(), "(1,2,3)");
    }
}

//! Fonts and text measurement.
//!
//! The font set is fixed: every font is a bitmap face addressed by a
//! [`FontId`]. Backends that rasterize text for real can supply their own
//! [`TextMetrics`]; [`FontSystem`] answers from built-in bitmap tables.

mod font_system;

pub use font_system::{FontId, FontSystem, TextMetrics};

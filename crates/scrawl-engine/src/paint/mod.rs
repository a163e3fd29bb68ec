//! Paint model shared between shapes and renderers.
//!
//! Colors are straight 8-bit RGB. Names resolve through a fixed table in
//! `names`; hex literals are parsed directly.

pub mod color;
mod names;

pub use color::{Color, ColorParseError};

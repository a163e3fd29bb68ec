//! Coordinate types shared by shapes, scene state and renderers.
//!
//! Canonical space:
//! - pixels, origin bottom-left
//! - +X right, +Y up
//!
//! Shape geometry is stored relative to a placement point and translated at
//! draw time.

mod point;

pub use point::Point;

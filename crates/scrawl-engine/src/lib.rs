//! Scrawl engine crate.
//!
//! This crate owns the geometry and paint model, the shape taxonomy, and the
//! scene state consumed by rendering backends. Rasterization itself happens
//! outside; shapes record renderer-agnostic commands into a [`scene::DrawList`].

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;

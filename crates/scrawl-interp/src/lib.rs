//! Command interpreter for **scrawl** scene scripts.
//!
//! The interpreter takes one already-tokenized command at a time and applies
//! it to a [`Session`]: shape definitions go through the [`ShapeFactory`] into
//! the [`Registry`], placements land in the engine's scene, and style
//! commands overwrite the scene-wide border and move-by settings.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`arity`] | `Arity` rules shared by commands and shape types |
//! | [`error`] | `InterpError` |
//! | [`factory`] | `ShapeFactory` (type keyword → constructor) |
//! | [`interp`] | `Interpreter`, `Session`, built-in commands |
//! | [`registry`] | `Registry` (name → shape handle) |
//!
//! # Quick start
//!
//! ```rust
//! use scrawl_interp::Interpreter;
//!
//! let mut interp = Interpreter::new();
//! interp.interpret_str("define box square 20").unwrap();
//! interp.interpret_str("draw red box 10 10").unwrap();
//! assert_eq!(interp.session().scene.len(), 1);
//! ```

pub mod arity;
pub mod error;
pub mod factory;
pub mod interp;
mod parse;
pub mod registry;

pub use arity::Arity;
pub use error::InterpError;
pub use factory::{ShapeCtor, ShapeFactory};
pub use interp::{CommandFn, Interpreter, Session};
pub use registry::Registry;

//! Scene state and draw stream types.
//!
//! Responsibilities:
//! - own every shape definition ([`ShapeArena`]) behind stable handles
//! - record placed objects and the scene-wide [`Style`]
//! - turn a scene into renderer-agnostic [`DrawCmd`]s

mod arena;
mod cmd;
mod list;
mod state;
mod style;

pub mod shapes;

pub use arena::{ShapeArena, ShapeId};
pub use cmd::{DrawCmd, FillCmd, OutlineCmd, TextCmd};
pub use list::DrawList;
pub use shapes::{Border, Drawable, Shape, ShapeTag};
pub use state::{PlacedObject, Scene};
pub use style::Style;

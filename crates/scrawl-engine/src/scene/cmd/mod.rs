pub(crate) mod fill;
pub(crate) mod outline;
pub(crate) mod text;

pub use fill::FillCmd;
pub use outline::OutlineCmd;
pub use text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the stream:
/// - add a payload module under `scene::cmd::*`
/// - add a new variant here
/// - implement the push helper inside that payload module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill(FillCmd),
    Outline(OutlineCmd),
    Text(TextCmd),
}

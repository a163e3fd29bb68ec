use std::fmt;

use crate::Arity;

/// Reasons a command is rejected. A rejected command leaves the session
/// exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpError {
    /// Empty command or unrecognized command keyword.
    Syntax(String),
    /// `define` named a shape type the factory does not know.
    UnknownShapeType(String),
    UnknownFont(String),
    /// Wrong number of arguments for a command or shape type.
    ArgumentCount {
        context: String,
        expected: Arity,
        got: usize,
    },
    /// A token that should be a number is not one.
    Parse(String),
    /// Well-formed but out of domain (non-positive width, unknown color, ...).
    InvalidArgument(String),
    /// `draw` referenced a name that was never defined.
    UnknownShape(String),
    /// `define` reused an existing name.
    DuplicateName(String),
}

impl InterpError {
    pub(crate) fn argument_count(context: &str, expected: Arity, got: usize) -> Self {
        InterpError::ArgumentCount { context: context.to_string(), expected, got }
    }
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpError::Syntax(what) => write!(f, "syntax error: {}", what),
            InterpError::UnknownShapeType(t) => write!(f, "{}: no such shape type", t),
            InterpError::UnknownFont(name) => write!(f, "invalid font: {}", name),
            InterpError::ArgumentCount { context, expected, got } => {
                write!(f, "{}: expected {} arguments, got {}", context, expected, got)
            }
            InterpError::Parse(token) => write!(f, "not a number: {}", token),
            InterpError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            InterpError::UnknownShape(name) => write!(f, "{}: no such shape", name),
            InterpError::DuplicateName(name) => write!(f, "{}: already defined", name),
        }
    }
}

impl std::error::Error for InterpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            InterpError::argument_count("ellipse", Arity::Exactly(2), 3).to_string(),
            "ellipse: expected exactly 2 arguments, got 3"
        );
        assert_eq!(InterpError::UnknownShape("box".into()).to_string(), "box: no such shape");
        assert_eq!(InterpError::Parse("1.x".into()).to_string(), "not a number: 1.x");
    }
}

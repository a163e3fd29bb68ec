use std::fmt;

use crate::InterpError;

/// Number of argument tokens a command or shape type accepts.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    /// A non-zero even count (coordinate pairs).
    Pairs,
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Pairs => count > 0 && count % 2 == 0,
        }
    }

    /// Fails with [`InterpError::ArgumentCount`] naming `context` when
    /// `args` has the wrong length.
    pub fn check<T>(self, context: &str, args: &[T]) -> Result<(), InterpError> {
        if self.accepts(args.len()) {
            Ok(())
        } else {
            Err(InterpError::argument_count(context, self, args.len()))
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
            Arity::Pairs => f.write_str("a non-zero even number of"),
        }
    }
}

use std::collections::HashMap;

use scrawl_engine::coords::Point;
use scrawl_engine::scene::{Border, PlacedObject, Scene, ShapeArena, Style};

use crate::parse;
use crate::{Arity, InterpError, Registry, ShapeFactory};

/// Handles one command. Receives the tokens after the keyword, already
/// checked against the command's declared [`Arity`].
///
/// A handler must validate everything before mutating `session`, so a failed
/// command never leaves partial state behind.
pub type CommandFn = fn(&mut Session, &[String]) -> Result<(), InterpError>;

struct Command {
    arity: Arity,
    handler: CommandFn,
}

/// Everything a script builds up. Independent sessions share nothing.
#[derive(Default)]
pub struct Session {
    pub factory: ShapeFactory,
    pub shapes: ShapeArena,
    pub registry: Registry,
    pub scene: Scene,
    pub style: Style,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// One line per definition: `<name> = <describe>`, sorted by name.
    pub fn dump(&self) -> Vec<String> {
        self.registry
            .iter()
            .filter_map(|(name, id)| {
                let shape = self.shapes.get(id)?;
                Some(format!("{} = {}", name, shape.describe(id)))
            })
            .collect()
    }
}

/// Dispatches tokenized commands to their handlers.
pub struct Interpreter {
    commands: HashMap<String, Command>,
    session: Session,
}

impl Interpreter {
    /// Interpreter with the built-in commands over a fresh session.
    pub fn new() -> Self {
        Self::with_session(Session::new())
    }

    pub fn with_session(session: Session) -> Self {
        let mut interp = Self { commands: HashMap::new(), session };
        interp.register("define", Arity::AtLeast(2), do_define);
        interp.register("draw", Arity::Exactly(4), do_draw);
        interp.register("border", Arity::Exactly(2), do_border);
        interp.register("moveby", Arity::Exactly(1), do_moveby);
        interp
    }

    /// Adds or replaces the handler for `keyword`.
    pub fn register(&mut self, keyword: impl Into<String>, arity: Arity, handler: CommandFn) {
        self.commands.insert(keyword.into(), Command { arity, handler });
    }

    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs one command. `tokens[0]` is the keyword.
    pub fn interpret<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), InterpError> {
        let keyword = tokens.first().map_or("", |k| k.as_ref());
        self.dispatch(tokens).inspect_err(|e| log::debug!("{:?} rejected: {}", keyword, e))
    }

    fn dispatch<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), InterpError> {
        let Some((keyword, rest)) = tokens.split_first() else {
            return Err(InterpError::Syntax("empty command".to_string()));
        };
        let keyword = keyword.as_ref();
        let command = self
            .commands
            .get(keyword)
            .ok_or_else(|| InterpError::Syntax(format!("unknown command {:?}", keyword)))?;

        let args: Vec<String> = rest.iter().map(|s| s.as_ref().to_string()).collect();
        log::debug!("{} {:?}", keyword, args);

        command.arity.check(keyword, &args)?;
        (command.handler)(&mut self.session, &args)
    }

    /// Splits `line` on whitespace and runs it.
    pub fn interpret_str(&mut self, line: &str) -> Result<(), InterpError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        self.interpret(&tokens)
    }

    pub fn dump(&self) -> Vec<String> {
        self.session.dump()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

// ── built-in commands ─────────────────────────────────────────────────────

/// `define <name> <type> <args...>`
fn do_define(session: &mut Session, args: &[String]) -> Result<(), InterpError> {
    let name = &args[0];
    if session.registry.contains(name) {
        return Err(InterpError::DuplicateName(name.clone()));
    }
    let shape = session.factory.make(&args[1], &args[2..])?;
    let id = session.shapes.insert(shape);
    session.registry.insert(name.clone(), id)?;
    log::trace!("{} = {}", name, id);
    Ok(())
}

/// `draw <color> <name> <x> <y>`
fn do_draw(session: &mut Session, args: &[String]) -> Result<(), InterpError> {
    let name = &args[1];
    let shape = session
        .registry
        .get(name)
        .ok_or_else(|| InterpError::UnknownShape(name.clone()))?;
    let color = parse::color(&args[0])?;
    let position = Point::new(parse::number(&args[2])?, parse::number(&args[3])?);

    let index = session.scene.push(PlacedObject::new(shape, position, color));
    log::trace!("object {} = {} at {} in {}", index, name, position, color);
    Ok(())
}

/// `border <color> <width>`
fn do_border(session: &mut Session, args: &[String]) -> Result<(), InterpError> {
    let color = parse::color(&args[0])?;
    let width = match args[1].parse::<i64>() {
        Ok(w) if w > 0 => u32::try_from(w)
            .map_err(|_| InterpError::InvalidArgument(format!("border width {} is too large", w)))?,
        Ok(w) => {
            return Err(InterpError::InvalidArgument(format!("border width must be positive, got {}", w)));
        }
        Err(_) => {
            return Err(InterpError::InvalidArgument(format!("border width is not an integer: {}", args[1])));
        }
    };
    session.style.border = Border::new(color, width);
    Ok(())
}

/// `moveby <offset>`; absolute, the last value wins.
fn do_moveby(session: &mut Session, args: &[String]) -> Result<(), InterpError> {
    session.style.move_by = parse::integer(&args[0])?;
    Ok(())
}

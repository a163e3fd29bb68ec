use std::collections::BTreeMap;

use scrawl_engine::scene::ShapeId;

use crate::InterpError;

/// Shape definitions by name.
///
/// Holds handles only; the shapes themselves live in the session's
/// `ShapeArena`. Names are unique and iterate in sorted order.
#[derive(Debug, Default)]
pub struct Registry {
    names: BTreeMap<String, ShapeId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`. Fails with [`InterpError::DuplicateName`] when `name` is
    /// already bound; the existing binding is kept.
    pub fn insert(&mut self, name: impl Into<String>, id: ShapeId) -> Result<(), InterpError> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(InterpError::DuplicateName(name));
        }
        self.names.insert(name, id);
        Ok(())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<ShapeId> {
        self.names.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ShapeId)> {
        self.names.iter().map(|(n, &id)| (n.as_str(), id))
    }
}

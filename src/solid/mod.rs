//! Descriptions of the solids handed to the host tracking engine.
//!
//! The store is an arena: every primitive and boolean built for one beam
//! pipe lives here, referenced by [`SolidId`]. Boolean solids refer to their
//! operands by id, so dropping the store releases the whole tree at once.

mod boolean;
mod classify;
mod creation;
mod shape;

pub use boolean::{Intersect, Subtract, Union};
pub use creation::{MakeBox, MakeCutTubs, MakeEllipticalTube, MakeExtrudedPolygon, MakeTubs};
pub use shape::{BooleanOp, SolidShape};

use std::collections::HashSet;

use slotmap::SlotMap;

use crate::error::GeometryError;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the solid store.
    pub struct SolidId;
}

/// A named solid description.
#[derive(Debug, Clone)]
pub struct SolidData {
    /// Name passed on to the host engine.
    pub name: String,
    /// Geometric description.
    pub shape: SolidShape,
}

/// Arena that owns every solid built during one construction.
#[derive(Debug, Default)]
pub struct SolidStore {
    solids: SlotMap<SolidId, SolidData>,
}

impl SolidStore {
    /// Creates a new, empty solid store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a solid and returns its ID.
    pub fn add(&mut self, name: impl Into<String>, shape: SolidShape) -> SolidId {
        self.solids.insert(SolidData {
            name: name.into(),
            shape,
        })
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, GeometryError> {
        self.solids
            .get(id)
            .ok_or_else(|| GeometryError::SolidNotFound(format!("{id:?}")))
    }

    /// Returns the name of a solid, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn name(&self, id: SolidId) -> Result<&str, GeometryError> {
        Ok(self.solid(id)?.name.as_str())
    }

    /// Number of solids currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solids.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    /// Iterates over all solids.
    pub fn iter(&self) -> impl Iterator<Item = (SolidId, &SolidData)> {
        self.solids.iter()
    }

    /// Removes every solid that is not one of `roots` or an operand,
    /// directly or transitively, of one of them.
    ///
    /// Returns the number of solids removed.
    pub fn retain_reachable(&mut self, roots: &[SolidId]) -> usize {
        let mut keep = HashSet::new();
        let mut stack: Vec<SolidId> = roots.to_vec();
        while let Some(id) = stack.pop() {
            if !keep.insert(id) {
                continue;
            }
            if let Some(SolidShape::Boolean { first, second, .. }) =
                self.solids.get(id).map(|s| &s.shape)
            {
                stack.push(*first);
                stack.push(*second);
            }
        }
        let before = self.solids.len();
        self.solids.retain(|id, _| keep.contains(&id));
        before - self.solids.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn add_and_lookup() {
        let mut store = SolidStore::new();
        let id = MakeBox::new("box", 1.0, 2.0, 3.0).execute(&mut store).unwrap();
        assert_eq!(store.name(id).unwrap(), "box");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn retain_reachable_keeps_operands() {
        let mut store = SolidStore::new();
        let outer = MakeTubs::new("outer", 0.0, 5.0, 10.0).execute(&mut store).unwrap();
        let inner = MakeTubs::new("inner", 0.0, 4.0, 20.0).execute(&mut store).unwrap();
        let wall = Subtract::new("wall", outer, inner).execute(&mut store).unwrap();
        let scratch = MakeBox::new("scratch", 1.0, 1.0, 1.0).execute(&mut store).unwrap();

        let removed = store.retain_reachable(&[wall]);
        assert_eq!(removed, 1);
        assert!(store.solid(outer).is_ok());
        assert!(store.solid(inner).is_ok());
        assert!(store.solid(scratch).is_err());
    }
}

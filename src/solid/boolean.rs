use crate::error::Result;
use crate::math::Vector3;

use super::{BooleanOp, SolidId, SolidShape, SolidStore};

fn boolean_execute(
    store: &mut SolidStore,
    name: &str,
    op: BooleanOp,
    first: SolidId,
    second: SolidId,
    offset: Vector3,
) -> Result<SolidId> {
    // Both operands must already live in this store.
    store.solid(first)?;
    store.solid(second)?;
    Ok(store.add(
        name,
        SolidShape::Boolean {
            op,
            first,
            second,
            offset,
        },
    ))
}

/// Computes the boolean union of two solids.
pub struct Union {
    name: String,
    solid_a: SolidId,
    solid_b: SolidId,
    offset: Vector3,
}

impl Union {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, solid_a: SolidId, solid_b: SolidId) -> Self {
        Self {
            name: name.into(),
            solid_a,
            solid_b,
            offset: Vector3::zeros(),
        }
    }

    /// Places the second solid at `offset` relative to the first.
    #[must_use]
    pub fn with_offset(mut self, offset: Vector3) -> Self {
        self.offset = offset;
        self
    }

    /// Executes the union, adding the result to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if either operand is not in the store.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        boolean_execute(
            store,
            &self.name,
            BooleanOp::Union,
            self.solid_a,
            self.solid_b,
            self.offset,
        )
    }
}

/// Computes the boolean subtraction of one solid from another.
pub struct Subtract {
    name: String,
    solid_a: SolidId,
    solid_b: SolidId,
    offset: Vector3,
}

impl Subtract {
    /// Creates a new `Subtract` operation (A - B).
    #[must_use]
    pub fn new(name: impl Into<String>, solid_a: SolidId, solid_b: SolidId) -> Self {
        Self {
            name: name.into(),
            solid_a,
            solid_b,
            offset: Vector3::zeros(),
        }
    }

    /// Places the subtracted solid at `offset` relative to the first.
    #[must_use]
    pub fn with_offset(mut self, offset: Vector3) -> Self {
        self.offset = offset;
        self
    }

    /// Executes the subtraction, adding the result to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if either operand is not in the store.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        boolean_execute(
            store,
            &self.name,
            BooleanOp::Subtract,
            self.solid_a,
            self.solid_b,
            self.offset,
        )
    }
}

/// Computes the boolean intersection of two solids.
pub struct Intersect {
    name: String,
    solid_a: SolidId,
    solid_b: SolidId,
    offset: Vector3,
}

impl Intersect {
    /// Creates a new `Intersect` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, solid_a: SolidId, solid_b: SolidId) -> Self {
        Self {
            name: name.into(),
            solid_a,
            solid_b,
            offset: Vector3::zeros(),
        }
    }

    /// Places the second solid at `offset` relative to the first.
    #[must_use]
    pub fn with_offset(mut self, offset: Vector3) -> Self {
        self.offset = offset;
        self
    }

    /// Executes the intersection, adding the result to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if either operand is not in the store.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        boolean_execute(
            store,
            &self.name,
            BooleanOp::Intersect,
            self.solid_a,
            self.solid_b,
            self.offset,
        )
    }
}

//! Moving entities from one Space to another
//!
//! This crate does no frame math itself: the caller supplies a
//! [`Transform`], and [`convert_to`][Point3::convert_to] picks which half of it
//! applies. Points are positions, so they go through the full affine map.
//! Vectors are displacements, so they only go through its linear part, and
//! are not translated.

use crate::{
    coords::D3,
    entity::{Entity, Normalized, Point3, Vector3, VectorRole},
    space::Space,
    GeomError,
};
use std::any::TypeId;

/// A transform manager able to map Space `From` onto Space `To`
pub trait Transform<From: Space, To: Space> {
    /// The full affine map (translation included), applied to positions
    fn transform(&self, point: &Point3<From>) -> Point3<To>;
    /// The linear part only (no translation), applied to displacements
    fn transform33(&self, vector: &Vector3<From>) -> Vector3<To>;
}

/// Converting an entity to its own Space is almost certainly a mistake. Rust
/// cannot forbid `From == To` in a bound, so this is checked here
fn ensure_other_space<From: Space, To: Space>() -> Result<(), GeomError> {
    if TypeId::of::<From>() == TypeId::of::<To>() {
        tracing::debug!(space = From::NAME, "refusing conversion to the same Space");
        return Err(GeomError::InvalidConversion { space: From::NAME });
    }
    Ok(())
}

impl<S: Space> Point3<S> {
    /// Map this position into Space `To` with the affine part of `tm`
    pub fn convert_to<To: Space>(&self, tm: &impl Transform<S, To>) -> Result<Point3<To>, GeomError> {
        ensure_other_space::<S, To>()?;
        tracing::trace!(from = S::NAME, to = To::NAME, "converting point");
        Ok(tm.transform(self))
    }
}

impl<S: Space> Vector3<S> {
    /// Map this displacement into Space `To` with the linear part of `tm`
    pub fn convert_to<To: Space>(&self, tm: &impl Transform<S, To>) -> Result<Vector3<To>, GeomError> {
        ensure_other_space::<S, To>()?;
        tracing::trace!(from = S::NAME, to = To::NAME, "converting vector");
        Ok(tm.transform33(self))
    }
}

impl<S: Space> Entity<S, D3, VectorRole, Normalized> {
    /// Map this direction into Space `To` with the linear part of `tm`. A
    /// linear map need not preserve lengths, so the result is a free vector
    pub fn convert_to<To: Space>(&self, tm: &impl Transform<S, To>) -> Result<Vector3<To>, GeomError> {
        self.to_free().convert_to(tm)
    }
}

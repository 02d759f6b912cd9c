//! Entities whose Space and kind are only known at runtime
//!
//! A [`DynEntity`] carries its Space as a [`SpaceTag`] and its kind as an
//! [`EntityKind`], instead of type parameters. This is useful when the frame
//! of a value comes from data (a file, a message, a user choice). Every
//! operation of the typed entities has a `try_*` counterpart here, which
//! checks at runtime what the compiler checks for [`Entity`]. Checks happen in
//! a fixed order, before anything is computed:
//!
//! - 1: **Space**. Operands from different Spaces give
//!   [`GeomError::CrossSpace`], naming the operation.
//! - 2: **Role and normalization**. Adding two points, scaling a normalized
//!   vector in place, etc. give [`GeomError::InvalidRole`].
//! - 3: **Dimensionality**. In-place operations that would widen their
//!   receiver, comparisons between 2D and 3D entities, etc. also give
//!   [`GeomError::InvalidRole`].
//!
//! Typed entities erase into a `DynEntity` with [`From`], and are recovered
//! with [`TryFrom`]:
//!
//! ```
//! use geoframe::{dynamic::DynEntity, *};
//! geoframe::space! { View { unit: f64 } Patient { unit: f64 } }
//!
//! let a = DynEntity::from(Vector3::<View>::new(1.0, 2.0, 3.0));
//! let b = DynEntity::from(Vector3::<Patient>::new(1.0, 2.0, 3.0));
//! assert!(a.try_add(&b).unwrap_err().is_cross_space());
//!
//! let sum = a.try_add(&a).unwrap();
//! assert_eq!(Vector3::<View>::try_from(sum).unwrap(), Vector3::new(2.0, 4.0, 6.0));
//! ```

use crate::{
    coords::{self, Coords, Dim},
    entity::{write_entity, Entity, KindOf, Normalization, RoleKind},
    error::{GeomError, Operation, RoleViolation},
    space::Space,
};
use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
};

// # TYPES & TRAITS //

/// Runtime identity of a [`Space`]. Two tags are equal iff they were made
/// from the same Space type
#[derive(Debug, Clone, Copy)]
pub struct SpaceTag {
    id: TypeId,
    name: &'static str,
    allows_xy: bool,
}

impl SpaceTag {
    pub fn of<S: Space>() -> Self {
        SpaceTag {
            id: TypeId::of::<S>(),
            name: S::NAME,
            allows_xy: S::allows_xy(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn allows_xy(&self) -> bool {
        self.allows_xy
    }
}

impl PartialEq for SpaceTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SpaceTag {}

impl Hash for SpaceTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

/// Runtime description of one of the six entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityKind {
    /// 2 or 3
    pub dim: usize,
    pub role: RoleKind,
    /// Only ever true for vectors
    pub normalized: bool,
}

impl EntityKind {
    /// The kind of `Entity<_, D, R, N>`
    pub fn of<D: Dim, R: KindOf<N>, N: Normalization>() -> Self {
        EntityKind {
            dim: D::N,
            role: R::KIND,
            normalized: N::NORMALIZED,
        }
    }

    /// Same naming as [`Entity::kind_name`]
    pub fn name(&self) -> String {
        let base = match (self.role, self.normalized) {
            (RoleKind::Point, _) => "Point",
            (RoleKind::Vector, false) => "Vector",
            (RoleKind::Vector, true) => "NormalizedVector",
        };
        let suffix = if self.dim == 2 { "2" } else { "" };
        format!("{base}{suffix}")
    }

    fn is_point(&self) -> bool {
        self.role == RoleKind::Point
    }

    fn free(self) -> Self {
        EntityKind {
            normalized: false,
            ..self
        }
    }
}

/// A transform manager working on runtime-tagged Spaces. The runtime
/// counterpart of [`Transform`][crate::Transform]
pub trait DynTransform {
    /// The full affine map from `from` to `to`
    fn transform(&self, from: SpaceTag, to: SpaceTag, point: [f64; 3]) -> [f64; 3];
    /// The linear part of the map from `from` to `to`
    fn transform33(&self, from: SpaceTag, to: SpaceTag, vector: [f64; 3]) -> [f64; 3];
}

/// A point or vector whose Space and kind are runtime values
///
/// Storage is always 3 wide. For 2D kinds the third slot is kept at zero and
/// is never exposed.
#[derive(Debug, Clone, Copy)]
pub struct DynEntity {
    space: SpaceTag,
    kind: EntityKind,
    coords: [f64; 3],
}

// # CONSTRUCTION & ACCESS //

impl DynEntity {
    /// Build an entity of Space `space` from 2 or 3 components. A normalized
    /// vector is normalized eagerly. On a wrong number of components, the
    /// error expects the nearest valid one: 2 for shorter lists, 3 for longer
    pub fn new(
        space: SpaceTag,
        role: RoleKind,
        normalized: bool,
        values: &[f64],
    ) -> Result<Self, GeomError> {
        if !(2..=3).contains(&values.len()) {
            return Err(GeomError::ConstructionArity {
                expected: values.len().clamp(2, 3),
                actual: values.len(),
            });
        }
        if normalized && role == RoleKind::Point {
            return Err(reject(RoleViolation::PointNormalize));
        }
        let raw = <[f64; 3]>::from_fn(|i| values.get(i).copied().unwrap_or(0.0));
        let coords = if normalized { coords::normalized(raw)? } else { raw };
        Ok(DynEntity {
            space,
            kind: EntityKind {
                dim: values.len(),
                role,
                normalized,
            },
            coords,
        })
    }

    pub fn space(&self) -> SpaceTag {
        self.space
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The live components, as a slice of length `kind().dim`
    pub fn as_slice(&self) -> &[f64] {
        &self.coords[..self.kind.dim]
    }

    /// Fallible indexing
    pub fn at(&self, i: usize) -> Result<f64, GeomError> {
        self.as_slice()
            .get(i)
            .copied()
            .ok_or(GeomError::IndexOutOfRange {
                index: i,
                dim: self.kind.dim,
            })
    }

    fn with(&self, kind: EntityKind, coords: [f64; 3]) -> Self {
        let coords = <[f64; 3]>::from_fn(|i| if i < kind.dim { coords[i] } else { 0.0 });
        DynEntity {
            space: self.space,
            kind,
            coords,
        }
    }

    fn same_space(&self, op: Operation, rhs: &DynEntity) -> Result<(), GeomError> {
        if self.space == rhs.space {
            return Ok(());
        }
        tracing::debug!(
            %op,
            lhs = self.space.name,
            rhs = rhs.space.name,
            "rejecting cross-space operation"
        );
        Err(GeomError::CrossSpace {
            op,
            lhs: self.space.name,
            rhs: rhs.space.name,
        })
    }
}

fn reject(violation: RoleViolation) -> GeomError {
    tracing::debug!(%violation, "rejecting operation");
    GeomError::InvalidRole(violation)
}

fn zip(a: &[f64; 3], b: &[f64; 3], f: impl Fn(f64, f64) -> f64) -> [f64; 3] {
    array_init::array_init(|i| f(a[i], b[i]))
}

// # ARITHMETIC //

impl DynEntity {
    /// `self + rhs`. Vector + vector and point + vector are valid, the wider
    /// dimensionality wins
    pub fn try_add(&self, rhs: &DynEntity) -> Result<DynEntity, GeomError> {
        self.same_space(Operation::Add, rhs)?;
        match (self.kind.role, rhs.kind.role) {
            (RoleKind::Point, RoleKind::Point) => return Err(reject(RoleViolation::PointPlusPoint)),
            (RoleKind::Vector, RoleKind::Point) => return Err(reject(RoleViolation::VectorPlusPoint)),
            _ => {}
        }
        let kind = EntityKind {
            dim: self.kind.dim.max(rhs.kind.dim),
            ..self.kind.free()
        };
        Ok(self.with(kind, zip(&self.coords, &rhs.coords, |a, b| a + b)))
    }

    /// `self - rhs`. The difference of two points is a vector
    pub fn try_sub(&self, rhs: &DynEntity) -> Result<DynEntity, GeomError> {
        self.same_space(Operation::Sub, rhs)?;
        let role = match (self.kind.role, rhs.kind.role) {
            (RoleKind::Vector, RoleKind::Point) => {
                return Err(reject(RoleViolation::VectorMinusPoint))
            }
            (RoleKind::Point, RoleKind::Point) => RoleKind::Vector,
            (role, RoleKind::Vector) => role,
        };
        let kind = EntityKind {
            dim: self.kind.dim.max(rhs.kind.dim),
            role,
            normalized: false,
        };
        Ok(self.with(kind, zip(&self.coords, &rhs.coords, |a, b| a - b)))
    }

    /// `self += rhs`
    pub fn try_add_assign(&mut self, rhs: &DynEntity) -> Result<(), GeomError> {
        self.same_space(Operation::AddAssign, rhs)?;
        if self.kind.normalized {
            return Err(reject(RoleViolation::NormalizedInPlaceAdd));
        }
        match (self.kind.role, rhs.kind.role) {
            (RoleKind::Point, RoleKind::Point) => return Err(reject(RoleViolation::PointPlusPoint)),
            (RoleKind::Vector, RoleKind::Point) => return Err(reject(RoleViolation::VectorPlusPoint)),
            _ => {}
        }
        self.widen_check(rhs)?;
        self.coords = zip(&self.coords, &rhs.coords, |a, b| a + b);
        Ok(())
    }

    /// `self -= rhs`
    pub fn try_sub_assign(&mut self, rhs: &DynEntity) -> Result<(), GeomError> {
        self.same_space(Operation::SubAssign, rhs)?;
        if self.kind.normalized {
            return Err(reject(RoleViolation::NormalizedInPlaceSub));
        }
        match (self.kind.role, rhs.kind.role) {
            (RoleKind::Point, RoleKind::Point) => {
                return Err(reject(RoleViolation::PointMinusPointInPlace))
            }
            (RoleKind::Vector, RoleKind::Point) => {
                return Err(reject(RoleViolation::VectorMinusPoint))
            }
            _ => {}
        }
        self.widen_check(rhs)?;
        self.coords = zip(&self.coords, &rhs.coords, |a, b| a - b);
        Ok(())
    }

    fn widen_check(&self, rhs: &DynEntity) -> Result<(), GeomError> {
        if rhs.kind.dim > self.kind.dim {
            return Err(reject(RoleViolation::InPlaceDimensionChange));
        }
        Ok(())
    }

    /// `self * k`. Always gives a free vector
    pub fn try_scale(&self, k: f64) -> Result<DynEntity, GeomError> {
        if self.kind.is_point() {
            return Err(reject(RoleViolation::PointScale));
        }
        Ok(self.with(self.kind.free(), self.coords.map(|c| c * k)))
    }

    /// `self *= k`
    pub fn try_scale_assign(&mut self, k: f64) -> Result<(), GeomError> {
        if self.kind.is_point() {
            return Err(reject(RoleViolation::PointScale));
        }
        if self.kind.normalized {
            return Err(reject(RoleViolation::NormalizedInPlaceScale));
        }
        *self = self.with(self.kind, self.coords.map(|c| c * k));
        Ok(())
    }
}

// # PRODUCTS & MAGNITUDE //

impl DynEntity {
    pub fn try_dot(&self, rhs: &DynEntity) -> Result<f64, GeomError> {
        self.same_space(Operation::Dot, rhs)?;
        if self.kind.is_point() || rhs.kind.is_point() {
            return Err(reject(RoleViolation::PointDot));
        }
        Ok(coords::dot(&self.coords, &rhs.coords))
    }

    /// Always 3D. Renormalized when both operands are normalized
    pub fn try_cross(&self, rhs: &DynEntity) -> Result<DynEntity, GeomError> {
        self.same_space(Operation::Cross, rhs)?;
        if self.kind.is_point() || rhs.kind.is_point() {
            return Err(reject(RoleViolation::PointCross));
        }
        let raw = coords::cross(&self.coords, &rhs.coords);
        let normalized = self.kind.normalized && rhs.kind.normalized;
        let kind = EntityKind {
            dim: 3,
            role: RoleKind::Vector,
            normalized,
        };
        let coords = if normalized { coords::normalized(raw)? } else { raw };
        Ok(self.with(kind, coords))
    }

    /// `self = self × rhs`, for 3D free vectors only
    pub fn try_cross_assign(&mut self, rhs: &DynEntity) -> Result<(), GeomError> {
        self.same_space(Operation::CrossAssign, rhs)?;
        if self.kind.is_point() || rhs.kind.is_point() {
            return Err(reject(RoleViolation::PointCross));
        }
        if self.kind.normalized {
            return Err(reject(RoleViolation::NormalizedInPlaceCross));
        }
        if self.kind.dim == 2 {
            return Err(reject(RoleViolation::InPlaceCross2D));
        }
        self.coords = coords::cross(&self.coords, &rhs.coords);
        Ok(())
    }

    /// Approximate equality, within [`EPSILON`][crate::EPSILON]. Comparing
    /// a point with a vector, or a 2D entity with a 3D one, is an error and not
    /// `false`
    pub fn try_eq(&self, rhs: &DynEntity) -> Result<bool, GeomError> {
        self.same_space(Operation::Compare, rhs)?;
        if self.kind.role != rhs.kind.role {
            return Err(reject(RoleViolation::PointVectorEquality));
        }
        if self.kind.dim != rhs.kind.dim {
            return Err(reject(RoleViolation::MixedDimensionEquality));
        }
        Ok(self
            .coords
            .iter()
            .zip(&rhs.coords)
            .all(|(a, b)| (a - b).abs() < crate::EPSILON))
    }

    /// Magnitude of a free vector, as a raw scalar
    pub fn try_mag(&self) -> Result<f64, GeomError> {
        self.free_vector_check(RoleViolation::PointMagnitude, RoleViolation::NormalizedMagnitude)?;
        Ok(coords::magnitude(&self.coords))
    }

    /// The normalized counterpart of a free vector
    pub fn try_norm(&self) -> Result<DynEntity, GeomError> {
        self.free_vector_check(RoleViolation::PointNormalize, RoleViolation::NormalizedNormalize)?;
        let kind = EntityKind {
            normalized: true,
            ..self.kind
        };
        Ok(self.with(kind, coords::normalized(self.coords)?))
    }

    fn free_vector_check(
        &self,
        if_point: RoleViolation,
        if_normalized: RoleViolation,
    ) -> Result<(), GeomError> {
        if self.kind.is_point() {
            return Err(reject(if_point));
        }
        if self.kind.normalized {
            return Err(reject(if_normalized));
        }
        Ok(())
    }
}

// # DIMENSIONS & CONVERSION //

impl DynEntity {
    /// Drop the third component. A normalized vector is renormalized
    pub fn try_to_xy(&self) -> Result<DynEntity, GeomError> {
        if !self.space.allows_xy {
            return Err(reject(RoleViolation::XyProjectionUnsupported));
        }
        if self.kind.dim == 2 {
            return Err(reject(RoleViolation::AlreadyPlanar));
        }
        let kind = EntityKind { dim: 2, ..self.kind };
        let planar = [self.coords[0], self.coords[1], 0.0];
        let coords = if kind.normalized {
            coords::normalized(planar)?
        } else {
            planar
        };
        Ok(self.with(kind, coords))
    }

    /// The same entity in 3D, with a zero third component
    pub fn try_to_xyz(&self) -> Result<DynEntity, GeomError> {
        if self.kind.dim == 3 {
            return Err(reject(RoleViolation::AlreadySpatial));
        }
        Ok(self.with(EntityKind { dim: 3, ..self.kind }, self.coords))
    }

    /// Move a 3D entity to Space `to`. Points go through the affine map of
    /// `tm`, vectors through its linear part only, and come out free
    pub fn try_convert(&self, tm: &impl DynTransform, to: SpaceTag) -> Result<DynEntity, GeomError> {
        if self.space == to {
            tracing::debug!(space = self.space.name, "refusing conversion to the same Space");
            return Err(GeomError::InvalidConversion {
                space: self.space.name,
            });
        }
        if self.kind.dim == 2 {
            return Err(reject(RoleViolation::PlanarConversion));
        }
        tracing::trace!(from = self.space.name, to = to.name, "converting entity");
        let coords = match self.kind.role {
            RoleKind::Point => tm.transform(self.space, to, self.coords),
            RoleKind::Vector => tm.transform33(self.space, to, self.coords),
        };
        Ok(DynEntity {
            space: to,
            kind: self.kind.free(),
            coords,
        })
    }
}

// # TYPED <-> DYNAMIC //

impl<S: Space, D: Dim, R: KindOf<N>, N: Normalization> From<Entity<S, D, R, N>> for DynEntity {
    fn from(e: Entity<S, D, R, N>) -> Self {
        DynEntity {
            space: SpaceTag::of::<S>(),
            kind: EntityKind::of::<D, R, N>(),
            coords: <[f64; 3]>::from_fn(|i| e.coords.padded(i)),
        }
    }
}

impl<S: Space, D: Dim, R: KindOf<N>, N: Normalization> TryFrom<DynEntity> for Entity<S, D, R, N> {
    type Error = GeomError;

    fn try_from(e: DynEntity) -> Result<Self, GeomError> {
        if e.space != SpaceTag::of::<S>() {
            return Err(GeomError::CrossSpace {
                op: Operation::Downcast,
                lhs: e.space.name,
                rhs: S::NAME,
            });
        }
        if e.kind != EntityKind::of::<D, R, N>() {
            return Err(reject(RoleViolation::KindMismatch));
        }
        Ok(Entity::from_coords(D::Coords::from_fn(|i| e.coords[i])))
    }
}

impl fmt::Display for DynEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entity(f, self.space.name, &self.kind.name(), self.as_slice())
    }
}

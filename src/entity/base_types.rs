use crate::coords::{Coords, Dim, D2, D3};
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Whether an entity is a position or a displacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    Point,
    Vector,
}

/// Type-level role of an entity: [`PointRole`] or [`VectorRole`]
pub trait Role: sealed::Sealed + 'static {
    const KIND: RoleKind;
}

/// Type-level normalization of an entity: [`Free`] or [`Normalized`]
pub trait Normalization: sealed::Sealed + 'static {
    const NORMALIZED: bool;
}

/// The entity is an anchored position
#[derive(Debug, Clone, Copy)]
pub enum PointRole {}

/// The entity is a displacement
#[derive(Debug, Clone, Copy)]
pub enum VectorRole {}

/// The entity may have any magnitude, and may be mutated in place
#[derive(Debug, Clone, Copy)]
pub enum Free {}

/// The entity always has unit magnitude, and is never mutated in place
#[derive(Debug, Clone, Copy)]
pub enum Normalized {}

macro_rules! markers {
    ($($t:ident : $trait:ident { const $c:ident: $ty:ty = $v:expr; })*) => {
        $(
            impl sealed::Sealed for $t {}
            impl $trait for $t {
                const $c: $ty = $v;
            }
        )*
    };
}

markers! {
    PointRole: Role { const KIND: RoleKind = RoleKind::Point; }
    VectorRole: Role { const KIND: RoleKind = RoleKind::Vector; }
    Free: Normalization { const NORMALIZED: bool = false; }
    Normalized: Normalization { const NORMALIZED: bool = true; }
}

/// Implemented only for the (role, normalization) pairs that make a legal
/// entity kind. A normalized point does not exist
pub trait KindOf<N: Normalization>: Role {
    /// The kind name, without its dimension suffix
    const BASE_NAME: &'static str;
}

impl KindOf<Free> for PointRole {
    const BASE_NAME: &'static str = "Point";
}
impl KindOf<Free> for VectorRole {
    const BASE_NAME: &'static str = "Vector";
}
impl KindOf<Normalized> for VectorRole {
    const BASE_NAME: &'static str = "NormalizedVector";
}

/// A geometric value of Space `S`, dimensionality `D`, role `R` and
/// normalization `N`.
///
/// This single type covers the six entity kinds (see the aliases
/// [`Vector3`], [`Point3`], [`NormalizedVector3`], [`Vector2`], [`Point2`],
/// [`NormalizedVector2`]). Which operations a given kind supports is decided
/// by which impls apply to its parameters, so most misuses do not compile.
///
/// The only runtime state is the coordinate array. The other parameters are
/// phantom: an entity is `Copy`, `Send` and `Sync` whatever `S`, `R` and `N`
/// are.
pub struct Entity<S, D: Dim, R, N = Free> {
    pub(crate) coords: D::Coords,
    marker: PhantomData<fn() -> (S, R, N)>,
}

/// A free 3D vector
pub type Vector3<S> = Entity<S, D3, VectorRole, Free>;
/// A 3D position
pub type Point3<S> = Entity<S, D3, PointRole, Free>;
/// A 3D vector of unit length
pub type NormalizedVector3<S> = Entity<S, D3, VectorRole, Normalized>;
/// A free 2D vector
pub type Vector2<S> = Entity<S, D2, VectorRole, Free>;
/// A 2D position
pub type Point2<S> = Entity<S, D2, PointRole, Free>;
/// A 2D vector of unit length
pub type NormalizedVector2<S> = Entity<S, D2, VectorRole, Normalized>;

impl<S, D: Dim, R, N> Entity<S, D, R, N> {
    /// Wrap raw storage. Callers are responsible for the invariants of the
    /// kind (unit length for normalized vectors)
    pub(crate) const fn from_coords(coords: D::Coords) -> Self {
        Self {
            coords,
            marker: PhantomData,
        }
    }

    /// Change the parameters of an entity, keeping its storage
    pub(crate) fn retag<S2, R2, N2>(self) -> Entity<S2, D, R2, N2> {
        Entity::from_coords(self.coords)
    }

    /// A copy of the underlying storage
    pub fn coords(&self) -> D::Coords {
        self.coords
    }

    /// The live components, as a slice of length `D::N`
    pub fn as_slice(&self) -> &[f64] {
        self.coords.as_ref()
    }
}

impl<S, D: Dim, R, N> Clone for Entity<S, D, R, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, D: Dim, R, N> Copy for Entity<S, D, R, N> {}

/// Free kinds default to the zero vector or to the origin
impl<S, D: Dim, R: Role> Default for Entity<S, D, R, Free> {
    fn default() -> Self {
        Self::from_coords(D::Coords::from_fn(|_| 0.0))
    }
}

/// Demotes a normalized vector to a free one
impl<S, D: Dim> From<Entity<S, D, VectorRole, Normalized>> for Entity<S, D, VectorRole, Free> {
    fn from(v: Entity<S, D, VectorRole, Normalized>) -> Self {
        v.retag()
    }
}

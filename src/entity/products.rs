//! Dot and cross products, magnitude and normalization. None of these exist
//! for points:
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let _ = Point3::<View>::new(1.0, 0.0, 0.0).dot(&Vector3::<View>::new(1.0, 0.0, 0.0));
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let _ = Vector3::<View>::new(1.0, 0.0, 0.0).cross(&Point3::<View>::new(0.0, 1.0, 0.0));
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let _ = Point3::<View>::new(1.0, 2.0, 3.0).mag();
//! ```
//!
//! A normalized vector has no exposed magnitude, is never normalized again, and
//! is never crossed in place:
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let _ = NormalizedVector3::<View>::x_axis().mag();
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let _ = NormalizedVector3::<View>::x_axis().norm();
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let mut n = NormalizedVector3::<View>::x_axis();
//! n.cross_assign(&Vector3::<View>::new(0.0, 1.0, 0.0));
//! ```
//!
//! Both operands must belong to the same Space:
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } Patient { unit: f64 } }
//! use geoframe::*;
//! let _ = Vector3::<View>::new(1.0, 0.0, 0.0).dot(&Vector3::<Patient>::new(1.0, 0.0, 0.0));
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } Patient { unit: f64 } }
//! use geoframe::*;
//! let _ = Vector3::<View>::new(1.0, 0.0, 0.0).cross(&Vector3::<Patient>::new(0.0, 1.0, 0.0));
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } Patient { unit: f64 } }
//! use geoframe::*;
//! let mut v = Vector3::<View>::new(1.0, 0.0, 0.0);
//! v.cross_assign(&Vector3::<Patient>::new(0.0, 1.0, 0.0));
//! ```
//!
//! Within one Space they all work:
//!
//! ```
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let mut v = Vector3::<View>::new(1.0, 0.0, 0.0);
//! v.cross_assign(&Vector3::new(0.0, 1.0, 0.0));
//! assert_eq!(v.dot(&Vector3::new(0.0, 0.0, 2.0)), 2.0);
//! assert_eq!(NormalizedVector3::<View>::x_axis().to_free().mag_raw(), 1.0);
//! ```

use super::base_types::*;
use crate::{
    coords::{self, Dim, D3},
    space::{Space, Unit},
    GeomError,
};

/// Decides the kind of a cross product from the normalization of both
/// operands. Two normalized vectors cross to a normalized vector; any other
/// pair crosses to a free vector
pub trait CrossWith<N2: Normalization>: Normalization {
    /// What [`Entity::cross`] returns in Space `S`
    type Output<S>;
    /// Finish a cross product from its raw components
    fn finish<S>(raw: [f64; 3]) -> Self::Output<S>;
}

macro_rules! free_cross {
    ($($n1:ident x $n2:ident),*) => {
        $(
            impl CrossWith<$n2> for $n1 {
                type Output<S> = Vector3<S>;
                fn finish<S>(raw: [f64; 3]) -> Vector3<S> {
                    Entity::from_coords(raw)
                }
            }
        )*
    };
}

free_cross!(Free x Free, Free x Normalized, Normalized x Free);

/// The raw cross product of two unit vectors is renormalized. It therefore
/// fails with [`GeomError::DegenerateNormalization`] for parallel operands,
/// and only keeps the direction of the true cross product for non-orthogonal
/// ones
impl CrossWith<Normalized> for Normalized {
    type Output<S> = Result<NormalizedVector3<S>, GeomError>;
    fn finish<S>(raw: [f64; 3]) -> Self::Output<S> {
        Entity::normalizing(raw)
    }
}

impl<S, D: Dim, N: Normalization> Entity<S, D, VectorRole, N> {
    /// Dot product with any vector of the same Space. The operands may have
    /// different dimensionalities, in which case the missing component counts
    /// as zero
    pub fn dot<D2: Dim, N2: Normalization>(&self, rhs: &Entity<S, D2, VectorRole, N2>) -> f64 {
        coords::dot(&self.coords, &rhs.coords)
    }

    /// Cross product with any vector of the same Space. The result is always
    /// 3D (2D operands lie in the XY plane). See [`CrossWith`] for the kind of
    /// the result
    pub fn cross<D2: Dim, N2: Normalization>(
        &self,
        rhs: &Entity<S, D2, VectorRole, N2>,
    ) -> <N as CrossWith<N2>>::Output<S>
    where
        N: CrossWith<N2>,
    {
        <N as CrossWith<N2>>::finish::<S>(coords::cross(&self.coords, &rhs.coords))
    }
}

impl<S> Entity<S, D3, VectorRole, Free> {
    /// Replace `self` by `self.cross(rhs)`. Only 3D free vectors can be
    /// crossed in place:
    ///
    /// ```compile_fail
    /// geoframe::space! { S { unit: f64 } }
    /// use geoframe::*;
    /// let mut v = Vector2::<S>::new(1.0, 0.0);
    /// v.cross_assign(&Vector2::<S>::new(0.0, 1.0));
    /// ```
    pub fn cross_assign<D2: Dim, N2: Normalization>(&mut self, rhs: &Entity<S, D2, VectorRole, N2>) {
        self.coords = coords::cross(&self.coords, &rhs.coords);
    }
}

impl<S, D: Dim> Entity<S, D, VectorRole, Free> {
    /// Length of the vector, as a raw scalar
    pub fn mag_raw(&self) -> f64 {
        coords::magnitude(&self.coords)
    }

    /// Length of the vector, in the unit of its Space
    pub fn mag(&self) -> S::Unit
    where
        S: Space,
    {
        S::Unit::from_raw(self.mag_raw())
    }

    /// The vector of unit length with the same direction. Fails for a (nearly)
    /// zero vector
    pub fn norm(&self) -> Result<Entity<S, D, VectorRole, Normalized>, GeomError> {
        Entity::normalizing(self.coords)
    }
}

/// Normalizes a free vector
impl<S, D: Dim> TryFrom<Entity<S, D, VectorRole, Free>> for Entity<S, D, VectorRole, Normalized> {
    type Error = GeomError;
    fn try_from(v: Entity<S, D, VectorRole, Free>) -> Result<Self, GeomError> {
        v.norm()
    }
}

impl<S, D: Dim> Entity<S, D, VectorRole, Normalized> {
    /// The same direction as a free vector. Shortcut for `Vector::from(self)`
    pub fn to_free(self) -> Entity<S, D, VectorRole, Free> {
        self.into()
    }
}

//! Operator overloads. An operator exists only for the combinations of kinds
//! that make geometric sense, and only between entities of the same Space:
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } Patient { unit: f64 } }
//! use geoframe::*;
//! let _ = Vector3::<View>::new(1.0, 0.0, 0.0) + Vector3::<Patient>::new(0.0, 1.0, 0.0);
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let _ = Point3::<View>::new(1.0, 0.0, 0.0) + Point3::<View>::new(0.0, 1.0, 0.0);
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let _ = Vector3::<View>::new(1.0, 0.0, 0.0) - Point3::<View>::new(0.0, 1.0, 0.0);
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } Patient { unit: f64 } }
//! use geoframe::*;
//! let _ = Point3::<View>::new(1.0, 0.0, 0.0) - Point3::<Patient>::new(0.0, 1.0, 0.0);
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } Patient { unit: f64 } }
//! use geoframe::*;
//! let _ = Vector3::<View>::new(1.0, 0.0, 0.0) - Vector3::<Patient>::new(0.0, 1.0, 0.0);
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } Patient { unit: f64 } }
//! use geoframe::*;
//! let mut v = Vector3::<View>::new(1.0, 0.0, 0.0);
//! v += Vector3::<Patient>::new(0.0, 1.0, 0.0);
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } Patient { unit: f64 } }
//! use geoframe::*;
//! let mut p = Point3::<View>::new(1.0, 0.0, 0.0);
//! p -= Vector3::<Patient>::new(0.0, 1.0, 0.0);
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let _ = Point3::<View>::new(1.0, 0.0, 0.0) * 2.0;
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let mut n = NormalizedVector3::<View>::x_axis();
//! n *= 2.0;
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let mut n = NormalizedVector3::<View>::x_axis();
//! n += Vector3::<View>::new(0.0, 1.0, 0.0);
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let mut n = NormalizedVector3::<View>::x_axis();
//! n -= Vector3::<View>::new(0.0, 1.0, 0.0);
//! ```
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let mut v = Vector2::<View>::new(1.0, 0.0);
//! v += Vector3::<View>::new(0.0, 1.0, 0.0);
//! ```
//!
//! The valid combinations compile as expected:
//!
//! ```
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let mut v = Vector3::<View>::new(1.0, 0.0, 0.0);
//! v += Vector3::new(0.0, 1.0, 0.0);
//! v -= NormalizedVector3::z_axis();
//! let p = Point3::<View>::origin() + v * 2.0;
//! assert_eq!(p, Point3::new(2.0, 2.0, -2.0));
//! ```

use super::base_types::*;
use crate::coords::{zip_promoted, Coords, Dim, Promote};

macro_rules! promoting_binary_ops {
    ($($doc:literal $trait:ident $method:ident ($op:tt)
       [$($g:ident),*] $lrole:ident<$lnorm:ty>, $rrole:ident<$rnorm:ty> => $orole:ident),* $(,)?) => {
        $(
        #[doc=$doc]
        impl<S, D1, D2 $(, $g: Normalization)*> std::ops::$trait<Entity<S, D2, $rrole, $rnorm>>
            for Entity<S, D1, $lrole, $lnorm>
        where
            D1: Promote<D2>,
            D2: Dim,
        {
            type Output = Entity<S, <D1 as Promote<D2>>::Output, $orole, Free>;
            #[doc=$doc]
            fn $method(self, rhs: Entity<S, D2, $rrole, $rnorm>) -> Self::Output {
                Entity::from_coords(zip_promoted::<D1, D2>(&self.coords, &rhs.coords, |a, b| a $op b))
            }
        }
        )*
    };
}

promoting_binary_ops! {
    "Vector addition. The result is always free, and as wide as the widest operand"
        Add add (+) [N1, N2] VectorRole<N1>, VectorRole<N2> => VectorRole,
    "Moves a point by a vector"
        Add add (+) [N] PointRole<Free>, VectorRole<N> => PointRole,
    "Vector subtraction. The result is always free, and as wide as the widest operand"
        Sub sub (-) [N1, N2] VectorRole<N1>, VectorRole<N2> => VectorRole,
    "Moves a point backwards by a vector"
        Sub sub (-) [N] PointRole<Free>, VectorRole<N> => PointRole,
    "The vector going from `rhs` to `self`"
        Sub sub (-) [] PointRole<Free>, PointRole<Free> => VectorRole,
}

macro_rules! in_place_ops {
    ($($doc:literal $trait:ident $method:ident ($op:tt)
       [$($g:ident),*] $lrole:ident, $rrole:ident<$rnorm:ty>),* $(,)?) => {
        $(
        #[doc=$doc]
        impl<S, D1, D2 $(, $g: Normalization)*> std::ops::$trait<Entity<S, D2, $rrole, $rnorm>>
            for Entity<S, D1, $lrole, Free>
        where
            D1: Promote<D2, Output = D1>,
            D2: Dim,
        {
            fn $method(&mut self, rhs: Entity<S, D2, $rrole, $rnorm>) {
                for (i, c) in self.coords.as_mut().iter_mut().enumerate() {
                    *c = *c $op rhs.coords.padded(i);
                }
            }
        }
        )*
    };
}

in_place_ops! {
    "In-place vector addition. Only free vectors can be modified, and only by operands that do not widen them"
        AddAssign add_assign (+) [N] VectorRole, VectorRole<N>,
    "Moves a point in place"
        AddAssign add_assign (+) [N] PointRole, VectorRole<N>,
    "In-place vector subtraction. Only free vectors can be modified, and only by operands that do not widen them"
        SubAssign sub_assign (-) [N] VectorRole, VectorRole<N>,
    "Moves a point backwards in place"
        SubAssign sub_assign (-) [N] PointRole, VectorRole<N>,
}

// # SCALING //

/// Scaling. A scaled normalized vector is no longer normalized, so the result
/// is always free
impl<S, D: Dim, N: Normalization> std::ops::Mul<f64> for Entity<S, D, VectorRole, N> {
    type Output = Entity<S, D, VectorRole, Free>;
    fn mul(self, rhs: f64) -> Self::Output {
        Entity::from_coords(D::Coords::from_fn(|i| self.coords.as_ref()[i] * rhs))
    }
}

impl<S, D: Dim, N: Normalization> std::ops::Mul<Entity<S, D, VectorRole, N>> for f64 {
    type Output = Entity<S, D, VectorRole, Free>;
    #[inline]
    fn mul(self, rhs: Entity<S, D, VectorRole, N>) -> Self::Output {
        rhs * self
    }
}

impl<S, D: Dim, N: Normalization> std::ops::Div<f64> for Entity<S, D, VectorRole, N> {
    type Output = Entity<S, D, VectorRole, Free>;
    fn div(self, rhs: f64) -> Self::Output {
        self * (1.0 / rhs)
    }
}

impl<S, D: Dim> std::ops::MulAssign<f64> for Entity<S, D, VectorRole, Free> {
    fn mul_assign(&mut self, rhs: f64) {
        for c in self.coords.as_mut() {
            *c *= rhs;
        }
    }
}

impl<S, D: Dim> std::ops::DivAssign<f64> for Entity<S, D, VectorRole, Free> {
    fn div_assign(&mut self, rhs: f64) {
        *self *= 1.0 / rhs;
    }
}

/// Negation keeps the normalization: the opposite of a unit vector is a unit
/// vector
impl<S, D: Dim, N: Normalization> std::ops::Neg for Entity<S, D, VectorRole, N> {
    type Output = Self;
    fn neg(self) -> Self {
        Entity::from_coords(D::Coords::from_fn(|i| -self.coords.as_ref()[i]))
    }
}

impl<S, D: Dim> std::iter::Sum for Entity<S, D, VectorRole, Free>
where
    D: Promote<D, Output = D>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, v| acc + v)
    }
}

#[cfg(test)]
mod tests {
    use crate::{space::test_spaces::*, test_macros::*, *};

    simple_eqs! {
        vector_add: (Vector3::<View>::new(1.0, 2.0, 3.0) + Vector3::<View>::new(1.0, 1.0, 1.0)).coords()
            => [2.0, 3.0, 4.0],
        promotion_2d_3d: (Vector2::<View>::new(1.0, 2.0) + Vector3::<View>::new(1.0, 1.0, 1.0)).coords()
            => [2.0, 3.0, 1.0],
        promotion_3d_2d: (Vector3::<View>::new(1.0, 1.0, 1.0) - Vector2::<View>::new(1.0, 2.0)).coords()
            => [0.0, -1.0, 1.0],
        planar_stays_planar: (Vector2::<View>::new(1.0, 2.0) + Vector2::<View>::new(3.0, 4.0)).coords()
            => [4.0, 6.0],
        point_plus_vector: (Point3::<View>::new(1.0, 1.0, 1.0) + Vector3::<View>::new(1.0, 2.0, 3.0)).coords()
            => [2.0, 3.0, 4.0],
        point_minus_point:
            Point3::<View>::new(2.0, 3.0, 4.0) - Point3::<View>::new(1.0, 1.0, 1.0)
            => Vector3::<View>::new(1.0, 2.0, 3.0),
        point_minus_vector: (Point2::<View>::new(2.0, 3.0) - Vector2::<View>::new(1.0, 1.0)).coords()
            => [1.0, 2.0],
        point2_promoted: (Point2::<View>::new(2.0, 3.0) + Vector3::<View>::new(0.0, 0.0, 5.0)).coords()
            => [2.0, 3.0, 5.0],
        normalized_operands_demote:
            NormalizedVector3::<View>::x_axis() + NormalizedVector3::<View>::y_axis()
            => Vector3::<View>::new(1.0, 1.0, 0.0),
        scale: (Vector3::<View>::new(1.0, 2.0, 3.0) * 2.0).coords() => [2.0, 4.0, 6.0],
        scale_commutes: (2.0 * Vector2::<View>::new(1.0, 2.0)).coords() => [2.0, 4.0],
        scale_normalized_demotes: NormalizedVector3::<View>::z_axis() * 3.0 => Vector3::<View>::new(0.0, 0.0, 3.0),
        divide: (Vector3::<View>::new(2.0, 4.0, 6.0) / 2.0).coords() => [1.0, 2.0, 3.0],
        negate_normalized: -NormalizedVector2::<View>::x_axis() => NormalizedVector2::<View>::new(-1.0, 0.0).unwrap(),
        sum: [Vector2::<View>::new(1.0, 0.0), Vector2::<View>::new(0.0, 2.0)].into_iter().sum::<Vector2<View>>()
            => Vector2::<View>::new(1.0, 2.0)
    }

    #[test]
    fn additive_inverse() {
        for v in [
            Vector3::<Patient>::new(1.0, -2.0, 3.5),
            Vector3::<Patient>::new(1e6, 1e-6, 0.0),
            Vector3::<Patient>::zero(),
        ] {
            assert_eq!(v + v * -1.0, Vector3::<Patient>::zero());
        }
    }

    #[test]
    fn in_place_ops() {
        let mut v = Vector3::<View>::new(1.0, 2.0, 3.0);
        v += Vector2::<View>::new(1.0, 1.0);
        assert_eq!(v.coords(), [2.0, 3.0, 3.0]);
        v -= NormalizedVector3::<View>::z_axis();
        assert_eq!(v.coords(), [2.0, 3.0, 2.0]);
        v *= 2.0;
        assert_eq!(v.coords(), [4.0, 6.0, 4.0]);
        v /= 4.0;
        assert_eq!(v.coords(), [1.0, 1.5, 1.0]);

        let mut p = Point2::<View>::new(0.0, 0.0);
        p += Vector2::<View>::new(1.0, 2.0);
        p -= Vector2::<View>::new(0.5, 0.5);
        assert_eq!(p.coords(), [0.5, 1.5]);
    }
}

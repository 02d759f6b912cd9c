//! Explicit bridges to and from the point/vector types of other libraries
//!
//! Any type that can hand out its `x`, `y` (and `z`) components and be built
//! back from them is a coordinate provider. Conversions are always explicit
//! method calls, so a value never silently loses or gains a Space.

use crate::{
    coords::{Dim, D2, D3},
    entity::{Entity, Free, Normalized, Role, VectorRole},
    GeomError,
};

/// A foreign 3D point/vector type
pub trait CoordinateProvider3 {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
    fn from_xyz(x: f64, y: f64, z: f64) -> Self;
}

/// A foreign 2D point/vector type
pub trait CoordinateProvider2 {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn from_xy(x: f64, y: f64) -> Self;
}

/// Ties a provider to the storage of entities of dimensionality `D`. Blanket
/// implemented for every [`CoordinateProvider3`] and [`CoordinateProvider2`]
pub trait Provides<D: Dim> {
    fn read(&self) -> D::Coords;
    fn build(coords: D::Coords) -> Self;
}

impl<P: CoordinateProvider3> Provides<D3> for P {
    fn read(&self) -> [f64; 3] {
        [self.x(), self.y(), self.z()]
    }
    fn build([x, y, z]: [f64; 3]) -> Self {
        P::from_xyz(x, y, z)
    }
}

impl<P: CoordinateProvider2> Provides<D2> for P {
    fn read(&self) -> [f64; 2] {
        [self.x(), self.y()]
    }
    fn build([x, y]: [f64; 2]) -> Self {
        P::from_xy(x, y)
    }
}

impl<S, D: Dim, R: Role> Entity<S, D, R, Free> {
    /// Read the components of a provider value. The Space is chosen by the
    /// caller
    pub fn from_provider<P: Provides<D>>(p: &P) -> Self {
        Self::from_coords(p.read())
    }
}

impl<S, D: Dim> Entity<S, D, VectorRole, Normalized> {
    /// Read and normalize the components of a provider value
    pub fn from_provider<P: Provides<D>>(p: &P) -> Result<Self, GeomError> {
        Self::normalizing(p.read())
    }
}

impl<S, D: Dim, R, N> Entity<S, D, R, N> {
    /// Export the components into a provider value. The Space is dropped
    pub fn to_provider<P: Provides<D>>(&self) -> P {
        P::build(self.coords)
    }
}

// # BUILT-IN PROVIDERS //

impl CoordinateProvider3 for [f64; 3] {
    fn x(&self) -> f64 {
        self[0]
    }
    fn y(&self) -> f64 {
        self[1]
    }
    fn z(&self) -> f64 {
        self[2]
    }
    fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        [x, y, z]
    }
}

impl CoordinateProvider2 for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }
    fn y(&self) -> f64 {
        self[1]
    }
    fn from_xy(x: f64, y: f64) -> Self {
        [x, y]
    }
}

impl CoordinateProvider3 for (f64, f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
    fn z(&self) -> f64 {
        self.2
    }
    fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        (x, y, z)
    }
}

impl CoordinateProvider2 for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
    fn from_xy(x: f64, y: f64) -> Self {
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{space::test_spaces::*, test_macros::*, *};
    use rstest::*;

    /// A vector type from some other math library
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Vec3 {
        x: f64,
        y: f64,
        z: f64,
    }

    impl CoordinateProvider3 for Vec3 {
        fn x(&self) -> f64 {
            self.x
        }
        fn y(&self) -> f64 {
            self.y
        }
        fn z(&self) -> f64 {
            self.z
        }
        fn from_xyz(x: f64, y: f64, z: f64) -> Self {
            Vec3 { x, y, z }
        }
    }

    simple_eqs! {
        from_tuple: Point3::<View>::from_provider(&(1.0, 2.0, 3.0)).coords() => [1.0, 2.0, 3.0],
        to_tuple: Vector2::<View>::new(4.0, 5.0).to_provider::<(f64, f64)>() => (4.0, 5.0),
        normalized_from_array:
            NormalizedVector2::<Image>::from_provider(&[3.0, 4.0])
            => NormalizedVector2::<Image>::new(0.6, 0.8),
        normalized_from_zero:
            NormalizedVector3::<Image>::from_provider(&[0.0; 3]).is_err() => true
    }

    #[rstest]
    #[case(Vec3 { x: 0.1, y: -7.25, z: 1e300 })]
    #[case(Vec3 { x: f64::MIN_POSITIVE, y: 0.0, z: -0.0 })]
    fn round_trip_is_exact(#[case] v: Vec3) {
        let e = Vector3::<Patient>::from_provider(&v);
        let back: Vec3 = e.to_provider();
        assert_eq!(back, v);
        assert_eq!(Point3::<Patient>::from_provider(&v).to_provider::<Vec3>(), v);
    }
}

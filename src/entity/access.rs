//! Construction of entities, and reading/writing their components

use super::base_types::*;
use crate::{
    coords::{normalized, Coords, Dim, D2, D3},
    GeomError,
};
use std::marker::PhantomData;

// # CONSTRUCTION //

impl<S, R: Role> Entity<S, D3, R, Free> {
    /// A 3D point or free vector from its components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_coords([x, y, z])
    }
}

impl<S, R: Role> Entity<S, D2, R, Free> {
    /// A 2D point or free vector from its components
    pub const fn new(x: f64, y: f64) -> Self {
        Self::from_coords([x, y])
    }
}

impl<S> Entity<S, D3, VectorRole, Normalized> {
    /// Normalize `(x, y, z)`. Fails if it is (nearly) the zero vector
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, GeomError> {
        Self::normalizing([x, y, z])
    }
}

impl<S> Entity<S, D2, VectorRole, Normalized> {
    /// Normalize `(x, y)`. Fails if it is (nearly) the zero vector
    pub fn new(x: f64, y: f64) -> Result<Self, GeomError> {
        Self::normalizing([x, y])
    }
}

impl<S, D: Dim> Entity<S, D, VectorRole, Normalized> {
    /// Build a normalized vector from any storage, normalizing it first
    pub(crate) fn normalizing(coords: D::Coords) -> Result<Self, GeomError> {
        Ok(Self::from_coords(normalized(coords)?))
    }
}

impl<S, D: Dim> Entity<S, D, VectorRole, Free> {
    /// The null vector
    pub fn zero() -> Self {
        Self::default()
    }
}

impl<S, D: Dim> Entity<S, D, PointRole, Free> {
    /// The origin of the Space
    pub fn origin() -> Self {
        Self::default()
    }
}

macro_rules! axes {
    ($dim:ident [$len:literal] $($free:ident $unit:ident : $i:literal),*) => {
        impl<S> Entity<S, $dim, VectorRole, Free> {
            $(
                #[doc = concat!("The free vector of length 1 along axis ", stringify!($i))]
                pub fn $free() -> Self {
                    let mut c = [0.0; $len];
                    c[$i] = 1.0;
                    Self::from_coords(c)
                }
            )*
        }
        impl<S> Entity<S, $dim, VectorRole, Normalized> {
            $(
                #[doc = concat!("The basis direction along axis ", stringify!($i))]
                pub fn $unit() -> Self {
                    let mut c = [0.0; $len];
                    c[$i] = 1.0;
                    Self::from_coords(c)
                }
            )*
        }
    };
}

axes!(D3 [3] unit_x x_axis: 0, unit_y y_axis: 1, unit_z z_axis: 2);
axes!(D2 [2] unit_x x_axis: 0, unit_y y_axis: 1);

fn check_arity<D: Dim>(values: &[f64]) -> Result<(), GeomError> {
    if values.len() != D::N {
        return Err(GeomError::ConstructionArity {
            expected: D::N,
            actual: values.len(),
        });
    }
    Ok(())
}

/// Build a point or free vector from a literal list, which must have exactly
/// as many values as the entity has dimensions
impl<S, D: Dim, R: Role> TryFrom<&[f64]> for Entity<S, D, R, Free> {
    type Error = GeomError;
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        check_arity::<D>(values)?;
        Ok(Self::from_coords(D::Coords::from_fn(|i| values[i])))
    }
}

/// Build a normalized vector from a literal list, which must have exactly as
/// many values as the entity has dimensions, and must not be the zero vector
impl<S, D: Dim> TryFrom<&[f64]> for Entity<S, D, VectorRole, Normalized> {
    type Error = GeomError;
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        check_arity::<D>(values)?;
        Self::normalizing(D::Coords::from_fn(|i| values[i]))
    }
}

// # READING //

/// Compile-time bound check for [`Entity::get`]
struct StaticIndex<D, const I: usize>(PhantomData<D>);

impl<D: Dim, const I: usize> StaticIndex<D, I> {
    const IN_RANGE: () = assert!(I < D::N, "Index is out of range");
}

impl<S, D: Dim, R, N> Entity<S, D, R, N> {
    /// First component
    pub fn x(&self) -> f64 {
        self.coords.as_ref()[0]
    }

    /// Second component
    pub fn y(&self) -> f64 {
        self.coords.as_ref()[1]
    }

    /// Component `i`, or [`GeomError::IndexOutOfRange`] if `i` is not in
    /// `0..dim`
    pub fn at(&self, i: usize) -> Result<f64, GeomError> {
        self.coords
            .as_ref()
            .get(i)
            .copied()
            .ok_or(GeomError::IndexOutOfRange { index: i, dim: D::N })
    }

    /// Component `I`, checked when compiling:
    ///
    /// ```compile_fail
    /// geoframe::space! { S { unit: f64 } }
    /// let v = geoframe::Vector2::<S>::new(1.0, 2.0);
    /// v.get::<2>();
    /// ```
    pub fn get<const I: usize>(&self) -> f64 {
        #[allow(clippy::let_unit_value)]
        let () = StaticIndex::<D, I>::IN_RANGE;
        self.coords.as_ref()[I]
    }

    /// Iterate over the live components
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.coords.as_ref().iter().copied()
    }
}

impl<S, R, N> Entity<S, D3, R, N> {
    /// Third component. Only 3D entities have one
    pub fn z(&self) -> f64 {
        self.coords[2]
    }
}

/// Range-checked access. Panics with `"Index is out of range"` when `i` is
/// not in `0..dim`. See [`Entity::at`] for a non-panicking version
impl<S, D: Dim, R, N> std::ops::Index<usize> for Entity<S, D, R, N> {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        match self.coords.as_ref().get(i) {
            Some(c) => c,
            None => panic!("Index is out of range"),
        }
    }
}

impl<'a, S, D: Dim, R, N> IntoIterator for &'a Entity<S, D, R, N> {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// # WRITING //
//
// Only free kinds may be written to: a normalized vector is replaced as a
// whole, never edited.

impl<S, D: Dim, R: Role> Entity<S, D, R, Free> {
    /// Overwrite the first component. Normalized vectors have no setters:
    ///
    /// ```compile_fail
    /// geoframe::space! { View { unit: f64 } }
    /// let mut n = geoframe::NormalizedVector3::<View>::x_axis();
    /// n.set_x(2.0);
    /// ```
    ///
    /// and cannot be written through indexing either:
    ///
    /// ```compile_fail
    /// geoframe::space! { View { unit: f64 } }
    /// let mut n = geoframe::NormalizedVector2::<View>::y_axis();
    /// n[0] = 2.0;
    /// ```
    pub fn set_x(&mut self, x: f64) {
        self.coords.as_mut()[0] = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.coords.as_mut()[1] = y;
    }

    /// Overwrite component `i`, or fail with [`GeomError::IndexOutOfRange`]
    pub fn set(&mut self, i: usize, value: f64) -> Result<(), GeomError> {
        match self.coords.as_mut().get_mut(i) {
            Some(c) => {
                *c = value;
                Ok(())
            }
            None => Err(GeomError::IndexOutOfRange { index: i, dim: D::N }),
        }
    }
}

impl<S, R: Role> Entity<S, D3, R, Free> {
    pub fn set_z(&mut self, z: f64) {
        self.coords[2] = z;
    }
}

impl<S, D: Dim, R: Role> std::ops::IndexMut<usize> for Entity<S, D, R, Free> {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match self.coords.as_mut().get_mut(i) {
            Some(c) => c,
            None => panic!("Index is out of range"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{space::test_spaces::*, test_macros::*, *};
    use approx::assert_abs_diff_eq;
    use rstest::*;

    simple_eqs! {
        named_3d: { let v = Vector3::<View>::new(1.0, 2.0, 3.0); (v.x(), v.y(), v.z()) } => (1.0, 2.0, 3.0),
        named_2d: { let p = Point2::<View>::new(4.0, 5.0); (p.x(), p.y()) } => (4.0, 5.0),
        static_index: Point3::<View>::new(1.0, 2.0, 3.0).get::<2>() => 3.0,
        at_out_of_range:
            Vector3::<View>::new(1.0, 2.0, 3.0).at(3)
            => Err(GeomError::IndexOutOfRange { index: 3, dim: 3 }),
        at_2d_has_no_third:
            Vector2::<View>::new(1.0, 2.0).at(2)
            => Err(GeomError::IndexOutOfRange { index: 2, dim: 2 }),
        iter_live_components: Vector2::<View>::new(1.0, 2.0).iter().collect::<Vec<_>>() => vec![1.0, 2.0],
        slice_arity:
            Vector3::<View>::try_from(&[1.0, 2.0][..]).map(|v| v.x())
            => Err(GeomError::ConstructionArity { expected: 3, actual: 2 }),
        slice_2d: Point2::<View>::try_from(&[7.0, 8.0][..]).map(|p| p.y()) => Ok(8.0),
        origin_is_zero: Point3::<View>::origin().as_slice() => &[0.0, 0.0, 0.0][..],
        axes: NormalizedVector3::<View>::y_axis().coords() => [0.0, 1.0, 0.0],
        unit_x_2d: Vector2::<View>::unit_x().coords() => [1.0, 0.0]
    }

    #[rstest]
    #[case(1.5, -2.0, 8.25)]
    #[case(0.0, 0.0, 0.0)]
    #[case(-1e9, 3.0, 1e-9)]
    fn indexing_matches_components(#[case] x: f64, #[case] y: f64, #[case] z: f64) {
        let v = Vector3::<Patient>::new(x, y, z);
        assert_eq!([v[0], v[1], v[2]], [x, y, z]);
        assert_eq!(v.at(1), Ok(y));
    }

    #[test]
    #[should_panic(expected = "Index is out of range")]
    fn index_past_dimension_panics() {
        let v = Vector3::<Patient>::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn normalized_construction() {
        let n = NormalizedVector3::<Image>::new(3.0, 4.0, 0.0).unwrap();
        assert_abs_diff_eq!(n.x(), 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(n.y(), 0.8, epsilon = 1e-12);
        assert!(matches!(
            NormalizedVector3::<Image>::new(0.0, 0.0, 0.0),
            Err(GeomError::DegenerateNormalization { .. })
        ));
        assert!(matches!(
            NormalizedVector2::<Image>::try_from(&[0.0, 1e-7][..]),
            Err(GeomError::DegenerateNormalization { .. })
        ));
    }

    #[test]
    fn setters_mutate_free_kinds() {
        let mut p = Point3::<View>::new(1.0, 2.0, 3.0);
        p.set_x(10.0);
        p.set_z(30.0);
        p[1] = 20.0;
        assert_eq!(p.coords(), [10.0, 20.0, 30.0]);
        assert_eq!(p.set(3, 0.0), Err(GeomError::IndexOutOfRange { index: 3, dim: 3 }));
    }

    #[test]
    fn entities_copy_their_storage() {
        let a = Vector3::<View>::new(1.0, 2.0, 3.0);
        let mut b = a;
        b.set_y(-2.0);
        assert_eq!(a.y(), 2.0);
        assert_eq!(b.y(), -2.0);
    }

    #[test]
    fn iterate_by_reference() {
        let v = Vector3::<View>::new(1.0, 2.0, 3.0);
        let sum: f64 = (&v).into_iter().sum();
        assert_eq!(sum, 6.0);
    }
}

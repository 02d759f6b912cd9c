//! Fixed-size coordinate storage, and the type-level dimensions that select it

use std::fmt::Debug;

/// The raw storage of an entity: an owned array of `f64`, one per dimension
pub trait Coords: Copy + Debug + PartialEq + AsRef<[f64]> + AsMut<[f64]> + 'static {
    /// Build the storage by calling `f` on each component index
    fn from_fn(f: impl FnMut(usize) -> f64) -> Self;

    /// Read component `i`, treating every component past the end as zero.
    /// This is how a 2D operand takes part in a 3D operation
    fn padded(&self, i: usize) -> f64 {
        self.as_ref().get(i).copied().unwrap_or(0.0)
    }
}

impl<const N: usize> Coords for [f64; N] {
    fn from_fn(f: impl FnMut(usize) -> f64) -> Self {
        array_init::array_init(f)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A type-level dimensionality. Only [`D2`] and [`D3`] exist
pub trait Dim: sealed::Sealed + Copy + Debug + 'static {
    /// Number of live components
    const N: usize;
    /// Appended to kind names (`Vector`, `Vector2`...)
    const SUFFIX: &'static str;
    /// The storage used by entities of this dimensionality
    type Coords: Coords;
}

/// Two dimensions. Entities store exactly two components
#[derive(Debug, Clone, Copy)]
pub enum D2 {}

/// Three dimensions
#[derive(Debug, Clone, Copy)]
pub enum D3 {}

impl sealed::Sealed for D2 {}
impl sealed::Sealed for D3 {}

impl Dim for D2 {
    const N: usize = 2;
    const SUFFIX: &'static str = "2";
    type Coords = [f64; 2];
}

impl Dim for D3 {
    const N: usize = 3;
    const SUFFIX: &'static str = "";
    type Coords = [f64; 3];
}

/// The dimensionality of the result of a non-mutating binary operation: the
/// wider of both operands
pub trait Promote<Rhs: Dim>: Dim {
    type Output: Dim;
}

macro_rules! promotions {
    ($($lhs:ident + $rhs:ident => $out:ident),*) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;
            }
        )*
    };
}

promotions! {
    D2 + D2 => D2,
    D2 + D3 => D3,
    D3 + D2 => D3,
    D3 + D3 => D3
}

/// Combine two storages component-wise into the storage of the promoted
/// dimensionality. Missing components of the narrower operand read as zero
pub(crate) fn zip_promoted<L, R>(
    lhs: &L::Coords,
    rhs: &R::Coords,
    f: impl Fn(f64, f64) -> f64,
) -> <<L as Promote<R>>::Output as Dim>::Coords
where
    L: Promote<R>,
    R: Dim,
{
    Coords::from_fn(|i| f(lhs.padded(i), rhs.padded(i)))
}

/// Sum of the products of matching components. Missing components read as
/// zero
pub(crate) fn dot(lhs: &impl Coords, rhs: &impl Coords) -> f64 {
    (0..3).map(|i| lhs.padded(i) * rhs.padded(i)).sum()
}

/// Cross product of two storages seen as 3D
pub(crate) fn cross(a: &impl Coords, b: &impl Coords) -> [f64; 3] {
    let (ax, ay, az) = (a.padded(0), a.padded(1), a.padded(2));
    let (bx, by, bz) = (b.padded(0), b.padded(1), b.padded(2));
    [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx]
}

/// Largest absolute component
fn largest_component(c: &impl Coords) -> f64 {
    c.as_ref().iter().fold(0.0, |m: f64, x| m.max(x.abs()))
}

/// Length of `c` measured in units of `scale`, its largest absolute component.
/// Always in `[1, sqrt(3)]`, so squaring never overflows
fn scaled_length(c: &impl Coords, scale: f64) -> f64 {
    c.as_ref()
        .iter()
        .map(|x| (x / scale) * (x / scale))
        .sum::<f64>()
        .sqrt()
}

/// Euclidean length. Finite for every finite input
pub(crate) fn magnitude(c: &impl Coords) -> f64 {
    let scale = largest_component(c);
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    scale * scaled_length(c, scale)
}

/// Scale `c` to unit length, failing when it is too short to have a direction
pub(crate) fn normalized<C: Coords>(c: C) -> Result<C, crate::GeomError> {
    let mag = magnitude(&c);
    if mag < crate::NORMALIZE_EPSILON {
        tracing::trace!(magnitude = mag, "refusing to normalize a degenerate vector");
        return Err(crate::GeomError::DegenerateNormalization { magnitude: mag });
    }
    let scale = largest_component(&c);
    let length = scaled_length(&c, scale);
    Ok(C::from_fn(|i| (c.as_ref()[i] / scale) / length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_macros::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    simple_eqs! {
        padded_reads_zero: [1.0, 2.0].padded(2) => 0.0,
        padded_reads_live: [1.0, 2.0, 3.0].padded(2) => 3.0,
        from_fn_builds: <[f64; 3]>::from_fn(|i| i as f64) => [0.0, 1.0, 2.0],
        promoted_add: zip_promoted::<D2, D3>(&[1.0, 2.0], &[1.0, 1.0, 1.0], |a, b| a + b) => [2.0, 3.0, 1.0],
        narrow_stays_narrow: zip_promoted::<D2, D2>(&[1.0, 2.0], &[3.0, 4.0], |a, b| a - b) => [-2.0, -2.0],
        dot_mixed: dot(&[1.0, 2.0], &[3.0, 4.0, 5.0]) => 11.0,
        cross_planar: cross(&[1.0, 0.0], &[0.0, 1.0]) => [0.0, 0.0, 1.0],
        magnitude_345: magnitude(&[3.0, 4.0, 0.0]) => 5.0,
        normalize_34: normalized([3.0, 4.0]) => Ok([0.6, 0.8]),
        dims: (D2::N, D3::N) => (2, 3)
    }

    #[test]
    fn huge_components_do_not_overflow() {
        assert_relative_eq!(magnitude(&[3e200, 4e200, 0.0]), 5e200, max_relative = 1e-12);
        assert_relative_eq!(magnitude(&[1e300, 1e300]), 2f64.sqrt() * 1e300, max_relative = 1e-12);
        let unit = normalized([1e200, 1e200, 0.0]).unwrap();
        assert_abs_diff_eq!(magnitude(&unit), 1.0, epsilon = crate::EPSILON);
        assert_abs_diff_eq!(unit[0], 0.5f64.sqrt(), epsilon = crate::EPSILON);
    }

    #[test]
    fn degenerate_normalization() {
        assert!(matches!(
            normalized([0.0, 0.0, 1e-9]),
            Err(crate::GeomError::DegenerateNormalization { .. })
        ));
    }
}

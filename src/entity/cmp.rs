//! Approximate equality between entities
//!
//! Two entities can only be compared if they share Space, role and
//! dimensionality. A free vector can be compared to a normalized one. Comparing
//! a point to a vector does not compile:
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } }
//! use geoframe::*;
//! let _ = Point3::<View>::new(1.0, 0.0, 0.0) == Vector3::<View>::new(1.0, 0.0, 0.0);
//! ```
//!
//! and neither does comparing entities of different Spaces:
//!
//! ```compile_fail
//! geoframe::space! { View { unit: f64 } Patient { unit: f64 } }
//! use geoframe::*;
//! let _ = Vector3::<View>::new(1.0, 0.0, 0.0) == Vector3::<Patient>::new(1.0, 0.0, 0.0);
//! ```

use super::base_types::*;
use crate::{coords::Dim, EPSILON};
use approx::AbsDiffEq;

/// Component-wise comparison, with an absolute tolerance of [`EPSILON`]
impl<S, D: Dim, R, N1, N2> PartialEq<Entity<S, D, R, N2>> for Entity<S, D, R, N1> {
    fn eq(&self, other: &Entity<S, D, R, N2>) -> bool {
        self.abs_diff_eq(other, EPSILON)
    }
}

/// Component-wise comparison with a custom absolute tolerance
impl<S, D: Dim, R, N1, N2> AbsDiffEq<Entity<S, D, R, N2>> for Entity<S, D, R, N1> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Entity<S, D, R, N2>, epsilon: f64) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

#[cfg(test)]
mod tests {
    use crate::{space::test_spaces::*, test_macros::*, *};
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne};

    simple_eqs! {
        within_tolerance: Vector3::<View>::new(1.0, 2.0, 3.0) == Vector3::<View>::new(1.0 + 5e-7, 2.0, 3.0) => true,
        outside_tolerance: Vector3::<View>::new(1.0, 2.0, 3.0) == Vector3::<View>::new(1.0 + 2e-6, 2.0, 3.0) => false,
        points: Point2::<View>::new(1.0, 2.0) == Point2::<View>::new(1.0, 2.0) => true,
        free_vs_normalized: Vector2::<View>::new(0.0, 1.0) == NormalizedVector2::<View>::y_axis() => true,
        normalized_vs_free: NormalizedVector2::<View>::y_axis() == Vector2::<View>::new(0.0, 1.0) => true
    }

    #[test]
    fn custom_epsilon() {
        let a = Point3::<Patient>::new(1.0, 1.0, 1.0);
        let b = Point3::<Patient>::new(1.01, 1.0, 0.99);
        assert_abs_diff_ne!(a, b);
        assert_abs_diff_eq!(a, b, epsilon = 0.1);
    }
}

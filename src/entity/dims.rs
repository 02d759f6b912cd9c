//! Moving between the 3D and 2D kinds of a Space
//!
//! Projection onto the XY plane is only available in Spaces that allow it:
//!
//! ```compile_fail
//! geoframe::space! { Detector { unit: f64, xy: geoframe::XyForbidden } }
//! use geoframe::*;
//! let _ = Point3::<Detector>::new(1.0, 2.0, 3.0).to_xy();
//! ```

use super::base_types::*;
use crate::{
    coords::{D2, D3},
    space::{Space, XyAllowed},
    GeomError,
};

impl<S, R: Role> Entity<S, D3, R, Free>
where
    S: Space<Xy = XyAllowed>,
{
    /// Drop the third component
    pub fn to_xy(&self) -> Entity<S, D2, R, Free> {
        Entity::from_coords([self.coords[0], self.coords[1]])
    }
}

impl<S> Entity<S, D3, VectorRole, Normalized>
where
    S: Space<Xy = XyAllowed>,
{
    /// Drop the third component and normalize what remains. Fails if the
    /// vector was (nearly) parallel to the Z axis
    pub fn to_xy(&self) -> Result<Entity<S, D2, VectorRole, Normalized>, GeomError> {
        Entity::normalizing([self.coords[0], self.coords[1]])
    }
}

impl<S, R, N> Entity<S, D2, R, N> {
    /// The same entity in 3D, lying in the XY plane. A normalized vector stays
    /// normalized
    pub fn to_xyz(&self) -> Entity<S, D3, R, N> {
        Entity::from_coords([self.coords[0], self.coords[1], 0.0])
    }
}

impl<S, R: Role> Entity<S, D2, R, Free> {
    /// The same entity in 3D, with the given third component
    pub fn with_z(&self, z: f64) -> Entity<S, D3, R, Free> {
        Entity::from_coords([self.coords[0], self.coords[1], z])
    }
}

#[cfg(test)]
mod tests {
    use crate::{space::test_spaces::*, test_macros::*, *};

    simple_eqs! {
        point_to_xy: Point3::<View>::new(1.0, 2.0, 3.0).to_xy() => Point2::<View>::new(1.0, 2.0),
        vector_to_xy: Vector3::<View>::new(1.0, 2.0, 3.0).to_xy() => Vector2::<View>::new(1.0, 2.0),
        normalized_to_xy:
            NormalizedVector3::<View>::new(3.0, 4.0, 12.0).and_then(|n| n.to_xy())
            => NormalizedVector2::<View>::new(0.6, 0.8),
        widen: Vector2::<View>::new(1.0, 2.0).to_xyz() => Vector3::<View>::new(1.0, 2.0, 0.0),
        widen_normalized: NormalizedVector2::<View>::y_axis().to_xyz() => NormalizedVector3::<View>::y_axis(),
        with_z: Point2::<View>::new(1.0, 2.0).with_z(5.0).z() => 5.0,
        narrow_then_widen_loses_z:
            Point3::<View>::new(1.0, 2.0, 3.0).to_xy().to_xyz() => Point3::<View>::new(1.0, 2.0, 0.0)
    }

    #[test]
    fn normalized_along_z_has_no_planar_direction() {
        assert!(matches!(
            NormalizedVector3::<View>::z_axis().to_xy(),
            Err(GeomError::DegenerateNormalization { .. })
        ));
    }
}

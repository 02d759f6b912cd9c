/*!
# Geometric entities tagged with their coordinate frame

Points, vectors and unit vectors in 2D and 3D, each tagged with the
[`Space`] (coordinate frame) it belongs to. The aim is to reject as early as
possible the classic mistakes of geometric code: mixing values expressed in
different frames, treating a position as a displacement (or the other way
around), and silently losing the unit length of a direction.

All six entity kinds are one generic type, [`Entity`], parameterized by:

- its **Space**, a zero-sized marker type declared with [`space!`],
- its **dimensionality**, [`D2`] or [`D3`],
- its **role**, [`PointRole`] or [`VectorRole`],
- its **normalization**, [`Free`] or [`Normalized`].

What a kind can do is decided by which impls apply to these parameters. So
most invalid operations are not runtime errors, they simply do not compile:

```compile_fail
geoframe::space! { View { unit: f64 } Patient { unit: f64 } }
use geoframe::*;
let a = Vector3::<View>::new(1.0, 0.0, 0.0);
let b = Vector3::<Patient>::new(1.0, 0.0, 0.0);
let _ = a + b;
```

```
geoframe::space! { View { unit: f64 } }
use geoframe::*;
let p = Point3::<View>::new(2.0, 3.0, 4.0);
let q = Point3::<View>::new(1.0, 1.0, 1.0);
assert_eq!(p - q, Vector3::new(1.0, 2.0, 3.0));
assert_eq!(q + (p - q), p);
```

Failures that depend on values (a list of the wrong length, a zero vector
that should be normalized, an index past the last component) are reported
as [`GeomError`]s. When the Space or the kind of a value is only known at
runtime, the [`dynamic`] layer performs every check of the type system on
runtime tags, and reports a distinct error for each kind of misuse.

Moving entities between Spaces is delegated to a caller-supplied
[`Transform`]: points go through its affine part, vectors only through its
linear part. Values of other libraries are bridged through the
[`interop`] traits.
*/

pub mod coords;
pub mod entity;
pub mod error;
pub mod interop;
pub mod space;
pub mod transform;

#[cfg(feature = "dynamic")]
pub mod dynamic;

pub use coords::{Coords, Dim, Promote, D2, D3};
pub use entity::{
    CrossWith, Entity, Formatted, Free, KindOf, Normalization, Normalized, NormalizedVector2,
    NormalizedVector3, Part, Point2, Point3, PointRole, Role, RoleKind, Vector2, Vector3,
    VectorRole,
};
pub use error::{GeomError, Operation, RoleViolation};
pub use interop::{CoordinateProvider2, CoordinateProvider3, Provides};
pub use space::{Space, Unit, XyAllowed, XyCapability, XyForbidden};
pub use transform::Transform;

/// Two entities are equal when each pair of components differs by less than
/// this
pub const EPSILON: f64 = 1e-6;

/// Vectors shorter than this have no direction, and cannot be normalized
pub const NORMALIZE_EPSILON: f64 = 1e-6;

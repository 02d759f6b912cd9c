mod access;
mod arith;
mod base_types;
mod cmp;
mod dims;
mod display;
mod products;

pub use base_types::{
    Entity, Free, KindOf, Normalization, Normalized, NormalizedVector2, NormalizedVector3,
    Point2, Point3, PointRole, Role, RoleKind, Vector2, Vector3, VectorRole,
};
pub use display::{Formatted, Part};
pub use products::CrossWith;

pub(crate) use display::write_entity;
